//! Application session state.
//!
//! One explicit state object instead of the module-level globals and nested
//! callbacks the browser UI grew around: each external event (image load,
//! activity fetch, selection change) has one entry point that moves the
//! session forward, and consumers render the overlay and map from whatever
//! the session currently holds.

use tracing::debug;

use crate::strava::{Activity, ActivityMap, AuthToken};

/// Lifecycle of the editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    ImageLoading,
    /// An image is in place; no activity picked yet.
    Ready,
    ActivitySelected,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    token: Option<AuthToken>,
    activities: Vec<Activity>,
    selected: Option<usize>,
}

impl Session {
    pub fn new(token: Option<AuthToken>) -> Self {
        Self {
            state: SessionState::Uninitialized,
            token,
            activities: Vec::new(),
            selected: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.token.is_some()
    }

    /// The activity list to present: fetched activities when connected,
    /// otherwise the built-in samples.
    pub fn activities(&self) -> &[Activity] {
        if self.is_connected() {
            &self.activities
        } else {
            sample_activities()
        }
    }

    pub fn selected(&self) -> Option<&Activity> {
        self.selected.and_then(|index| self.activities().get(index))
    }

    /// A new image started loading.
    pub fn image_load_started(&mut self) {
        self.state = SessionState::ImageLoading;
    }

    /// The image finished loading. A failed load returns the session to
    /// where it can accept another image; the activity selection survives.
    pub fn image_loaded(&mut self, ok: bool) {
        if !ok {
            debug!("image load failed");
            self.state = SessionState::Uninitialized;
            return;
        }
        self.state = if self.selected.is_some() {
            SessionState::ActivitySelected
        } else {
            SessionState::Ready
        };
    }

    /// A fresh activity list arrived. Selects the first entry by default,
    /// matching the original picker behavior.
    pub fn activities_fetched(&mut self, activities: Vec<Activity>) {
        debug!(count = activities.len(), "activities fetched");
        self.activities = activities;
        self.select_activity(0);
    }

    /// Picks an activity by index into [`Session::activities`]. An invalid
    /// index clears the selection.
    pub fn select_activity(&mut self, index: usize) -> Option<&Activity> {
        if index < self.activities().len() {
            self.selected = Some(index);
            if self.state == SessionState::Ready || self.state == SessionState::ActivitySelected {
                self.state = SessionState::ActivitySelected;
            }
        } else {
            self.selected = None;
            if self.state == SessionState::ActivitySelected {
                self.state = SessionState::Ready;
            }
        }
        self.selected()
    }

    /// The connection expired or was revoked: drop the token and fetched
    /// activities and fall back to the samples.
    pub fn disconnected(&mut self) {
        debug!("session disconnected");
        self.token = None;
        self.activities.clear();
        self.select_activity(0);
    }
}

/// Demo activities shown while no Strava account is connected.
pub fn sample_activities() -> &'static [Activity] {
    use std::sync::OnceLock;

    static SAMPLES: OnceLock<Vec<Activity>> = OnceLock::new();
    SAMPLES.get_or_init(|| {
        vec![
            Activity {
                id: -1,
                name: "Morning Run".to_string(),
                activity_type: "Run".to_string(),
                distance: 5123.4,
                moving_time: 1800,
                total_elevation_gain: 55.6,
                start_date_local: "2024-05-04T07:12:00Z".to_string(),
                average_heartrate: Some(155.2),
                average_speed: Some(2.846),
                suffer_score: Some(45.0),
                map: Some(ActivityMap {
                    summary_polyline: Some(
                        "swcbKkhm~@sIwVgJ_S{ErX~Cja@rIjMrIgOnAkM".to_string(),
                    ),
                }),
            },
            Activity {
                id: -2,
                name: "Weekend Ride".to_string(),
                activity_type: "Ride".to_string(),
                distance: 25450.1,
                moving_time: 5400,
                total_elevation_gain: 210.3,
                start_date_local: "2024-05-03T10:05:00Z".to_string(),
                average_heartrate: Some(138.9),
                average_speed: Some(4.713),
                suffer_score: Some(60.0),
                map: None,
            },
            Activity {
                id: -3,
                name: "Evening Walk".to_string(),
                activity_type: "Walk".to_string(),
                distance: 3050.0,
                moving_time: 2700,
                total_elevation_gain: 15.0,
                start_date_local: "2024-05-02T18:40:00Z".to_string(),
                average_heartrate: Some(95.5),
                average_speed: Some(1.13),
                suffer_score: None,
                map: None,
            },
            Activity {
                id: -4,
                name: "Mountain Hike".to_string(),
                activity_type: "Hike".to_string(),
                distance: 12800.5,
                moving_time: 10800,
                total_elevation_gain: 650.8,
                start_date_local: "2024-05-01T09:00:00Z".to_string(),
                average_heartrate: None,
                average_speed: Some(1.185),
                suffer_score: Some(80.0),
                map: None,
            },
            Activity {
                id: -5,
                name: "Gym Session".to_string(),
                activity_type: "Workout".to_string(),
                distance: 0.0,
                moving_time: 3600,
                total_elevation_gain: 0.0,
                start_date_local: "2024-04-30T17:30:00Z".to_string(),
                average_heartrate: Some(110.0),
                average_speed: None,
                suffer_score: None,
                map: None,
            },
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AuthToken {
        AuthToken {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: i64::MAX,
        }
    }

    fn activity(id: i64, name: &str) -> Activity {
        Activity {
            id,
            name: name.to_string(),
            activity_type: "Run".to_string(),
            distance: 1000.0,
            moving_time: 600,
            total_elevation_gain: 10.0,
            start_date_local: String::new(),
            average_heartrate: None,
            average_speed: None,
            suffer_score: None,
            map: None,
        }
    }

    #[test]
    fn test_disconnected_session_serves_samples() {
        let session = Session::new(None);
        assert!(!session.is_connected());
        assert_eq!(session.activities().len(), 5);
        assert_eq!(session.activities()[0].name, "Morning Run");
    }

    #[test]
    fn test_sample_run_has_decodable_route() {
        let encoded = sample_activities()[0].summary_polyline().unwrap();
        let decoded = crate::polyline::decode(encoded);
        assert!(decoded.len() >= 2, "sample route should decode");
    }

    #[test]
    fn test_image_load_flow() {
        let mut session = Session::new(None);
        assert_eq!(session.state(), SessionState::Uninitialized);

        session.image_load_started();
        assert_eq!(session.state(), SessionState::ImageLoading);

        session.image_loaded(true);
        assert_eq!(session.state(), SessionState::Ready);
    }

    #[test]
    fn test_failed_image_load_resets() {
        let mut session = Session::new(None);
        session.image_load_started();
        session.image_loaded(false);
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_selection_after_image() {
        let mut session = Session::new(None);
        session.image_load_started();
        session.image_loaded(true);

        let selected = session.select_activity(1).cloned();
        assert_eq!(selected.unwrap().name, "Weekend Ride");
        assert_eq!(session.state(), SessionState::ActivitySelected);
    }

    #[test]
    fn test_invalid_selection_clears() {
        let mut session = Session::new(None);
        session.image_load_started();
        session.image_loaded(true);
        session.select_activity(0);

        session.select_activity(99);
        assert!(session.selected().is_none());
        assert_eq!(session.state(), SessionState::Ready);
    }

    #[test]
    fn test_connected_session_uses_fetched_activities() {
        let mut session = Session::new(Some(token()));
        session.image_load_started();
        session.image_loaded(true);

        session.activities_fetched(vec![activity(10, "Tempo Run"), activity(11, "Recovery")]);
        assert_eq!(session.activities().len(), 2);
        // First activity auto-selected.
        assert_eq!(session.selected().unwrap().name, "Tempo Run");
        assert_eq!(session.state(), SessionState::ActivitySelected);
    }

    #[test]
    fn test_selection_survives_image_reload() {
        let mut session = Session::new(Some(token()));
        session.image_load_started();
        session.image_loaded(true);
        session.activities_fetched(vec![activity(10, "Tempo Run")]);

        session.image_load_started();
        session.image_loaded(true);
        assert_eq!(session.state(), SessionState::ActivitySelected);
        assert_eq!(session.selected().unwrap().name, "Tempo Run");
    }

    #[test]
    fn test_disconnect_falls_back_to_samples() {
        let mut session = Session::new(Some(token()));
        session.activities_fetched(vec![activity(10, "Tempo Run")]);

        session.disconnected();
        assert!(!session.is_connected());
        assert_eq!(session.activities().len(), 5);
        assert_eq!(session.selected().unwrap().name, "Morning Run");
    }
}
