//! Overlay stat formatting.
//!
//! Turns raw activity numbers into the strings shown on the stats card.
//! Render-agnostic: the UI layer decides where each field goes.

use crate::strava::Activity;

/// Placeholder shown for a missing or unusable value.
pub const PLACEHOLDER: &str = "--";

/// Formats a duration in seconds as `h:mm:ss`.
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 0.0 {
        return PLACEHOLDER.to_string();
    }
    let total = seconds.round() as i64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Formats a distance in meters as kilometers with one decimal.
pub fn format_distance_km(meters: f64) -> String {
    if meters.is_nan() || meters <= 0.0 {
        return PLACEHOLDER.to_string();
    }
    format!("{:.1}", meters / 1000.0)
}

/// Formats an average speed for display.
///
/// Foot-powered activity types get pace in `min/km`; everything else gets
/// `km/h`. Returns the value and its unit separately so the card can style
/// them independently.
pub fn format_speed(speed_mps: f64, activity_type: &str) -> (String, &'static str) {
    if speed_mps.is_nan() || speed_mps <= 0.0 {
        return (PLACEHOLDER.to_string(), "");
    }

    match activity_type.to_lowercase().as_str() {
        "run" | "walk" | "hike" => {
            let pace_min_per_km = 1000.0 / (speed_mps * 60.0);
            if !pace_min_per_km.is_finite() {
                return (PLACEHOLDER.to_string(), "min/km");
            }
            let minutes = pace_min_per_km.floor();
            let seconds = ((pace_min_per_km - minutes) * 60.0).round() as i64;
            // Rounding can spill into the next minute.
            let (minutes, seconds) = if seconds == 60 {
                (minutes as i64 + 1, 0)
            } else {
                (minutes as i64, seconds)
            };
            (format!("{minutes}:{seconds:02}"), "min/km")
        }
        _ => (format!("{:.1}", speed_mps * 3.6), "km/h"),
    }
}

/// Material icon name for an activity type.
pub fn activity_icon(activity_type: &str) -> &'static str {
    match activity_type.to_lowercase().as_str() {
        "run" => "directions_run",
        "ride" => "directions_bike",
        "walk" => "directions_walk",
        "hike" => "hiking",
        "swim" => "pool",
        "workout" => "fitness_center",
        _ => "exercise",
    }
}

/// The assembled stats-card content for one activity.
///
/// Optional rows (`heart_rate`, `speed`, `suffer_score`) are `None` when the
/// activity lacks the measurement; the card hides those rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStats {
    pub title: String,
    pub icon: &'static str,
    pub distance_km: String,
    pub duration: String,
    pub elevation_m: String,
    pub heart_rate: Option<String>,
    pub speed: Option<(String, &'static str)>,
    pub suffer_score: Option<String>,
}

impl OverlayStats {
    pub fn from_activity(activity: &Activity) -> Self {
        let elevation_m = if activity.total_elevation_gain > 0.0 {
            format!("{}", activity.total_elevation_gain.round() as i64)
        } else {
            PLACEHOLDER.to_string()
        };

        Self {
            title: activity.name.clone(),
            icon: activity_icon(&activity.activity_type),
            distance_km: format_distance_km(activity.distance),
            duration: format_duration(activity.moving_time as f64),
            elevation_m,
            heart_rate: activity
                .average_heartrate
                .map(|bpm| format!("{}", bpm.round() as i64)),
            speed: activity
                .average_speed
                .map(|mps| format_speed(mps, &activity.activity_type))
                .filter(|(value, _)| value.as_str() != PLACEHOLDER),
            suffer_score: activity
                .suffer_score
                .map(|score| format!("{}", score.round() as i64)),
        }
    }
}
