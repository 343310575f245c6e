//! Strava HTTP adapter: activity listing, OAuth token exchange, and a
//! file-backed token store.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::traits::ActivityProvider;
use crate::{Error, Result};

const AUTHORIZE_URL: &str = "https://www.strava.com/oauth/authorize";
const TOKEN_URL: &str = "https://www.strava.com/oauth/token";

/// Builds the Strava authorization URL the user is sent to.
///
/// Read-only activity scope; `approval_prompt=auto` skips the consent
/// screen for returning users.
pub fn authorize_url(client_id: &str, redirect_uri: &str) -> String {
    format!(
        "{AUTHORIZE_URL}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&approval_prompt=auto&scope=activity:read"
    )
}

#[derive(Debug, Clone)]
pub struct StravaConfig {
    pub base_url: String,
    /// How many recent activities to fetch.
    pub per_page: u32,
    pub timeout_secs: u64,
}

impl Default for StravaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.strava.com/api/v3".to_string(),
            per_page: 10,
            timeout_secs: 10,
        }
    }
}

/// OAuth token triple as returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as unix epoch seconds.
    pub expires_at: i64,
}

impl AuthToken {
    pub fn is_expired(&self, now: SystemTime) -> bool {
        let now_secs = now
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or(0);
        self.expires_at <= now_secs
    }
}

/// JSON file persistence for the auth token, standing in for the browser
/// localStorage of the original UI.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored token. An expired token is removed from disk and
    /// reported as absent, so callers fall back to the connect flow.
    pub fn load(&self) -> Result<Option<AuthToken>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let token: AuthToken = serde_json::from_str(&raw)?;

        if token.is_expired(SystemTime::now()) {
            debug!("stored token expired, clearing");
            self.clear()?;
            return Ok(None);
        }
        Ok(Some(token))
    }

    pub fn save(&self, token: &AuthToken) -> Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, serde_json::to_vec_pretty(token)?)?;
        fs::rename(tmp_path, &self.path)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// One activity record as returned by the activities endpoint.
///
/// Only the fields the overlay and the map pipeline consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Meters.
    #[serde(default)]
    pub distance: f64,
    /// Seconds.
    #[serde(default)]
    pub moving_time: i64,
    /// Meters.
    #[serde(default)]
    pub total_elevation_gain: f64,
    #[serde(default)]
    pub start_date_local: String,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    /// Meters per second.
    #[serde(default)]
    pub average_speed: Option<f64>,
    #[serde(default)]
    pub suffer_score: Option<f64>,
    #[serde(default)]
    pub map: Option<ActivityMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMap {
    #[serde(default)]
    pub summary_polyline: Option<String>,
}

impl Activity {
    /// The encoded route polyline, if the activity carries one.
    ///
    /// An absent map, absent field, and empty string all mean "no route
    /// to draw" and collapse to `None`.
    pub fn summary_polyline(&self) -> Option<&str> {
        self.map
            .as_ref()
            .and_then(|map| map.summary_polyline.as_deref())
            .filter(|polyline| !polyline.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct StravaClient {
    config: StravaConfig,
    token: Option<AuthToken>,
    client: reqwest::blocking::Client,
}

impl StravaClient {
    pub fn new(config: StravaConfig, token: Option<AuthToken>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            token,
            client,
        })
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Exchanges an OAuth authorization code for a token.
    pub fn exchange_code(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<AuthToken> {
        let response = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()?
            .error_for_status()?;

        let token = response.json::<AuthToken>()?;
        debug!(expires_at = token.expires_at, "exchanged code for token");
        Ok(token)
    }
}

impl ActivityProvider for StravaClient {
    /// Fetches the most recent activities for the authenticated athlete.
    ///
    /// A 401 means the token was revoked or expired server-side; it maps to
    /// [`Error::ConnectionExpired`] so the caller can clear the stored
    /// token and offer the connect flow again.
    fn activities(&self) -> Result<Vec<Activity>> {
        let Some(token) = &self.token else {
            return Ok(Vec::new());
        };

        let url = format!(
            "{}/athlete/activities?per_page={}",
            self.config.base_url, self.config.per_page
        );

        let response = self.client.get(url).bearer_auth(&token.access_token).send()?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            warn!("activities request rejected, token no longer valid");
            return Err(Error::ConnectionExpired);
        }

        let activities = response.error_for_status()?.json::<Vec<Activity>>()?;
        debug!(count = activities.len(), "fetched activities");
        Ok(activities)
    }

    fn is_connected(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|token| !token.is_expired(SystemTime::now()))
    }
}
