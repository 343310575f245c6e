//! stravify core
//!
//! Overlays a fitness activity's stats and route sketch onto an image.
//! The algorithmic heart is the route pipeline: decode an encoded polyline
//! into geographic points, project them onto a local flat plane, fit them
//! to a square canvas, and trace them onto a drawing surface. Around it sit
//! the collaborators a complete app needs: a Strava API adapter, overlay
//! stat formatting, and a session state machine.

pub mod traits;
pub mod polyline;
pub mod projection;
pub mod fit;
pub mod render;
pub mod pipeline;
pub mod svg;
pub mod strava;
pub mod stats;
pub mod session;

/// Errors surfaced by the crate.
///
/// Pipeline-internal failures (malformed polyline, degenerate geometry)
/// deliberately never reach this type; they degrade to "no route drawn".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no points to process")]
    EmptyRoute,

    #[error("Strava connection expired")]
    ConnectionExpired,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token store I/O error: {0}")]
    TokenStore(#[from] std::io::Error),

    #[error("token format error: {0}")]
    TokenFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
