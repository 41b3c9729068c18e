//! HTTP API handlers for coach-api

pub mod buildinfo;
pub mod facial;
pub mod health;
pub mod sentiment;

pub use buildinfo::buildinfo_routes;
pub use facial::facial_routes;
pub use health::health_routes;
pub use sentiment::sentiment_routes;

use serde::Deserialize;

/// `?call_id=` query shared by the lookup endpoints
#[derive(Debug, Deserialize)]
pub struct CallIdQuery {
    pub call_id: Option<String>,
}

/// Trimmed, non-empty call id
pub(crate) fn non_blank(call_id: Option<&str>) -> Option<String> {
    call_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
