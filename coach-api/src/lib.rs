//! coach-api library - HTTP surface for the interview scoring engine
//!
//! Exposes the transcript and facial analyzers as JSON endpoints. Results
//! are kept in bounded in-process caches per `call_id` so a client can fetch
//! them again; durable storage belongs to whoever consumes the API.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use coach_engine::{
    FacialAnalysisResult, SentimentAnalysisResult, SignalSource, SyntheticSignalSource,
};
use tokio::sync::{Mutex, RwLock};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cache;
pub mod config;
pub mod error;

pub use crate::cache::{ResultCache, DEFAULT_RESULT_CAPACITY};
pub use crate::error::{ApiError, ApiResult};

/// Signal source shared by request handlers
pub type SharedSignalSource = Arc<Mutex<Box<dyn SignalSource + Send>>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Fallback provider for facial signals when a request carries no summary
    pub signal_source: SharedSignalSource,
    /// Latest facial analysis per call
    pub facial_results: Arc<RwLock<ResultCache<FacialAnalysisResult>>>,
    /// Latest transcript analysis per call
    pub sentiment_results: Arc<RwLock<ResultCache<SentimentAnalysisResult>>>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(signal_source: Box<dyn SignalSource + Send>) -> Self {
        Self::with_capacity(signal_source, DEFAULT_RESULT_CAPACITY)
    }

    /// State whose caches each retain at most `capacity` calls
    pub fn with_capacity(signal_source: Box<dyn SignalSource + Send>, capacity: usize) -> Self {
        Self {
            signal_source: Arc::new(Mutex::new(signal_source)),
            facial_results: Arc::new(RwLock::new(ResultCache::new(capacity))),
            sentiment_results: Arc::new(RwLock::new(ResultCache::new(capacity))),
            startup_time: Utc::now(),
        }
    }

    /// State backed by the synthetic signal source
    ///
    /// `seed` makes the fallback facial signals reproducible.
    pub fn synthetic(seed: Option<u64>, capacity: usize) -> Self {
        let source = match seed {
            Some(seed) => SyntheticSignalSource::seeded(seed),
            None => SyntheticSignalSource::from_entropy(),
        };
        Self::with_capacity(Box::new(source), capacity)
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::buildinfo_routes())
        .merge(api::sentiment_routes())
        .merge(api::facial_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
