//! Transcript analysis API handlers
//!
//! POST /api/sentiment-analysis scores a transcript (raw text or speaker
//! entries). When a `call_id` is supplied the result is kept so that
//! GET /api/sentiment-analysis?call_id= can return it later.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use coach_engine::{ScoreBand, SentimentAnalysisResult, TranscriptAnalyzer, TranscriptInput};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{non_blank, CallIdQuery};
use crate::{
    error::{ApiError, ApiResult},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SentimentAnalysisRequest {
    /// String or array of `{speaker, text, timestamp?}`
    #[serde(default)]
    pub transcript: serde_json::Value,
    #[serde(default)]
    pub call_id: Option<String>,
}

/// Qualitative labels for the headline scores
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentBands {
    pub sentiment: String,
    pub clarity: String,
    pub confidence: String,
    pub overall_impression: String,
}

impl SentimentBands {
    fn for_result(result: &SentimentAnalysisResult) -> Self {
        let scores = &result.analysis_scores;
        Self {
            sentiment: ScoreBand::for_sentiment(result.sentiment_score.overall)
                .label()
                .to_string(),
            clarity: ScoreBand::for_score(scores.clarity).label().to_string(),
            confidence: ScoreBand::for_score(scores.confidence).label().to_string(),
            overall_impression: ScoreBand::for_score(scores.overall_impression)
                .label()
                .to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SentimentAnalysisResponse {
    pub success: bool,
    pub data: SentimentAnalysisResult,
    pub bands: SentimentBands,
    pub message: String,
}

impl SentimentAnalysisResponse {
    fn new(data: SentimentAnalysisResult, message: &str) -> Self {
        Self {
            success: true,
            bands: SentimentBands::for_result(&data),
            data,
            message: message.to_string(),
        }
    }
}

/// POST /api/sentiment-analysis
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(request): Json<SentimentAnalysisRequest>,
) -> ApiResult<Json<SentimentAnalysisResponse>> {
    let input = TranscriptInput::from_value(request.transcript)?;
    let result = TranscriptAnalyzer::new().analyze(input);

    let call_id = non_blank(request.call_id.as_deref());
    info!(
        call_id = call_id.as_deref().unwrap_or("-"),
        overall = result.sentiment_score.overall,
        impression = result.analysis_scores.overall_impression,
        hesitations = result.hesitation_count,
        "Transcript analyzed"
    );

    if let Some(call_id) = call_id {
        state
            .sentiment_results
            .write()
            .await
            .insert(call_id, result.clone());
    }

    Ok(Json(SentimentAnalysisResponse::new(
        result,
        "Sentiment analysis completed successfully",
    )))
}

/// GET /api/sentiment-analysis?call_id=
pub async fn get_sentiment(
    State(state): State<AppState>,
    Query(query): Query<CallIdQuery>,
) -> ApiResult<Json<SentimentAnalysisResponse>> {
    let call_id = non_blank(query.call_id.as_deref())
        .ok_or_else(|| ApiError::BadRequest("call_id is required".to_string()))?;

    let results = state.sentiment_results.read().await;
    let result = results
        .get(&call_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("sentiment analysis for call {}", call_id)))?;

    Ok(Json(SentimentAnalysisResponse::new(
        result,
        "Sentiment analysis retrieved",
    )))
}

/// Build transcript analysis routes
pub fn sentiment_routes() -> Router<AppState> {
    Router::new().route(
        "/api/sentiment-analysis",
        get(get_sentiment).post(analyze_sentiment),
    )
}
