//! Facial analysis API handlers
//!
//! POST /api/facial-analysis scores a call's emotion summary. Signals the
//! client omits come from the configured signal source. Results are kept per
//! call. GET returns the stored result, or generates one for a call that
//! already has a transcript analysis; any other call is unknown (404).

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use coach_engine::{
    AuxiliaryMetrics, EmotionBreakdown, FacialAnalysisResult, FacialAnalyzer,
    FacialEmotionSummary, ScoreBand,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{non_blank, CallIdQuery};
use crate::{
    error::{ApiError, ApiResult},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct FacialAnalysisRequest {
    #[serde(default)]
    pub call_id: Option<String>,
    /// Frame counts from the capture layer; synthesized when absent
    #[serde(default)]
    pub emotion_summary: Option<FacialEmotionSummary>,
    /// Eye contact, smile and head stability from a tracker; synthesized when absent
    #[serde(default)]
    pub auxiliary: Option<AuxiliaryMetrics>,
}

#[derive(Debug, Serialize)]
pub struct FacialBands {
    pub confidence: String,
    pub engagement: String,
    pub stress: String,
}

#[derive(Debug, Serialize)]
pub struct FacialAnalysisResponse {
    pub success: bool,
    pub data: FacialAnalysisResult,
    pub breakdown: EmotionBreakdown,
    pub bands: FacialBands,
    pub message: String,
    /// Set on GET: whether this request created the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<bool>,
}

impl FacialAnalysisResponse {
    fn new(data: FacialAnalysisResult, message: &str, generated: Option<bool>) -> Self {
        Self {
            success: true,
            breakdown: data.emotion_summary.breakdown(),
            bands: FacialBands {
                confidence: ScoreBand::for_score(data.confidence_index).label().to_string(),
                engagement: ScoreBand::for_score(data.engagement_score).label().to_string(),
                stress: ScoreBand::for_stress(data.stress_indicator).label().to_string(),
            },
            data,
            message: message.to_string(),
            generated,
        }
    }
}

async fn run_analysis(
    state: &AppState,
    summary: Option<FacialEmotionSummary>,
    auxiliary: Option<AuxiliaryMetrics>,
) -> FacialAnalysisResult {
    let mut source = state.signal_source.lock().await;
    FacialAnalyzer::new().analyze_with_source(&mut **source, summary, auxiliary)
}

/// POST /api/facial-analysis
pub async fn analyze_facial(
    State(state): State<AppState>,
    Json(request): Json<FacialAnalysisRequest>,
) -> ApiResult<Json<FacialAnalysisResponse>> {
    let call_id = non_blank(request.call_id.as_deref())
        .ok_or_else(|| ApiError::BadRequest("call_id is required".to_string()))?;

    let synthesized_summary = request.emotion_summary.is_none();
    let synthesized_auxiliary = request.auxiliary.is_none();
    let result = run_analysis(&state, request.emotion_summary, request.auxiliary).await;

    info!(
        call_id = %call_id,
        synthesized_summary,
        synthesized_auxiliary,
        confidence = result.confidence_index,
        engagement = result.engagement_score,
        stress = result.stress_indicator,
        "Facial analysis completed"
    );

    state
        .facial_results
        .write()
        .await
        .insert(call_id, result.clone());

    Ok(Json(FacialAnalysisResponse::new(
        result,
        "Facial analysis completed successfully",
        None,
    )))
}

/// GET /api/facial-analysis?call_id=
pub async fn get_facial(
    State(state): State<AppState>,
    Query(query): Query<CallIdQuery>,
) -> ApiResult<Json<FacialAnalysisResponse>> {
    let call_id = non_blank(query.call_id.as_deref())
        .ok_or_else(|| ApiError::BadRequest("call_id is required".to_string()))?;

    if let Some(existing) = state.facial_results.read().await.get(&call_id).cloned() {
        return Ok(Json(FacialAnalysisResponse::new(
            existing,
            "Facial analysis retrieved",
            Some(false),
        )));
    }

    if !state.sentiment_results.read().await.contains(&call_id) {
        return Err(ApiError::NotFound(format!("no analysis recorded for call {}", call_id)));
    }

    let result = run_analysis(&state, None, None).await;
    info!(
        call_id = %call_id,
        confidence = result.confidence_index,
        engagement = result.engagement_score,
        stress = result.stress_indicator,
        "Generated facial analysis"
    );

    // A concurrent request may have stored one first; keep whichever landed.
    let stored = state
        .facial_results
        .write()
        .await
        .get_or_insert(call_id, result)
        .clone();

    Ok(Json(FacialAnalysisResponse::new(
        stored,
        "Facial analysis generated",
        Some(true),
    )))
}

/// Build facial analysis routes
pub fn facial_routes() -> Router<AppState> {
    Router::new().route(
        "/api/facial-analysis",
        get(get_facial).post(analyze_facial),
    )
}
