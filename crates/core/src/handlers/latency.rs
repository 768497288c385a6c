//! Handler for the latency summary endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use latency_telemetry::{Aggregator, LatencyRequest, RegionSummary};
use serde_json::json;
use tracing::debug;

/// Summarises the requested regions against the aggregator's dataset.
///
/// A body without a `Content-Type` header is read as JSON. Any other
/// non-JSON content type, or a body that does not decode into a
/// [`LatencyRequest`], is answered with `422` and a `detail` message.
/// Regions without data are left out of the response.
pub async fn latency_handler(
    State(aggregator): State<Aggregator>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Vec<RegionSummary>>, Response> {
    let request = decode_request(&headers, &body).map_err(unprocessable)?;

    let summaries = aggregator.handle(&request);

    debug!(
        regions = ?request.regions,
        threshold_ms = request.threshold_ms,
        matched = summaries.len(),
        "latency summary computed"
    );

    Ok(Json(summaries))
}

fn decode_request(headers: &HeaderMap, body: &[u8]) -> Result<LatencyRequest, String> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let content_type = content_type
            .to_str()
            .map_err(|_| "Content-Type header is not valid text".to_string())?;

        if !is_json_content_type(content_type) {
            return Err(format!(
                "Expected request with `Content-Type: application/json`, got `{content_type}`"
            ));
        }
    }

    serde_json::from_slice(body).map_err(|e| format!("Failed to parse the request body: {e}"))
}

/// `application/json` or any `application/*+json`, ignoring parameters.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence
        .strip_prefix("application/")
        .is_some_and(|subtype| subtype == "json" || subtype.ends_with("+json"))
}

fn unprocessable(detail: String) -> Response {
    debug!("rejected latency request: {}", detail);

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": detail })),
    )
        .into_response()
}
