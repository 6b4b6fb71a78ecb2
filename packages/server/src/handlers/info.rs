//! `GET /v1/info`

use axum::{extract::State, Json};
use hubspec_api::{HubInfoResponse, InfoQuery};

use super::{AppState, HubQuery};
use crate::error::AppError;

/// Nickname the mock reports for itself.
pub const NICKNAME: &str = "hubspec-mock";

pub async fn get_info(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<InfoQuery>,
) -> Result<Json<HubInfoResponse>, AppError> {
    let db_stats = if query.dbstats {
        Some(state.storage.stats().await?)
    } else {
        None
    };

    Ok(Json(HubInfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        is_syncing: false,
        nickname: NICKNAME.to_string(),
        root_hash: String::new(),
        db_stats,
        peer_id: String::new(),
        hub_operator_fid: 0,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handlers::test_support::{app, get};

    #[tokio::test]
    async fn db_stats_only_when_requested() {
        let (status, body) = get(app().await, "/v1/info?dbstats=true").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["dbStats"]["numMessages"].as_u64().unwrap() > 0);
        assert_eq!(body["nickname"], super::NICKNAME);

        let (_, body) = get(app().await, "/v1/info?dbstats=false").await;
        assert!(body.get("dbStats").is_none());
    }

    #[tokio::test]
    async fn dbstats_is_required() {
        let (status, body) = get(app().await, "/v1/info").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errCode"], "bad_request.invalid_param");
    }
}
