//! Hub event log.

use axum::{extract::State, Json};
use hubspec::HubEvent;
use hubspec_api::{EventByIdQuery, EventsQuery, EventsResponse};

use super::{AppState, HubQuery};
use crate::error::AppError;

/// Most events returned by one `GET /v1/events` call.
pub const EVENTS_PAGE_LIMIT: usize = 1000;

/// `GET /v1/events`
///
/// Pages forward from `from_event_id` (inclusive). `nextPageEventId` is one
/// past the last returned id, or the requested id when nothing is left.
pub async fn events(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<EventsQuery>,
) -> Result<Json<EventsResponse>, AppError> {
    let from = query.from_event_id.unwrap_or(0);
    let events = state.storage.list_events(from, EVENTS_PAGE_LIMIT).await?;
    let next_page_event_id = events.last().map_or(from, |e| e.id + 1);
    Ok(Json(EventsResponse {
        next_page_event_id,
        events,
    }))
}

/// `GET /v1/eventById`
pub async fn event_by_id(
    State(state): State<AppState>,
    HubQuery(query): HubQuery<EventByIdQuery>,
) -> Result<Json<HubEvent>, AppError> {
    state
        .storage
        .get_event(query.event_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("event {} not found", query.event_id)))
}
