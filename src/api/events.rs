// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    models::{EventListResponse, EventResponse},
    state::AppState,
};

const DEFAULT_PAGE_SIZE: usize = 100;
const MAX_PAGE_SIZE: usize = 1000;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EventsQuery {
    /// Maximum number of results (default 100, max 1000).
    pub limit: Option<usize>,
    /// Skip this many events from the start of the journal.
    pub offset: Option<usize>,
}

/// Committed registrations and emergency transfers, oldest first.
#[utoipa::path(
    get,
    path = "/v1/events",
    params(EventsQuery),
    tag = "Token",
    responses((status = 200, body = EventListResponse))
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventsQuery>,
) -> Json<EventListResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0);

    let token = state.token.read().await;
    let total = token.events().len();
    let events = token
        .events_since(offset)
        .iter()
        .take(limit)
        .map(EventResponse::from)
        .collect();

    Json(EventListResponse {
        events,
        total,
        has_more: offset.saturating_add(limit) < total,
    })
}
