//! JSON API
//!
//! Read-only views over the catalog. Errors come back as `{"error": "..."}`
//! with a 400 or 404 status.

use axum::{
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use luxe_query::{DealsTab, ReviewFilter, ReviewSort};
use serde::Deserialize;
use std::sync::Arc;

use crate::params::ListingParams;
use crate::state::AppState;

fn error(status: StatusCode, message: impl std::fmt::Display) -> Response {
    (status, Json(serde_json::json!({ "error": message.to_string() }))).into_response()
}

/// Health check
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "luxe-web",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
        "hotels": state.catalog.hotels().len(),
    }))
}

/// Filtered, sorted hotel search
pub async fn hotels(State(state): State<Arc<AppState>>, RawQuery(query): RawQuery) -> Response {
    let params = ListingParams::parse(query.as_deref());
    let filters = match params.filters() {
        Ok(filters) => filters,
        Err(e) => return error(StatusCode::BAD_REQUEST, e),
    };
    let sort = match params.sort() {
        Ok(sort) => sort,
        Err(e) => return error(StatusCode::BAD_REQUEST, e),
    };

    let results = state.catalog.search_hotels_sorted(&filters, sort);
    Json(serde_json::json!({
        "count": results.len(),
        "sort": sort.as_str(),
        "hotels": results,
    }))
    .into_response()
}

/// One hotel with its rooms and active deals
pub async fn hotel(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let catalog = &state.catalog;
    let Some(hotel) = catalog.hotel(&id) else {
        return error(StatusCode::NOT_FOUND, format!("Hotel not found: {}", id));
    };
    Json(serde_json::json!({
        "hotel": hotel,
        "rooms": catalog.room_options(hotel),
        "deals": catalog.hotel_deals_at(&hotel.id, Utc::now()),
    }))
    .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewParams {
    #[serde(default, alias = "rating")]
    pub review_rating: Option<String>,
    #[serde(default, alias = "sort")]
    pub review_sort: Option<String>,
}

/// Reviews of a hotel, optionally filtered by star rating and sorted
pub async fn reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ReviewParams>,
) -> Response {
    if state.catalog.hotel(&id).is_none() {
        return error(StatusCode::NOT_FOUND, format!("Hotel not found: {}", id));
    }

    let rating = match params.review_rating.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<u8>() {
            Ok(rating) if (1..=5).contains(&rating) => Some(rating),
            _ => {
                return error(
                    StatusCode::BAD_REQUEST,
                    format!("Review rating must be between 1 and 5, got {}", raw),
                )
            }
        },
    };
    let sort = match params.review_sort.as_deref().map(str::parse::<ReviewSort>) {
        Some(Ok(sort)) => Some(sort),
        Some(Err(e)) => return error(StatusCode::BAD_REQUEST, e),
        None => None,
    };

    let filter = ReviewFilter {
        rating,
        sort,
    };
    let reviews = state.catalog.filter_reviews(&id, &filter);
    Json(serde_json::json!({
        "hotelId": id,
        "count": reviews.len(),
        "reviews": reviews,
    }))
    .into_response()
}

/// Rating summary of a hotel
pub async fn review_stats(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    if state.catalog.hotel(&id).is_none() {
        return error(StatusCode::NOT_FOUND, format!("Hotel not found: {}", id));
    }
    Json(state.catalog.review_stats(&id)).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct DealParams {
    #[serde(default, rename = "type")]
    pub deal_type: Option<String>,
}

/// Deals for a tab: `all` (default) or a deal type
pub async fn deals(State(state): State<Arc<AppState>>, Query(params): Query<DealParams>) -> Response {
    let tab = match params.deal_type.as_deref().unwrap_or_default().parse::<DealsTab>() {
        Ok(tab) => tab,
        Err(e) => return error(StatusCode::BAD_REQUEST, e),
    };
    let deals = state.catalog.deals_for_tab_at(tab, Utc::now());
    Json(serde_json::json!({
        "type": tab.as_str(),
        "count": deals.len(),
        "deals": deals,
    }))
    .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct DestinationParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub region: Option<String>,
}

/// Destination search
pub async fn destinations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DestinationParams>,
) -> impl IntoResponse {
    let results = state
        .catalog
        .find_destinations(params.q.trim(), params.region.as_deref());
    Json(serde_json::json!({
        "count": results.len(),
        "destinations": results,
    }))
}
