//! Route handlers for the HTML screens

use axum::{
    extract::{Form, Path, Query, RawQuery, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use luxe_booking::{BookingDraft, BookingStep, BookingWizard, GuestDetails, SubmitOutcome};
use luxe_core::{BookingStatus, User};
use luxe_query::{DealsTab, ReviewFilter, ReviewSort, ALL_REGIONS};
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::debug;

use crate::params::{split_list, BookingParams, ListingParams};
use crate::session::session_from;
use crate::state::AppState;
use crate::templates::{self, url_escape};

/// Hotels on the home page
const FEATURED_HOTELS: usize = 6;
/// Destinations on the home page
const POPULAR_DESTINATIONS: usize = 6;

/// Region tabs on the destinations screen
pub const REGION_TABS: &[&str] = &[
    ALL_REGIONS,
    "Europe",
    "Asia",
    "North America",
    "Africa",
    "Oceania",
    "Middle East",
    "Central America",
];

fn current_user(cookies: &Cookies) -> Option<User> {
    session_from(cookies).current_user().cloned()
}

fn not_found(user: Option<&User>, what: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(templates::not_found_html(user, what))).into_response()
}

fn bad_request(user: Option<&User>, message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Html(templates::bad_request_html(user, message))).into_response()
}

/// Only same-site paths are followed after login. `//host` and `/\host` are
/// read as other origins by browsers; anything outside visible ASCII cannot
/// go into a `Location` header.
fn safe_next(next: Option<&str>) -> &str {
    match next.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !matches!(path.as_bytes().get(1), Some(b'/' | b'\\'))
                && path.bytes().all(|b| b.is_ascii_graphic()) =>
        {
            path
        }
        _ => "/dashboard",
    }
}

// ============== Browse ==============

/// Home page
pub async fn index(State(state): State<Arc<AppState>>, cookies: Cookies) -> impl IntoResponse {
    let user = current_user(&cookies);
    let now = Utc::now();
    Html(templates::hotels::home_html(
        user.as_ref(),
        &state.catalog.featured_hotels(FEATURED_HOTELS),
        &state.catalog.popular_destinations(POPULAR_DESTINATIONS),
        &state.catalog.featured_deals_at(now),
        now,
    ))
}

/// Hotel listing with filters
pub async fn hotels(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    RawQuery(query): RawQuery,
) -> Response {
    let user = current_user(&cookies);
    let params = ListingParams::parse(query.as_deref());
    let amenities = state.catalog.amenities();

    let outcome = params
        .filters()
        .and_then(|filters| Ok((filters, params.sort()?)));

    match outcome {
        Ok((filters, sort)) => {
            let results = state.catalog.search_hotels_sorted(&filters, sort);
            debug!(results = results.len(), sort = sort.as_str(), "Hotel search");
            Html(templates::hotels::hotels_html(
                user.as_ref(),
                &params,
                sort,
                &results,
                amenities,
                None,
            ))
            .into_response()
        }
        Err(e) => {
            let all: Vec<_> = state.catalog.hotels().iter().collect();
            (
                StatusCode::BAD_REQUEST,
                Html(templates::hotels::hotels_html(
                    user.as_ref(),
                    &params,
                    Default::default(),
                    &all,
                    amenities,
                    Some(&e.to_string()),
                )),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    #[serde(default)]
    pub review_rating: Option<String>,
    #[serde(default)]
    pub review_sort: Option<String>,
}

impl ReviewQuery {
    /// Out-of-range ratings and unknown sorts are ignored on the HTML screen
    fn filter(&self) -> ReviewFilter {
        ReviewFilter {
            rating: self
                .review_rating
                .as_deref()
                .and_then(|r| r.trim().parse::<u8>().ok())
                .filter(|r| (1..=5).contains(r)),
            sort: self
                .review_sort
                .as_deref()
                .and_then(|s| s.parse::<ReviewSort>().ok()),
        }
    }
}

/// Hotel detail
pub async fn hotel_detail(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Path(id): Path<String>,
    Query(query): Query<ReviewQuery>,
) -> Response {
    let user = current_user(&cookies);
    let catalog = &state.catalog;
    let Some(hotel) = catalog.hotel(&id) else {
        return not_found(user.as_ref(), "Hotel");
    };

    let now = Utc::now();
    let review_filter = query.filter();
    let rooms = catalog.room_options(hotel);
    let reviews = catalog.filter_reviews(&hotel.id, &review_filter);
    let stats = catalog.review_stats(&hotel.id);
    let deals = catalog.hotel_deals_at(&hotel.id, now);
    let quote = luxe_booking::PricingPolicy::from(&state.config.booking).quote(hotel.price, &[]);

    let view = templates::hotels::HotelDetailView {
        hotel,
        rooms: &rooms,
        reviews: &reviews,
        stats: &stats,
        review_filter,
        deals: &deals,
        extras: catalog.extras(),
        quote: &quote,
        now,
    };
    Html(templates::hotels::hotel_detail_html(user.as_ref(), &view)).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct DestinationQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub region: Option<String>,
}

/// Destinations search
pub async fn destinations(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Query(query): Query<DestinationQuery>,
) -> impl IntoResponse {
    let user = current_user(&cookies);
    let region = query
        .region
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(ALL_REGIONS);
    let results = state.catalog.find_destinations(query.q.trim(), Some(region));
    Html(templates::places::destinations_html(
        user.as_ref(),
        query.q.trim(),
        region,
        REGION_TABS,
        &results,
    ))
}

/// Destination detail by slug
pub async fn destination_detail(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Path(slug): Path<String>,
) -> Response {
    let user = current_user(&cookies);
    let Some(destination) = state.catalog.destination_by_slug(&slug) else {
        return not_found(user.as_ref(), "Destination");
    };
    let hotels = state.catalog.hotels_by_destination(&destination.id);
    Html(templates::places::destination_detail_html(
        user.as_ref(),
        destination,
        &hotels,
    ))
    .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct DealsQuery {
    #[serde(default, rename = "type")]
    pub deal_type: Option<String>,
}

/// Deals tabs
pub async fn deals(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Query(query): Query<DealsQuery>,
) -> Response {
    let user = current_user(&cookies);
    let tab = match query.deal_type.as_deref().unwrap_or_default().parse::<DealsTab>() {
        Ok(tab) => tab,
        Err(e) => return bad_request(user.as_ref(), &e.to_string()),
    };
    let now = Utc::now();
    let deals = state.catalog.deals_for_tab_at(tab, now);
    Html(templates::places::deals_html(user.as_ref(), tab, &deals, now)).into_response()
}

// ============== Booking ==============

fn draft_for(
    state: &AppState,
    hotel_id: &str,
    room: Option<&str>,
    extras: &[String],
) -> luxe_booking::Result<BookingDraft> {
    BookingDraft::new(
        &state.catalog,
        &state.config.booking,
        hotel_id,
        room,
        extras,
        Utc::now().date_naive(),
    )
}

fn draft_error(user: Option<&User>, err: luxe_booking::Error) -> Response {
    match err {
        luxe_booking::Error::HotelNotFound(_) => not_found(user, "Hotel"),
        other => bad_request(user, &other.to_string()),
    }
}

/// Wizard entry at the review step
pub async fn booking_start(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    RawQuery(query): RawQuery,
) -> Response {
    let user = current_user(&cookies);
    let params = BookingParams::parse(query.as_deref());
    let Some(hotel_id) = params.hotel_id.as_deref().filter(|id| !id.is_empty()) else {
        return bad_request(user.as_ref(), "Choose a hotel before booking.");
    };

    match draft_for(&state, hotel_id, params.room.as_deref(), &params.extras) {
        Ok(draft) => {
            let wizard = BookingWizard::new(draft);
            Html(templates::booking::booking_html(user.as_ref(), &wizard, None)).into_response()
        }
        Err(e) => draft_error(user.as_ref(), e),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub hotel_id: String,
    pub room: String,
    pub extras: String,
    pub step: String,
    pub action: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

impl BookingForm {
    fn guest(&self) -> GuestDetails {
        GuestDetails {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            special_requests: self.special_requests.clone(),
        }
    }

    /// Entry link that rebuilds this draft, used as the post-login target
    fn entry_link(&self) -> String {
        format!(
            "/booking?hotelId={}&room={}&extras={}",
            url_escape(&self.hotel_id),
            url_escape(&self.room),
            url_escape(&self.extras)
        )
    }
}

/// Wizard transition
pub async fn booking_step(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<BookingForm>,
) -> Response {
    let user = current_user(&cookies);

    let step = match form.step.parse::<BookingStep>() {
        Ok(step) => step,
        Err(e) => return bad_request(user.as_ref(), &e.to_string()),
    };
    let extras = split_list(&form.extras);
    let draft = match draft_for(&state, form.hotel_id.trim(), Some(form.room.as_str()), &extras) {
        Ok(draft) => draft,
        Err(e) => return draft_error(user.as_ref(), e),
    };
    let mut wizard = match BookingWizard::resume(draft, step, form.guest()) {
        Ok(wizard) => wizard,
        Err(e) => return bad_request(user.as_ref(), &e.to_string()),
    };

    let moved = match form.action.as_str() {
        "next" => wizard.advance().map(|_| ()),
        "back" => wizard.go_back().map(|_| ()),
        "pay" => {
            let outcome = wizard
                .submit(
                    user.as_ref(),
                    state.ids.as_ref(),
                    state.config.booking.submit_delay(),
                    Utc::now().date_naive(),
                )
                .await;
            match outcome {
                Ok(SubmitOutcome::LoginRequired) => {
                    let target = format!("/login?next={}", url_escape(&form.entry_link()));
                    return Redirect::to(&target).into_response();
                }
                Ok(SubmitOutcome::Confirmed(booking)) => {
                    if let Some(user) = &user {
                        state.record_trip(&user.email, booking.clone());
                    }
                    return Html(templates::booking::confirmation_html(
                        user.as_ref(),
                        &booking,
                        wizard.guest(),
                    ))
                    .into_response();
                }
                Err(e) => Err(e),
            }
        }
        other => {
            return bad_request(user.as_ref(), &format!("Unknown booking action: {}", other));
        }
    };

    match moved {
        Ok(()) => Html(templates::booking::booking_html(user.as_ref(), &wizard, None)).into_response(),
        Err(e) => (
            StatusCode::CONFLICT,
            Html(templates::booking::booking_html(
                user.as_ref(),
                &wizard,
                Some(&e.to_string()),
            )),
        )
            .into_response(),
    }
}

// ============== Account ==============

#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    #[serde(default)]
    pub next: Option<String>,
}

/// Login and registration forms
pub async fn login_page(cookies: Cookies, Query(query): Query<NextQuery>) -> impl IntoResponse {
    let user = current_user(&cookies);
    Html(templates::account::login_html(
        user.as_ref(),
        safe_next(query.next.as_deref()),
        None,
    ))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub next: Option<String>,
}

fn session_error(next: &str, error: luxe_session::Error) -> Response {
    let status = match error {
        luxe_session::Error::MissingField(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Html(templates::account::login_html(None, next, Some(&error.to_string()))),
    )
        .into_response()
}

/// Mock login
pub async fn login_submit(cookies: Cookies, Form(input): Form<LoginInput>) -> Response {
    let next = safe_next(input.next.as_deref());
    let mut session = session_from(&cookies);
    match session.login(&input.email, &input.password) {
        Ok(_) => Redirect::to(next).into_response(),
        Err(e) => session_error(next, e),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub next: Option<String>,
}

/// Mock registration
pub async fn register_submit(cookies: Cookies, Form(input): Form<RegisterInput>) -> Response {
    let next = safe_next(input.next.as_deref());
    let mut session = session_from(&cookies);
    match session.register(&input.name, &input.email, &input.password) {
        Ok(_) => Redirect::to(next).into_response(),
        Err(e) => session_error(next, e),
    }
}

/// Clear the session and this user's trips
pub async fn logout(State(state): State<Arc<AppState>>, cookies: Cookies) -> Response {
    let mut session = session_from(&cookies);
    match session.logout() {
        Ok(Some(user)) => state.forget_trips(&user.email),
        Ok(None) => {}
        Err(e) => return session_error("/", e),
    }
    Redirect::to("/").into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

/// Trips of the current user
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let user = current_user(&cookies);
    let tab = match query.tab.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(tab) => match tab.parse::<BookingStatus>() {
            Ok(tab) => tab,
            Err(e) => return bad_request(user.as_ref(), &e.to_string()),
        },
        None => BookingStatus::Upcoming,
    };
    let trips = user
        .as_ref()
        .map(|u| state.trips_for(&u.email))
        .unwrap_or_default();
    Html(templates::account::dashboard_html(user.as_ref(), tab, &trips)).into_response()
}

// ============== Static ==============

/// Stylesheet
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], templates::STYLE_CSS)
}

/// Anything unrouted
pub async fn fallback(cookies: Cookies) -> Response {
    let user = current_user(&cookies);
    not_found(user.as_ref(), "Page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next(Some("/booking?hotelId=1")), "/booking?hotelId=1");
        assert_eq!(safe_next(Some("//evil.example")), "/dashboard");
        assert_eq!(safe_next(Some("https://evil.example")), "/dashboard");
        assert_eq!(safe_next(Some("/\\evil.example")), "/dashboard");
        assert_eq!(safe_next(Some("/a\nb")), "/dashboard");
        assert_eq!(safe_next(Some("/café")), "/dashboard");
        assert_eq!(safe_next(Some("/")), "/");
        assert_eq!(safe_next(None), "/dashboard");
    }

    #[test]
    fn test_review_query_ignores_junk() {
        let query = ReviewQuery {
            review_rating: Some("9".into()),
            review_sort: Some("newest".into()),
        };
        assert_eq!(query.filter(), ReviewFilter::default());

        let query = ReviewQuery {
            review_rating: Some("4".into()),
            review_sort: Some("helpful".into()),
        };
        assert_eq!(
            query.filter(),
            ReviewFilter {
                rating: Some(4),
                sort: Some(ReviewSort::Helpful)
            }
        );
    }

    #[test]
    fn test_booking_form_entry_link() {
        let form = BookingForm {
            hotel_id: "1".into(),
            room: "Executive Suite".into(),
            extras: "e1,e3".into(),
            ..Default::default()
        };
        assert_eq!(form.entry_link(), "/booking?hotelId=1&room=Executive+Suite&extras=e1%2Ce3");
    }
}
