//! Home, listing and hotel detail pages

use chrono::{DateTime, Utc};
use luxe_booking::PriceQuote;
use luxe_core::{Amenity, Category, Deal, Destination, ExtraFacility, Hotel, Review, Room, User};
use luxe_query::{HotelSort, ReviewFilter, ReviewSort, ReviewStats};

use super::places::{deal_card, destination_card};
use super::{format_date, format_price, grid, html_escape, notice, page, stars, url_escape};
use crate::params::ListingParams;

pub fn hotel_card(hotel: &Hotel) -> String {
    format!(
        r#"<a href="/hotels/{id}" class="card">
        <img src="{image}" alt="{name}" loading="lazy">
        <div class="body">
            <span class="badge">{category}</span>
            <h3>{name}</h3>
            <p class="meta">{location}</p>
            <p>{stars} <span class="meta">{rating:.1} ({reviews} reviews)</span></p>
            <p class="price">{price} <small>/ night</small></p>
        </div>
        </a>"#,
        id = url_escape(&hotel.id),
        image = html_escape(&hotel.image),
        name = html_escape(&hotel.name),
        category = hotel.category,
        location = html_escape(&hotel.location),
        stars = stars(hotel.rating),
        rating = hotel.rating,
        reviews = hotel.reviews_count,
        price = format_price(hotel.price),
    )
}

pub fn home_html(
    user: Option<&User>,
    featured: &[&Hotel],
    destinations: &[&Destination],
    deals: &[&Deal],
    now: DateTime<Utc>,
) -> String {
    let deals_section = if deals.is_empty() {
        String::new()
    } else {
        format!(
            r#"<section><div class="container">
            <div class="toolbar"><h2>Featured deals</h2><a href="/deals">All deals</a></div>
            {}
            </div></section>"#,
            grid(deals.iter().map(|d| deal_card(d, now)))
        )
    };

    let body = format!(
        r#"<div class="hero"><div class="container">
        <h1>Find your next<br>extraordinary stay</h1>
        <p>Hand-picked hotels, resorts and apartments in the places worth travelling for.</p>
        <form class="search-bar" method="get" action="/hotels">
            <input type="text" name="location" placeholder="Where are you going?">
            <button class="btn" type="submit">Search</button>
        </form>
        </div></div>
        <section><div class="container">
            <div class="toolbar"><h2>Featured hotels</h2><a href="/hotels">View all</a></div>
            {hotels}
        </div></section>
        <section><div class="container">
            <div class="toolbar"><h2>Popular destinations</h2><a href="/destinations">Explore</a></div>
            {places}
        </div></section>
        {deals_section}"#,
        hotels = grid(featured.iter().map(|h| hotel_card(h))),
        places = grid(destinations.iter().map(|d| destination_card(d))),
    );

    page("Luxury hotels and resorts", user, &body)
}

fn checkbox(name: &str, value: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{name}" value="{value}"{checked}> {value}</label>"#,
        name = name,
        value = html_escape(value),
        checked = if checked { " checked" } else { "" },
    )
}

pub fn hotels_html(
    user: Option<&User>,
    params: &ListingParams,
    sort: HotelSort,
    results: &[&Hotel],
    amenities: &[Amenity],
    error: Option<&str>,
) -> String {
    let categories: String = Category::ALL
        .iter()
        .map(|c| checkbox("category", c.as_str(), params.has_category(*c)))
        .collect();

    let amenity_boxes: String = amenities
        .iter()
        .map(|a| checkbox("amenity", &a.name, params.has_amenity(&a.name)))
        .collect();

    let sort_options: String = HotelSort::ALL
        .iter()
        .map(|s| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                s.as_str(),
                if *s == sort { " selected" } else { "" },
                s.label()
            )
        })
        .collect();

    let listing = if results.is_empty() {
        r#"<div class="empty"><h3>No hotels match your filters</h3><p>Try widening the price range or removing an amenity.</p><p style="margin-top:16px"><a class="btn ghost" href="/hotels">Clear filters</a></p></div>"#.to_string()
    } else {
        grid(results.iter().map(|h| hotel_card(h)))
    };

    let body = format!(
        r#"<div class="container layout">
        <form class="filters" method="get" action="/hotels">
            <h4>Location</h4>
            <input type="text" name="location" value="{location}" placeholder="City, country or hotel">
            <h4>Price per night</h4>
            <input type="number" name="min_price" min="0" value="{min}" placeholder="Min">
            <input type="number" name="max_price" min="0" value="{max}" placeholder="Max" style="margin-top:6px">
            <h4>Property type</h4>
            {categories}
            <h4>Amenities</h4>
            {amenity_boxes}
            <h4>Minimum rating</h4>
            <input type="number" name="rating" min="0" max="5" step="0.1" value="{rating}">
            <h4>Sort by</h4>
            <select name="sort">{sort_options}</select>
            <p style="margin-top:16px"><button class="btn" type="submit">Apply filters</button></p>
        </form>
        <div>
            {error}
            <div class="toolbar"><p class="meta">Showing <strong>{count}</strong> results</p></div>
            {listing}
        </div>
        </div>"#,
        location = html_escape(&params.location),
        min = params.min_price.map(|p| p.to_string()).unwrap_or_default(),
        max = params.max_price.map(|p| p.to_string()).unwrap_or_default(),
        rating = params.rating.map(|r| r.to_string()).unwrap_or_default(),
        error = error.map(|e| notice(e, true)).unwrap_or_default(),
        count = results.len(),
    );

    page("Hotels", user, &body)
}

/// Inputs of the hotel detail page
pub struct HotelDetailView<'a> {
    pub hotel: &'a Hotel,
    pub rooms: &'a [Room],
    pub reviews: &'a [&'a Review],
    pub stats: &'a ReviewStats,
    pub review_filter: ReviewFilter,
    pub deals: &'a [&'a Deal],
    pub extras: &'a [ExtraFacility],
    pub quote: &'a PriceQuote,
    pub now: DateTime<Utc>,
}

fn review_html(review: &Review) -> String {
    format!(
        r#"<div class="review">
        <p><span class="avatar" style="width:28px;height:28px;font-size:0.75em">{avatar}</span>
        <strong>{name}</strong> <span class="meta">{travel} · {date}</span></p>
        <p>{stars} <strong>{title}</strong></p>
        <p>{comment}</p>
        <p class="meta">{room} · {stay} · {helpful} found this helpful</p>
        </div>"#,
        avatar = html_escape(&review.user_avatar),
        name = html_escape(&review.user_name),
        travel = html_escape(&review.travel_type),
        date = format_date(review.date),
        stars = stars(f32::from(review.rating)),
        title = html_escape(&review.title),
        comment = html_escape(&review.comment),
        room = html_escape(&review.room_type),
        stay = html_escape(&review.stay_duration),
        helpful = review.helpful,
    )
}

fn review_controls(hotel_id: &str, filter: ReviewFilter) -> String {
    let link = |rating: Option<u8>, sort: Option<ReviewSort>, label: &str, active: bool| {
        let mut query = Vec::new();
        if let Some(r) = rating {
            query.push(format!("review_rating={}", r));
        }
        if let Some(s) = sort {
            query.push(format!("review_sort={}", s.as_str()));
        }
        format!(
            r##"<a href="/hotels/{}?{}#reviews"{}>{}</a>"##,
            url_escape(hotel_id),
            query.join("&amp;"),
            if active { r#" class="active""# } else { "" },
            label
        )
    };

    let mut tabs = vec![link(None, filter.sort, "All", filter.rating.is_none())];
    for stars in (1..=5u8).rev() {
        tabs.push(link(
            Some(stars),
            filter.sort,
            &format!("{} star", stars),
            filter.rating == Some(stars),
        ));
    }
    for sort in ReviewSort::ALL {
        tabs.push(link(
            filter.rating,
            Some(sort),
            &format!("Most {}", sort.as_str()),
            filter.sort == Some(sort),
        ));
    }
    format!(r#"<div class="tabs">{}</div>"#, tabs.concat())
}

pub fn hotel_detail_html(user: Option<&User>, view: &HotelDetailView<'_>) -> String {
    let hotel = view.hotel;

    let gallery: String = hotel
        .images
        .iter()
        .take(3)
        .map(|src| format!(r#"<img src="{}" alt="{}">"#, html_escape(src), html_escape(&hotel.name)))
        .collect();

    let amenities: String = hotel
        .amenities
        .iter()
        .map(|a| format!(r#"<span class="badge muted">{}</span> "#, html_escape(a)))
        .collect();

    let rooms: String = view
        .rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            format!(
                r#"<label class="room">
                <span><input type="radio" name="room" value="{name}"{checked}> <strong>{name}</strong><br>
                <span class="meta">{size} · {beds} · up to {guests} guests</span></span>
                <span class="price">{price} <small>/ night</small></span>
                </label>"#,
                name = html_escape(&room.name),
                checked = if i == 0 { " checked" } else { "" },
                size = html_escape(&room.size),
                beds = html_escape(&room.beds),
                guests = room.max_guests,
                price = format_price(room.price),
            )
        })
        .collect();

    let extras: String = view
        .extras
        .iter()
        .map(|e| {
            format!(
                r#"<div class="row"><label><input type="checkbox" name="extras" value="{id}"> {name}</label><span>+{price}</span></div>"#,
                id = html_escape(&e.id),
                name = html_escape(&e.name),
                price = format_price(e.price),
            )
        })
        .collect();

    let distribution: String = (1..=5u8)
        .rev()
        .map(|s| {
            format!(
                r#"<div class="dist">{s}★<div class="bar"><span style="width:{pct}%"></span></div>{count}</div>"#,
                s = s,
                pct = view.stats.percent(s),
                count = view.stats.count(s),
            )
        })
        .collect();

    let reviews = if view.reviews.is_empty() {
        r#"<p class="meta">No reviews match.</p>"#.to_string()
    } else {
        view.reviews.iter().map(|r| review_html(r)).collect()
    };

    let deals = if view.deals.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h2 style="margin-top:40px">Deals for this hotel</h2>{}"#,
            grid(view.deals.iter().map(|d| deal_card(d, view.now)))
        )
    };

    let attractions = hotel
        .nearby_attractions
        .iter()
        .map(|a| html_escape(a))
        .collect::<Vec<_>>()
        .join(", ");

    let quote = view.quote;
    let body = format!(
        r#"<div class="container" style="padding-top:32px">
        <span class="badge">{category}</span>
        <h1>{name}</h1>
        <p class="meta">{location} · {stars} {rating:.1} ({reviews_count} reviews)</p>
        <div class="gallery">{gallery}</div>
        <div class="detail">
        <div>
            <h2>About</h2>
            <p>{description}</p>
            <p class="meta" style="margin-top:12px">Check-in from {check_in} · Check-out by {check_out}</p>
            <p class="meta">Nearby: {attractions}</p>
            <h2 style="margin-top:32px">Amenities</h2>
            <p>{amenities}</p>
            <h2 style="margin-top:32px">Policies</h2>
            <p class="meta">{cancellation}<br>{pets}<br>{smoking}</p>
            {deals}
            <h2 id="reviews" style="margin-top:40px">Guest reviews</h2>
            <div class="panel" style="margin-bottom:16px">
                <p class="price">{avg:.1} <small>average from {total} reviews</small></p>
                {distribution}
            </div>
            {controls}
            {review_list}
        </div>
        <form class="panel" method="get" action="/booking">
            <input type="hidden" name="hotelId" value="{id}">
            <p class="price">{price} <small>/ night</small></p>
            <h4 style="margin-top:16px">Choose a room</h4>
            {rooms}
            <h4 style="margin-top:16px">Extras</h4>
            {extras}
            <div class="row" style="margin-top:16px"><span>{price} x {nights} nights</span><span>{accommodation}</span></div>
            <div class="row"><span>Cleaning and service fee</span><span>{fee}</span></div>
            <div class="row total"><span>Total before extras</span><span>{total_price}</span></div>
            <p style="margin-top:16px"><button class="btn" type="submit" style="width:100%">Reserve</button></p>
        </form>
        </div>
        </div>"#,
        category = hotel.category,
        name = html_escape(&hotel.name),
        location = html_escape(&hotel.location),
        stars = stars(hotel.rating),
        rating = hotel.rating,
        reviews_count = hotel.reviews_count,
        description = html_escape(&hotel.description),
        check_in = html_escape(&hotel.check_in_time),
        check_out = html_escape(&hotel.check_out_time),
        cancellation = html_escape(&hotel.policies.cancellation),
        pets = html_escape(&hotel.policies.pets),
        smoking = html_escape(&hotel.policies.smoking),
        avg = view.stats.average_rating,
        total = view.stats.total_reviews,
        controls = review_controls(&hotel.id, view.review_filter),
        review_list = reviews,
        id = html_escape(&hotel.id),
        price = format_price(hotel.price),
        nights = quote.nights,
        accommodation = format_price(quote.accommodation),
        fee = format_price(quote.service_fee),
        total_price = format_price(quote.total),
    );

    page(&hotel.name, user, &body)
}
