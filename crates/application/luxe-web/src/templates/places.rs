//! Destinations and deals

use chrono::{DateTime, Utc};
use luxe_core::{Deal, Destination, Hotel, TimeLeft, User};
use luxe_query::DealsTab;

use super::hotels::hotel_card;
use super::{grid, html_escape, page, url_escape};

pub fn destination_card(destination: &Destination) -> String {
    format!(
        r#"<a href="/destinations/{slug}" class="card">
        <img src="{image}" alt="{name}" loading="lazy">
        <div class="body">
            <h3>{name}</h3>
            <p class="meta">{country} · {region}</p>
            <p class="meta">{count} hotels</p>
        </div>
        </a>"#,
        slug = url_escape(&destination.slug),
        image = html_escape(&destination.image),
        name = html_escape(&destination.name),
        country = html_escape(&destination.country),
        region = html_escape(&destination.region),
        count = destination.hotel_count(),
    )
}

pub fn deal_card(deal: &Deal, now: DateTime<Utc>) -> String {
    let time_left = deal.time_left_at(now);
    let status = if deal.is_active_at(now) {
        format!(r#"<span class="badge">{}</span>"#, time_left)
    } else if time_left == TimeLeft::Expired {
        r#"<span class="badge muted">Expired</span>"#.to_string()
    } else {
        r#"<span class="badge muted">Coming soon</span>"#.to_string()
    };

    let includes: String = deal
        .includes()
        .iter()
        .map(|i| format!("<li>{}</li>", html_escape(i)))
        .collect();
    let includes = if includes.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="meta" style="margin:8px 0 0 18px">{}</ul>"#, includes)
    };

    let hotel_link = deal
        .hotel_ids
        .first()
        .map(|id| {
            format!(
                r#"<p style="margin-top:12px"><a class="btn small" href="/hotels/{}">View hotel</a></p>"#,
                url_escape(id)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card deal">
        <span class="deal-off">-{discount}%</span>
        <img src="{image}" alt="{title}" loading="lazy">
        <div class="body">
            <span class="badge muted">{kind}</span> {status}
            <h3 style="margin-top:8px">{title}</h3>
            <p class="meta">{description}</p>
            <p style="margin-top:8px"><strong>{savings}</strong></p>
            <p class="meta">Book: {booking} · Travel: {travel}</p>
            {includes}
            <p class="meta" style="margin-top:8px">{terms}</p>
            {hotel_link}
        </div>
        </div>"#,
        discount = deal.discount_percent,
        image = html_escape(&deal.image),
        title = html_escape(&deal.title),
        kind = deal.deal_type.label(),
        description = html_escape(&deal.description),
        savings = html_escape(&deal.savings),
        booking = html_escape(&deal.booking_period),
        travel = html_escape(&deal.travel_period),
        terms = html_escape(&deal.terms.join(" · ")),
    )
}

fn empty(title: &str, hint: &str) -> String {
    format!(
        r#"<div class="empty"><h3>{}</h3><p>{}</p></div>"#,
        html_escape(title),
        html_escape(hint)
    )
}

pub fn destinations_html(
    user: Option<&User>,
    query: &str,
    region: &str,
    regions: &[&str],
    results: &[&Destination],
) -> String {
    let tabs: String = regions
        .iter()
        .map(|r| {
            let mut href = format!("/destinations?region={}", url_escape(r));
            if !query.is_empty() {
                href.push_str("&amp;q=");
                href.push_str(&url_escape(query));
            }
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                href,
                if r.eq_ignore_ascii_case(region) { r#" class="active""# } else { "" },
                html_escape(r)
            )
        })
        .collect();

    let listing = if results.is_empty() {
        empty("No destinations found", "Try another search term or region.")
    } else {
        grid(results.iter().map(|d| destination_card(d)))
    };

    let body = format!(
        r#"<div class="container" style="padding-top:32px">
        <h1>Destinations</h1>
        <form class="search-bar" method="get" action="/destinations" style="margin:16px 0 24px;border:1px solid var(--border)">
            <input type="hidden" name="region" value="{region}">
            <input type="text" name="q" value="{query}" placeholder="Search by name, country or tag">
            <button class="btn" type="submit">Search</button>
        </form>
        <div class="tabs">{tabs}</div>
        {listing}
        </div>"#,
        region = html_escape(region),
        query = html_escape(query),
    );

    page("Destinations", user, &body)
}

fn bullet_list(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|i| format!("<li>{}</li>", html_escape(i)))
        .collect();
    format!(r#"<ul style="margin-left:18px">{}</ul>"#, items)
}

pub fn destination_detail_html(user: Option<&User>, destination: &Destination, hotels: &[&Hotel]) -> String {
    let tags: String = destination
        .tags
        .iter()
        .map(|t| format!(r#"<span class="badge muted">{}</span> "#, html_escape(t)))
        .collect();

    let listing = if hotels.is_empty() {
        empty("No hotels listed yet", "We are still curating stays here.")
    } else {
        grid(hotels.iter().map(|h| hotel_card(h)))
    };

    let body = format!(
        r#"<div class="hero" style="background-image:linear-gradient(rgba(0,0,0,.45),rgba(0,0,0,.45)),url('{hero}');background-size:cover"><div class="container">
        <h1>{name}</h1>
        <p>{country} · {region}</p>
        </div></div>
        <div class="container detail" style="padding-top:32px">
        <div>
            <p>{description}</p>
            <p style="margin-top:12px">{tags}</p>
            <h2 style="margin-top:32px">Top attractions</h2>
            {attractions}
            <h2 style="margin-top:32px">Things to do</h2>
            {activities}
        </div>
        <div class="panel">
            <div class="row"><span>Best time to visit</span><span>{best_time}</span></div>
            <div class="row"><span>Average temperature</span><span>{temp}</span></div>
            <div class="row"><span>Currency</span><span>{currency}</span></div>
            <div class="row"><span>Language</span><span>{language}</span></div>
        </div>
        </div>
        <section><div class="container">
            <h2>Where to stay in {name}</h2>
            {listing}
        </div></section>"#,
        hero = html_escape(&destination.hero_image),
        name = html_escape(&destination.name),
        country = html_escape(&destination.country),
        region = html_escape(&destination.region),
        description = html_escape(&destination.description),
        attractions = bullet_list(&destination.attractions),
        activities = bullet_list(&destination.activities),
        best_time = html_escape(&destination.best_time_to_visit),
        temp = html_escape(&destination.average_temp),
        currency = html_escape(&destination.currency),
        language = html_escape(&destination.language),
    );

    page(&destination.name, user, &body)
}

pub fn deals_html(user: Option<&User>, tab: DealsTab, deals: &[&Deal], now: DateTime<Utc>) -> String {
    let tabs: String = DealsTab::all_tabs()
        .map(|t| {
            format!(
                r#"<a href="/deals?type={}"{}>{}</a>"#,
                t.as_str(),
                if t == tab { r#" class="active""# } else { "" },
                t.label()
            )
        })
        .collect();

    let listing = if deals.is_empty() {
        empty("No deals right now", "Check back soon for new offers.")
    } else {
        grid(deals.iter().map(|d| deal_card(d, now)))
    };

    let body = format!(
        r#"<div class="container" style="padding-top:32px">
        <h1>Exclusive deals</h1>
        <p class="meta" style="margin-bottom:24px">Limited-time offers on hand-picked stays.</p>
        <div class="tabs">{tabs}</div>
        {listing}
        </div>"#
    );

    page("Deals", user, &body)
}
