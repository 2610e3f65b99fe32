//! Server-rendered HTML
//!
//! Pages are plain `format!` strings wrapped by [`page`]. Every value that
//! came from fixtures or the request goes through [`html_escape`].

pub mod account;
pub mod booking;
pub mod hotels;
pub mod places;

use chrono::NaiveDate;
use luxe_core::User;

/// CSS styles
pub const STYLE_CSS: &str = r#"
:root {
    --bg: #faf8f5;
    --surface: #ffffff;
    --ink: #1c1917;
    --muted: #78716c;
    --accent: #b45309;
    --accent-soft: #fef3c7;
    --border: #e7e5e4;
    --danger: #b91c1c;
    --ok: #15803d;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Inter', system-ui, sans-serif; background: var(--bg); color: var(--ink); line-height: 1.6; }
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
nav.top { background: var(--surface); border-bottom: 1px solid var(--border); position: sticky; top: 0; z-index: 10; }
nav.top .container { display: flex; align-items: center; justify-content: space-between; height: 64px; }
.brand { font-size: 1.4em; font-weight: 800; text-decoration: none; letter-spacing: -0.02em; }
.brand span { color: var(--accent); }
.links a { margin: 0 12px; text-decoration: none; color: var(--muted); font-weight: 500; }
.links a:hover { color: var(--ink); }
.account { display: flex; align-items: center; gap: 12px; }
.avatar { width: 36px; height: 36px; border-radius: 50%; background: var(--accent); color: #fff; display: inline-flex; align-items: center; justify-content: center; font-weight: 700; font-size: 0.85em; }
.btn { display: inline-block; padding: 10px 20px; border-radius: 10px; border: none; background: var(--accent); color: #fff; font-weight: 600; text-decoration: none; cursor: pointer; font-size: 0.95em; }
.btn.ghost { background: transparent; color: var(--ink); border: 1px solid var(--border); }
.btn.small { padding: 6px 12px; font-size: 0.85em; }
.hero { background: linear-gradient(120deg, #1c1917, #44403c); color: #fff; padding: 96px 0 72px; }
.hero h1 { font-size: 3em; line-height: 1.1; margin-bottom: 16px; }
.hero p { color: #d6d3d1; max-width: 560px; margin-bottom: 32px; }
.search-bar { display: flex; gap: 8px; background: #fff; padding: 8px; border-radius: 14px; max-width: 640px; }
.search-bar input { flex: 1; border: none; padding: 12px; font-size: 1em; outline: none; }
section { padding: 48px 0; }
section h2 { font-size: 1.8em; margin-bottom: 24px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px; }
.card { background: var(--surface); border: 1px solid var(--border); border-radius: 16px; overflow: hidden; text-decoration: none; display: block; }
.card img { width: 100%; height: 200px; object-fit: cover; display: block; }
.card .body { padding: 16px 18px 20px; }
.card h3 { font-size: 1.1em; margin-bottom: 4px; }
.meta { color: var(--muted); font-size: 0.9em; }
.price { font-weight: 700; font-size: 1.2em; }
.price small { color: var(--muted); font-weight: 400; font-size: 0.7em; }
.badge { display: inline-block; padding: 2px 10px; border-radius: 999px; background: var(--accent-soft); color: var(--accent); font-size: 0.75em; font-weight: 600; }
.badge.muted { background: var(--border); color: var(--muted); }
.stars { color: #f59e0b; letter-spacing: 1px; }
.layout { display: grid; grid-template-columns: 280px 1fr; gap: 32px; padding: 32px 0; }
.filters { background: var(--surface); border: 1px solid var(--border); border-radius: 16px; padding: 20px; align-self: start; }
.filters h4 { margin: 16px 0 8px; font-size: 0.9em; text-transform: uppercase; color: var(--muted); }
.filters label { display: block; font-size: 0.95em; }
.filters input[type=text], .filters input[type=number], .filters select { width: 100%; padding: 8px; border: 1px solid var(--border); border-radius: 8px; }
.toolbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
.tabs { display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 24px; }
.tabs a { padding: 8px 16px; border-radius: 999px; border: 1px solid var(--border); text-decoration: none; font-size: 0.9em; }
.tabs a.active { background: var(--ink); color: #fff; border-color: var(--ink); }
.gallery { display: grid; grid-template-columns: 2fr 1fr; gap: 8px; margin: 24px 0; }
.gallery img { width: 100%; height: 100%; max-height: 420px; object-fit: cover; border-radius: 12px; }
.detail { display: grid; grid-template-columns: 1fr 360px; gap: 40px; }
.panel { background: var(--surface); border: 1px solid var(--border); border-radius: 16px; padding: 24px; }
.row { display: flex; justify-content: space-between; padding: 6px 0; }
.row.total { border-top: 1px solid var(--border); margin-top: 8px; padding-top: 12px; font-weight: 700; }
.room { display: flex; justify-content: space-between; align-items: center; padding: 16px 0; border-bottom: 1px solid var(--border); }
.review { padding: 16px 0; border-bottom: 1px solid var(--border); }
.bar { height: 8px; background: var(--border); border-radius: 4px; overflow: hidden; flex: 1; margin: 0 8px; }
.bar span { display: block; height: 100%; background: #f59e0b; }
.dist { display: flex; align-items: center; font-size: 0.85em; }
.steps { display: flex; justify-content: space-between; max-width: 640px; margin: 32px auto; }
.steps .step { width: 40px; height: 40px; border-radius: 50%; background: var(--border); display: flex; align-items: center; justify-content: center; font-weight: 700; }
.steps .step.done { background: var(--accent); color: #fff; }
form.stack label { display: block; margin: 12px 0 4px; font-size: 0.9em; font-weight: 600; }
form.stack input, form.stack textarea { width: 100%; padding: 10px; border: 1px solid var(--border); border-radius: 8px; font: inherit; }
.notice { padding: 12px 16px; border-radius: 10px; background: var(--accent-soft); margin: 16px 0; }
.notice.error { background: #fee2e2; color: var(--danger); }
.empty { text-align: center; padding: 64px 0; color: var(--muted); }
.deal-off { position: absolute; top: 12px; left: 12px; background: var(--danger); color: #fff; padding: 4px 10px; border-radius: 8px; font-weight: 700; }
.card.deal { position: relative; }
footer { border-top: 1px solid var(--border); padding: 32px 0; color: var(--muted); font-size: 0.85em; margin-top: 48px; }
@media (max-width: 900px) {
    .layout, .detail, .gallery { grid-template-columns: 1fr; }
    .hero h1 { font-size: 2.2em; }
}
"#;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a value for a query string
pub fn url_escape(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// `$1,240`
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped.chars().rev().collect::<String>())
}

/// `June 15, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Five-star bar for a rating, rounded to the nearest whole star
pub fn stars(rating: f32) -> String {
    let filled = (rating.round().clamp(0.0, 5.0)) as usize;
    format!(
        r#"<span class="stars" title="{:.1}">{}{}</span>"#,
        rating,
        "★".repeat(filled),
        "☆".repeat(5 - filled)
    )
}

/// Card grid
pub fn grid(cards: impl Iterator<Item = String>) -> String {
    format!(r#"<div class="grid">{}</div>"#, cards.collect::<String>())
}

pub fn notice(message: &str, is_error: bool) -> String {
    format!(
        r#"<div class="notice{}">{}</div>"#,
        if is_error { " error" } else { "" },
        html_escape(message)
    )
}

fn nav(user: Option<&User>) -> String {
    let account = match user {
        Some(user) => format!(
            r#"<a href="/dashboard" class="avatar" title="{name}">{initials}</a>
            <form method="post" action="/logout"><button class="btn ghost small" type="submit">Log out</button></form>"#,
            name = html_escape(&user.name),
            initials = html_escape(&user.initials()),
        ),
        None => r#"<a href="/login" class="btn small">Log in</a>"#.to_string(),
    };

    format!(
        r#"<nav class="top"><div class="container">
        <a href="/" class="brand">Luxe<span>Stay</span></a>
        <div class="links">
            <a href="/hotels">Hotels</a>
            <a href="/destinations">Destinations</a>
            <a href="/deals">Deals</a>
            <a href="/dashboard">My Trips</a>
        </div>
        <div class="account">{account}</div>
        </div></nav>"#
    )
}

/// Full document around `body`
pub fn page(title: &str, user: Option<&User>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Luxe Stay</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
{nav}
{body}
<footer><div class="container">Luxe Stay. Curated stays, mock bookings. No real payments are taken.</div></footer>
</body>
</html>"#,
        title = html_escape(title),
        nav = nav(user),
    )
}

pub fn not_found_html(user: Option<&User>, what: &str) -> String {
    page(
        "Not found",
        user,
        &format!(
            r#"<div class="container empty">
            <h1>{} not found</h1>
            <p>It may have been removed, or the link is wrong.</p>
            <p style="margin-top:24px"><a class="btn" href="/hotels">Browse hotels</a></p>
            </div>"#,
            html_escape(what)
        ),
    )
}

pub fn bad_request_html(user: Option<&User>, message: &str) -> String {
    page(
        "Bad request",
        user,
        &format!(
            r#"<div class="container">{}<p><a href="javascript:history.back()">Go back</a></p></div>"#,
            notice(message, true)
        ),
    )
}
