//! Login, registration and the trips dashboard

use luxe_core::{Booking, BookingStatus, User};

use super::{format_date, format_price, html_escape, notice, page, url_escape};

pub fn login_html(user: Option<&User>, next: &str, error: Option<&str>) -> String {
    let already = user
        .map(|u| {
            notice(
                &format!("You are logged in as {}. Logging in again replaces that session.", u.email),
                false,
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<div class="container" style="max-width:880px;padding-top:48px">
        {already}
        {error}
        <div class="detail" style="grid-template-columns:1fr 1fr">
        <form class="panel stack" method="post" action="/login">
            <h2>Log in</h2>
            <input type="hidden" name="next" value="{next}">
            <label for="login-email">Email</label>
            <input id="login-email" type="email" name="email" required>
            <label for="login-password">Password</label>
            <input id="login-password" type="password" name="password">
            <p style="margin-top:20px"><button class="btn" type="submit">Log in</button></p>
        </form>
        <form class="panel stack" method="post" action="/register">
            <h2>Create an account</h2>
            <input type="hidden" name="next" value="{next}">
            <label for="register-name">Full name</label>
            <input id="register-name" type="text" name="name" required>
            <label for="register-email">Email</label>
            <input id="register-email" type="email" name="email" required>
            <label for="register-password">Password</label>
            <input id="register-password" type="password" name="password">
            <p style="margin-top:20px"><button class="btn" type="submit">Sign up</button></p>
        </form>
        </div>
        <p class="meta" style="margin-top:16px">Demo accounts only. Any email works and passwords are not checked.</p>
        </div>"#,
        error = error.map(|e| notice(e, true)).unwrap_or_default(),
        next = html_escape(next),
    );

    page("Log in", user, &body)
}

fn trip_card(booking: &Booking) -> String {
    let room = booking
        .room_type
        .as_deref()
        .map(|r| format!(" · {}", html_escape(r)))
        .unwrap_or_default();
    format!(
        r#"<div class="card">
        <img src="{image}" alt="{hotel}" loading="lazy">
        <div class="body">
            <span class="badge">{status}</span>
            <h3 style="margin-top:8px">{hotel}</h3>
            <p class="meta">{check_in} to {check_out} · {nights} nights</p>
            <p class="meta">{guests} guests{room}</p>
            <p class="price" style="margin-top:8px">{total}</p>
            <p class="meta">Booking {id}</p>
        </div>
        </div>"#,
        image = html_escape(&booking.hotel_image),
        hotel = html_escape(&booking.hotel_name),
        status = booking.status,
        check_in = format_date(booking.check_in),
        check_out = format_date(booking.check_out),
        nights = booking.nights(),
        guests = booking.guests,
        total = format_price(booking.total_price),
        id = html_escape(&booking.id),
    )
}

pub fn dashboard_html(user: Option<&User>, tab: BookingStatus, trips: &[Booking]) -> String {
    let Some(current) = user else {
        let body = format!(
            r#"<div class="container empty">
            <h1>My trips</h1>
            <p>Log in to see your bookings.</p>
            <p style="margin-top:24px"><a class="btn" href="/login?next={}">Log in</a></p>
            </div>"#,
            url_escape("/dashboard")
        );
        return page("My trips", None, &body);
    };

    let tabs: String = BookingStatus::ALL
        .iter()
        .map(|status| {
            let count = trips.iter().filter(|b| b.status == *status).count();
            format!(
                r#"<a href="/dashboard?tab={}"{}>{} ({})</a>"#,
                status.as_str(),
                if *status == tab { r#" class="active""# } else { "" },
                status.as_str(),
                count
            )
        })
        .collect();

    let shown: Vec<&Booking> = trips.iter().filter(|b| b.status == tab).collect();
    let listing = if shown.is_empty() {
        format!(
            r#"<div class="empty"><h3>No {} trips</h3><p><a href="/hotels">Find your next stay</a></p></div>"#,
            tab.as_str()
        )
    } else {
        super::grid(shown.iter().map(|b| trip_card(b)))
    };

    let body = format!(
        r#"<div class="container" style="padding-top:32px">
        <div class="panel" style="display:flex;align-items:center;gap:16px;margin-bottom:32px">
            <span class="avatar" style="width:56px;height:56px;font-size:1.2em">{initials}</span>
            <div><h2>{name}</h2><p class="meta">{email}</p></div>
        </div>
        <h1>My trips</h1>
        <div class="tabs" style="margin-top:16px">{tabs}</div>
        {listing}
        </div>"#,
        initials = html_escape(&current.initials()),
        name = html_escape(&current.name),
        email = html_escape(&current.email),
    );

    page("My trips", user, &body)
}
