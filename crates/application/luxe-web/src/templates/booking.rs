//! Booking wizard screens
//!
//! The wizard holds no server state. Every step posts the draft back in
//! hidden fields together with the step it was rendered at.

use luxe_booking::{BookingDraft, BookingStep, BookingWizard, GuestDetails};
use luxe_core::{Booking, User};

use super::{format_date, format_price, html_escape, notice, page};

fn progress(current: BookingStep) -> String {
    let steps: String = BookingStep::ALL
        .iter()
        .map(|step| {
            format!(
                r#"<div style="text-align:center"><div class="step{done}" style="margin:0 auto">{index}</div><p class="meta">{label}</p></div>"#,
                done = if step.index() <= current.index() { " done" } else { "" },
                index = step.index(),
                label = step.label(),
            )
        })
        .collect();
    format!(r#"<div class="steps">{}</div>"#, steps)
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        name,
        html_escape(value)
    )
}

fn draft_fields(draft: &BookingDraft, step: BookingStep) -> String {
    [
        hidden("hotel_id", &draft.hotel().id),
        hidden("room", draft.room()),
        hidden("extras", &draft.extra_ids().join(",")),
        hidden("step", step.as_str()),
    ]
    .concat()
}

fn guest_fields(guest: &GuestDetails) -> String {
    [
        hidden("first_name", &guest.first_name),
        hidden("last_name", &guest.last_name),
        hidden("email", &guest.email),
        hidden("phone", &guest.phone),
        hidden("special_requests", &guest.special_requests),
    ]
    .concat()
}

fn summary(draft: &BookingDraft) -> String {
    let quote = draft.quote();
    let extras: String = quote
        .extras
        .iter()
        .map(|line| {
            format!(
                r#"<div class="row"><span>{}</span><span>{}</span></div>"#,
                html_escape(&line.name),
                format_price(line.amount)
            )
        })
        .collect();

    format!(
        r#"<aside class="panel">
        <img src="{image}" alt="{name}" style="width:100%;border-radius:10px;margin-bottom:12px">
        <h3>{name}</h3>
        <p class="meta">{location}</p>
        <p class="meta" style="margin:8px 0">{room} · {guests} guests</p>
        <p class="meta">{check_in} to {check_out}</p>
        <div class="row" style="margin-top:12px"><span>{rate} x {nights} nights</span><span>{accommodation}</span></div>
        <div class="row"><span>Cleaning and service fee</span><span>{fee}</span></div>
        {extras}
        <div class="row total"><span>Total</span><span>{total}</span></div>
        </aside>"#,
        image = html_escape(&draft.hotel().image),
        name = html_escape(&draft.hotel().name),
        location = html_escape(&draft.hotel().location),
        room = html_escape(draft.room()),
        guests = draft.guests(),
        check_in = format_date(draft.check_in()),
        check_out = format_date(draft.check_out()),
        rate = format_price(quote.nightly_rate),
        nights = quote.nights,
        accommodation = format_price(quote.accommodation),
        fee = format_price(quote.service_fee),
        total = format_price(quote.total),
    )
}

fn button(action: &str, label: &str, primary: bool) -> String {
    format!(
        r#"<button class="btn{}" type="submit" name="action" value="{}">{}</button>"#,
        if primary { "" } else { " ghost" },
        action,
        label
    )
}

fn review_step(draft: &BookingDraft, guest: &GuestDetails) -> String {
    let extras = if draft.extras().is_empty() {
        "None".to_string()
    } else {
        draft
            .extras()
            .iter()
            .map(|e| html_escape(&e.name))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        r#"<h2>Review your stay</h2>
        <div class="row"><span>Hotel</span><span>{hotel}</span></div>
        <div class="row"><span>Room</span><span>{room}</span></div>
        <div class="row"><span>Check-in</span><span>{check_in}</span></div>
        <div class="row"><span>Check-out</span><span>{check_out}</span></div>
        <div class="row"><span>Guests</span><span>{guests}</span></div>
        <div class="row"><span>Extras</span><span>{extras}</span></div>
        <p class="meta" style="margin-top:12px">{cancellation}</p>
        {guest}
        <p style="margin-top:24px">{next}</p>"#,
        hotel = html_escape(&draft.hotel().name),
        room = html_escape(draft.room()),
        check_in = format_date(draft.check_in()),
        check_out = format_date(draft.check_out()),
        guests = draft.guests(),
        cancellation = html_escape(&draft.hotel().policies.cancellation),
        guest = guest_fields(guest),
        next = button("next", "Continue to guest details", true),
    )
}

fn guest_step(guest: &GuestDetails) -> String {
    let input = |name: &str, label: &str, kind: &str, value: &str| {
        format!(
            r#"<label for="{name}">{label}</label><input id="{name}" type="{kind}" name="{name}" value="{value}">"#,
            name = name,
            label = label,
            kind = kind,
            value = html_escape(value),
        )
    };
    format!(
        r#"<h2>Guest details</h2>
        {first}{last}{email}{phone}
        <label for="special_requests">Special requests</label>
        <textarea id="special_requests" name="special_requests" rows="3">{requests}</textarea>
        <p style="margin-top:24px">{back} {next}</p>"#,
        first = input("first_name", "First name", "text", &guest.first_name),
        last = input("last_name", "Last name", "text", &guest.last_name),
        email = input("email", "Email", "email", &guest.email),
        phone = input("phone", "Phone", "tel", &guest.phone),
        requests = html_escape(&guest.special_requests),
        back = button("back", "Back", false),
        next = button("next", "Continue to payment", true),
    )
}

fn payment_step(guest: &GuestDetails, total: u32, user: Option<&User>) -> String {
    let login_hint = if user.is_none() {
        notice("You will be asked to log in before payment is taken.", false)
    } else {
        String::new()
    };
    let name = guest.full_name();
    format!(
        r#"<h2>Payment</h2>
        <p class="meta">Booking for {name}{email}</p>
        {login_hint}
        <label for="card">Card number</label>
        <input id="card" type="text" inputmode="numeric" placeholder="4242 4242 4242 4242" autocomplete="off">
        <label for="expiry">Expiry</label>
        <input id="expiry" type="text" placeholder="MM/YY" autocomplete="off">
        <label for="cvc">CVC</label>
        <input id="cvc" type="text" placeholder="123" autocomplete="off">
        <p class="meta" style="margin-top:8px">This is a demo. Card details are never sent.</p>
        {guest}
        <p style="margin-top:24px">{back} {pay}</p>"#,
        name = if name.is_empty() { "guest".to_string() } else { html_escape(&name) },
        email = if guest.email.is_empty() {
            String::new()
        } else {
            format!(" ({})", html_escape(&guest.email))
        },
        guest = guest_fields(guest),
        back = button("back", "Back", false),
        pay = button("pay", &format!("Pay {}", format_price(total)), true),
    )
}

/// Steps 1 to 3
pub fn booking_html(user: Option<&User>, wizard: &BookingWizard, message: Option<&str>) -> String {
    let draft = wizard.draft();
    let step = wizard.step();
    let content = match step {
        BookingStep::Review => review_step(draft, wizard.guest()),
        BookingStep::GuestDetails => guest_step(wizard.guest()),
        BookingStep::Payment | BookingStep::Confirmed => payment_step(wizard.guest(), draft.total(), user),
    };

    let body = format!(
        r#"<div class="container">
        {progress}
        {message}
        <div class="detail">
        <form class="panel stack" method="post" action="/booking">
            {fields}
            {content}
        </form>
        {summary}
        </div>
        </div>"#,
        progress = progress(step),
        message = message.map(|m| notice(m, true)).unwrap_or_default(),
        fields = draft_fields(draft, step),
        summary = summary(draft),
    );

    page(&format!("Book {}", draft.hotel().name), user, &body)
}

/// Step 4
pub fn confirmation_html(user: Option<&User>, booking: &Booking, guest: &GuestDetails) -> String {
    let extras = if booking.extras.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="row"><span>Extras</span><span>{}</span></div>"#,
            html_escape(&booking.extras.join(", "))
        )
    };
    let email = if guest.email.is_empty() {
        user.map(|u| u.email.as_str()).unwrap_or_default()
    } else {
        guest.email.as_str()
    };

    let body = format!(
        r#"<div class="container">
        {progress}
        <div class="panel" style="max-width:640px;margin:0 auto;text-align:center">
            <h1>Booking confirmed</h1>
            <p class="meta">Confirmation number</p>
            <p class="price">{id}</p>
            <p class="meta" style="margin-top:8px">A confirmation has been sent to {email}.</p>
            <div style="text-align:left;margin-top:24px">
            <div class="row"><span>Hotel</span><span>{hotel}</span></div>
            <div class="row"><span>Room</span><span>{room}</span></div>
            <div class="row"><span>Dates</span><span>{check_in} to {check_out}</span></div>
            <div class="row"><span>Guests</span><span>{guests}</span></div>
            {extras}
            <div class="row total"><span>Total paid</span><span>{total}</span></div>
            </div>
            <p style="margin-top:24px"><a class="btn" href="/dashboard">View my trips</a> <a class="btn ghost" href="/hotels">Keep browsing</a></p>
        </div>
        </div>"#,
        progress = progress(BookingStep::Confirmed),
        id = html_escape(&booking.id),
        email = html_escape(email),
        hotel = html_escape(&booking.hotel_name),
        room = html_escape(booking.room_type.as_deref().unwrap_or_default()),
        check_in = format_date(booking.check_in),
        check_out = format_date(booking.check_out),
        guests = booking.guests,
        total = format_price(booking.total_price),
    );

    page("Booking confirmed", user, &body)
}
