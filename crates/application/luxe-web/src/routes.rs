//! Route table, shared by the router and `luxe routes`

/// All routes defined in the application
pub const ROUTES: &[(&str, &str, &str)] = &[
    // Pages
    ("GET", "/", "Home: search, featured hotels, destinations, deals"),
    ("GET", "/hotels", "Hotel listing with filters and sort"),
    ("GET", "/hotels/{id}", "Hotel detail, rooms, reviews and deals"),
    ("GET", "/destinations", "Destination search by text and region"),
    ("GET", "/destinations/{slug}", "Destination detail with its hotels"),
    ("GET", "/deals", "Deals by tab"),
    ("GET", "/booking", "Booking wizard, review step"),
    ("POST", "/booking", "Booking wizard transition"),
    ("GET", "/dashboard", "Current user's trips"),

    // Session
    ("GET", "/login", "Login and registration forms"),
    ("POST", "/login", "Mock login"),
    ("POST", "/register", "Mock registration"),
    ("POST", "/logout", "End the session"),

    // API routes
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/hotels", "Hotel search JSON"),
    ("GET", "/api/hotels/{id}", "Hotel, rooms and active deals"),
    ("GET", "/api/hotels/{id}/reviews", "Reviews, filtered and sorted"),
    ("GET", "/api/hotels/{id}/reviews/stats", "Rating summary"),
    ("GET", "/api/deals", "Deals for a tab"),
    ("GET", "/api/destinations", "Destination search JSON"),

    // Static assets
    ("GET", "/static/style.css", "CSS stylesheet"),
];

/// Route listing as printed by `luxe routes`
pub fn routes_table() -> String {
    let mut out = String::from("\nLuxe Stay Routes:\n");
    out.push_str(&format!("{:-<60}\n", ""));
    for (method, path, desc) in ROUTES {
        out.push_str(&format!("{:6} {:30} {}\n", method, path, desc));
    }
    out
}

/// Print all routes
pub fn print_routes() {
    println!("{}", routes_table());
}
