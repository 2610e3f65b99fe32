//! Luxe Stay CLI
//!
//! Serve the site, or browse the catalog and book a stay from the terminal.
//!
//! ```bash
//! luxe serve --port 8080
//! luxe hotels search --max-price 400 --category Hotel
//! luxe login ana@example.com && luxe book 1 --extras e1,e3
//! ```

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use luxe_booking::{BookingDraft, BookingWizard, GuestDetails, PricingPolicy, SubmitOutcome, UuidBookingIds};
use luxe_config::LuxeConfig;
use luxe_core::{Booking, Category, Hotel};
use luxe_fixtures::FixtureStore;
use luxe_query::{Catalog, DealsTab, HotelSort, ReviewFilter, ReviewSort, SearchFilters};
use luxe_session::{FileSessionStore, SessionProvider};
use luxe_web::templates::{format_date, format_price};
use luxe_web::AppState;

#[derive(Parser)]
#[command(name = "luxe")]
#[command(about = "Luxe Stay - luxury hotel discovery and mock booking")]
#[command(version)]
struct Cli {
    /// Config file [default: <config dir>/luxe/config.yaml when present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory of replacement fixture files
    #[arg(long, global = true)]
    fixtures_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Search and inspect hotels
    Hotels {
        #[command(subcommand)]
        command: HotelCommands,
    },

    /// Reviews of a hotel
    Reviews {
        /// Hotel id
        hotel_id: String,

        /// Only reviews with exactly this many stars
        #[arg(short, long)]
        rating: Option<u8>,

        /// recent, helpful or rating
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Search destinations
    Destinations {
        /// Matches name, country, region or tag
        query: Option<String>,

        /// Europe, Asia, North America, ...
        #[arg(short, long)]
        region: Option<String>,
    },

    /// List deals
    Deals {
        /// all, seasonal, last-minute or package
        #[arg(short = 't', long = "type", default_value = "all")]
        deal_type: String,
    },

    /// Price a stay
    Quote {
        /// Hotel id
        hotel_id: String,

        /// Extra facility ids, comma separated
        #[arg(short, long, value_delimiter = ',')]
        extras: Vec<String>,
    },

    /// Book a stay as the logged-in user
    Book {
        /// Hotel id
        hotel_id: String,

        /// Room name [default: from config]
        #[arg(short, long)]
        room: Option<String>,

        /// Extra facility ids, comma separated
        #[arg(short, long, value_delimiter = ',')]
        extras: Vec<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        requests: String,
    },

    /// Mock login; any password is accepted
    Login {
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Mock registration
    Register {
        name: String,

        email: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// End the session
    Logout,

    /// Show the current user
    Whoami,

    /// List web routes
    Routes,

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
enum HotelCommands {
    /// Filter and sort hotels
    Search {
        /// City, country or hotel name
        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        min_price: Option<u32>,

        #[arg(long)]
        max_price: Option<u32>,

        /// Hotel, Resort or Apartment (repeat or comma separate)
        #[arg(long, value_delimiter = ',')]
        category: Vec<String>,

        /// Required amenities (repeat or comma separate)
        #[arg(long, value_delimiter = ',')]
        amenity: Vec<String>,

        /// Minimum rating
        #[arg(long)]
        rating: Option<f32>,

        /// popularity, price-low, price-high or rating
        #[arg(short, long, default_value = "popularity")]
        sort: String,
    },

    /// Show one hotel
    Show {
        /// Hotel id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = LuxeConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.fixtures_dir {
        config.data.fixtures_dir = Some(dir);
    }
    luxe_observe::init(&config.logging)?;

    let json = cli.json;
    match cli.command {
        Commands::Serve { host, port } => cmd_serve(config, host, port).await,
        Commands::Hotels { command } => cmd_hotels(&config, command, json),
        Commands::Reviews { hotel_id, rating, sort } => cmd_reviews(&config, hotel_id, rating, sort, json),
        Commands::Destinations { query, region } => cmd_destinations(&config, query, region, json),
        Commands::Deals { deal_type } => cmd_deals(&config, deal_type, json),
        Commands::Quote { hotel_id, extras } => cmd_quote(&config, hotel_id, extras, json),
        Commands::Book {
            hotel_id,
            room,
            extras,
            first_name,
            last_name,
            phone,
            requests,
        } => {
            let guest = GuestDetails {
                first_name: first_name.unwrap_or_default(),
                last_name: last_name.unwrap_or_default(),
                email: String::new(),
                phone,
                special_requests: requests,
            };
            cmd_book(&config, hotel_id, room, extras, guest, json).await
        }
        Commands::Login { email, password } => cmd_login(&config, email, password),
        Commands::Register { name, email, password } => cmd_register(&config, name, email, password),
        Commands::Logout => cmd_logout(&config),
        Commands::Whoami => cmd_whoami(&config, json),
        Commands::Routes => {
            luxe_web::routes::print_routes();
            Ok(())
        }
        Commands::Config => cmd_config(&config, cli.config),
    }
}

// ============== Helpers ==============

fn catalog(config: &LuxeConfig) -> Result<Catalog> {
    let store = FixtureStore::load(config.data.fixtures_dir.as_deref()).context("Failed to load fixtures")?;
    Ok(Catalog::new(Arc::new(store)))
}

fn session(config: &LuxeConfig) -> SessionProvider<FileSessionStore> {
    SessionProvider::hydrate(FileSessionStore::at_path(config.data.session_file.clone()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn heading(title: &str) {
    println!("\n  {}", title);
    println!("  {}\n", "=".repeat(title.chars().count()));
}

fn hotel_line(hotel: &Hotel) {
    println!(
        "  [{}] {}  {}  {}/night  {:.1}★ ({} reviews)",
        hotel.id,
        hotel.name,
        hotel.category,
        format_price(hotel.price),
        hotel.rating,
        hotel.reviews_count
    );
    println!("      {}", hotel.location);
}

fn booking_lines(booking: &Booking) {
    println!("  Booking:   {}", booking.id);
    println!("  Hotel:     {}", booking.hotel_name);
    if let Some(room) = &booking.room_type {
        println!("  Room:      {}", room);
    }
    println!(
        "  Dates:     {} to {} ({} nights)",
        format_date(booking.check_in),
        format_date(booking.check_out),
        booking.nights()
    );
    println!("  Guests:    {}", booking.guests);
    if !booking.extras.is_empty() {
        println!("  Extras:    {}", booking.extras.join(", "));
    }
    println!("  Total:     {}", format_price(booking.total_price));
}

// ============== Serve ==============

async fn cmd_serve(mut config: LuxeConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    let addr = config.server.bind_addr();
    let state = AppState::new(config)?;

    heading("LUXE STAY");
    println!("  Hotels:       {}", state.catalog.hotels().len());
    println!("  Destinations: {}", state.catalog.destinations().len());
    println!("  Deals:        {}", state.catalog.deals().len());
    luxe_web::routes::print_routes();
    println!("Server ready at http://{}", addr);
    println!();

    luxe_web::serve(Arc::new(state), &addr).await?;
    Ok(())
}

// ============== Catalog ==============

fn cmd_hotels(config: &LuxeConfig, command: HotelCommands, json: bool) -> Result<()> {
    match command {
        HotelCommands::Search {
            location,
            min_price,
            max_price,
            category,
            amenity,
            rating,
            sort,
        } => {
            let mut filters = SearchFilters::new().location(location.unwrap_or_default());
            if min_price.is_some() || max_price.is_some() {
                filters = filters.price_range(min_price.unwrap_or(0), max_price.unwrap_or(u32::MAX))?;
            }
            for c in &category {
                filters = filters.category(c.parse::<Category>()?);
            }
            filters = filters.amenities(amenity);
            if let Some(rating) = rating {
                filters = filters.min_rating(rating)?;
            }
            let sort: HotelSort = sort.parse()?;
            cmd_hotels_search(config, &filters, sort, json)
        }
        HotelCommands::Show { id } => cmd_hotels_show(config, &id, json),
    }
}

fn cmd_hotels_search(config: &LuxeConfig, filters: &SearchFilters, sort: HotelSort, json: bool) -> Result<()> {
    let catalog = catalog(config)?;
    let results = catalog.search_hotels_sorted(filters, sort);
    if json {
        return print_json(&results);
    }

    heading("HOTELS");
    if results.is_empty() {
        println!("  (no hotels match these filters)");
    }
    for hotel in &results {
        hotel_line(hotel);
    }
    println!();
    println!("  {} results, sorted by {}", results.len(), sort.label());
    Ok(())
}

fn cmd_hotels_show(config: &LuxeConfig, id: &str, json: bool) -> Result<()> {
    let catalog = catalog(config)?;
    let Some(hotel) = catalog.hotel(id) else {
        bail!("Hotel not found: {}", id);
    };
    let rooms = catalog.room_options(hotel);
    let deals = catalog.hotel_deals(&hotel.id);
    let stats = catalog.review_stats(&hotel.id);

    if json {
        return print_json(&serde_json::json!({
            "hotel": hotel,
            "rooms": rooms,
            "deals": deals,
            "reviewStats": stats,
        }));
    }

    heading(&hotel.name.to_uppercase());
    hotel_line(hotel);
    println!();
    println!("  {}", hotel.description);
    println!();
    println!("  Amenities: {}", hotel.amenities.join(", "));
    println!("  Check-in {} / check-out {}", hotel.check_in_time, hotel.check_out_time);
    println!("  {}", hotel.policies.cancellation);
    println!();
    println!("  Rooms:");
    for room in &rooms {
        println!(
            "    {:24} {:>8}/night  {} · {} · up to {} guests",
            room.name,
            format_price(room.price),
            room.size,
            room.beds,
            room.max_guests
        );
    }
    if !deals.is_empty() {
        println!();
        println!("  Deals:");
        for deal in &deals {
            println!("    -{}% {} ({})", deal.discount_percent, deal.title, deal.time_left_at(Utc::now()));
        }
    }
    println!();
    println!(
        "  Reviews: {:.1} average from {} reviews",
        stats.average_rating, stats.total_reviews
    );
    Ok(())
}

fn cmd_reviews(
    config: &LuxeConfig,
    hotel_id: String,
    rating: Option<u8>,
    sort: Option<String>,
    json: bool,
) -> Result<()> {
    let catalog = catalog(config)?;
    let Some(hotel) = catalog.hotel(&hotel_id) else {
        bail!("Hotel not found: {}", hotel_id);
    };
    if let Some(r) = rating.filter(|r| !(1..=5).contains(r)) {
        bail!("Rating must be between 1 and 5, got {}", r);
    }
    let filter = ReviewFilter {
        rating,
        sort: sort.map(|s| s.parse::<ReviewSort>()).transpose()?,
    };
    let reviews = catalog.filter_reviews(&hotel.id, &filter);
    let stats = catalog.review_stats(&hotel.id);

    if json {
        return print_json(&serde_json::json!({ "stats": stats, "reviews": reviews }));
    }

    heading(&format!("REVIEWS: {}", hotel.name.to_uppercase()));
    println!("  {:.1} average from {} reviews", stats.average_rating, stats.total_reviews);
    for stars in (1..=5u8).rev() {
        println!(
            "  {}★ {:<20} {}",
            stars,
            "#".repeat(stats.percent(stars) as usize / 5),
            stats.count(stars)
        );
    }
    println!();
    for review in &reviews {
        println!(
            "  {}★ {} - {} ({})",
            review.rating,
            review.title,
            review.user_name,
            format_date(review.date)
        );
        println!("     {}", review.comment);
        println!("     {} found this helpful", review.helpful);
        println!();
    }
    if reviews.is_empty() {
        println!("  (no reviews match)");
    }
    Ok(())
}

fn cmd_destinations(config: &LuxeConfig, query: Option<String>, region: Option<String>, json: bool) -> Result<()> {
    let catalog = catalog(config)?;
    let results = catalog.find_destinations(query.as_deref().unwrap_or_default(), region.as_deref());
    if json {
        return print_json(&results);
    }

    heading("DESTINATIONS");
    for d in &results {
        println!("  {:12} {}, {} ({})  {} hotels", d.slug, d.name, d.country, d.region, d.hotel_count());
    }
    if results.is_empty() {
        println!("  (no destinations match)");
    }
    println!();
    println!("  Regions: {}", catalog.regions().join(", "));
    Ok(())
}

fn cmd_deals(config: &LuxeConfig, deal_type: String, json: bool) -> Result<()> {
    let tab: DealsTab = deal_type.parse()?;
    let catalog = catalog(config)?;
    let now = Utc::now();
    let deals = catalog.deals_for_tab_at(tab, now);
    if json {
        return print_json(&deals);
    }

    heading(&tab.label().to_uppercase());
    for deal in &deals {
        let status = if deal.is_active_at(now) {
            deal.time_left_at(now).to_string()
        } else {
            "coming soon".to_string()
        };
        println!("  -{}%  {}  [{}]  {}", deal.discount_percent, deal.title, deal.deal_type, status);
        println!("        {}", deal.savings);
        for item in deal.includes() {
            println!("        + {}", item);
        }
    }
    if deals.is_empty() {
        println!("  (no deals right now)");
    }
    Ok(())
}

// ============== Booking ==============

const QUOTE_WIDTH: usize = 40;

/// Label left, amount right, in a fixed-width column
fn quote_row(label: &str, amount: u32) -> String {
    let amount = format_price(amount);
    let pad = QUOTE_WIDTH.saturating_sub(amount.len()).max(label.len() + 1);
    format!("  {:<pad$}{}", label, amount, pad = pad)
}

fn cmd_quote(config: &LuxeConfig, hotel_id: String, extras: Vec<String>, json: bool) -> Result<()> {
    let catalog = catalog(config)?;
    let Some(hotel) = catalog.hotel(&hotel_id) else {
        bail!("Hotel not found: {}", hotel_id);
    };
    let extras: Vec<_> = catalog.extras_for(extras.as_slice()).into_iter().cloned().collect();
    let quote = PricingPolicy::from(&config.booking).quote(hotel.price, &extras);
    if json {
        return print_json(&quote);
    }

    heading(&format!("QUOTE: {}", hotel.name.to_uppercase()));
    let stay = format!("{} x {} nights", format_price(quote.nightly_rate), quote.nights);
    println!("{}", quote_row(&stay, quote.accommodation));
    println!("{}", quote_row("Service fee", quote.service_fee));
    for line in &quote.extras {
        println!("{}", quote_row(&line.name, line.amount));
    }
    println!("  {:-<1$}", "", QUOTE_WIDTH);
    println!("{}", quote_row("Total", quote.total));
    Ok(())
}

async fn cmd_book(
    config: &LuxeConfig,
    hotel_id: String,
    room: Option<String>,
    extras: Vec<String>,
    mut guest: GuestDetails,
    json: bool,
) -> Result<()> {
    let catalog = catalog(config)?;
    let session = session(config);
    let today = Utc::now().date_naive();

    let draft = BookingDraft::new(&catalog, &config.booking, &hotel_id, room.as_deref(), extras.as_slice(), today)?;
    let mut wizard = BookingWizard::new(draft);
    wizard.advance()?;

    if let Some(user) = session.current_user() {
        guest.email = user.email.clone();
        if guest.first_name.is_empty() && guest.last_name.is_empty() {
            guest.first_name = user.name.clone();
        }
    }
    wizard.set_guest(guest);
    wizard.advance()?;

    if !json {
        println!("  Confirming booking...");
    }
    let outcome = wizard
        .submit(
            session.current_user(),
            &UuidBookingIds,
            config.booking.submit_delay(),
            today,
        )
        .await?;

    match outcome {
        SubmitOutcome::LoginRequired => bail!("Log in before booking: luxe login <email>"),
        SubmitOutcome::Confirmed(booking) => {
            if json {
                return print_json(&booking);
            }
            heading("BOOKING CONFIRMED");
            booking_lines(&booking);
            Ok(())
        }
    }
}

// ============== Session ==============

fn cmd_login(config: &LuxeConfig, email: String, password: String) -> Result<()> {
    let mut session = session(config);
    let user = session.login(&email, &password)?;
    println!("  Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

fn cmd_register(config: &LuxeConfig, name: String, email: String, password: String) -> Result<()> {
    let mut session = session(config);
    let user = session.register(&name, &email, &password)?;
    println!("  Welcome, {} [{}] <{}>", user.name, user.avatar, user.email);
    Ok(())
}

fn cmd_logout(config: &LuxeConfig) -> Result<()> {
    let mut session = session(config);
    match session.logout()? {
        Some(user) => println!("  Logged out {}", user.email),
        None => println!("  Nobody was logged in"),
    }
    Ok(())
}

fn cmd_whoami(config: &LuxeConfig, json: bool) -> Result<()> {
    let session = session(config);
    if json {
        return print_json(&session.current_user());
    }
    match session.current_user() {
        Some(user) => println!("  {} [{}] <{}>", user.name, user.initials(), user.email),
        None => println!("  Not logged in"),
    }
    Ok(())
}

fn cmd_config(config: &LuxeConfig, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(luxe_config::default_config_path);
    println!("# {}{}", path.display(), if path.exists() { "" } else { " (not present, defaults)" });
    print!("{}", config.to_yaml()?);
    Ok(())
}
