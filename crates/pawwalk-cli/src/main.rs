use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pawwalk_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::context::AppContext;

#[derive(Parser)]
#[command(name = "pawwalk")]
#[command(about = "Pawwalk - book local dog walkers from your terminal", long_about = None)]
struct Cli {
    /// Keep config and storage under this directory instead of the platform defaults
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List walkers
    Walkers {
        /// Only walkers within the configured radius of your location
        #[arg(long)]
        nearby: bool,
        /// Only favorited walkers
        #[arg(long)]
        favorites: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one walker and remember it as the last viewed
    Walker { walker_id: String },
    /// Show the last viewed walker
    Recent,
    /// Toggle a walker's favorite flag
    Favorite { walker_id: String },
    /// Set whether a walker is available
    Availability {
        walker_id: String,
        #[arg(action = clap::ArgAction::Set)]
        available: bool,
    },
    /// Book a walk
    Book {
        #[arg(long)]
        walker: String,
        /// Date as YYYY-MM-DD (digits are enough)
        #[arg(long)]
        date: String,
        /// Local time as HH:MM (digits are enough)
        #[arg(long)]
        time: String,
        /// Minutes: 30, 45, 60 or 90
        #[arg(long, default_value_t = 60)]
        duration: u32,
        #[arg(long)]
        dog: String,
        #[arg(long)]
        notes: Option<String>,
        /// Also schedule a reminder before the walk
        #[arg(long)]
        remind: bool,
    },
    /// List bookings, newest first
    Bookings,
    /// Show one booking
    Booking { booking_id: String },
    /// Change fields of a booking
    Update {
        booking_id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        dog: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel a booking
    Cancel { booking_id: String },
    /// Log in (any credentials are accepted)
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        dog: Option<String>,
    },
    /// Log out
    Logout,
    /// Show the session user
    Whoami,
    /// Look up your location and nearby walkers
    Locate {
        /// Skip the reverse-geocoded address
        #[arg(long)]
        no_address: bool,
    },
    /// Schedule a local reminder
    Remind {
        #[command(subcommand)]
        action: RemindAction,
    },
}

#[derive(Subcommand)]
enum RemindAction {
    /// Fire after a number of seconds
    In {
        seconds: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Fire at a local date and time
    At {
        date: String,
        time: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = cli.base_dir.as_deref();

    let config = ConfigService::new(base_dir)?.get_config();
    init_logging(&config.log_level);

    let ctx = AppContext::open(base_dir, config).await?;

    match cli.command {
        Commands::Walkers {
            nearby,
            favorites,
            json,
        } => commands::walkers::list(&ctx, nearby, favorites, json).await?,
        Commands::Walker { walker_id } => commands::walkers::show(&ctx, &walker_id).await?,
        Commands::Recent => commands::walkers::recent(&ctx)?,
        Commands::Favorite { walker_id } => commands::walkers::favorite(&ctx, &walker_id).await?,
        Commands::Availability {
            walker_id,
            available,
        } => commands::walkers::availability(&ctx, &walker_id, available).await?,
        Commands::Book {
            walker,
            date,
            time,
            duration,
            dog,
            notes,
            remind,
        } => {
            let request = commands::bookings::BookRequest {
                walker_id: walker,
                date,
                time,
                duration,
                dog,
                notes,
                remind,
            };
            commands::bookings::book(&ctx, request).await?
        }
        Commands::Bookings => commands::bookings::list(&ctx),
        Commands::Booking { booking_id } => commands::bookings::show(&ctx, &booking_id)?,
        Commands::Update {
            booking_id,
            date,
            time,
            duration,
            dog,
            notes,
        } => {
            let request = commands::bookings::UpdateRequest {
                date,
                time,
                duration,
                dog,
                notes,
            };
            commands::bookings::update(&ctx, &booking_id, request).await?
        }
        Commands::Cancel { booking_id } => commands::bookings::cancel(&ctx, &booking_id).await?,
        Commands::Login { email, password } => commands::session::login(&ctx, email, password).await?,
        Commands::Register {
            name,
            email,
            password,
            dog,
        } => commands::session::register(&ctx, name, email, password, dog).await?,
        Commands::Logout => commands::session::logout(&ctx).await,
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Locate { no_address } => commands::location::locate(&ctx, !no_address).await?,
        Commands::Remind { action } => match action {
            RemindAction::In {
                seconds,
                title,
                body,
            } => commands::remind::in_seconds(&ctx, seconds, title, body).await?,
            RemindAction::At {
                date,
                time,
                title,
                body,
            } => commands::remind::at(&ctx, &date, &time, title, body).await?,
        },
    }

    Ok(())
}
