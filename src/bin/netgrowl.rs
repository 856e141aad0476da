//! netgrowl CLI
//!
//! Registers an application with a Growl daemon and sends one notification.

use clap::Parser;
use netgrowl::{Config, GrowlClient, Notification, Priority, DEFAULT_ADDRESS};
use tracing_subscriber::{fmt, EnvFilter};

/// Send a Growl network notification
#[derive(Parser, Debug)]
#[command(name = "netgrowl")]
#[command(about = "Send a notification to a Growl daemon over UDP")]
#[command(version)]
struct Args {
    /// Daemon address (host:port)
    #[arg(short, long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Application name to register
    #[arg(short = 'A', long, default_value = "netgrowl")]
    application: String,

    /// Shared secret
    #[arg(short = 'P', long, default_value = "")]
    password: String,

    /// Notification kind to register (repeatable, defaults to --name)
    #[arg(long = "notification")]
    notifications: Vec<String>,

    /// Notification kind to send
    #[arg(short, long, default_value = "netgrowl notification")]
    name: String,

    /// Priority: very-low, moderate, normal, high, emergency or -2..=2
    #[arg(short, long, default_value = "normal", allow_hyphen_values = true)]
    priority: Priority,

    /// Keep the notification on screen until dismissed
    #[arg(short, long)]
    sticky: bool,

    /// Socket write timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    timeout_ms: u64,

    /// Notification title
    title: String,

    /// Notification description
    #[arg(default_value = "")]
    description: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,netgrowl=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> netgrowl::Result<()> {
    let notifications = if args.notifications.is_empty() {
        vec![args.name.clone()]
    } else {
        args.notifications
    };

    tracing::info!("netgrowl v{}", netgrowl::VERSION);
    tracing::info!("Daemon address: {}", args.address);

    let config = Config::builder()
        .address(&args.address)
        .application(&args.application)
        .notifications(notifications)
        .password(&args.password)
        .write_timeout_ms(args.timeout_ms)
        .build();

    let notification = Notification::new(args.name, args.title, args.description)
        .priority(args.priority)
        .sticky(args.sticky);

    let mut growl = GrowlClient::new(config);
    growl.register()?;
    growl.send(&notification)?;
    growl.close()?;

    tracing::info!("Notification sent");
    Ok(())
}
