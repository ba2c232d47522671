//! `laz-admin`: operator CLI over the site API.
//!
//! Covers the endpoints the page never touches (the subscriber roster is
//! served to localhost only) plus manual vote/subscribe pokes for checking a
//! deployment.

#[cfg(not(target_arch = "wasm32"))]
use clap::{Parser, Subcommand};
#[cfg(not(target_arch = "wasm32"))]
use laz_widgets::api::{Api, ApiClient, Direction};
#[cfg(not(target_arch = "wasm32"))]
use laz_widgets::environment::Environment;
#[cfg(not(target_arch = "wasm32"))]
use laz_widgets::logging;
#[cfg(not(target_arch = "wasm32"))]
use std::error::Error;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// API base URL. Overrides the LAZ_ENVIRONMENT variable.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Subcommand)]
enum Command {
    /// Read the vote state of a slug.
    Votes {
        /// Slug of the content item
        #[arg(long, value_name = "SLUG")]
        slug: String,
    },
    /// Cast a vote on a slug.
    Vote {
        /// Slug of the content item
        #[arg(long, value_name = "SLUG")]
        slug: String,

        /// Vote downwards instead of upwards.
        #[arg(long)]
        down: bool,
    },
    /// Submit an email to the subscription list.
    Subscribe {
        /// Email address to subscribe
        #[arg(long, value_name = "EMAIL")]
        email: String,
    },
    /// List the subscription roster. Only answered from localhost.
    Subscribers,
}

#[cfg(not(target_arch = "wasm32"))]
fn print_state(slug: &str, state: &laz_widgets::api::VoteState) {
    let user_vote = state
        .user_vote
        .map(|d| d.to_string())
        .unwrap_or_else(|| "none".to_string());
    println!(
        "{}: score {} (up {}, down {}), your vote: {}",
        slug, state.score, state.up, state.down, user_vote
    );
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_cli_logging();

    // The page default (SameOrigin) cannot resolve outside a browser, so the
    // CLI falls back to the local dev server instead.
    let laz_environment_str = std::env::var("LAZ_ENVIRONMENT").unwrap_or_default();
    let mut environment = laz_environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::Local);
    let args = Args::parse();
    if let Some(api_base_url) = args.base_url {
        environment = Environment::Custom { api_base_url };
    }

    let client = ApiClient::new(environment);
    match args.command {
        Command::Votes { slug } => match client.get_votes(&slug).await {
            Ok(state) => {
                print_state(&slug, &state);
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to read votes for {}: {}", slug, e);
                Err(e.into())
            }
        },
        Command::Vote { slug, down } => {
            let direction = if down { Direction::Down } else { Direction::Up };
            println!(
                "Casting {} vote on {} in environment: {:?}",
                direction,
                slug,
                client.environment()
            );
            match client.cast_vote(&slug, direction).await {
                Ok(state) => {
                    print_state(&slug, &state);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Failed to cast vote on {}: {}", slug, e);
                    Err(e.into())
                }
            }
        }
        Command::Subscribe { email } => {
            println!(
                "Subscribing {} in environment: {:?}",
                email,
                client.environment()
            );
            match client.subscribe(&email).await {
                Ok(result) if result.ok => {
                    println!("Subscribed {} successfully.", email);
                    Ok(())
                }
                Ok(result) => {
                    let reason = result.error.unwrap_or_else(|| "no reason given".to_string());
                    eprintln!("Subscription rejected: {}", reason);
                    Err(Box::from(reason))
                }
                Err(e) => {
                    eprintln!("Failed to subscribe {}: {}", email, e);
                    Err(e.into())
                }
            }
        }
        Command::Subscribers => match client.list_subscribers().await {
            Ok(subscribers) => {
                for subscriber in &subscribers {
                    println!("{}\t{}", subscriber.created_at, subscriber.email);
                }
                println!("{} subscriber(s)", subscribers.len());
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to list subscribers: {}", e);
                Err(e.into())
            }
        },
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
