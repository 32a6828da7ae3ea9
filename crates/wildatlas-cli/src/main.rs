//! Wildatlas CLI — browse the reserve catalog and manage local preferences

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wildatlas::catalog::{BuiltinCatalog, CatalogSource};
use wildatlas_app::data::{Preferences, Toggle};
use wildatlas_app::error::{AppError, Result};

#[derive(Parser)]
#[command(name = "wildatlas", about = "Nature reserve catalog", version)]
struct Cli {
    /// Store preferences in this file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all reserves
    Reserves {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a reserve's detail page
    Show {
        /// Reserve identifier (see `reserves`)
        id: String,
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the interesting-facts list
    Facts,
    /// Manage favorite reserves
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Show or edit the local profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Read or change the boolean settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Inspect or change the onboarding flag
    Onboarding {
        #[command(subcommand)]
        action: OnboardingAction,
    },
}

#[derive(Subcommand)]
enum FavAction {
    /// List favorites in the order they were added
    List,
    /// Mark a reserve as favorite
    Add { id: String },
    /// Unmark a reserve
    Remove { id: String },
    /// Flip a reserve's favorite state
    Toggle { id: String },
    /// Print the number of favorites
    Count,
    /// Remove all favorites
    Clear,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the profile
    Show,
    /// Update the profile fields
    Set {
        /// New display name (empty resets to the default)
        #[arg(long)]
        name: Option<String>,
        /// New avatar id (1-4)
        #[arg(long)]
        avatar: Option<i64>,
    },
    /// Reset the profile to defaults
    Clear,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print all settings
    List,
    /// Change one setting
    Set {
        /// One of: notifications, push, vibration, sound-effects
        name: String,
        /// on or off
        #[arg(value_parser = parse_on_off)]
        value: bool,
    },
}

#[derive(Subcommand)]
enum OnboardingAction {
    /// Print whether onboarding has been completed
    Status,
    /// Mark onboarding as completed
    Complete,
    /// Reset the flag
    Reset,
}

fn parse_on_off(s: &str) -> std::result::Result<bool, String> {
    match s {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        _ => Err(format!("expected 'on' or 'off', got '{s}'")),
    }
}

fn toggle_from_name(name: &str) -> Option<Toggle> {
    match name {
        "notifications" => Some(Toggle::Notifications),
        "push" => Some(Toggle::Push),
        "vibration" => Some(Toggle::Vibration),
        "sound-effects" => Some(Toggle::SoundEffects),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let prefs = match &cli.data_file {
        Some(path) => Preferences::open_at(path.clone())?,
        None => Preferences::open()?,
    };
    let catalog = BuiltinCatalog;

    match cli.command {
        Command::Reserves { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.reserves())
                    .expect("catalog serializes"));
                return Ok(());
            }
            for reserve in catalog.reserves() {
                let marker = if prefs.favorites.is_favorite(reserve.id)? {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {:<28} {} ({})  [{}, {}]",
                    marker, reserve.id, reserve.name, reserve.country,
                    reserve.latitude, reserve.longitude
                );
            }
        }

        Command::Show { id, json } => {
            let detail = catalog
                .detail(&id)
                .ok_or_else(|| AppError::NotFound(format!("reserve '{id}'")))?;

            if json {
                println!("{}", serde_json::to_string_pretty(detail)
                    .expect("catalog serializes"));
                return Ok(());
            }
            let favorite = prefs.favorites.is_favorite(detail.reserve_id)?;
            println!("{} ({})", detail.name, detail.country);
            if favorite {
                println!("Favorite: yes");
            }
            println!();
            println!("{}", detail.intro);
            for card in detail.fact_cards {
                println!();
                println!("{} {}", card.emoji, card.title);
                println!("{}", card.description);
            }
        }

        Command::Facts => {
            for fact in catalog.facts() {
                println!("{}", fact.title);
                println!("{}", fact.description);
                println!();
            }
        }

        Command::Fav { action } => match action {
            FavAction::List => {
                for reserve in prefs.favorites.reserves(&catalog)? {
                    println!("{:<28} {} ({})", reserve.id, reserve.name, reserve.country);
                }
            }
            FavAction::Add { id } => {
                require_reserve(&catalog, &id)?;
                prefs.favorites.add(&id)?;
            }
            FavAction::Remove { id } => {
                prefs.favorites.remove(&id)?;
            }
            FavAction::Toggle { id } => {
                require_reserve(&catalog, &id)?;
                let now_favorite = prefs.favorites.toggle(&id)?;
                println!("{}", if now_favorite { "added" } else { "removed" });
            }
            FavAction::Count => {
                println!("{}", prefs.favorites.count()?);
            }
            FavAction::Clear => {
                prefs.favorites.clear()?;
            }
        },

        Command::Profile { action } => match action {
            ProfileAction::Show => {
                let profile = prefs.profile.get()?;
                println!("Name:   {}", profile.display_name);
                println!("Avatar: {}", profile.avatar_id);
            }
            ProfileAction::Set { name, avatar } => {
                prefs.profile.save(name.as_deref(), avatar)?;
                let profile = prefs.profile.get()?;
                println!("Name:   {}", profile.display_name);
                println!("Avatar: {}", profile.avatar_id);
            }
            ProfileAction::Clear => {
                prefs.profile.clear()?;
            }
        },

        Command::Settings { action } => match action {
            SettingsAction::List => {
                for toggle in Toggle::ALL {
                    let state = if prefs.settings.get(toggle)? { "on" } else { "off" };
                    println!("{:<14} {}", toggle.label(), state);
                }
            }
            SettingsAction::Set { name, value } => {
                let toggle = toggle_from_name(&name)
                    .ok_or_else(|| AppError::NotFound(format!("setting '{name}'")))?;
                prefs.settings.set(toggle, value)?;
            }
        },

        Command::Onboarding { action } => match action {
            OnboardingAction::Status => {
                let state = if prefs.onboarding.has_completed()? {
                    "completed"
                } else {
                    "not completed"
                };
                println!("{state}");
            }
            OnboardingAction::Complete => {
                prefs.onboarding.set_completed(true)?;
            }
            OnboardingAction::Reset => {
                prefs.onboarding.set_completed(false)?;
            }
        },
    }

    Ok(())
}

fn require_reserve(catalog: &dyn CatalogSource, id: &str) -> Result<()> {
    if catalog.reserve(id).is_none() {
        return Err(AppError::NotFound(format!("reserve '{id}'")));
    }
    Ok(())
}
