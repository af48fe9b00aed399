//! NEFRA CLI
//!
//! Command-line access to the NEFRA Connections core:
//! - Resolve paths to pages
//! - Load the featured feeds
//! - Manage locally stored user settings
//! - Search the mock directory

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use nefra_connect::config::{generate_default_config, Config};
use nefra_connect::feed::{load_featured, FeaturedContent, HttpFeedSource};
use nefra_connect::pages::{self, search, HomeView, IndustryChip, RoleChip, SearchFilter};
use nefra_connect::settings::{
    FileStore, Integration, NotificationKind, SettingsPatch, SettingsRepository, Theme,
    UserSettings,
};

#[derive(Parser)]
#[command(name = "nefra")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "NEFRA Connections command-line tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which page a path renders
    Route {
        /// Path, e.g. /search
        path: String,
    },

    /// Load the featured feeds
    Featured {
        /// Feed origin (default: from config)
        #[arg(long)]
        origin: Option<String>,
    },

    /// Manage local user settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Search the directory
    Search {
        /// Matches name or role
        query: Option<String>,
        /// Role chip (founder, investor, student)
        #[arg(short, long)]
        role: Option<RoleChip>,
        /// Industry chip (tech, finance, healthcare)
        #[arg(short, long)]
        industry: Option<IndustryChip>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print current settings
    Show,
    /// Update fields and save
    Save(SaveArgs),
    /// Forget saved settings
    Reset,
    /// Switch theme
    SetTheme { theme: Theme },
    /// Flip a notification (product, marketing, security)
    Toggle { notification: NotificationKind },
    /// Connect an account (google, linkedin)
    Connect { integration: Integration },
    /// Disconnect an account (google, linkedin)
    Disconnect { integration: Integration },
}

#[derive(Args)]
pub struct SaveArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    theme: Option<Theme>,
    #[arg(long)]
    timezone: Option<String>,
    #[arg(long)]
    language: Option<String>,
    #[arg(long)]
    public: Option<bool>,
    #[arg(long)]
    two_factor: Option<bool>,
}

impl From<SaveArgs> for SettingsPatch {
    fn from(args: SaveArgs) -> Self {
        SettingsPatch {
            full_name: args.name,
            email: args.email,
            theme: args.theme,
            timezone: args.timezone,
            language: args.language,
            profile_public: args.public,
            two_factor: args.two_factor,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    nefra_connect::logging::init(&config.logging);

    let json = cli.format == "json";

    match cli.command {
        Commands::Route { path } => {
            let page = pages::page_for(&path);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("{} -> {:?} ({})", path, page, page.title());
                for item in pages::nav_items(&path) {
                    let marker = if item.active { "*" } else { " " };
                    println!(" {} {:<16} {}", marker, item.label, item.route.path());
                }
            }
        }

        Commands::Featured { origin } => {
            let origin = origin.unwrap_or(config.feed.origin);
            let source = HttpFeedSource::new(&origin)?;
            let content = load_featured(&source).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&content)?);
            } else {
                print_featured(&origin, &content);
            }
        }

        Commands::Settings { action } => {
            let store = FileStore::in_data_dir(&config.storage.data_path());
            tracing::debug!(path = ?store.path(), "Using settings store");
            let repo = SettingsRepository::new(store);
            run_settings(&repo, action, json)?;
        }

        Commands::Search {
            query,
            role,
            industry,
        } => {
            let filter = SearchFilter {
                query: query.unwrap_or_default(),
                role,
                industry,
            };
            let results = filter.apply(search::directory());

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No results found. Try adjusting your filters.");
            } else {
                println!(
                    "{:<16} {:<18} {:<16} {:<12} {}",
                    "Name", "Role", "Company", "Industry", "Verified"
                );
                println!("{}", "-".repeat(72));
                for entry in results {
                    println!(
                        "{:<16} {:<18} {:<16} {:<12} {}",
                        entry.name,
                        entry.role,
                        entry.company,
                        entry.industry,
                        if entry.verified { "yes" } else { "" }
                    );
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn run_settings(
    repo: &SettingsRepository<FileStore>,
    action: SettingsCommand,
    json: bool,
) -> anyhow::Result<()> {
    let mut settings = repo.load();

    match action {
        SettingsCommand::Show => {
            print_settings(&settings, json)?;
            return Ok(());
        }
        SettingsCommand::Reset => {
            let settings = repo.reset()?;
            println!("Settings reset to defaults");
            print_settings(&settings, json)?;
            return Ok(());
        }
        SettingsCommand::Save(args) => {
            let patch = SettingsPatch::from(args);
            if patch.is_empty() {
                tracing::info!("No fields given, saving current settings as-is");
            }
            settings.apply(patch);
        }
        SettingsCommand::SetTheme { theme } => settings.theme = theme,
        SettingsCommand::Toggle { notification } => {
            let on = settings.toggle_notification(notification);
            println!("{:?} notifications {}", notification, if on { "on" } else { "off" });
        }
        SettingsCommand::Connect { integration } => settings.connect(integration),
        SettingsCommand::Disconnect { integration } => settings.disconnect(integration),
    }

    let saved_at = repo.save(&settings)?;
    println!("Saved at {}", saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
    Ok(())
}

fn print_settings(settings: &UserSettings, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }

    let on_off = |b: bool| if b { "on" } else { "off" };
    println!("Name:          {}", settings.full_name);
    println!("Email:         {}", settings.email);
    println!("Theme:         {}", settings.theme);
    println!("Timezone:      {}", settings.timezone);
    println!("Language:      {}", settings.language);
    println!("Public:        {}", on_off(settings.profile_public));
    println!("Two-factor:    {}", on_off(settings.two_factor));
    println!(
        "Integrations:  {}, {}",
        settings.integration_badge(Integration::Google),
        settings.integration_badge(Integration::LinkedIn)
    );
    println!(
        "Notifications: product {}, marketing {}, security {}",
        on_off(settings.notifications.product),
        on_off(settings.notifications.marketing),
        on_off(settings.notifications.security)
    );
    Ok(())
}

fn print_featured(origin: &str, content: &FeaturedContent) {
    if content.is_empty() {
        println!("No featured content from {}", origin);
        return;
    }

    let view = HomeView::build(content);

    println!("Recent Matches");
    println!("{}", "-".repeat(60));
    for conn in view.feature.iter().chain(view.sidebar.iter()) {
        println!(
            "{:<20} {:<18} {}{}",
            conn.name,
            conn.role,
            conn.company,
            if conn.verified { " ✓" } else { "" }
        );
    }
    if view.hero.is_none() {
        println!("(hero cards hidden: fewer than two connections)");
    }

    println!();
    println!("Success Stories");
    println!("{}", "-".repeat(60));
    for tile in &view.stories {
        println!(
            "{:<24} {:<18} {} ({})",
            tile.story.title, tile.story.metric, tile.story.author, tile.story.company
        );
    }
}
