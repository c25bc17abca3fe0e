//! Balade CLI - Landing page content tools.
//!
//! # Usage
//!
//! ```bash
//! # List department 75 zones
//! balade zones --department 75
//!
//! # Show the FAQ and copy of a landing page
//! balade faq lyon --service garde-chien
//! balade content paris-18e --html
//!
//! # Print the LocalBusiness JSON-LD of a zone
//! balade schema marseille
//!
//! # Write the sitemap
//! balade sitemap --output public/sitemap.xml
//!
//! # Check the registry for data problems
//! balade validate --strict
//! ```
//!
//! Generated artifacts go to stdout; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use balade_core::{Priority, ZoneKind};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "balade")]
#[command(author, version, about = "Balade landing page tools")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List zones, optionally filtered
    Zones {
        /// Department code, e.g. 75 or 2A
        #[arg(short, long)]
        department: Option<String>,

        /// Priority tier (1-4)
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Zone kind (city, arrondissement, quartier, region)
        #[arg(short, long)]
        kind: Option<ZoneKind>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one zone with its parent and children
    Show {
        /// Zone slug or ID
        zone: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the FAQ of a landing page
    Faq {
        /// Zone slug or ID
        zone: String,

        /// Service slug (default: `BALADE_DEFAULT_SERVICE`)
        #[arg(short, long)]
        service: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the long-form copy of a landing page
    Content {
        /// Zone slug or ID
        zone: String,

        /// Service slug (default: `BALADE_DEFAULT_SERVICE`)
        #[arg(short, long)]
        service: Option<String>,

        /// Render to HTML
        #[arg(long)]
        html: bool,
    },
    /// Print the LocalBusiness JSON-LD of a zone
    Schema {
        /// Zone slug or ID
        zone: String,
    },
    /// Print every generated artifact of a landing page as JSON
    Page {
        /// Zone slug or ID
        zone: String,

        /// Service slug (default: `BALADE_DEFAULT_SERVICE`)
        #[arg(short, long)]
        service: Option<String>,
    },
    /// Build the XML sitemap of all landing pages
    Sitemap {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out <lastmod>
        #[arg(long)]
        no_lastmod: bool,
    },
    /// Report data problems in the registry
    Validate {
        /// Fail when any problem is found
        #[arg(long)]
        strict: bool,
    },
}

fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "balade_cli=info,balade_core=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let registry = config.registry()?;
    let site = config.site();
    let ctx = commands::Context {
        config: &config,
        registry: &registry,
        site: &site,
    };

    match cli.command {
        Commands::Zones {
            department,
            priority,
            kind,
            json,
        } => commands::zones::list(&ctx, department.as_deref(), priority, kind, json)?,
        Commands::Show { zone, json } => commands::zones::show(&ctx, &zone, json)?,
        Commands::Faq {
            zone,
            service,
            json,
        } => commands::generate::faq(&ctx, &zone, service.as_deref(), json)?,
        Commands::Content {
            zone,
            service,
            html,
        } => commands::generate::content(&ctx, &zone, service.as_deref(), html)?,
        Commands::Schema { zone } => commands::generate::schema(&ctx, &zone)?,
        Commands::Page { zone, service } => {
            commands::generate::page(&ctx, &zone, service.as_deref())?;
        }
        Commands::Sitemap { output, no_lastmod } => {
            commands::sitemap::write(&ctx, output.as_deref(), !no_lastmod)?;
        }
        Commands::Validate { strict } => commands::zones::validate(&ctx, strict)?,
    }
    Ok(())
}
