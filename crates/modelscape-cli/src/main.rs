//! modelscape binary.
//!
//! Lays out a model catalog on a timeline, annotates text with glossary
//! terms and model cross-links, and answers catalog queries. Every command
//! prints pretty JSON to stdout; logs go to stderr.
//!
//! Usage:
//!   modelscape layout --entities models.json [--config timeline.ron] [--width 1200]
//!   modelscape annotate --glossary glossary.csv [--entities models.json --current 7] [TEXT]
//!   modelscape link --entities models.json [--current 7] [TEXT]
//!   modelscape stats --entities models.json
//!   modelscape list --entities models.json [--org Google] [--sort oldest]
//!   modelscape datasets [--entities models.json] [TEXT]
//!
//! Text arguments default to stdin when omitted.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};

use modelscape_annotate::extract_datasets;
use modelscape_cli::{Query, SortOrder, commands, load_entities, load_glossary};
use modelscape_timeline::{DEFAULT_VIEWPORT_WIDTH, DateIndex, TimelineConfig, is_positive};
use modelscape_types::{Entity, EntityId};

#[derive(Parser, Debug)]
#[command(name = "modelscape")]
#[command(about = "Timeline layout and text annotation for a model catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute marker positions, label levels, era bands and year ticks
    Layout {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Timeline config (RON); built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Viewport width the labels are measured against
        #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH, value_parser = parse_width)]
        width: f64,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Split text into plain and glossary spans
    Annotate {
        /// Glossary CSV (term,definition with a header row)
        #[arg(long)]
        glossary: PathBuf,

        /// Also cross-link entity names from this catalog
        #[arg(long)]
        entities: Option<PathBuf>,

        /// Entity being viewed; never linked to itself
        #[arg(long, requires = "entities")]
        current: Option<String>,

        /// Text to annotate; read from stdin when omitted
        text: Option<String>,
    },

    /// Split text into plain spans and links to other entities
    Link {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Entity being viewed; never linked to itself
        #[arg(long)]
        current: Option<String>,

        /// Text to link; read from stdin when omitted
        text: Option<String>,
    },

    /// Catalog totals, year range, and the distinct orgs and categories
    Stats {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Filtered, date-sorted entities
    List {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Known dataset names, per entity or in free text
    Datasets {
        /// Report each entity's `data_sources` instead of free text
        #[arg(long)]
        entities: Option<PathBuf>,

        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Entity catalog (JSON array)
    #[arg(long)]
    entities: PathBuf,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Keep entities from this organization
    #[arg(long)]
    org: Option<String>,

    /// Keep entities in this category
    #[arg(long)]
    category: Option<String>,

    /// Case-insensitive search across the searchable fields
    #[arg(long)]
    search: Option<String>,

    #[arg(long, value_enum, default_value_t = SortOrder::Newest)]
    sort: SortOrder,
}

impl From<FilterArgs> for Query {
    fn from(args: FilterArgs) -> Self {
        Query {
            org: args.org,
            category: args.category,
            search: args.search,
            sort: args.sort,
        }
    }
}

fn main() -> Result<()> {
    // Logs to stderr; stdout carries the JSON result.
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Layout {
            catalog,
            config,
            width,
            filter,
        } => {
            let entities = entities(&catalog.entities)?;
            let config = match config {
                Some(path) => TimelineConfig::load(&path)
                    .with_context(|| format!("loading timeline config {}", path.display()))?,
                None => TimelineConfig::default(),
            };
            let result = commands::layout(&entities, config, &filter.into(), width);
            tracing::info!(
                markers = result.markers.len(),
                track_height = result.track_height,
                "layout complete"
            );
            print_json(&result)
        }
        Command::Annotate {
            glossary,
            entities: entities_path,
            current,
            text,
        } => {
            let glossary = load_glossary(&glossary)
                .with_context(|| format!("loading glossary {}", glossary.display()))?;
            let catalog = entities_path.as_deref().map(entities).transpose()?;
            let current = current.map(EntityId::new);
            let text = text_or_stdin(text)?;
            print_json(&commands::annotate(
                &text,
                &glossary,
                catalog.as_deref(),
                current.as_ref(),
            ))
        }
        Command::Link {
            catalog,
            current,
            text,
        } => {
            let entities = entities(&catalog.entities)?;
            let current = current.map(EntityId::new);
            let text = text_or_stdin(text)?;
            print_json(&commands::link(&text, &entities, current.as_ref()))
        }
        Command::Stats { catalog } => {
            let entities = entities(&catalog.entities)?;
            print_json(&commands::stats(&entities))
        }
        Command::List { catalog, filter } => {
            let entities = entities(&catalog.entities)?;
            print_json(&Query::from(filter).apply(&entities, &DateIndex::default()))
        }
        Command::Datasets {
            entities: Some(path),
            ..
        } => {
            let entities = entities(&path)?;
            print_json(&commands::datasets(&entities))
        }
        Command::Datasets { entities: None, text } => {
            let text = text_or_stdin(text)?;
            print_json(&extract_datasets(&text))
        }
    }
}

fn parse_width(raw: &str) -> std::result::Result<f64, String> {
    let width: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if is_positive(width) {
        Ok(width)
    } else {
        Err(format!("width must be a positive, finite number, got {raw}"))
    }
}

fn entities(path: &Path) -> Result<Vec<Entity>> {
    load_entities(path).with_context(|| format!("loading entities {}", path.display()))
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
