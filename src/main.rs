//! Demo host shim for the document index view.
//!
//! Loads host props from a JSON fixture, plays them through the plugin the way
//! an embedding application would, and prints the rendered menu followed by
//! the inline detail of the selected record.
//!
//! # Event Flow
//!
//! 1. `HostUpdate` with the fixture (builds entries, selects the first one)
//! 2. `Select(id)` if `--select` is given
//! 3. `Search(query)` if `--query` is given
//! 4. `Reorder { from, to }` if `--move FROM:TO` is given
//!
//! # Usage
//!
//! ```text
//! docindex fixture.json --query "ap" --theme dark
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;

use docindex::app::Event;
use docindex::host::{DocIndexPlugin, Host, HostProps};
use docindex::pipeline::month_label;
use docindex::{Config, DetailMode, Record, ViewSettings, ViewState};

#[derive(Parser, Debug)]
#[command(name = "docindex", about = "Render a document index menu from a JSON fixture")]
struct Args {
    /// JSON file with `records`, `viewState`, `viewSettings`, ...
    fixture: PathBuf,

    /// Search text to apply after loading.
    #[arg(long)]
    query: Option<String>,

    /// Record id to select after loading.
    #[arg(long)]
    select: Option<String>,

    /// Drag an entry, as `FROM:TO` positions.
    #[arg(long = "move", value_parser = parse_move)]
    reorder: Option<(usize, usize)>,

    /// Built-in theme name (`light`, `dark`).
    #[arg(long)]
    theme: Option<String>,

    /// Custom TOML theme file.
    #[arg(long)]
    theme_file: Option<String>,

    /// Log level filter (e.g. `debug`).
    #[arg(long)]
    trace_level: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_move(value: &str) -> Result<(usize, usize), String> {
    let (from, to) = value
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got {value:?}"))?;
    let parse = |s: &str| s.trim().parse::<usize>().map_err(|e| format!("invalid position {s:?}: {e}"));
    Ok((parse(from)?, parse(to)?))
}

/// Host backed by the fixture's records.
struct FixtureHost {
    records: HashMap<String, Record>,
}

impl Host for FixtureHost {
    type View = String;

    fn request_detail_view(&mut self, mode: DetailMode, id: &str) -> String {
        self.records.get(id).map_or_else(
            || format!("{mode:?} view: record {id} not found"),
            |record| {
                format!(
                    "# {}\nid: {}\ncreated: {} ({})",
                    record.title,
                    record.id,
                    record.created_at.to_rfc3339(),
                    month_label(&record.created_at)
                )
            },
        )
    }

    fn persist_view_state(&mut self, state: &ViewState) {
        match serde_json::to_string(state) {
            Ok(json) => tracing::info!(view_state = %json, "view state persisted"),
            Err(e) => tracing::warn!(error = %e, "failed to encode view state"),
        }
    }

    fn persist_view_settings(&mut self, settings: &ViewSettings) {
        tracing::info!(?settings, "view settings persisted");
    }
}

fn main() -> docindex::Result<()> {
    let args = Args::parse();

    let config = Config {
        theme_name: args.theme,
        theme_file: args.theme_file,
        trace_level: args.trace_level,
        log_file: args.log_file,
    };
    docindex::observability::init_tracing(&config);

    let contents = std::fs::read_to_string(&args.fixture)?;
    let props: HostProps = serde_json::from_str(&contents)?;
    tracing::debug!(records = props.records.len(), fixture = ?args.fixture, "fixture loaded");

    let host = FixtureHost {
        records: props.records.iter().map(|r| (r.id.clone(), r.clone())).collect(),
    };
    let mut plugin = DocIndexPlugin::new(&config, host);

    plugin.update(&Event::HostUpdate(props))?;
    if let Some(id) = args.select {
        plugin.update(&Event::Select(id))?;
    }
    if let Some(query) = args.query {
        plugin.update(&Event::Search(query))?;
    }
    if let Some((from, to)) = args.reorder {
        plugin.update(&Event::Reorder { from, to }).map_err(|e| {
            tracing::error!(error = %e, "reorder failed");
            e
        })?;
    }

    docindex::ui::render(&plugin.view_model(), &plugin.app().theme);
    println!();
    match plugin.detail() {
        Some(detail) => println!("{detail}"),
        None => println!("(nothing selected)"),
    }

    Ok(())
}
