//! Settlemap CLI — plot settlements over administrative boundaries.
//!
//! Usage:
//!   settlemap                  (same as `settlemap plot`)
//!   settlemap plot [--substring dijk] [--output map.png]
//!   settlemap regions
//!   settlemap export [--substring dijk] [--output points.geojson]
//!   settlemap panel            (with the `panel` feature)

use clap::{Parser, Subcommand};
use geojson::GeoJson;
use settlemap::render::{render_to_file, MapView};
use settlemap::{Boundary, Config, Dataset, MapResult, QueryAdapter, SparqlClient};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "settlemap",
    version,
    about = "Plot settlements from a SPARQL endpoint over boundary polygons"
)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Defaults to `plot` with the configured values
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Commands {
    /// Fetch, filter and render the map once
    Plot {
        /// Keep settlements whose name contains this text (case-sensitive)
        #[arg(long)]
        substring: Option<String>,
        /// Seed for choosing which settlements get a name label
        #[arg(long)]
        seed: Option<u64>,
        /// GeoJSON file with boundary polygons
        #[arg(long)]
        boundary: Option<PathBuf>,
        /// Output image (.png or .svg)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the region allow-list
    Regions,
    /// Write the filtered settlements as GeoJSON points
    Export {
        /// Keep settlements whose name contains this text (case-sensitive)
        #[arg(long)]
        substring: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Open the interactive panel
    #[cfg(feature = "panel")]
    Panel,
}

impl Commands {
    fn plot_defaults() -> Self {
        Commands::Plot {
            substring: None,
            seed: None,
            boundary: None,
            output: None,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_dataset(config: &Config) -> MapResult<Dataset> {
    let client = SparqlClient::new(config.endpoint.as_str(), &config.user_agent)?;
    Dataset::fetch(&QueryAdapter::new(client), config)
}

fn cmd_plot(config: &Config) -> MapResult<()> {
    let dataset = open_dataset(config)?;
    let boundary = Boundary::load(&config.boundary_path)?;
    let layer = dataset.points(&config.substring);
    let view = MapView {
        boundary: &boundary,
        layer: &layer,
        schema: dataset.schema(),
        substring: &config.substring,
        seed: config.seed,
    };
    render_to_file(&config.output, (config.width, config.height), &view)?;
    println!(
        "Plotted {} places with '{}' in name to {}",
        layer.len(),
        config.substring,
        config.output.display()
    );
    Ok(())
}

fn cmd_regions(config: &Config) -> MapResult<()> {
    let client = SparqlClient::new(config.endpoint.as_str(), &config.user_agent)?;
    let regions = QueryAdapter::new(client).load_column(&config.region_query, &config.region_query_field)?;
    for region in regions {
        println!("{}", region);
    }
    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> MapResult<()> {
    let dataset = open_dataset(config)?;
    let layer = dataset.points(&config.substring);
    let text = GeoJson::FeatureCollection(layer.to_geojson()).to_string();
    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            println!("Exported {} places to {}", layer.len(), path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[cfg(feature = "panel")]
fn cmd_panel(config: &Config) -> MapResult<()> {
    use settlemap::panel::{run_panel, MapPanel};

    let dataset = open_dataset(config)?;
    let boundary = Boundary::load(&config.boundary_path)?;
    let panel = MapPanel::new(
        dataset,
        boundary,
        config.substring.as_str(),
        config.seed,
        (config.width, config.height),
    );
    run_panel(panel).map_err(|e| std::io::Error::other(format!("panel failed: {}", e)))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or_else(Commands::plot_defaults) {
        Commands::Plot {
            substring,
            seed,
            boundary,
            output,
        } => {
            if let Some(s) = substring {
                config.substring = s;
            }
            if let Some(s) = seed {
                config.seed = s;
            }
            if let Some(b) = boundary {
                config.boundary_path = b;
            }
            if let Some(o) = output {
                config.output = o;
            }
            cmd_plot(&config)
        }
        Commands::Regions => cmd_regions(&config),
        Commands::Export { substring, output } => {
            if let Some(s) = substring {
                config.substring = s;
            }
            cmd_export(&config, output)
        }
        #[cfg(feature = "panel")]
        Commands::Panel => cmd_panel(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
