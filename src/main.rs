use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

use storefront::core::codec;
use storefront::core::config::{self, CliOverrides, ResolvedConfig};
use storefront::core::page::Page;
use storefront::core::resolver::{PageResolver, UnknownRoutePolicy};
use storefront::core::route::RouteState;
use storefront::tui;

#[derive(Parser)]
#[command(name = "storefront", about = "Terminal shell for the study-material storefront")]
struct Args {
    /// Location to open, e.g. "#products?category=NEET"
    #[arg(short, long, global = true)]
    location: Option<String>,

    /// What to show for addresses that name no known page
    #[arg(short, long, value_enum, global = true)]
    unknown_route: Option<UnknownRoutePolicy>,

    /// Log file (default storefront.log, or STOREFRONT_LOG_FILE)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the route state a location decodes to (leading `#` optional)
    Decode { fragment: String },
    /// Print the fragment for a page and key=value params
    Encode {
        page: String,
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Print the view a location resolves to (leading `#` optional)
    Resolve { fragment: String },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Log everything until the configured level is known
    init_logging(&config::log_file_path(args.log_file.as_deref()));

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("{e}; using defaults");
        log::warn!("{e}; using defaults");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            location: args.location.clone(),
            unknown_route: args.unknown_route,
        },
    );

    log::set_max_level(resolved.log_level);
    log::info!("Storefront starting up at {:?}", resolved.start_location);

    match args.command {
        None => tui::run(resolved),
        Some(command) => run_command(command, &resolved),
    }
}

fn init_logging(path: &Path) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
}

fn run_command(command: Command, config: &ResolvedConfig) -> std::io::Result<()> {
    let output = match command {
        Command::Decode { fragment } => serde_json::to_string_pretty(&codec::from_href(&fragment)),
        Command::Encode { page, params } => {
            let route = RouteState::new(Page::parse(&page), params.into_iter().collect());
            Ok(codec::href(&route))
        }
        Command::Resolve { fragment } => {
            let resolver = PageResolver::new(config.unknown_route);
            serde_json::to_string_pretty(&resolver.resolve(&codec::from_href(&fragment)))
        }
    }
    .map_err(std::io::Error::other)?;

    println!("{}", output);
    Ok(())
}
