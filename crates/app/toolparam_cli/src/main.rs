// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::Read;
use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use toolparam_core::{MapperConfig, SchemaMapper};
use toolparam_mcp::render::render_listing;

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::List {
            input,
            format,
            max_depth,
        } => {
            let document = read_input(input.as_deref())?;

            let mut config = MapperConfig::from_env();
            if let Some(max_depth) = max_depth {
                config = config.with_max_depth(*max_depth);
            }
            let mapper = SchemaMapper::new(config);

            let listings = toolparam_mcp::list_tools(&document, &mapper)?;
            log::info!("Listed {} tool(s)", listings.len());

            match format {
                OutputFormat::Text => print!("{}", render_listing(&listings)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
            }
        }
    }

    Ok(())
}

/// Read the document from `path`, or stdin when absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| Error::Custom(format!("Failed to read {}: {e}", path.display()))),
        _ => {
            let mut document = String::new();
            std::io::stdin().read_to_string(&mut document)?;
            Ok(document)
        }
    }
}
