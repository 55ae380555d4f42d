//! Print the OpenAPI document as JSON.
//!
//! # Examples
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin openapi-dump -- --output openapi.json
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use users_api::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Write the service's OpenAPI document as pretty-printed JSON",
    version
)]
struct CliArgs {
    /// Destination file. Prints to stdout when omitted.
    #[arg(long, short, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("serialise OpenAPI document")?;

    match args.output {
        Some(path) => std::fs::write(&path, document + "\n")
            .wrap_err_with(|| format!("write {}", path.display()))?,
        None => println!("{document}"),
    }
    Ok(())
}
