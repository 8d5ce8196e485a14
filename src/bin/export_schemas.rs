//! Writes JSON Schema documents for the match API bodies.
//!
//! ```text
//! cargo run --features cli --bin export_schemas -- --output schemas
//! ```

use anyhow::Context;
use clap::Parser;
use match_tracker::api::rest::{CreateMatchResponse, HealthResponse};
use match_tracker::domain::entities::Match;
use schemars::schema::RootSchema;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(about = "Export JSON schemas for the match tracker API")]
struct Args {
    /// Directory to write the schema files into.
    #[arg(short, long, default_value = "schemas")]
    output: PathBuf,
}

fn write_schema(dir: &Path, name: &str, schema: &RootSchema) -> anyhow::Result<()> {
    let path = dir.join(format!("{name}.schema.json"));
    let json = serde_json::to_string_pretty(schema)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    write_schema(&args.output, "match", &schema_for!(Match))?;
    write_schema(
        &args.output,
        "create_match_response",
        &schema_for!(CreateMatchResponse),
    )?;
    write_schema(&args.output, "health_response", &schema_for!(HealthResponse))?;
    Ok(())
}
