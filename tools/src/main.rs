//! case-runner: writes the cost-aware case dataset with the fixed
//! run constants and prints a short preview.
//!
//! Usage:
//!   case-runner
//!   RUST_LOG=debug case-runner

use anyhow::{Context, Result};
use casegen_core::{
    config::GeneratorConfig,
    generator::generate_dataset,
    summary::{render_preview, DatasetSummary, PREVIEW_ROWS},
    writer::write_csv_file,
};

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::default();
    config.validate().context("invalid generator configuration")?;
    log::info!("config: {}", serde_json::to_string(&config)?);

    let cases = generate_dataset(&config).context("case generation failed")?;
    write_csv_file(&config.output_path, &cases)
        .with_context(|| format!("failed to write dataset to {}", config.output_path))?;

    println!("Dataset generated: {}", config.output_path);
    println!("{}", render_preview(&cases, PREVIEW_ROWS));

    let summary = DatasetSummary::from_records(&cases);
    log::info!("summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
