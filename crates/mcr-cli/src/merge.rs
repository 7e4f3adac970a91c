//! `mcr merge` handler.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use mcr_core::{load_gen_settings, Variant};
use mcr_gen::HttpGenerator;
use mcr_pipeline::{MergeConfig, MergeEngine};

/// Read a JSON array of variants, run one merge, and print the canonical
/// record to stdout. Generation failures never make this exit non-zero —
/// the fallback record is still printed; only I/O, config, and empty-input
/// errors are fatal.
pub(crate) async fn run_merge(input: &Path, pretty: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading variants from {}", input.display()))?;
    let variants: Vec<Variant> =
        serde_json::from_str(&raw).context("parsing variants JSON array")?;
    anyhow::ensure!(
        !variants.is_empty(),
        "input file contains no variants; at least one is required"
    );

    let settings = load_gen_settings().context("loading generation settings")?;
    let generator = HttpGenerator::new(&settings).context("building generation client")?;
    let engine = MergeEngine::new(Arc::new(generator), MergeConfig::from(&settings));

    tracing::info!(
        variants = variants.len(),
        contact = %variants[0].contact_data.display_name,
        "merging contact variants"
    );
    let merged = engine.merge(&variants).await?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&merged)?
    } else {
        serde_json::to_string(&merged)?
    };
    println!("{rendered}");
    Ok(())
}
