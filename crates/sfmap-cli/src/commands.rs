//! Command handlers for the CLI.
//!
//! Each handler loads the document (from the network or a local file), runs
//! it through `sfmap-core` and reports to stdout.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use sfmap_core::{
    build_categorized_output, find_group_by_type, AppConfig, CategorizedOutput, Category, Document,
};
use sfmap_fetch::MapDataClient;

/// Downloads the map data and writes the categorized files.
///
/// When `dry_run` is `true` the counts are printed and nothing is written.
///
/// # Errors
///
/// Returns an error if the download fails, the document is `null`, or the
/// files cannot be written.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    out_dir: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let raw = fetch_raw(config).await?;
    let output = categorize(&raw, config)?;
    print_summary(&output);

    if dry_run {
        println!("dry-run: no files written");
        return Ok(());
    }

    write(&output, out_dir.unwrap_or(&config.data_dir))
}

/// Same pipeline as [`run_fetch`], reading the document from `input`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the document is
/// `null`, or the output cannot be written.
pub(crate) fn run_parse(
    config: &AppConfig,
    input: &Path,
    out_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let raw = read_raw(input)?;
    let output = categorize(&raw, config)?;
    print_summary(&output);
    write(&output, out_dir.unwrap_or(&config.data_dir))
}

/// Prints the raw JSON of the first group whose `type` is `category_type`.
///
/// # Errors
///
/// Returns an error if no such group exists, so the process exits non-zero.
pub(crate) async fn run_group(
    config: &AppConfig,
    category_type: &str,
    input: Option<&Path>,
) -> anyhow::Result<()> {
    let raw = load_raw(config, input).await?;
    let doc = Document::from_json(&raw).context("map data document is null")?;
    let group = find_group_by_type(category_type, &doc)
        .with_context(|| format!("no group with type '{category_type}'"))?;

    println!("{}", serde_json::to_string_pretty(group.raw())?);
    Ok(())
}

/// Lists the top-level groups of the document.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or is `null`.
pub(crate) async fn run_tabs(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let raw = load_raw(config, input).await?;
    let doc = Document::from_json(&raw).context("map data document is null")?;

    for line in tab_lines(&doc) {
        println!("{line}");
    }
    Ok(())
}

fn tab_lines(doc: &Document) -> Vec<String> {
    doc.groups
        .iter()
        .map(|g| {
            format!(
                "tabId={} type={} name={}",
                g.tab_id.as_deref().unwrap_or("-"),
                g.category_type.as_deref().unwrap_or("-"),
                g.display_name.as_deref().unwrap_or("-"),
            )
        })
        .collect()
}

async fn load_raw(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<Value> {
    match input {
        Some(path) => read_raw(path),
        None => fetch_raw(config).await,
    }
}

async fn fetch_raw(config: &AppConfig) -> anyhow::Result<Value> {
    let client = MapDataClient::new(config).context("failed to build map data client")?;
    tracing::info!(url = %client.source_url(), "fetching map data");
    client
        .fetch_document()
        .await
        .context("failed to fetch map data")
}

fn read_raw(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn categorize(raw: &Value, config: &AppConfig) -> anyhow::Result<CategorizedOutput> {
    let doc = Document::from_json(raw);
    Ok(build_categorized_output(doc.as_ref(), &config.tab_ids)?)
}

fn write(output: &CategorizedOutput, dir: &Path) -> anyhow::Result<()> {
    let written = sfmap_store::write_output(dir, output)?;
    for path in written.paths() {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn print_summary(output: &CategorizedOutput) {
    println!(
        "version {} (build {})",
        output.schema_version, output.build_identifier
    );
    for category in Category::ALL {
        println!(
            "  {:<13}{:>6}",
            category.slug(),
            output.category(category).len()
        );
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
