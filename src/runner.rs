// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::ScrapeOptions,
    core::net,
    error::ScrapeError,
    file,
    mapping::IconMapping,
    progress::Progress,
    specs,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub icons: usize,
}

/// Fetch the configured page and extract the mapping. Nothing is written.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn scrape(
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<IconMapping, ScrapeError> {
    let url = opts.source_url();
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {url}"));
    }

    let doc = fetch(opts)?;
    specs::icons::parse_document(&doc, url, progress)
}

/// Top-level runner: fetch → extract → write. The output file is only touched
/// once extraction has succeeded.
pub fn run(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", opts.source_url()));
    }
    let doc = fetch(opts)?;
    run_document(opts, &doc, progress)
}

/// Extract an already fetched page and write it to `opts.output_path()`.
/// Nothing is written when extraction fails.
pub fn run_document(
    opts: &ScrapeOptions,
    doc: &str,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScrapeError> {
    let mapping = specs::icons::parse_document(doc, opts.source_url(), progress.as_deref_mut())?;
    let output = file::write_mapping(&opts.output_path(), &mapping)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish(&format!("Icon mapping has been saved to {}", output.display()));
    }
    Ok(RunSummary { output, icons: mapping.len() })
}

fn fetch(opts: &ScrapeOptions) -> Result<String, ScrapeError> {
    let doc = net::http_get(opts.source_url(), opts.timeout_secs).inspect_err(|e| {
        let hint = if e.is_timeout() { " (timed out)" } else { "" };
        loge!("{e}{hint}");
    })?;
    Ok(doc)
}
