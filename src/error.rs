// src/error.rs
use std::{io, path::PathBuf};

use crate::core::net::FetchError;

/// Every way a scrape run can fail. All of them end the run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("no <table> element found in {source_url}")]
    MissingTable { source_url: String },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}
