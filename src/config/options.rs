// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Which wiki list to scrape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListKind {
    #[default]
    Files,
    Folders,
}

impl ListKind {
    pub fn default_url(&self) -> &'static str {
        match self { ListKind::Files => FILES_URL, ListKind::Folders => FOLDERS_URL }
    }
    pub fn default_file(&self) -> &'static str {
        match self { ListKind::Files => FILES_MAPPING_FILE, ListKind::Folders => FOLDERS_MAPPING_FILE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub kind: ListKind,
    source_url: Option<String>,      // overrides kind's default URL
    output_path: Option<PathBuf>,    // overrides kind's default output file
    pub timeout_secs: u64,
    pub trace: bool,                 // report every content fragment
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            kind: ListKind::Files,
            source_url: None,
            output_path: None,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            trace: false,
        }
    }
}

impl ScrapeOptions {
    pub fn for_kind(kind: ListKind) -> Self {
        Self { kind, ..Self::default() }
    }

    pub fn source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or(self.kind.default_url())
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR).join(self.kind.default_file()),
        }
    }

    /// Blank input clears the override.
    pub fn set_source_url(&mut self, url: &str) {
        let url = url.trim();
        self.source_url = (!url.is_empty()).then(|| url.to_string());
    }

    /// Blank input clears the override.
    pub fn set_output_path(&mut self, text: &str) {
        let s = text.trim();
        self.output_path = (!s.is_empty()).then(|| PathBuf::from(s));
    }
}
