// src/mapping.rs
//! Icon mapping data model.
//!
//! `IconMapping` is keyed by icon name and serializes as a plain JSON object:
//!
//! ```text
//! { "<icon>": { "extensions": [..], "filenames": [..], "languageIds": [..] }, .. }
//! ```
//!
//! Lists are accumulated as-is during extraction and deduplicated once at the end
//! through a `HashSet`, so element order inside a list carries no meaning.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconEntry {
    pub extensions: Vec<String>,
    pub filenames: Vec<String>,
    pub language_ids: Vec<String>,
}

impl IconEntry {
    pub fn dedup(&mut self) {
        dedup_unordered(&mut self.extensions);
        dedup_unordered(&mut self.filenames);
        dedup_unordered(&mut self.language_ids);
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.filenames.is_empty() && self.language_ids.is_empty()
    }
}

fn dedup_unordered(v: &mut Vec<String>) {
    let set: HashSet<String> = v.drain(..).collect();
    v.extend(set);
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconMapping(HashMap<String, IconEntry>);

impl IconMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `name`, created empty on first use.
    pub fn entry(&mut self, name: &str) -> &mut IconEntry {
        self.0.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn dedup(&mut self) {
        self.0.values_mut().for_each(IconEntry::dedup);
    }

    /* ---------------- Lookup ---------------- */

    /// Icon whose language ids contain `id` (exact match).
    pub fn icon_for_language_id(&self, id: &str) -> Option<&str> {
        self.smallest_match(|e| e.language_ids.iter().any(|l| l == id))
    }

    /// Resolve a file or folder name: a filename hit beats an extension hit.
    /// Matching ignores case; the extension is the text after the last dot.
    pub fn icon_for_name(&self, name: &str) -> Option<&str> {
        let base = name.rsplit(['/', '\\']).next().unwrap_or(name).to_lowercase();
        if base.is_empty() {
            return None;
        }

        if let Some(icon) = self.smallest_match(|e| e.filenames.iter().any(|f| f.to_lowercase() == base)) {
            return Some(icon);
        }

        let ext = base.rsplit_once('.').map(|(_, ext)| ext).filter(|ext| !ext.is_empty())?;
        self.smallest_match(|e| e.extensions.iter().any(|x| x.to_lowercase() == ext))
    }

    // Ties go to the smallest icon name; HashMap order is not stable.
    fn smallest_match(&self, pred: impl Fn(&IconEntry) -> bool) -> Option<&str> {
        self.iter()
            .filter(|&(_, e)| pred(e))
            .map(|(name, _)| name)
            .min()
    }
}

impl FromIterator<(String, IconEntry)> for IconMapping {
    fn from_iter<I: IntoIterator<Item = (String, IconEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
