// src/core/html.rs
//! Table reading on top of `scraper`.
//!
//! Turns the first `<table>` of a document into rows of [`Cell`]s. Each cell keeps
//! its full text (for name columns) and its direct children classified as
//! [`ContentUnit`]s (for mixed-content columns).

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use scraper::node::Element;

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| sel("td"));

fn sel(css: &str) -> Selector {
    // Only ever called with the literals above.
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

/// One fragment of a cell's mixed content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentUnit {
    /// Bare text between elements, untrimmed.
    Text(String),
    /// `<b>` / `<strong>` text content.
    Bold(String),
    /// `<code>` text content.
    Code(String),
}

impl ContentUnit {
    pub fn raw(&self) -> &str {
        match self {
            ContentUnit::Text(s) | ContentUnit::Bold(s) | ContentUnit::Code(s) => s,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// All descendant text, concatenated.
    pub text: String,
    /// Direct children in document order; unrecognised elements are dropped.
    pub units: Vec<ContentUnit>,
}

pub type Row = Vec<Cell>;

/// Rows of the first `<table>` anywhere in `doc`, header row included.
/// `None` when the document has no table at all.
pub fn first_table_rows(doc: &Html) -> Option<Vec<Row>> {
    let table = doc.select(&TABLE).next()?;
    let rows = table
        .select(&TR)
        .map(|tr| tr.select(&TD).map(read_cell).collect())
        .collect();
    Some(rows)
}

pub fn read_cell(td: ElementRef<'_>) -> Cell {
    let units = td
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(t) => Some(ContentUnit::Text((**t).to_string())),
            Node::Element(el) => ElementRef::wrap(child).and_then(|e| classify(el, e)),
            _ => None,
        })
        .collect();

    Cell { text: element_text(td), units }
}

fn classify(el: &Element, node: ElementRef<'_>) -> Option<ContentUnit> {
    match el.name() {
        "b" | "strong" => Some(ContentUnit::Bold(element_text(node))),
        "code" => Some(ContentUnit::Code(element_text(node))),
        _ => None,
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}
