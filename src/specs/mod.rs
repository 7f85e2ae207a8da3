// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction rules. A spec knows *where the data lives in the HTML*
//! of one page and how to turn it into a typed result.
//!
//! ## What lives here
//! - **Pure parsing** of an already fetched document (no I/O).
//! - **Classification rules** for the page's cells.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), writing (`file`), orchestration (`runner`).
//!
//! ## Typical call chain
//! ```text
//! CLI → runner::run → core::net::http_get
//!                   ↘ specs::icons::parse_document → file::write_mapping
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured fixtures (saved HTML).
pub mod icons;
