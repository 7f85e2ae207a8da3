// src/progress.rs
use crate::core::ContentUnit;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status (and optionally a parse trace).
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called with the number of table rows found, header included.
    fn begin(&mut self, _rows: usize) {}

    /// Called for every fragment of an icon's mixed-content cell, before it is
    /// classified.
    fn fragment(&mut self, _icon: &str, _unit: &ContentUnit) {}

    /// Called at the end of a successful run.
    fn finish(&mut self, _msg: &str) {}
}
