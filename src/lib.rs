// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod mapping;
pub mod progress;
pub mod runner;
pub mod specs;

pub use error::ScrapeError;
pub use mapping::{IconEntry, IconMapping};
