// src/core/mod.rs

pub mod html;
pub mod net;

pub use html::{Cell, ContentUnit, Row};
