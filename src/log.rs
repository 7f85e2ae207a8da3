// src/log.rs
//! Append-only debug log at `.store/debug.log`.
//!
//! Lines look like `[00:00:01.250][INFO] msg`. INFO and ERROR are always written;
//! DEBUG (per-row detail) only after `set_level(Level::Debug)`, which the CLI does
//! for `--trace`. All I/O is best-effort.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_DIR, LOG_FILE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Error = 2,
}

impl Level {
    fn tag(self) -> &'static str {
        match self { Level::Debug => "DEBUG", Level::Info => "INFO", Level::Error => "ERROR" }
    }
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);
static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
// Directory is created on first write, not per line.
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

pub fn set_level(level: Level) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
    level as u8 >= MIN_LEVEL.load(Ordering::Relaxed)
}

fn log_path() -> &'static Path {
    LOG_PATH.get_or_init(|| {
        let _ = fs::create_dir_all(LOG_DIR);
        Path::new(LOG_DIR).join(LOG_FILE)
    })
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn format_line(elapsed_ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.tag())
}

pub fn write_log(level: Level, msg: &str) {
    let start = *START.get_or_init(Instant::now);
    let line = format_line(start.elapsed().as_millis(), level, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path()) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging; skipped (including formatting) unless enabled.
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        if $crate::log::enabled($crate::log::Level::Debug) {
            $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
        }
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
