// src/config/consts.rs

// Net config
pub const FILES_URL: &str = "https://github.com/vscode-icons/vscode-icons/wiki/ListOfFiles";
pub const FOLDERS_URL: &str = "https://github.com/vscode-icons/vscode-icons/wiki/ListOfFolders";
pub const USER_AGENT: &str = concat!("icon_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Export
pub const DEFAULT_OUT_DIR: &str = "resources";
pub const FILES_MAPPING_FILE: &str = "icons_mapping.json";
pub const FOLDERS_MAPPING_FILE: &str = "folders_icons_mapping.json";
pub const JSON_INDENT: &[u8] = b"    ";

// Scrape
pub const EXTENSION_SEP: &str = ", ";

// Debug log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
