// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::error::ScrapeError;
use crate::mapping::IconMapping;

/// Write the mapping as UTF-8 JSON, 4-space indented, replacing any existing file.
/// Missing parent directories are created.
pub fn write_mapping(path: &Path, mapping: &IconMapping) -> Result<PathBuf, ScrapeError> {
    write_json(path, mapping).map_err(|source| {
        loge!("Write failed for {}: {source}", path.display());
        ScrapeError::Write { path: path.to_path_buf(), source }
    })?;
    logf!("Wrote {} icon(s) to {}", mapping.len(), path.display());
    Ok(path.to_path_buf())
}

/// Load a mapping written by [`write_mapping`].
pub fn read_mapping(path: &Path) -> Result<IconMapping, ScrapeError> {
    let read_err = |source| ScrapeError::Read { path: path.to_path_buf(), source };
    let text = fs::read_to_string(path).map_err(read_err)?;
    serde_json::from_str(&text).map_err(|e| read_err(io::Error::from(e)))
}

fn write_json(path: &Path, mapping: &IconMapping) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    mapping.serialize(&mut ser)?;
    out.write_all(b"\n")?;
    out.flush()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
