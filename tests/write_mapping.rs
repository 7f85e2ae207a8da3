// tests/write_mapping.rs
use std::fs;
use std::path::PathBuf;

use icon_scrape::config::options::ScrapeOptions;
use icon_scrape::file::{read_mapping, write_mapping};
use icon_scrape::runner;
use icon_scrape::specs::icons::parse_document;
use icon_scrape::ScrapeError;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("icon_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> icon_scrape::IconMapping {
    let html = "<table><tr><th>a</th><th>b</th></tr>\
                <tr><td>Python</td><td>py, pyc, <b>Makefile</b>, <code>python</code></td></tr>\
                <tr><td>Rust</td><td>rs</td></tr></table>";
    parse_document(html, "inline", None).unwrap()
}

#[test]
fn writes_four_space_indented_json_into_new_dirs() {
    let dir = tmp_dir("indent");
    let path = dir.join("resources").join("media").join("icons_mapping.json");

    let written = write_mapping(&path, &sample()).unwrap();
    assert_eq!(written, path);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \""));
    assert!(text.contains("\n        \"extensions\": ["));
    assert!(text.contains("\"languageIds\""));
    assert!(text.ends_with("}\n"));
}

#[test]
fn written_file_reads_back_equal() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("icons_mapping.json");
    let m = sample();
    write_mapping(&path, &m).unwrap();
    assert_eq!(read_mapping(&path).unwrap(), m);
}

#[test]
fn output_is_replaced_not_merged() {
    let dir = tmp_dir("replace");
    let path = dir.join("icons_mapping.json");
    fs::write(&path, r#"{"Stale": {"extensions": ["old"], "filenames": [], "languageIds": []}}"#).unwrap();

    write_mapping(&path, &sample()).unwrap();
    let m = read_mapping(&path).unwrap();
    assert!(m.get("Stale").is_none());
    assert_eq!(m.len(), 2);
}

#[test]
fn unwritable_destination_is_write_error() {
    let dir = tmp_dir("unwritable");
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, "file").unwrap();

    let err = write_mapping(&blocker.join("icons_mapping.json"), &sample()).unwrap_err();
    assert!(matches!(err, ScrapeError::Write { .. }));
}

#[test]
fn failed_fetch_writes_nothing() {
    let dir = tmp_dir("fetch_fail");
    let out = dir.join("icons_mapping.json");

    let mut opts = ScrapeOptions::default();
    opts.set_source_url("not a url");
    opts.set_output_path(out.to_str().unwrap());
    opts.timeout_secs = 5;

    let err = runner::run(&opts, None).unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch(_)));
    assert!(!out.exists());
}

#[test]
fn page_without_table_writes_nothing() {
    let dir = tmp_dir("no_table");
    let out = dir.join("resources").join("icons_mapping.json");

    let mut opts = ScrapeOptions::default();
    opts.set_output_path(out.to_str().unwrap());

    let err = runner::run_document(&opts, include_str!("fixtures/no_table.html"), None).unwrap_err();
    assert!(matches!(err, ScrapeError::MissingTable { .. }));
    assert!(!out.exists());
    assert!(!dir.join("resources").exists());
}

#[test]
fn fetched_page_is_extracted_and_written() {
    let dir = tmp_dir("run_document");
    let out = dir.join("icons_mapping.json");

    let mut opts = ScrapeOptions::default();
    opts.set_output_path(out.to_str().unwrap());

    let summary = runner::run_document(&opts, include_str!("fixtures/list_of_files.html"), None).unwrap();
    assert_eq!(summary.output, out);
    assert_eq!(summary.icons, 4);
    assert_eq!(read_mapping(&out).unwrap().len(), 4);
}

#[test]
fn lookup_on_loaded_mapping() {
    let dir = tmp_dir("lookup");
    let path = dir.join("icons_mapping.json");
    write_mapping(&path, &sample()).unwrap();

    let m = read_mapping(&path).unwrap();
    assert_eq!(m.icon_for_name("makefile"), Some("Python"));
    assert_eq!(m.icon_for_name("src/main.rs"), Some("Rust"));
    assert_eq!(m.icon_for_language_id("python"), Some("Python"));
    assert_eq!(m.icon_for_name("README"), None);
}

#[test]
fn missing_mapping_file_is_read_error() {
    let dir = tmp_dir("read_missing");
    let err = read_mapping(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, ScrapeError::Read { .. }));
}
