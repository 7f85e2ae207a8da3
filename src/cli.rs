// src/cli.rs
use std::error::Error;

use crate::config::options::{ListKind, ScrapeOptions};
use crate::core::ContentUnit;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

pub type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(ScrapeOptions),
    Help,
}

pub const HELP: &str = include_str!("cli_help.txt");

/// Prints status lines to stdout; with `trace`, every parsed fragment as well.
pub struct ConsoleProgress {
    pub trace: bool,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        if self.trace { println!("{msg}"); }
    }
    fn begin(&mut self, rows: usize) {
        if self.trace { println!("Table has {rows} row(s), header included"); }
    }
    fn fragment(&mut self, icon: &str, unit: &ContentUnit) {
        if self.trace { println!("{icon}: {:?}", unit.raw()); }
    }
    fn finish(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run(opts: &ScrapeOptions) -> Result<RunSummary, ScrapeError> {
    if opts.trace {
        crate::log::set_level(crate::log::Level::Debug);
    }
    let mut progress = ConsoleProgress { trace: opts.trace };
    let summary = runner::run(opts, Some(&mut progress))?;
    println!("{} icon(s) written", summary.icons);
    Ok(summary)
}

pub fn parse_args<I>(args: I) -> CliResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = ScrapeOptions::default();
    let mut url: Option<String> = None;
    let mut out: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--url" => url = Some(args.next().ok_or("Missing value for --url")?),
            "-o" | "--out" => out = Some(args.next().ok_or("Missing output path")?),
            "--folders" => opts.kind = ListKind::Folders,
            "--files" => opts.kind = ListKind::Files,
            "--timeout" => {
                let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if v == 0 { return Err("Timeout must be at least 1 second".into()); }
                opts.timeout_secs = v; }
            "--trace" => opts.trace = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    // Applied last so --folders does not depend on flag order.
    if let Some(u) = url { opts.set_source_url(&u); }
    if let Some(o) = out { opts.set_output_path(&o); }
    Ok(Command::Run(opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> CliResult<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn opts(args: &[&str]) -> ScrapeOptions {
        match parse(args).unwrap() {
            Command::Run(o) => o,
            Command::Help => panic!("expected Run"),
        }
    }

    #[test]
    fn no_args_is_default_run() {
        assert_eq!(opts(&[]), ScrapeOptions::default());
    }

    #[test]
    fn overrides_and_kind() {
        let o = opts(&["-o", "media/out.json", "--url", "http://localhost/wiki", "--folders", "--trace"]);
        assert_eq!(o.kind, ListKind::Folders);
        assert_eq!(o.source_url(), "http://localhost/wiki");
        assert_eq!(o.output_path(), PathBuf::from("media/out.json"));
        assert!(o.trace);
    }

    #[test]
    fn bad_args_are_errors() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--url"]).is_err());
        assert!(parse(&["--timeout", "abc"]).is_err());
        assert!(parse(&["--timeout", "0"]).is_err());
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--trace", "-h", "--bogus"]).unwrap(), Command::Help);
    }
}
