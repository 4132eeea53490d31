//! `chordsheet` - annotate a chord sheet file or stdin.
//!
//! Usage: chordsheet [--format html|json|sections|chords] [PATH]

use std::path::PathBuf;

use chordsheet::config::{Config, OutputFormat};
use chordsheet::error::{Error, Result};
use chordsheet::{annotate, annotate_lines, chords_used, group_sections, sheet};

const USAGE: &str = "Usage: chordsheet [--format html|json|sections|chords] [PATH]";

/// Parsed command-line arguments.
struct Args {
    format: Option<OutputFormat>,
    path: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args { format: None, path: None, help: false };
    let mut args = args;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-f" | "--format" => {
                let value = args.next().ok_or_else(|| {
                    Error::config("--format needs a value", "Use one of: html, json, sections, chords")
                })?;
                parsed.format = Some(value.parse()?);
            }
            _ if parsed.path.is_none() && !arg.starts_with('-') => {
                parsed.path = Some(PathBuf::from(&arg));
            }
            _ => return Err(Error::Msg(format!("Unexpected argument '{arg}'. {USAGE}"))),
        }
    }

    Ok(parsed)
}

fn render(text: &str, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Html => annotate(text),
        OutputFormat::Json => serde_json::to_string_pretty(&annotate_lines(text))?,
        OutputFormat::Sections => serde_json::to_string_pretty(&group_sections(&annotate_lines(text)))?,
        OutputFormat::Chords => chords_used(text).join("\n"),
    };
    Ok(output)
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = Config::load()?;
    tracing::debug!("{} {}", config.app_name(), config.app_version());

    let text = match &args.path {
        Some(path) => sheet::load_sheet(&config.resolve_sheet_path(path))?,
        None => sheet::read_stdin()?,
    };

    let format = args.format.unwrap_or(config.format);
    println!("{}", render(&text, format)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(ToString::to_string))
    }

    #[test]
    fn test_parse_format_and_path() {
        let parsed = args(&["--format", "json", "song.txt"]).unwrap();
        assert_eq!(parsed.format, Some(OutputFormat::Json));
        assert_eq!(parsed.path, Some(PathBuf::from("song.txt")));
        assert!(!parsed.help);
    }

    #[test]
    fn test_parse_rejects_extra_args() {
        assert!(args(&["a.txt", "b.txt"]).is_err());
        assert!(args(&["--format"]).is_err());
        assert!(args(&["--format", "pdf"]).is_err());
    }

    #[test]
    fn test_render_chords_format() {
        let out = render("G D\nhello\nEm C G", OutputFormat::Chords).unwrap();
        assert_eq!(out, "G\nD\nEm\nC");
    }

    #[test]
    fn test_render_json_lists_kinds() {
        let out = render("[Chorus]\nG C", OutputFormat::Json).unwrap();
        assert!(out.contains("\"section_header\""));
        assert!(out.contains("\"chord_line\""));
    }
}
