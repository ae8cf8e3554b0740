use serde::Serialize;
use std::io::Read;

use terrace::{LayoutConfig, compute_layout};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Decode(terrace::decode::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Decode(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<terrace::decode::Error> for CliError {
    fn from(value: terrace::decode::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    pretty: bool,
    out: Option<String>,
    node_width: Option<f64>,
    node_height: Option<f64>,
    rank_sep: Option<f64>,
    node_sep: Option<f64>,
}

fn usage() -> &'static str {
    "terrace-cli\n\
\n\
USAGE:\n\
  terrace-cli [layout] [--pretty] [--node-width <n>] [--node-height <n>] [--rank-sep <n>] [--node-sep <n>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON array of node records, or an object {\"nodes\": [...], \"config\": {...}}.\n\
  - Dimension flags override the document's config; unset values fall back to the defaults.\n\
  - The layout result is printed as JSON to stdout; use --out to write a file.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    fn dim<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<f64, CliError> {
        let Some(raw) = it.next() else {
            return Err(CliError::Usage(usage()));
        };
        raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))
    }

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => {}
            "--pretty" => args.pretty = true,
            "--node-width" => args.node_width = Some(dim(&mut it)?),
            "--node-height" => args.node_height = Some(dim(&mut it)?),
            "--rank-sep" => args.rank_sep = Some(dim(&mut it)?),
            "--node-sep" => args.node_sep = Some(dim(&mut it)?),
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn effective_config(args: &Args, document_config: Option<LayoutConfig>) -> LayoutConfig {
    let mut config = document_config.unwrap_or_default();
    if let Some(v) = args.node_width {
        config.node_width = v;
    }
    if let Some(v) = args.node_height {
        config.node_height = v;
    }
    if let Some(v) = args.rank_sep {
        config.rank_sep = v;
    }
    if let Some(v) = args.node_sep {
        config.node_sep = v;
    }
    config
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let document = terrace::decode::decode_document(&text)?;
    let config = effective_config(&args, document.config);
    let layout = compute_layout(&document.nodes, &config);
    write_json(&layout, args.pretty, args.out.as_deref())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
