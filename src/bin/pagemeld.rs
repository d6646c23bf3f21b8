//! pagemeld: Rewrite page metadata JSON into the canonical layout
//!
//! Usage:
//!   # Read a legacy page file, print the canonical document
//!   pagemeld page.json
//!
//! Read pages one per line from stdin, one compact document per line out:
//!   cat pages.jsonl | pagemeld --ndjson
//!
//! Print the schema version a file declares:
//!   pagemeld --probe page.json

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use pagemeld::{
    find_json_version, resolve_json, CanonicalStyle, CanonicalWriter, JsonBackend, PageConfig,
    PageDao,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagemeld")]
#[command(about = "Resolve page metadata JSON into the canonical layout", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Process newline-delimited JSON (one page per line)
    #[arg(long)]
    ndjson: bool,

    /// Parse with simd-json instead of serde_json
    #[arg(long)]
    simd: bool,

    /// Compact output (one line per page)
    #[arg(long)]
    compact: bool,

    /// Only print the schema version of the input
    #[arg(long, conflicts_with = "ndjson")]
    probe: bool,

    /// Filename used when the page names none (default: index.html)
    #[arg(long)]
    default_filename: Option<String>,

    /// Filesystem path recorded on the page
    #[arg(long, default_value = "")]
    fs_path: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Build config
    let mut config = PageConfig::default();
    if let Some(name) = args.default_filename.clone() {
        config.default_html_filename = name;
    }
    if args.simd {
        config.backend = JsonBackend::Simd;
    }
    if args.compact || args.ndjson {
        config.style = CanonicalStyle::Compact;
    }

    let reader: Box<dyn BufRead> = if let Some(file_path) = &args.input {
        let file = File::open(file_path).with_context(|| format!("Failed to open {}", file_path))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(BufReader::new(std::io::stdin()))
    };

    if args.ndjson {
        let mut writer = CanonicalWriter::new(std::io::stdout().lock(), config.style);
        let count = resolve_json(reader, &mut writer, &config).context("Failed to resolve pages")?;
        if count == 0 {
            tracing::warn!("no JSON documents found in input");
        }
        return Ok(());
    }

    let content = read_all(reader)?;
    let data = if content.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        Some(content.as_slice())
    };

    let mut stdout = std::io::stdout().lock();

    if args.probe {
        writeln!(stdout, "{}", find_json_version(data))?;
        return Ok(());
    }

    let dao = PageDao::new(data, &args.fs_path, config).context("Failed to parse page JSON")?;
    stdout.write_all(&dao.fill_json()?)?;
    writeln!(stdout)?;

    Ok(())
}

fn read_all(mut reader: Box<dyn BufRead>) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .context("Failed to read input")?;
    Ok(content)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
