//! Command-line interface for thaiseg-rs
//!
//! Usage:
//!   thaiseg [OPTIONS] [TEXT]
//!   echo "สวัสดีครับ" | thaiseg

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use thaiseg_rs::dictionary::{load_dictionary_dir, load_dictionary_files};
use thaiseg_rs::{Error, Result, Strategy, Tokenizer, TokenizerOptions};

/// A dictionary-driven Thai word segmenter
#[derive(Parser, Debug)]
#[command(name = "thaiseg", version, about)]
struct Args {
    /// Text to segment (read from stdin when omitted)
    text: Option<String>,

    /// Directory holding the dictionary files
    #[arg(short, long, env = "THAISEG_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Dictionary file to load instead of scanning the data directory (repeatable)
    #[arg(short = 'f', long = "dict")]
    dicts: Vec<PathBuf>,

    /// Segmentation strategy: greedy or longest
    #[arg(short, long, default_value_t = Strategy::GreedyCommit)]
    strategy: Strategy,

    /// Compose input to Unicode NFC before segmenting
    #[arg(long)]
    nfc: bool,

    /// Output the full segmentation as JSON
    #[arg(short, long)]
    json: bool,

    /// Output one token per line with its type
    #[arg(short, long, conflicts_with = "json")]
    tags: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let input_text = match args.text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(Error::Stdin)?;
            buf
        }
    };

    let lexicon = if args.dicts.is_empty() {
        load_dictionary_dir(&args.data_dir)?
    } else {
        load_dictionary_files(&args.dicts)?
    };

    let tokenizer = Tokenizer::new(lexicon).with_options(TokenizerOptions {
        strategy: args.strategy,
        nfc: args.nfc,
    });

    if args.tags {
        for token in tokenizer.tokenize_tokens(&input_text) {
            println!("{}\t{}", token.text, token.chunk_type.as_str());
        }
        return Ok(());
    }

    let segmentation = tokenizer.segment_document(input_text.trim_end_matches(&['\r', '\n'][..]));
    if segmentation.has_mismatch() {
        log::info!("Some input characters were not covered by the segmentation");
    }

    if args.json {
        match serde_json::to_string_pretty(&segmentation) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", segmentation.segmented);
    }

    Ok(())
}
