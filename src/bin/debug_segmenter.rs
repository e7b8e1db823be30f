use std::io::Write;
use std::process;

use env_logger::Builder;
use log::LevelFilter;
use thaiseg_rs::dictionary::load_dictionary_files;
use thaiseg_rs::normalizer::normalize;
use thaiseg_rs::{Chunker, Segmenter, Strategy};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: debug_segmenter <DICT_FILE> <TEXT>");
        process::exit(1);
    }

    Builder::new()
        .filter_module("thaiseg_rs::segmenter", LevelFilter::Trace)
        .format(|buf, record| writeln!(buf, "  {}", record.args()))
        .init();

    let lexicon = match load_dictionary_files(&[&args[1]]) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let input = &args[2];
    let normalized = normalize(input);
    println!("Input: {}", input);
    println!("Normalized: {:?}", normalized);

    let chunks = Chunker::new(&normalized).make_chunks();

    for strategy in [Strategy::GreedyCommit, Strategy::LongestMatch] {
        println!("\n{}:", strategy);
        let segmenter = Segmenter::with_strategy(&lexicon, strategy);
        for chunk in &chunks {
            match chunk.chunk_type {
                Some(chunk_type) => {
                    println!("  @{} {:?} ({})", chunk.start, chunk.text, chunk_type.as_str());
                }
                None => {
                    println!("  @{} {:?}", chunk.start, chunk.text);
                    for (i, token) in segmenter.segment(chunk.text).iter().enumerate() {
                        println!("    {}: {:?} ({})", i, token.text, token.chunk_type.as_str());
                    }
                }
            }
        }
    }
}
