use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use structopt::StructOpt;

use wordsieve::dictionary::dictionary::{Dictionary, FileFormat};

/// Count every occurrence of every dictionary word in a text file.
#[derive(StructOpt)]
struct Cli {
    /// Word list to load, one word per line
    #[structopt(parse(from_os_str))]
    dictionary: PathBuf,
    /// Text to scan for dictionary words
    #[structopt(parse(from_os_str))]
    content: PathBuf,
    /// Column delimiter for the dictionary file
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word when --delimiter is set
    #[structopt(long)]
    word_column: Option<usize>,
    /// Print the report as JSON instead of word: count lines
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct ScanReport<'a> {
    words: usize,
    matches: &'a HashMap<String, usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Cli::from_args();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .build();

    let mut dictionary = Dictionary::new();
    let words = dictionary.load_file(&args.dictionary, &format)?;

    let start = Instant::now();
    let matches = dictionary.scan_file(&args.content)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ScanReport {
                words,
                matches: &matches,
            })?
        );
    } else {
        let mut rows = matches.iter().collect::<Vec<_>>();
        rows.sort();
        for (word, count) in rows {
            println!("{}: {}", word, count);
        }
    }
    println!(
        "{} matched in {:#?}s",
        matches.len(),
        start.elapsed().as_millis() as f64 / 1000.0
    );
    Ok(())
}
