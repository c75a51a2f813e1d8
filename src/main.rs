//! Demo CLI for the PhraseFinder client.
//!
//! Sends one search request and prints each matching phrase as its score
//! followed by the `text_tag` wire terms, one phrase per line.

use phrasefinder::{Corpus, Options, PhraseFinder, Status};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut query: Option<String> = None;
    let mut options = Options::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" => {
                options.set_corpus(parse_corpus(&args[i + 1])?);
                i += 2;
            }
            "--nmin" => {
                options.set_min_phrase_length(args[i + 1].parse()?)?;
                i += 2;
            }
            "--nmax" => {
                options.set_max_phrase_length(args[i + 1].parse()?)?;
                i += 2;
            }
            "--topk" => {
                options.set_max_results(args[i + 1].parse()?);
                i += 2;
            }
            "--key" => {
                options.set_api_key(args[i + 1].clone());
                i += 2;
            }
            other => {
                query = Some(other.to_string());
                i += 1;
            }
        }
    }

    let Some(query) = query else {
        eprintln!(
            "Usage: {} [--corpus <code>] [--nmin <n>] [--nmax <n>] [--topk <n>] [--key <key>] <query>",
            args[0]
        );
        eprintln!("Example: {} --corpus eng-us --topk 10 \"I like ???\"", args[0]);
        std::process::exit(1);
    };

    let client = match std::env::var("PHRASEFINDER_URL") {
        Ok(endpoint) => PhraseFinder::with_endpoint(&endpoint)?,
        Err(_) => PhraseFinder::new(),
    };

    tracing::info!("Searching {:?} in corpus {}", query, options.corpus().short_code());
    let result = client.search_with_options(&query, &options)?;

    if result.status() != Status::Ok {
        eprintln!("Request was not successful: {:?}", result.status());
        std::process::exit(1);
    }

    for phrase in result.phrases() {
        print!("{:.6}", phrase.score());
        for token in phrase.tokens() {
            print!(" {}_{}", token.text(), token.tag().ordinal());
        }
        println!();
    }

    Ok(())
}

fn parse_corpus(code: &str) -> anyhow::Result<Corpus> {
    Corpus::all()
        .find(|corpus| corpus.short_code() == code)
        .ok_or_else(|| anyhow::anyhow!("unknown corpus code: {}", code))
}
