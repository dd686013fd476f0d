//! Passphrase Generation CLI
//!
//! Thin command-line front end for the generation library: loads a
//! wordlist, generates a passphrase or password, and warns when the
//! result falls below the configured entropy threshold. All security
//! logic lives in the library; this binary is formatting and I/O glue.

use clap::Parser;
use passphrase_gen::{
    config::FileConfig, CharacterSet, EntropyEstimator, SequenceGenerator, WordList,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Generate cryptographically secure passphrases and passwords
#[derive(Parser, Debug)]
#[command(name = "passphrase-gen", version, about)]
struct Args {
    /// Wordlist file, one word per line
    #[arg(short = 'i', long, value_name = "FILE")]
    wordlist: Option<PathBuf>,

    /// Treat the wordlist as diceware format (index column + word column)
    #[arg(short, long, requires = "wordlist")]
    diceware: bool,

    /// Number of words to draw (default from config)
    #[arg(short, long)]
    words: Option<usize>,

    /// Number of random numbers to append
    #[arg(short, long)]
    numbers: Option<usize>,

    /// Generate a password of this many characters instead of a passphrase
    #[arg(short, long, value_name = "LENGTH", conflicts_with = "wordlist")]
    password: Option<usize>,

    /// Separator between passphrase tokens
    #[arg(short, long, default_value = " ")]
    separator: String,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &FileConfig) -> Result<(), Box<dyn std::error::Error>> {
    let estimator = EntropyEstimator::new(config.security.backend());
    let threshold = config.security.entropy_bits_min;
    let mut generator = SequenceGenerator::from_os_entropy();

    if let Some(length) = args.password {
        let charset = CharacterSet::printable();
        let report = estimator.report(charset.len(), length, threshold)?;
        if report.total_bits < threshold {
            warn!(
                "password carries {:.2} bits, below the {:.0}-bit threshold; \
                 {} characters would reach it",
                report.total_bits, threshold, report.minimum_symbols
            );
        }

        let password = generator.generate_password(&charset, length)?;
        println!("{}", password.join(""));
        return Ok(());
    }

    let path = args
        .wordlist
        .as_ref()
        .ok_or("a wordlist file is required for passphrase generation (see --wordlist)")?;
    let wordlist = read_wordlist(path, args.diceware)?;
    info!(words = wordlist.len(), "loaded wordlist");

    let mut params = config.passphrase.clone();
    if let Some(words) = args.words {
        params.words = words;
    }
    if let Some(numbers) = args.numbers {
        params.numbers = numbers;
    }

    let word_bits = estimator.shannon_bits(wordlist.as_slice());
    let number_bits = estimator.range_bits(params.number_min, params.number_max)?;
    let total_bits = word_bits * params.words as f64 + number_bits * params.numbers as f64;
    if total_bits < threshold {
        let needed = estimator.words_needed(word_bits, number_bits, params.numbers, threshold)?;
        warn!(
            "passphrase carries {:.2} bits, below the {:.0}-bit threshold; \
             {} words would reach it",
            total_bits, threshold, needed
        );
    }

    let passphrase = generator.generate_passphrase(&wordlist, &params)?;
    println!("{}", passphrase.join(&args.separator));

    Ok(())
}

fn read_wordlist(path: &PathBuf, diceware: bool) -> Result<WordList, std::io::Error> {
    let content = std::fs::read_to_string(path)?;

    let words = content.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if diceware {
            // Diceware rows are "11111 abacus"; keep the word column.
            line.split_whitespace().nth(1)
        } else {
            Some(line)
        }
    });

    Ok(WordList::from_words(words))
}
