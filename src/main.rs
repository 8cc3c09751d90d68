use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellguard::cli::output::{self, OutputFormat};
use spellguard::{wordlist, CheckReport, Config, Dictionary, Misspelling, SpellError};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellguard")]
#[command(version, about = "Trie-backed spell checking with phonetic suggestions", long_about = None)]
struct Cli {
    /// Wordlist file, one word per line
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Maximum edit distance for suggestions
    #[arg(long)]
    max_distance: Option<usize>,

    /// Maximum number of suggestions per word
    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if misspellings are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Check words against the dictionary
    Check {
        /// Words to check
        #[arg(value_name = "WORDS", required = true)]
        words: Vec<String>,
    },
    /// Suggest corrections for a single word
    Suggest {
        /// Word to correct
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellguard", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(cli.dict.clone(), cli.max_distance, cli.max_suggestions)?;

    let Some(wordlist_path) = &config.wordlist else {
        anyhow::bail!("No wordlist specified. Pass --dict or set `wordlist` in .spellguard.toml.");
    };

    let words = wordlist::read_words(wordlist_path)?;
    let dictionary = Dictionary::load(&words)?;

    let report = dictionary.load_report();
    if report.rejected > 0 {
        eprintln!(
            "Warning: {} of {} wordlist entries rejected",
            report.rejected,
            report.accepted + report.rejected
        );
    }

    let colored = !cli.no_color;

    match command {
        Commands::Check { words } => {
            let report = check_words(&dictionary, &words, &config)?;
            let misspelled = report.misspellings.len();

            output::print_check_report(&report, colored, &cli.format);
            if matches!(cli.format, OutputFormat::Text) {
                output::print_check_summary(misspelled, report.checked, colored);
            }

            if misspelled > 0 && !cli.no_fail {
                std::process::exit(1);
            }
        }
        Commands::Suggest { word } => {
            let suggestions =
                dictionary.suggest(&word, config.max_edit_distance, config.max_suggestions)?;
            output::print_suggestions(&word, &suggestions, colored, &cli.format);
        }
    }

    Ok(())
}

fn check_words(dictionary: &Dictionary, words: &[String], config: &Config) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for word in words {
        match dictionary.check(word) {
            Ok(true) => {}
            Ok(false) => {
                let suggestions =
                    dictionary.suggest(word, config.max_edit_distance, config.max_suggestions)?;
                report.misspellings.push(Misspelling {
                    word: word.clone(),
                    suggestions,
                });
            }
            Err(SpellError::InvalidInput(_)) => {
                eprintln!("Warning: skipping non-alphabetic input {:?}", word);
                continue;
            }
            Err(other) => return Err(other.into()),
        }
        report.checked += 1;
    }

    Ok(report)
}
