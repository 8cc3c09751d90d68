use crate::suggest::Candidate;
use crate::{CheckReport, Misspelling};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonCheckOutput<'a> {
    words_checked: usize,
    misspelled: usize,
    misspellings: &'a [Misspelling],
}

#[derive(Debug, Serialize)]
struct JsonSuggestOutput<'a> {
    word: &'a str,
    suggestions: &'a [Candidate],
}

pub fn print_check_report(report: &CheckReport, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_check_report(report, colored_output),
        OutputFormat::Json => print_json_check_report(report),
    }
}

fn print_text_check_report(report: &CheckReport, colored_output: bool) {
    for misspelling in &report.misspellings {
        let suggestions = format_suggestion_list(&misspelling.suggestions, colored_output);

        if colored_output {
            println!("  {} {}", misspelling.word.red().bold(), suggestions);
        } else {
            println!("  {} {}", misspelling.word, suggestions);
        }
    }
}

fn print_json_check_report(report: &CheckReport) {
    let output = JsonCheckOutput {
        words_checked: report.checked,
        misspelled: report.misspellings.len(),
        misspellings: &report.misspellings,
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

pub fn print_suggestions(
    word: &str,
    suggestions: &[Candidate],
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            if suggestions.is_empty() {
                println!("No suggestions for {}", word);
                return;
            }

            if colored_output {
                println!("{}", word.bold().underline());
            } else {
                println!("{}", word);
            }
            println!("{}", format_suggestion_list(suggestions, colored_output));
        }
        OutputFormat::Json => {
            let output = JsonSuggestOutput { word, suggestions };
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                println!("{}", json);
            }
        }
    }
}

fn format_suggestion_list(suggestions: &[Candidate], colored_output: bool) -> String {
    if suggestions.is_empty() {
        return if colored_output {
            "(no suggestions)".dimmed().to_string()
        } else {
            "(no suggestions)".to_string()
        };
    }

    let rendered: Vec<String> = suggestions
        .iter()
        .map(|c| {
            let marker = if c.phonetic_match { "~" } else { "" };
            let entry = format!("{}{} ({})", marker, c.word, c.distance);
            if colored_output {
                entry.green().to_string()
            } else {
                entry
            }
        })
        .collect();

    if colored_output {
        format!("{} {}", "→".dimmed(), rendered.join(", "))
    } else {
        format!("→ {}", rendered.join(", "))
    }
}

pub fn print_check_summary(misspelled: usize, checked: usize, colored_output: bool) {
    if misspelled == 0 {
        let message = format!("All {} words spelled correctly", checked);
        if colored_output {
            println!("{} {}", "✓".green().bold(), message);
        } else {
            println!("{}", message);
        }
    } else {
        let message = format!("{} of {} words misspelled", misspelled, checked);
        if colored_output {
            println!("{} {}", "✗".red().bold(), message);
        } else {
            println!("{}", message);
        }
    }
}
