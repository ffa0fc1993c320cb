//! CLI command implementations

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::{analyze_demo, Analyzer, MeetingRecord};
use crate::cli::args::{AnalyzeArgs, ConfigCommand};
use crate::config::Settings;
use crate::output::{format_terminal, save_record};
use crate::session::SessionHistory;

/// Analyze transcripts from files or stdin and print the results.
pub async fn analyze(settings: &Settings, args: AnalyzeArgs) -> Result<()> {
    let transcripts = collect_transcripts(&args.files)?;

    let use_demo = args.demo || settings.demo_mode();
    if use_demo {
        if args.demo {
            info!("Demo mode requested - using pattern-matching analysis");
        } else {
            info!("No API key configured - falling back to demo mode");
        }
    }

    // Build the provider once; the analyzer is reused for every transcript.
    let analyzer = if use_demo {
        None
    } else {
        let mut llm_settings = settings.clone();
        if let Some(retries) = args.retries {
            llm_settings.llm.max_retries = retries;
        }
        Some(Analyzer::from_settings(&llm_settings)?)
    };

    let mut history = SessionHistory::new();

    for (label, transcript) in &transcripts {
        let record = match &analyzer {
            Some(analyzer) => analyzer
                .analyze(transcript)
                .await
                .with_context(|| format!("Failed to analyze {}", label))?,
            None => analyze_demo(transcript),
        };

        print_record(&record, label, args.json)?;

        if args.save {
            let dir = args
                .output_dir
                .clone()
                .unwrap_or_else(|| settings.notes_dir());
            let path = save_record(&record, &dir)?;
            println!("Saved: {}", path.display());
        }

        history.append(record);
    }

    if history.len() > 1 {
        println!();
        print!("{}", history.recap());
    }

    Ok(())
}

/// Read all requested transcripts up front, labeled for error messages.
fn collect_transcripts(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read transcript from stdin")?;
        let transcript = input.trim().to_string();
        if transcript.is_empty() {
            anyhow::bail!("Empty transcript. Please provide meeting content.");
        }
        return Ok(vec![("stdin".to_string(), transcript)]);
    }

    let mut transcripts = Vec::new();
    for path in files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        let transcript = content.trim().to_string();
        if transcript.is_empty() {
            anyhow::bail!("Empty transcript: {}", path.display());
        }
        transcripts.push((path.display().to_string(), transcript));
    }
    Ok(transcripts)
}

fn print_record(record: &MeetingRecord, label: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("== {} ==", label);
        print!("{}", format_terminal(record));
    }
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
