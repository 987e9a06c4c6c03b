use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use crate::analysis::AnalysisClient;
use crate::clipboard;
use crate::config::Config;
use crate::naming::NamingInput;
use crate::output::{self, OutputMode};
use crate::script;
use crate::taxonomy::FOLDER_STRUCTURE;
use crate::theme::Theme;
use crate::tui;

#[derive(Parser)]
#[command(name = "tidy")]
#[command(version)]
#[command(about = "Organize your Documents folder on Windows")]
#[command(
    long_about = "Tidydesk helps a student set up and keep a clean Documents structure:\n\
    a recommended folder taxonomy, a filename convention, a step-by-step desktop\n\
    cleanup guide, and an AI analyzer for messy file listings.\n\n\
    Interactive Mode:\n  \
    tidy                          # Launch interactive TUI mode\n\n\
    Examples:\n  \
    tidy tree                    # Print the recommended folder structure\n  \
    tidy script                  # Print the PowerShell setup script\n  \
    tidy script --copy           # Copy the setup script to the clipboard\n  \
    tidy name --subject Math --topic Integrals\n  \
    dir /b /s > files.txt && tidy analyze --file files.txt"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors and bare results
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the recommended folder taxonomy
    #[command(visible_alias = "t")]
    Tree,

    /// Print the idempotent PowerShell setup script
    Script {
        /// Copy the script to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Print the step-by-step setup guide and the automation snippet
    Steps,

    /// Generate an example filename from the naming convention
    Name {
        /// ISO date (default: today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Subject, e.g. Physics
        #[arg(long)]
        subject: Option<String>,

        /// Topic, e.g. Thermodynamics
        #[arg(long)]
        topic: Option<String>,

        /// Version tag, e.g. v1
        #[arg(long)]
        version: Option<String>,

        /// Also copy the filename to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Analyze a messy file listing with the AI service
    #[command(visible_alias = "a")]
    Analyze {
        /// File containing the listing (e.g. from 'dir /b /s'); stdin if omitted
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Output the raw report as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose > 0 {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    pub fn run(self) -> Result<()> {
        let mode = self.output_mode();

        match self.command {
            None => tui::run(None),

            Some(Commands::Tree) => {
                output::print_tree(&FOLDER_STRUCTURE, mode);
                Ok(())
            }

            Some(Commands::Script { copy }) => {
                let script = script::baseline_script();
                if copy {
                    clipboard::copy_text(&script)
                        .map_err(|e| anyhow::anyhow!("clipboard copy failed: {}", e))?;
                    if mode != OutputMode::Quiet {
                        println!(
                            "{}",
                            Theme::success("Setup script copied. Paste it into a PowerShell window.")
                        );
                    }
                } else {
                    println!("{}", script);
                }
                Ok(())
            }

            Some(Commands::Steps) => {
                output::print_steps(mode);
                Ok(())
            }

            Some(Commands::Name {
                date,
                subject,
                topic,
                version,
                copy,
            }) => {
                let config = Config::load();
                let mut input = NamingInput::with_defaults(
                    &config.naming.subject,
                    &config.naming.topic,
                    &config.naming.version,
                );
                if let Some(date) = date {
                    input.date = date;
                }
                if let Some(subject) = subject {
                    input.subject = subject;
                }
                if let Some(topic) = topic {
                    input.topic = topic;
                }
                if let Some(version) = version {
                    input.version = version;
                }

                let filename = input.example_filename();
                output::print_naming(&filename, mode);
                if copy {
                    clipboard::copy_text(&filename)
                        .map_err(|e| anyhow::anyhow!("clipboard copy failed: {}", e))?;
                    if mode != OutputMode::Quiet {
                        println!("{}", Theme::success("Copied to clipboard."));
                    }
                }
                Ok(())
            }

            Some(Commands::Analyze { file, json }) => run_analyze(file, json, mode),
        }
    }
}

fn run_analyze(file: Option<PathBuf>, json: bool, mode: OutputMode) -> Result<()> {
    let file_list = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file list from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read file list from stdin")?;
            buf
        }
    };

    if file_list.trim().is_empty() {
        // Guarded no-op input, distinct from a service failure
        anyhow::bail!("file list is empty; nothing to analyze");
    }

    let config = Config::load_or_create();
    let client = AnalysisClient::from_config(&config.ai)?;

    if mode != OutputMode::Quiet {
        eprintln!("{}", Theme::secondary("Analyzing your digital mess..."));
    }

    let report = client.analyze(&file_list)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report, mode);
    }
    Ok(())
}
