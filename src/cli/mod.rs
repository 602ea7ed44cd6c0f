//! CLI command definitions and handlers

mod classify;
mod info;
mod serve;
mod train;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use langid::config::{Config, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

/// langid - character-trigram language identification
#[derive(Parser, Debug)]
#[command(name = "langid")]
#[command(
    version,
    about = "Identify the language of a text by comparing its character trigrams with trained language profiles",
    after_help = "\
Examples:
  langid train corpus/*.csv -o model.bin     Train from labeled CSV files
  langid classify \"the cat sat on the mat\"   Classify a string
  langid classify --file letter.txt          Classify a file
  langid info                                List trained languages
  langid serve --port 8080                   Start the web front-end"
)]
pub struct Cli {
    /// Config file (default: ./langid.toml if present)
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train language profiles from CSV files (rows: language,text[,text...])
    #[command(after_help = "\
Examples:
  langid train data/en.csv data/fr.csv              Write trained_model.bin
  langid train data/*.csv -o models/lang.bin        Custom output path
  langid train big.csv --max-field-len 500000000    Allow larger CSV cells")]
    Train {
        /// CSV files to read, in order
        #[arg(required = true, value_name = "CSV")]
        inputs: Vec<PathBuf>,

        /// Where to write the model (default: model.path from config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Largest CSV field accepted, in characters
        #[arg(long)]
        max_field_len: Option<usize>,
    },

    /// Classify a string, a file, or standard input
    Classify {
        /// Text to classify (reads stdin when neither TEXT nor --file is given)
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from this file
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Model file (default: model.path from config)
        #[arg(long, short = 'm')]
        model: Option<PathBuf>,

        /// Tie tolerance
        #[arg(long)]
        tolerance: Option<f64>,

        /// Also print every language's score
        #[arg(long)]
        scores: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the trained languages
    Info {
        /// Model file (default: model.path from config)
        #[arg(long, short = 'm')]
        model: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the web front-end
    Serve {
        /// Model file (default: model.path from config)
        #[arg(long, short = 'm')]
        model: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },

    /// Manage configuration (init or show)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example langid.toml in the current directory
    Init,
    /// Show the effective configuration
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config_file.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Train {
            inputs,
            output,
            max_field_len,
        } => {
            if let Some(output) = output {
                config.model.path = output;
            }
            if let Some(len) = max_field_len {
                config.training.max_field_len = len;
            }
            train::run(&config, &inputs)
        }

        Commands::Classify {
            text,
            file,
            model,
            tolerance,
            scores,
            json,
        } => {
            if let Some(model) = model {
                config.model.path = model;
            }
            if let Some(tolerance) = tolerance {
                config.classifier.tolerance = tolerance;
            }
            let input = match (text, file) {
                (Some(text), _) => classify::Input::Text(text),
                (None, Some(path)) => classify::Input::File(path),
                (None, None) => classify::Input::Stdin,
            };
            classify::run(&config, input, scores, json)
        }

        Commands::Info { model, json } => {
            if let Some(model) = model {
                config.model.path = model;
            }
            info::run(&config, json)
        }

        Commands::Serve { model, host, port } => {
            if let Some(model) = model {
                config.model.path = model;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve::run(&config)
        }

        Commands::Config { action } => run_config_action(action, &config),
    }
}

fn run_config_action(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        // Writes the example file; the loaded values are not used.
        ConfigAction::Init => {
            let path = Path::new(CONFIG_FILE_NAME);
            if Config::init_file(path)? {
                println!("Config written to {}", path.display());
            } else {
                println!("{} already exists, leaving it unchanged", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            config.validate()?;
            let status = if Path::new(CONFIG_FILE_NAME).exists() {
                "found"
            } else {
                "not found"
            };
            println!("# ./{} ({})", CONFIG_FILE_NAME, status);
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}
