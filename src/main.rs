//! # docchat CLI
//!
//! The `docchat` binary answers questions about local documents using
//! keyword-overlap retrieval and a remote completion API.
//!
//! ## Usage
//!
//! ```bash
//! docchat --config ./config/docchat.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docchat chat [FILES…]` | Interactive question loop over the given documents |
//! | `docchat ask "<question>" -f FILE…` | One-shot question against the given documents |
//! | `docchat inspect FILE…` | Show extraction and chunking counts without asking anything |
//!
//! ## Examples
//!
//! ```bash
//! # One-shot question over a PDF
//! docchat ask "what is the warranty period?" -f manual.pdf
//!
//! # Interactive session over several documents
//! docchat chat manual.pdf notes.md
//!
//! # Check how a document chunks before chatting
//! docchat inspect manual.pdf
//! ```
//!
//! The completion API key is read from the `GROQ_API_KEY` environment
//! variable. All other settings come from the config file; a missing
//! file at the default path falls back to built-in defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docchat::{chat, config, inspect};

/// docchat — a retrieval-augmented chat tool for local documents.
#[derive(Parser)]
#[command(
    name = "docchat",
    about = "docchat — ask questions about local PDF and text documents",
    version,
    long_about = "docchat extracts text from PDF, txt, and md files, splits it into \
    fixed-size chunks held in memory, and answers questions by sending the chunks with \
    the highest keyword overlap to an OpenAI-compatible completion endpoint."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/docchat.toml`. When the default path does
    /// not exist, built-in defaults are used. See
    /// `config/docchat.example.toml` for all settings.
    #[arg(long, global = true, default_value = "./config/docchat.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session.
    ///
    /// Documents given as arguments are processed up front. Inside the
    /// loop, `/load <files…>` replaces the loaded documents, `/clear`
    /// resets the session, `/quit` exits; any other line is a question.
    Chat {
        /// Document files to process before the loop starts.
        files: Vec<PathBuf>,
    },

    /// Ask a single question and exit.
    ///
    /// Processes the given documents, retrieves the most relevant
    /// chunks for the question, and prints the model's answer.
    Ask {
        /// The question to ask.
        question: String,

        /// Document files to process (repeatable).
        #[arg(short = 'f', long = "file")]
        files: Vec<PathBuf>,
    },

    /// Show extraction and chunking counts for the given files.
    ///
    /// Dry-run: nothing is sent to the completion API. Prints per-file
    /// character and chunk counts plus a total.
    Inspect {
        /// Document files to inspect.
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The default config path is optional; an explicit one must exist.
    let cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else if cli.config == PathBuf::from("./config/docchat.toml") {
        config::Config::default()
    } else {
        anyhow::bail!("Config file not found: {}", cli.config.display());
    };

    match cli.command {
        Commands::Chat { files } => {
            chat::run_chat(&cfg, &files).await?;
        }
        Commands::Ask { question, files } => {
            chat::run_ask(&cfg, &question, &files).await?;
        }
        Commands::Inspect { files } => {
            inspect::run_inspect(&cfg, &files)?;
        }
    }

    Ok(())
}
