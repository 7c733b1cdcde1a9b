//! OxiHuff CLI - Huffman compression from the command line
//!
//! Compresses files into self-describing Huffman blocks and inspects the
//! codes and trees behind them.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::compress::CompressOptions;
use commands::{
    cmd_codes, cmd_compress, cmd_decompress, cmd_encode, cmd_info, cmd_test, cmd_tree,
};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Deterministic Huffman compression - Pure Rust")]
#[command(long_about = "
OxiHuff compresses files with a deterministic Huffman code. Each output file
stores the symbol frequencies and the exact bit length, so it decodes on its
own.

Examples:
  oxihuff compress book.txt
  oxihuff compress a.txt b.txt c.txt --verify
  oxihuff decompress book_compressed.txt
  oxihuff codes book_compressed.txt
  oxihuff codes book.txt --raw --json
  oxihuff tree book_compressed.txt
  oxihuff encode hello --corpus book.txt
  oxihuff info book_compressed.txt
  oxihuff test book_compressed.txt
")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress one or more files
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (single input only; default: NAME_compressed.EXT)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject empty input and verify every block
        #[arg(long)]
        strict: bool,

        /// Decode each block before writing it
        #[arg(long)]
        verify: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Decompress a file
    #[command(alias = "d", alias = "x")]
    Decompress {
        /// Compressed file
        file: PathBuf,

        /// Output file (default: NAME_uncompressed.EXT)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the code table of a file
    Codes {
        /// Compressed file (or raw file with --raw)
        file: PathBuf,

        /// Build codes from a raw, uncompressed file
        #[arg(short, long)]
        raw: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Print the Huffman tree of a file
    Tree {
        /// Compressed file (or raw file with --raw)
        file: PathBuf,

        /// Build the tree from a raw, uncompressed file
        #[arg(short, long)]
        raw: bool,
    },

    /// Encode a word and print its bits
    #[command(alias = "e")]
    Encode {
        /// Word to encode (prompted for if omitted)
        word: Option<String>,

        /// Train codes on this file instead of the word itself
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },

    /// Show header information of a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file
        file: PathBuf,
    },

    /// Check that compressed files decode cleanly
    #[command(alias = "t")]
    Test {
        /// Compressed files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose, cli.quiet));
    let verbose = cli.verbose > 0;

    let result = match cli.command {
        Commands::Compress {
            files,
            output,
            strict,
            verify,
            no_progress,
        } => cmd_compress(
            &files,
            output.as_deref(),
            CompressOptions {
                strict,
                verify,
                progress: !no_progress && !cli.quiet,
                verbose,
            },
        ),
        Commands::Decompress { file, output } => {
            cmd_decompress(&file, output.as_deref(), verbose)
        }
        Commands::Codes { file, raw, json } => cmd_codes(&file, raw, json),
        Commands::Tree { file, raw } => cmd_tree(&file, raw),
        Commands::Encode { word, corpus } => cmd_encode(word, corpus.as_deref()),
        Commands::Info { file } => cmd_info(&file),
        Commands::Test { files } => cmd_test(&files, verbose),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "oxihuff", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
