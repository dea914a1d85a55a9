//! Command line surface of fileproc.
//!
//! Every command reads one input file and, where it produces bytes, writes one output file:
//!
//! > `fileproc compress -i notes.txt -o notes.huff`
//! > `fileproc compress -i notes.txt -o notes.bin --using "rle -> huffman"`
//! > `fileproc decompress -i notes.bin -o notes.txt --from-file pipeline.json`
//! > `fileproc encrypt -i notes.txt -o notes.enc -k hunter2`
//! > `fileproc decrypt -i notes.enc -o notes.txt -k 3 --cipher caesar`
//! > `fileproc search -i notes.txt -s TODO`
//! > `fileproc sort -i names.txt -o sorted.txt`
//! > `fileproc test -i notes.txt --preset text`
//!
//! Codec chains are picked with `--using`, `--from-file` or `--preset`, at most one of them. Without
//! any, the `default` preset (plain huffman) is used. `decompress` has to be given the same chain that
//! `compress` used, nothing about the chain is stored in the output.
//!
//! > `fileproc pipeline list [--detailed]`
//! > `fileproc pipeline save "rle -> huffman" pipeline.json`
use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::algorithms::cipher::CipherKind;

pub mod cipher;
pub mod compress;
pub mod decompress;
pub mod pipeline;
pub mod search;
pub mod sort;

#[derive(Parser, Debug)]
#[command(name = "fileproc", author, version, about = "Compress, encrypt, search and sort files", long_about = None)]
pub struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a file through a codec pipeline
    #[command(alias = "c")]
    Compress(CompressArgs),

    /// Decompress a file produced by `compress` with the same pipeline
    #[command(alias = "d")]
    Decompress(CompressArgs),

    /// Encrypt a file with a keyed cipher
    Encrypt(CipherArgs),

    /// Decrypt a file with a keyed cipher
    Decrypt(CipherArgs),

    /// Print every line containing a term
    Search(SearchArgs),

    /// Sort the lines of a file
    Sort(SortArgs),

    /// Compress then decompress a file in memory and compare with the original
    Test(TestArgs),

    /// Pipeline management commands
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommand,
    },
}

#[derive(Args, Debug)]
pub struct IoArgs {
    /// Path to the input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the output file
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct PipelineArgs {
    /// Specify pipeline as a string (e.g. "rle -> huffman")
    #[arg(long)]
    pub using: Option<String>,

    /// Load pipeline from a JSON file
    #[arg(long)]
    pub from_file: Option<PathBuf>,

    /// Use a predefined pipeline preset (default, text, rle)
    #[arg(long)]
    pub preset: Option<String>,
}

pub enum PipelineSelection {
    Inline(String),
    FromFile(PathBuf),
    Preset(String),
    Default,
}

impl PipelineArgs {
    pub fn selection(self) -> PipelineSelection {
        match (self.using, self.from_file, self.preset) {
            (Some(inline), _, _) => PipelineSelection::Inline(inline),
            (_, Some(path), _) => PipelineSelection::FromFile(path),
            (_, _, Some(preset)) => PipelineSelection::Preset(preset),
            (None, None, None) => PipelineSelection::Default,
        }
    }
}

#[derive(Args, Debug)]
pub struct CompressArgs {
    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Args, Debug)]
pub struct CipherArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Cipher key. For caesar this is the integer shift
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: String,

    #[arg(long, value_enum, default_value_t)]
    pub cipher: CipherKind,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Path to the input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Term to look for
    #[arg(short = 's', long = "search", allow_hyphen_values = true)]
    pub term: String,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    #[command(flatten)]
    pub io: IoArgs,
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the file to round-trip
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Subcommand, Debug)]
pub enum PipelineCommand {
    /// List available codecs
    List {
        /// Show the description of each codec
        #[arg(long)]
        detailed: bool,
    },

    /// Save a pipeline string as a JSON pipeline file
    Save {
        /// Pipeline string (e.g. "rle -> huffman")
        pipeline: String,

        /// Output file path
        output: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compress(args) => compress::compress(args),
        Command::Decompress(args) => decompress::decompress(args),
        Command::Encrypt(args) => cipher::encrypt(args),
        Command::Decrypt(args) => cipher::decrypt(args),
        Command::Search(args) => search::search(args),
        Command::Sort(args) => sort::sort(args),
        Command::Test(args) => test::test(args),
        Command::Pipeline { command } => pipeline::pipeline(command),
    }
}

pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read input file {}", path.display()))
}

pub(crate) fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write output file {}", path.display()))
}
