use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Alphabet to encode with (default: settings.default_alphabet, then z85)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Alphabet to decode from (default: settings.default_alphabet, then z85)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for generating random keys
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Alphabet to encode keys with
    #[arg(short = 'a', long, default_value = "w92")]
    pub alphabet: String,

    /// Minimum key strength in bits (rounded up to whole bytes)
    #[arg(short = 'b', long, default_value_t = base8x::keygen::DEFAULT_BITS)]
    pub bits: u32,

    /// Number of keys to print (plain format only)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Output layout
    #[arg(short = 'f', long, value_enum, default_value_t = KeyFormatCli::Wordpress)]
    pub format: KeyFormatCli,
}

/// Key layouts (CLI enum)
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KeyFormatCli {
    /// One key per line
    Plain,
    /// wp-config.php define() lines
    Wordpress,
}

impl From<KeyFormatCli> for base8x::keygen::KeyFormat {
    fn from(cli: KeyFormatCli) -> Self {
        match cli {
            KeyFormatCli::Plain => base8x::keygen::KeyFormat::Plain,
            KeyFormatCli::Wordpress => base8x::keygen::KeyFormat::WordPress,
        }
    }
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available alphabets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific alphabet
    Show {
        /// Alphabet name
        alphabet: String,
    },
}
