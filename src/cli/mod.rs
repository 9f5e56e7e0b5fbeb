mod args;
mod config;
mod global;
mod handlers;
mod logger;

use base8x::AlphabetRegistry;
use clap::{Parser, Subcommand};

use args::{ConfigAction, DecodeArgs, EncodeArgs, KeygenArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base8x")]
#[command(version)]
#[command(about = "Base-85 to base-95 binary/ASCII encoder with Z85 and custom alphabets", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data to text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// Generate random secret keys
    Keygen(KeygenArgs),
    /// Inspect configured alphabets
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(cli.global.log_level())?;

    // Load alphabet configuration with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Keygen(args) => handlers::keygen::handle(args, &cli.global, &config),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &config),
    }
}
