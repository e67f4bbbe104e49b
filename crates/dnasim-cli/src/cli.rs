use clap::{Args, Parser, Subcommand};

use dnasim_core::VERSION;

/// dnasim - encode text as a DNA base sequence and manage saved presets
#[derive(Parser)]
#[command(name = "dnasim")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "DNASIM_CONFIG")]
    pub config: Option<String>,

    /// SQLite database for presets (selects the durable store)
    #[arg(long, global = true, env = "DNASIM_DATABASE")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Encode text into a base sequence
    Encode(EncodeArgs),

    /// Show the 8-bit binary form of text
    Binary(BinaryArgs),

    /// Decode binary digits back into text
    Decode(DecodeArgs),

    /// Manage saved presets
    #[command(subcommand)]
    Presets(PresetCommands),
}

/// Arguments for the `serve` command
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (e.g. 127.0.0.1:5000)
    #[arg(long)]
    pub bind: Option<String>,

    /// Keep presets in memory only (overrides --db and config)
    #[arg(long)]
    pub memory: bool,
}

/// Arguments for the `encode` command
#[derive(Args)]
pub struct EncodeArgs {
    /// Text to encode
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Base mapping, e.g. A=00,C=01,G=10,T=11
    #[arg(short, long, value_name = "MAPPING")]
    pub mapping: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `binary` command
#[derive(Args)]
pub struct BinaryArgs {
    /// Text to convert
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for the `decode` command
#[derive(Args)]
pub struct DecodeArgs {
    /// Binary digits (read from stdin when omitted)
    #[arg(value_name = "BINARY")]
    pub binary: Option<String>,
}

#[derive(Subcommand)]
pub enum PresetCommands {
    /// List saved presets
    List(PresetListArgs),

    /// Show a preset and its encoding
    Show(PresetShowArgs),

    /// Save a new preset
    Create(PresetCreateArgs),

    /// Delete a preset
    Delete(PresetDeleteArgs),
}

/// Arguments for `presets list`
#[derive(Args)]
pub struct PresetListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `presets show`
#[derive(Args)]
pub struct PresetShowArgs {
    /// Preset ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `presets create`
#[derive(Args)]
pub struct PresetCreateArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Text to store with the preset
    #[arg(long, default_value = "")]
    pub text: String,

    /// Base mapping, e.g. A=00,C=01,G=10,T=11
    #[arg(short, long, value_name = "MAPPING")]
    pub mapping: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `presets delete`
#[derive(Args)]
pub struct PresetDeleteArgs {
    /// Preset ID
    #[arg(value_name = "ID")]
    pub id: i64,
}
