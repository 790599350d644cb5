use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use demolens_packet::AnalyzerConfig;

/** ARG PARSER **/
#[derive(Parser, Debug)]
#[clap(version)]
#[command(
    name = "demolens",
    about = "Analyze Source 2 demo fragments chunk by chunk and packet by packet",
    long_about = None,
    bin_name = "demolens",
)]
pub struct Args {
    #[clap(short('c'), long = "config", value_name = "CONFIG_PATH", global = true)]
    pub config_path: Option<String>,
    #[clap(short('q'), long = "quiet", action = clap::ArgAction::SetTrue, global = true)]
    pub quiet: bool,
    #[clap(short('l'), long = "loglevel", value_name = "LOG_LEVEL", global = true)]
    /// Sets the log level for the application.
    ///
    /// Valid values are, in order of verbosity:
    ///
    /// `off`, `error`, `warn`, `info`, `debug`, `trace`
    ///
    /// Default is "info". `RUST_LOG` takes precedence.
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, ClapArgs)]
pub struct ArgsAnalyze {
    #[clap(
        value_name = "FILE",
        required = true,
        help = "Fragment files or directories of fragments"
    )]
    pub input_paths: Vec<String>,
    #[clap(
        short('o'),
        long = "output",
        value_name = "OUTPUT",
        help = "Output file path, stdout when omitted"
    )]
    pub output_path: Option<String>,
    #[clap(short('f'), long = "format", value_name = "FORMAT", help = "Output format")]
    pub format: Option<OutputFormat>,
    #[clap(
        long = "unwrap-envelope",
        help = "Walk the packet stream inside CDemoPacket envelopes",
        default_value = "false"
    )]
    pub unwrap_envelope: bool,
    #[clap(
        long = "max-packets",
        value_name = "COUNT",
        help = "Stop walking a chunk after this many packets"
    )]
    pub max_packets: Option<usize>,
    #[clap(
        long = "no-decode",
        help = "Walk packets without decoding their payloads",
        default_value = "false"
    )]
    pub no_decode: bool,
    #[clap(
        long = "no-packets",
        help = "Omit per-packet lines from text output",
        default_value = "false"
    )]
    pub no_packets: bool,
}

impl ArgsAnalyze {
    /// Overlay command-line flags on the configured analyzer options.
    pub fn apply(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if self.unwrap_envelope {
            config = config.with_unwrap_packet_envelope(true);
        }
        if self.no_decode {
            config = config.with_decode_packets(false);
        }
        if let Some(max) = self.max_packets {
            config = config.with_max_packets_per_chunk(max);
        }
        config
    }
}

#[derive(Debug, ClapArgs)]
pub struct ArgsTypes {
    #[clap(
        short('r'),
        long = "registry",
        value_name = "NAME",
        help = "Only list this registry, e.g. SVC_Messages"
    )]
    pub registry: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration and where it came from
    Show,
    /// Write a configuration file with default values
    Init {
        #[clap(long = "force", help = "Overwrite an existing file")]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze demo fragments
    Analyze(ArgsAnalyze),
    /// List the known message types
    Types(ArgsTypes),
    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

/** ARG PARSER END**/
