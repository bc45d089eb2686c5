use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect the faultline error catalog
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "Inspect error kinds, translate ids and decode error bodies")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "FAULTLINE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every registered error kind
    Kinds {
        /// Language preference list used for messages
        #[arg(short = 'l', long, default_value = "en-US", env = "FAULTLINE_ACCEPT_LANGUAGE")]
        accept_language: String,
    },
    /// Print the default message of a kind
    Translate {
        /// Kind id
        id: u32,

        /// Language preference list used for the message
        #[arg(short = 'l', long, default_value = "en-US", env = "FAULTLINE_ACCEPT_LANGUAGE")]
        accept_language: String,
    },
    /// Decode a serialized error body and print the resolved kind
    Decode {
        /// File holding the body, stdin when omitted
        file: Option<PathBuf>,
    },
    /// Validate the configuration file and print the effective settings
    Check,
}
