//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::Locale;
use crate::application::ThemeMode;

/// Configure a home-server monitoring integration: connection, polling interval and monitored domains
#[derive(Parser, Debug)]
#[command(name = "homemon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Settings file (default: ~/.config/homemon/homemon.toml)
    #[arg(short = 'c', long = "config", global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    /// Native config file of the integration (overrides settings)
    #[arg(short = 'n', long, global = true, env = "HOMEMON_NATIVE_CONFIG", value_hint = ValueHint::FilePath)]
    pub native_config: Option<PathBuf>,

    /// UI language
    #[arg(long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Color theme
    #[arg(long, global = true)]
    pub theme: Option<ThemeMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the whole form: connection, polling and domains
    Show {
        /// Include domain descriptions
        #[arg(short, long)]
        describe: bool,
    },

    /// Show the domain tree
    Domains {
        /// Collapse these domains (repeatable)
        #[arg(long, value_name = "ID")]
        collapse: Vec<String>,
        /// Collapse every domain, then expand the given ones again
        #[arg(long)]
        collapse_all: bool,
        /// Include domain descriptions
        #[arg(short, long)]
        describe: bool,
    },

    /// Enable domains (with their subdomains and parents)
    Enable {
        /// Domain ids
        #[arg(required_unless_present = "all")]
        ids: Vec<String>,
        /// Enable every domain
        #[arg(long, conflicts_with = "ids")]
        all: bool,
    },

    /// Disable domains (with their subdomains; parents left empty are disabled too)
    Disable {
        /// Domain ids
        #[arg(required_unless_present = "all")]
        ids: Vec<String>,
        /// Disable every domain
        #[arg(long, conflicts_with = "ids")]
        all: bool,
    },

    /// Restore the default domain selection
    Reset,

    /// Print enabled domain ids in tree order
    Export,

    /// Set a connection or polling field
    Set {
        #[command(subcommand)]
        field: SetCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Set subcommands
#[derive(Subcommand, Debug)]
pub enum SetCommands {
    /// Server base URL
    BaseUrl {
        #[arg(value_hint = ValueHint::Url)]
        url: String,
    },
    /// API token (read from stdin when omitted)
    Token { token: Option<String> },
    /// Accept self-signed TLS certificates
    SelfSigned {
        #[arg(action = ArgAction::Set)]
        allow: bool,
    },
    /// Polling interval in seconds (min 10; invalid input falls back to 60)
    Interval {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show settings file locations
    Path,
    /// Print a settings template
    Template,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::from_code(value).ok_or_else(|| format!("unsupported locale: {value} (expected en or de)"))
}
