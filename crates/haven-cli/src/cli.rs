use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use haven_core::Source;

#[derive(Parser)]
#[command(name = "haven")]
#[command(about = "Save links and browse them as a timeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// CLI profile name (selects API base URL and stored session)
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Store the session in a JSON file instead of the OS keychain
    #[arg(long, global = true, value_name = "PATH")]
    pub session_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Create a new account
    Signup {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show whether the profile is signed in
    Status,
    /// Save a link
    #[command(alias = "save")]
    Add {
        /// Link to save (scheme optional, e.g. google.com)
        url: String,
        /// Channel the link came from
        #[arg(long, value_enum, default_value_t = SourceArg::Web)]
        source: SourceArg,
        /// Optional category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show saved links grouped by day
    List {
        /// Only show this category ("All", "Uncategorized", or a name)
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the categories in use
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Opt in to SMS updates
    OptIn {
        /// Phone number in international format
        phone: String,
    },
    /// Show the SMS terms and conditions
    Terms,
    /// Configure CLI profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SourceArg {
    Web,
    Email,
    Sms,
}

impl From<SourceArg> for Source {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Web => Self::Web,
            SourceArg::Email => Self::Email,
            SourceArg::Sms => Self::Sms,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update profile config
    Init {
        /// Profile name to initialize
        #[arg(long, value_name = "NAME")]
        profile: Option<String>,
        /// Link Haven API base URL
        #[arg(long, value_name = "URL")]
        api_base_url: Option<String>,
        /// Keep current active profile instead of activating this one
        #[arg(long)]
        no_activate: bool,
    },
    /// Show the resolved profile configuration
    Show,
}
