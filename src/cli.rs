use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches configuration.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Music catalog client
///
/// Lists songs and beats, looks up single records and the vocal takes
/// recorded over a beat. The API base URL comes from the config file or
/// the CATALOG_API_URL environment variable (a .env file is honoured).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print records as pretty JSON instead of text lines.
    #[arg(long, global = true, help_heading = "Display Options")]
    pub json: bool,

    /// Override the request timeout (seconds) for this run.
    #[arg(long = "timeout", global = true, value_name = "SECONDS")]
    pub timeout_seconds: Option<u64>,

    /// Persist a new API base URL in the config file.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_URL")]
    pub new_api_url: Option<String>,

    /// Persist a custom log file path in the config file.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every track of a collection (e.g. music, beats)
    List {
        /// Collection selector
        kind: String,
    },
    /// Show a single track
    Show {
        /// Collection selector (e.g. beat, music)
        kind: String,
        /// Record id
        id: String,
    },
    /// List vocal takes recorded over a beat
    Vocals {
        /// Beat id
        beat_id: String,
    },
    /// Show a beat together with its vocal takes
    Beat {
        /// Beat id
        id: String,
    },
}
