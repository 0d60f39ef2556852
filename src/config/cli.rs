use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the meninas-grid binary.
#[derive(Debug, Parser)]
#[command(
    name = "meninas-grid",
    version,
    about = "Render the Meninas.grid page shell"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "MENINAS_GRID_CONFIG_FILE",
        value_name = "PATH"
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the opening page markup (head, header, navigation, open <main>).
    Shell(ShellArgs),
    /// Wrap page body markup with the shell and the closing footer.
    Document(DocumentArgs),
}

impl Command {
    pub fn logging_overrides(&self) -> &LoggingOverrides {
        match self {
            Command::Shell(args) => &args.logging,
            Command::Document(args) => &args.logging,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Shell(ShellArgs::default())
    }
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ShellArgs {
    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Page title appended to the site name; omitted means empty.
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Write the markup to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct DocumentArgs {
    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Page title appended to the site name; omitted means empty.
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// File holding the page body markup; stdin is read when omitted.
    #[arg(long = "body-file", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub body_file: Option<PathBuf>,

    /// Write the markup to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
