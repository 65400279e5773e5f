use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "refmark")]
#[command(author, version)]
#[command(about = "Link issue and wiki references in commit messages")]
#[command(
    long_about = "Refmark finds tracker references in commit messages (\"fixes #12\", \
    \"refs 1,2&3\", a bare \"#42\", CamelCase wiki names) and wraps them in links to the \
    tracker, leaving the rest of the message untouched."
)]
#[command(after_help = "\
EXAMPLES:

    # Annotate a commit message from stdin
    git log -1 --format=%B | refmark annotate --base-url http://tracker.example/

    # Annotate several messages at once
    refmark annotate msg-1.txt msg-2.txt

    # Show the compiled rules for a keyword list
    refmark rules --keywords 'refs,fixes,closes'

    # Inspect planned links without rendering them
    refmark scan message.txt

CONFIGURATION:

Refmark looks for configuration files in this order:
  1. Explicit --config path
  2. refmark.toml or .refmark.toml in current/parent directories
  3. ~/.config/refmark/config.toml (XDG)
  4. Built-in defaults

Example .refmark.toml:

    base_url = \"http://tracker.example/\"
    version_number = \"1.1.0\"
    keywords = \"*,refs,references,IssueID,fixes,closes\"
    project = \"my-project\"
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, refmark will \
        search for .refmark.toml or refmark.toml in the current directory and its parents, \
        then fall back to ~/.config/refmark/config.toml."
    )]
    pub config: Option<PathBuf>,
}

/// Settings that override the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct TrackerArgs {
    /// Tracker base URL
    #[arg(long, env = "REFMARK_BASE_URL")]
    pub base_url: Option<String>,

    /// Tracker version (X.Y.Z); versions before 1.2.0 use issues/show/<n> URLs
    #[arg(long, env = "REFMARK_VERSION_NUMBER")]
    pub version_number: Option<String>,

    /// Comma separated reference keywords; `*` matches a bare #<number>
    #[arg(long, env = "REFMARK_KEYWORDS")]
    pub keywords: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate commit messages with tracker links
    #[command(
        long_about = "Annotate one or more commit messages with links to the tracker. Reads \
        stdin when no file is given and writes the annotated text to stdout."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Annotate stdin
    echo 'fixes #12' | refmark annotate --base-url http://tracker.example/

    # Annotate files; each output is headed by ==> FILE <==
    refmark annotate a.txt b.txt

    # Keep '&', '<' and '>' as they are
    refmark annotate --no-escape message.txt")]
    Annotate {
        /// Input files (stdin if none)
        #[arg(help = "Input file paths")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        tracker: TrackerArgs,

        /// Copy text without XML-escaping it
        #[arg(long)]
        no_escape: bool,
    },
    /// Print the compiled reference and wiki rules
    #[command(
        long_about = "Print the patterns and link templates compiled from the configured \
        keywords and tracker version. Useful for checking which words trigger links."
    )]
    Rules {
        /// Tracker version (X.Y.Z)
        #[arg(long, env = "REFMARK_VERSION_NUMBER")]
        version_number: Option<String>,

        /// Comma separated reference keywords
        #[arg(long, env = "REFMARK_KEYWORDS")]
        keywords: Option<String>,
    },
    /// Show the links that would be inserted, without rendering them
    #[command(
        long_about = "Scan a commit message and print every planned link with its byte \
        range in the original text. Reads stdin when no file is given."
    )]
    Scan {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        #[command(flatten)]
        tracker: TrackerArgs,
    },
    /// Print the tracker project page URL
    ProjectUrl {
        /// Tracker base URL
        #[arg(long, env = "REFMARK_BASE_URL")]
        base_url: Option<String>,

        /// Tracker project identifier
        #[arg(long, env = "REFMARK_PROJECT")]
        project: Option<String>,
    },
}
