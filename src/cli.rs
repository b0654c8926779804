//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

/// giturl - git repository address parser
///
/// Parse URLs, SCP-like shorthand and local paths the way git does, and print their canonical form.
#[derive(Parser, Debug)]
#[command(
    name = "giturl",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Parse and normalize git repository addresses",
    long_about = "giturl reads git repository addresses in any of the forms git accepts \
                  (ssh://, git://, http(s)://, ftp(s)://, rsync://, file:// URLs, \
                  [user@]host:path shorthand, and local paths) and prints their components \
                  or their canonical scheme:// form.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  giturl parse git@github.com:owner/repo.git\n    \
                  giturl normalize host.xz:/srv/repo.git /srv/local.git\n    \
                  giturl classify C:\\\\repo host.xz:repo\n    \
                  git remote | xargs -n1 git remote get-url | giturl normalize"
)]
pub struct Cli {
    /// Enable debug logging on stderr (GITURL_LOG overrides the filter)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, env = "GITURL_JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the components of addresses
    Parse(ParseArgs),

    /// Print the canonical form of addresses
    Normalize(NormalizeArgs),

    /// Show which grammar each address is written in
    Classify(ClassifyArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  SCP-like shorthand:\n    giturl parse user@host.xz:path/to/repo.git\n\n\
                  URL with port:\n    giturl parse ssh://host.xz:2222/repo.git\n\n\
                  As JSON:\n    giturl --json parse /srv/git/repo.git")]
pub struct ParseArgs {
    /// Addresses to parse
    #[arg(required = true, value_name = "ADDRESS")]
    pub inputs: Vec<String>,

    /// Reject URLs whose scheme is not a git transport
    #[arg(long, env = "GITURL_STRICT")]
    pub strict: bool,
}

/// Arguments for the normalize command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Normalize arguments:\n    giturl normalize host.xz:repo.git\n\n\
                  Normalize newline-separated addresses from stdin:\n    \
                  cat remotes.txt | giturl normalize")]
pub struct NormalizeArgs {
    /// Addresses to normalize (read from stdin, one per line, when omitted)
    #[arg(value_name = "ADDRESS")]
    pub inputs: Vec<String>,

    /// Reject URLs whose scheme is not a git transport
    #[arg(long, env = "GITURL_STRICT")]
    pub strict: bool,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Addresses to classify
    #[arg(required = true, value_name = "ADDRESS")]
    pub inputs: Vec<String>,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    giturl completions --shell bash \
                  > ~/.local/share/bash-completion/completions/giturl\n\n\
                  Generate zsh completions:\n    giturl completions --shell zsh \
                  > ~/.zfunc/_giturl\n\n\
                  Generate fish completions:\n    giturl completions --shell fish \
                  > ~/.config/fish/completions/giturl.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
