use clap::{Parser, Subcommand, ValueEnum};
use versecopy::commands::copy::CopyFormat;

/// Returns the version string, with the git hash for builds made from a checkout.
/// Format: "v0.3.2" or "v0.3.2 (abc1234)"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} ({})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "versecopy",
    bin_name = "versecopy",
    version = get_version(),
    after_help = "Run without a command to start the interactive shell."
)]
#[command(
    about = "Compare a verse across translations and copy it as a table or USFM",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verse API base URL (overrides VERSECOPY_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub api_url: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a reference and print every translation
    #[command(alias = "l")]
    Lookup {
        /// Reference, e.g. "jn 3 16" or "1 Cor 13:4"
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,

        /// How to print the result
        #[arg(short, long, value_enum, default_value_t = OutputFormat::List)]
        format: OutputFormat,

        /// Also copy the result to the clipboard
        #[arg(short, long, value_enum)]
        copy: Option<CopyArg>,
    },

    /// Start the interactive shell (the default)
    #[command(alias = "sh")]
    Shell,

    /// List the books, codes and abbreviations the parser understands
    Books,

    /// Get or set configuration
    Config {
        /// Configuration key (api-url, translation-order, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered list for reading
    List,
    /// HTML table
    Table,
    /// USFM table rows
    Tagged,
    /// JSON array of verses
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CopyArg {
    /// Rich table for word processors
    #[value(alias = "word")]
    Table,
    /// USFM table rows for Paratext
    #[value(aliases = ["paratext", "usfm"])]
    Tagged,
}

impl From<CopyArg> for CopyFormat {
    fn from(arg: CopyArg) -> Self {
        match arg {
            CopyArg::Table => CopyFormat::Table,
            CopyArg::Tagged => CopyFormat::Tagged,
        }
    }
}

impl CopyArg {
    /// Parses the shell's `:copy` argument, accepting the same aliases as clap.
    pub fn parse_word(word: &str) -> Option<Self> {
        CopyArg::from_str(word, true).ok()
    }
}
