use abook::config::DEFAULT_CONFIG_FILENAME;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version = get_version())]
#[command(about = "Interactive address book for the terminal", long_about = None)]
pub struct Cli {
    /// Settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Command to run before the first prompt (overrides the settings file)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Verbose logging on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
