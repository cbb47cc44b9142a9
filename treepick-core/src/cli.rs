use std::path::PathBuf;

use clap::Parser;

use crate::{config::LogLevel, fs::tree_builder::normalize_root};

/// Browse a directory tree in the terminal and print the chosen file's path.
#[derive(Parser, Debug, Clone)]
#[command(name = "treepick", version)]
pub struct Cli {
    /// Directory to browse
    #[arg(default_value = ".")]
    pub path: String,

    /// Overrides `log_level` from the config file
    #[arg(long, short, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Read settings from this file instead of the default location
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The browse target with trailing separators removed.
    pub fn root(&self) -> PathBuf {
        normalize_root(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["treepick"]).unwrap();
        assert_eq!(cli.root(), PathBuf::from("."));
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let cli = Cli::try_parse_from(["treepick", "src/", "-l", "debug"]).unwrap();
        assert_eq!(cli.root(), PathBuf::from("src"));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn config_flag() {
        let cli = Cli::try_parse_from(["treepick", "--config", "/tmp/tp.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tp.toml")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
