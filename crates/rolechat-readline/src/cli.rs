use std::path::PathBuf;

use clap::Parser;
use rolechat_core::{ChatConfig, Role};

#[derive(Parser, Debug)]
#[command(name = "rolechat")]
#[command(about = "Role-switching chat in the terminal", long_about = None)]
pub struct Cli {
    /// Enter the chat directly as this role (admin, radiologist, center)
    #[arg(long, value_parser = parse_role)]
    pub role: Option<Role>,

    /// Config file to use instead of the per-user one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty transcript
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_role(value: &str) -> Result<Role, String> {
    Role::parse(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> rolechat_core::Result<ChatConfig> {
        let mut config = match &self.config {
            Some(path) => ChatConfig::load(path)?,
            None => ChatConfig::load_or_default()?,
        };
        if self.no_seed {
            config.transcript.seed = false;
        }
        if self.no_color {
            config.display.color = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["rolechat", "--role", "Center", "--no-seed"]).unwrap();
        assert_eq!(cli.role, Some(Role::Center));
        assert!(cli.no_seed);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(Cli::try_parse_from(["rolechat", "--role", "nurse"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = Cli::try_parse_from(["rolechat", "--config", "/nonexistent/rolechat.toml"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
