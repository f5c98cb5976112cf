use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::search::pagination::MAX_PAGES;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search the TMDB movie catalog from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse search results in a fullscreen grid
    #[command(visible_alias = "b")]
    Browse {
        /// Query to search for on startup
        query: Option<String>,
    },

    /// Search once and print a page of results
    #[command(visible_alias = "s")]
    Search {
        /// Movie title or keywords
        query: String,

        /// Result page to print (1-500)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (tmdb.token, api.base_url, api.language, api.timeout_secs,
        /// cache.stale_secs, log.level)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (tmdb.token, api.base_url, api.language, api.timeout_secs,
        /// cache.stale_secs, log.level)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_search,
        };

        match self {
            Commands::Browse { query } => cmd_browse(query).await,
            Commands::Search { query, page, json } => cmd_search(&query, page, json).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_page(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(page) if (1..=MAX_PAGES).contains(&page) => Ok(page),
        _ => Err(format!(
            "Invalid page '{s}'. Must be a number from 1 to {MAX_PAGES}"
        )),
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "marquee", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_page_accepts_range() {
        assert_eq!(parse_page("1").unwrap(), 1);
        assert_eq!(parse_page("500").unwrap(), 500);
    }

    #[test]
    fn test_parse_page_rejects_invalid() {
        assert!(parse_page("0").is_err());
        assert!(parse_page("501").is_err());
        assert!(parse_page("-1").is_err());
        assert!(parse_page("two").is_err());

        let err = parse_page("0").unwrap_err();
        assert!(err.contains("1 to 500"), "got: {err}");
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["marquee", "search", "alien"]).unwrap();
        match cli.command {
            Commands::Search { query, page, json } => {
                assert_eq!(query, "alien");
                assert_eq!(page, 1);
                assert!(!json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_search_page_and_json() {
        let cli =
            Cli::try_parse_from(["marquee", "s", "the thing", "--page", "3", "--json"]).unwrap();
        match cli.command {
            Commands::Search { query, page, json } => {
                assert_eq!(query, "the thing");
                assert_eq!(page, 3);
                assert!(json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_browse_query_is_optional() {
        let cli = Cli::try_parse_from(["marquee", "browse"]).unwrap();
        assert!(matches!(cli.command, Commands::Browse { query: None }));

        let cli = Cli::try_parse_from(["marquee", "b", "heat"]).unwrap();
        match cli.command {
            Commands::Browse { query } => assert_eq!(query.as_deref(), Some("heat")),
            _ => panic!("expected browse"),
        }
    }

    #[test]
    fn test_config_set_parses() {
        let cli =
            Cli::try_parse_from(["marquee", "config", "set", "cache.stale_secs", "60"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Set { key, value, json },
            } => {
                assert_eq!(key, "cache.stale_secs");
                assert_eq!(value, "60");
                assert!(!json);
            }
            _ => panic!("expected config set"),
        }
    }
}
