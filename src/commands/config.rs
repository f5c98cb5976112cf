//! Configuration commands for managing marquee settings.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Display a single configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{MarqueeError, Result};

const VALID_KEYS: &str =
    "tmdb.token, api.base_url, api.language, api.timeout_secs, cache.stale_secs, log.level";

/// Reject underscore notation for section names with a dot-notation suggestion
fn validate_config_key(key: &str) -> Result<&str> {
    if let Some((section, _)) = key.split_once('_')
        && !section.contains('.')
    {
        let dot_version = key.replacen('_', ".", 1);
        return Err(MarqueeError::Config(format!(
            "invalid config key '{key}'. Use dot notation: '{dot_version}'"
        )));
    }
    Ok(key)
}

fn unknown_key(key: &str) -> MarqueeError {
    MarqueeError::Config(format!(
        "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
    ))
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|_| {
        MarqueeError::Config(format!(
            "invalid value '{value}' for {key}. Expected a whole number of seconds"
        ))
    })
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let token_configured = config.tmdb_token().is_some();

    let json_output = json!({
        "auth": {
            "tmdb_token_configured": token_configured,
        },
        "api": {
            "base_url": config.api.base_url,
            "language": config.api.language,
            "timeout_secs": config.api.timeout_secs,
        },
        "cache": {
            "stale_secs": config.cache.stale_secs,
        },
        "log": {
            "level": config.log.level,
        },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    // Auth status (don't show the actual token)
    let token_status = match config.tmdb_token() {
        Some(token) => format!("{} ({})", "configured".green(), mask_sensitive_value(&token)),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("{}:\n", "auth".cyan()));
    text_output.push_str(&format!("  tmdb.token: {token_status}\n\n"));

    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  base_url: {}\n", config.api.base_url));
    text_output.push_str(&format!(
        "  language: {}\n",
        config
            .api
            .language
            .as_deref()
            .map(str::to_string)
            .unwrap_or_else(|| "default".dimmed().to_string())
    ));
    text_output.push_str(&format!("  timeout_secs: {}\n\n", config.api.timeout_secs));

    text_output.push_str(&format!("{}:\n", "cache".cyan()));
    text_output.push_str(&format!("  stale_secs: {}\n\n", config.cache.stale_secs));

    text_output.push_str(&format!("{}:\n", "log".cyan()));
    text_output.push_str(&format!(
        "  level: {}\n\n",
        config
            .log
            .level
            .as_deref()
            .map(str::to_string)
            .unwrap_or_else(|| "warn".dimmed().to_string())
    ));

    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;

    // Sensitive values are never echoed back.
    let shown = match key {
        "tmdb.token" => {
            if value.trim().is_empty() {
                return Err(MarqueeError::Config("tmdb.token cannot be empty".to_string()));
            }
            config.set_tmdb_token(value.trim().to_string());
            None
        }
        "api.base_url" => {
            url::Url::parse(value).map_err(|e| {
                MarqueeError::Config(format!("invalid value '{value}' for api.base_url: {e}"))
            })?;
            config.api.base_url = value.trim_end_matches('/').to_string();
            Some(json!(config.api.base_url))
        }
        "api.language" => {
            config.api.language = Some(value.to_string()).filter(|v| !v.is_empty());
            Some(json!(config.api.language))
        }
        "api.timeout_secs" => {
            config.api.timeout_secs = parse_secs(key, value)?;
            Some(json!(config.api.timeout_secs))
        }
        "cache.stale_secs" => {
            config.cache.stale_secs = parse_secs(key, value)?;
            Some(json!(config.cache.stale_secs))
        }
        "log.level" => {
            config.log.level = Some(value.to_string()).filter(|v| !v.is_empty());
            Some(json!(config.log.level))
        }
        _ => return Err(unknown_key(key)),
    };

    config.save()?;

    let text_output = match &shown {
        Some(v) => format!("Set {} to {}", key.cyan(), display_value(v)),
        None => format!("Set {}", key.cyan()),
    };
    let mut json_output = json!({
        "action": "config_set",
        "key": key,
        "success": true,
    });
    if let Some(v) = shown {
        json_output["value"] = v;
    }

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "default".to_string(),
        other => other.to_string(),
    }
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;

    let (json_output, text_output) = match key {
        "tmdb.token" => {
            let Some(token) = config.tmdb_token() else {
                return Err(MarqueeError::Config("tmdb.token not set".to_string()));
            };
            let masked = mask_sensitive_value(&token);
            let json = json!({
                "key": key,
                "value": masked,
                "configured": true,
                "masked": true,
            });
            let text = format!("{masked} (masked - showing first 2 and last 2 characters)");
            (json, text)
        }
        "api.base_url" => (
            json!({ "key": key, "value": config.api.base_url }),
            config.api.base_url.clone(),
        ),
        "api.language" => match &config.api.language {
            Some(language) => (
                json!({ "key": key, "value": language, "configured": true }),
                language.clone(),
            ),
            None => return Err(MarqueeError::Config("api.language not set".to_string())),
        },
        "api.timeout_secs" => (
            json!({ "key": key, "value": config.api.timeout_secs }),
            config.api.timeout_secs.to_string(),
        ),
        "cache.stale_secs" => (
            json!({ "key": key, "value": config.cache.stale_secs }),
            config.cache.stale_secs.to_string(),
        ),
        "log.level" => match &config.log.level {
            Some(level) => (
                json!({ "key": key, "value": level, "configured": true }),
                level.clone(),
            ),
            None => return Err(MarqueeError::Config("log.level not set".to_string())),
        },
        _ => return Err(unknown_key(key)),
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_key_dot_notation() {
        assert!(validate_config_key("tmdb.token").is_ok());
        assert!(validate_config_key("api.timeout_secs").is_ok());
        assert!(validate_config_key("cache.stale_secs").is_ok());
    }

    #[test]
    fn test_validate_config_key_suggests_dots() {
        let err = validate_config_key("tmdb_token").unwrap_err();
        assert!(err.to_string().contains("'tmdb.token'"));

        let err = validate_config_key("api_timeout_secs").unwrap_err();
        assert!(err.to_string().contains("'api.timeout_secs'"));
    }

    #[test]
    fn test_mask_sensitive_value_ascii() {
        assert_eq!(mask_sensitive_value("abcdef"), "ab...ef");
        assert_eq!(mask_sensitive_value("12345678"), "12...78");
    }

    #[test]
    fn test_mask_sensitive_value_short() {
        assert_eq!(mask_sensitive_value("abcd"), "****");
        assert_eq!(mask_sensitive_value("a"), "****");
        assert_eq!(mask_sensitive_value(""), "****");
    }

    #[test]
    fn test_mask_sensitive_value_multibyte_utf8() {
        assert_eq!(mask_sensitive_value("日本語中文"), "日本...中文");
        assert_eq!(mask_sensitive_value("éàöü"), "****");
    }

    #[test]
    fn test_parse_secs() {
        assert_eq!(parse_secs("cache.stale_secs", "0").unwrap(), 0);
        assert_eq!(parse_secs("cache.stale_secs", "600").unwrap(), 600);
        let err = parse_secs("cache.stale_secs", "ten").unwrap_err();
        assert!(err.to_string().contains("ten"));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("en-US")), "en-US");
        assert_eq!(display_value(&json!(30)), "30");
        assert_eq!(display_value(&serde_json::Value::Null), "default");
    }
}
