use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MARQUEE_CONFIG";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "marquee", "marquee")
}

/// Returns the path to the config file.
///
/// Resolution order:
/// 1. `MARQUEE_CONFIG` environment variable (if set and non-empty)
/// 2. Platform config directory + `config.yaml`
/// 3. `.marquee/config.yaml` in the current directory
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }

    match project_dirs() {
        Some(dirs) => dirs.config_dir().join("config.yaml"),
        None => PathBuf::from(".marquee").join("config.yaml"),
    }
}

/// Returns the directory used for the TUI log file.
pub fn data_dir() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".marquee"),
    }
}

/// Returns the path of the TUI log file.
pub fn log_path() -> PathBuf {
    data_dir().join("marquee.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_path_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(CONFIG_ENV_VAR, "/custom/path/config.yaml") };
        let path = config_path();
        assert_eq!(path, PathBuf::from("/custom/path/config.yaml"));
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
    }

    #[test]
    #[serial]
    fn test_config_path_default_is_yaml() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
        let path = config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.yaml"));
    }

    #[test]
    fn test_log_path_inside_data_dir() {
        assert!(log_path().starts_with(data_dir()));
    }
}
