//! Platform directories for configuration and trace output.
//!
//! Both resolve through `dirs` and fall back to the system temp directory on
//! platforms that report no home.

use std::path::PathBuf;

/// Subdirectory name used under each platform directory.
pub const APP_DIR: &str = "cocktaildb";

/// File name of the configuration file inside [`config_dir`].
pub const CONFIG_FILE: &str = "config.toml";

/// Directory for trace files, e.g. `~/.local/share/cocktaildb` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Directory holding the configuration file, e.g. `~/.config/cocktaildb`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Path of the configuration file read when `--config` is not given.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_namespaced() {
        assert!(data_dir().ends_with(APP_DIR));
        assert!(default_config_path().ends_with("cocktaildb/config.toml"));
    }
}
