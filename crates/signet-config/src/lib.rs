#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Configuration for the signet daemon.
//!
//! # Usage
//!
//! ```rust,no_run
//! use signet_config::Config;
//!
//! let resolved = Config::load(None).unwrap();
//! println!("listening on {}", resolved.config.server.listen_addr);
//! ```
//!
//! # Configuration Precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Command-line flags** (applied by the binary after loading)
//! 2. **Explicit file** passed with `--config`
//! 3. **User** (`~/.signet/config.toml`)
//! 4. **Environment variables** (`SIGNET_*`), fallback only
//! 5. **Embedded defaults** (`defaults.toml` compiled into binary)
//!
//! Environment variables only fill fields that no file set.

/// Environment variable fallback resolution.
pub mod env;
/// Configuration error types.
pub mod error;
/// Configuration file discovery and loading.
pub mod loader;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

use std::path::Path;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLayer, FieldSources, ResolvedConfig};
pub use types::*;

impl Config {
    /// Load configuration with the full precedence chain.
    ///
    /// `explicit` is the file given on the command line, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any config file is malformed or the final
    /// configuration fails validation.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<ResolvedConfig> {
        loader::load(explicit, None)
    }

    /// Load configuration with an explicit signet home directory
    /// (the directory holding `config.toml`).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any config file is malformed or the final
    /// configuration fails validation.
    pub fn load_with_home(explicit: Option<&Path>, home: &Path) -> ConfigResult<ResolvedConfig> {
        loader::load(explicit, Some(home))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_home_reads_user_file() {
        let home = tempfile::tempdir().unwrap();
        let user = home.path().join("config.toml");
        std::fs::write(&user, "[server]\nlisten_addr = \"127.0.0.1:7100\"\n").unwrap();

        let resolved = Config::load_with_home(None, home.path()).unwrap();
        assert_eq!(resolved.config.server.listen_addr, "127.0.0.1:7100");
        assert_eq!(resolved.loaded_files, [user.display().to_string()]);
        assert_eq!(
            resolved.field_sources.get("server.listen_addr"),
            Some(&ConfigLayer::User)
        );
    }

    #[test]
    fn test_load_with_home_missing_explicit_file_fails() {
        let home = tempfile::tempdir().unwrap();
        let missing = home.path().join("absent.toml");

        assert!(Config::load_with_home(Some(&missing), home.path()).is_err());
    }
}
