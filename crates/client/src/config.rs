//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::labels::Locale;

/// Settings for one client run, independent of the search configuration
/// stored alongside the catalogs.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `characters.ron`, `machines.ron` and `config.toml`.
    pub data_dir: PathBuf,
    pub locale: Locale,
    /// Maximum rows printed by `search`.
    pub result_limit: usize,
}

impl ClientConfig {
    pub const DEFAULT_RESULT_LIMIT: usize = 50;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `KART_DATA_DIR` - Catalog directory (default: `./data`, else the platform data dir)
    /// - `KART_LANG` - Output language, `en` or `ja` (default: en)
    /// - `KART_RESULT_LIMIT` - Rows shown by `search` (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("KART_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(locale) = read_env::<Locale>("KART_LANG") {
            config.locale = locale;
        }

        if let Some(limit) = read_env::<usize>("KART_RESULT_LIMIT") {
            config.result_limit = limit.max(1);
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            locale: Locale::default(),
            result_limit: Self::DEFAULT_RESULT_LIMIT,
        }
    }
}

/// `./data` when it exists, otherwise the platform data directory.
///
/// - Linux: `~/.local/share/kart`
/// - macOS: `~/Library/Application Support/kart`
/// - Windows: `%APPDATA%\kart`
fn default_data_dir() -> PathBuf {
    let local = PathBuf::from("data");
    if local.is_dir() {
        return local;
    }

    directories::ProjectDirs::from("", "", "kart")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or(local)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
