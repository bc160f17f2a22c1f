use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".carteira_core";
const STORE_DIR: &str = "store";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.carteira_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CARTEIRA_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the key-value store entries under the given base.
pub fn store_dir_in(base: &Path) -> PathBuf {
    base.join(STORE_DIR)
}

/// Path to the configuration file under the given base.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("carteira_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
