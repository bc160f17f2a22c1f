use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::utils::{app_data_dir, ensure_dir, store_dir_in};

use super::{KeyValueStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// File-per-key store rooted in the application data directory. Each value
/// lands in `<root>/store/<canonical key>.json`, written atomically.
#[derive(Clone)]
pub struct JsonKvStore {
    values_dir: PathBuf,
}

impl JsonKvStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        let values_dir = store_dir_in(&base);
        ensure_dir(&values_dir)?;
        Ok(Self { values_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn value_path(&self, key: &str) -> PathBuf {
        self.values_dir.join(format!("{}.json", canonical_key(key)))
    }
}

impl KeyValueStore for JsonKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        let tmp = tmp_path(&path);
        write_all(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// Keys carry `@` and `:` separators; file names keep only lowercase
/// alphanumerics. `@carteira:transactions_user:maria` → `_carteira_transactions_user_maria`.
fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "value".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
