use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".sales_pace";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.sales_pace`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SALES_PACE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Location of the persisted configuration inside `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Sibling temp path used for write-then-rename saves (`ledger.csv` -> `ledger.csv.tmp`).
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_keeps_original_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/vendas.csv")),
            PathBuf::from("/data/vendas.csv.tmp")
        );
        assert_eq!(
            tmp_path(Path::new("/data/ledger")),
            PathBuf::from("/data/ledger.tmp")
        );
    }
}
