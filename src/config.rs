use crate::consts::{DEFAULT_UCD_PATH, THREADS_VAR, UCD_PATH_VAR};
use crate::error::Result;
use crate::range::RangeTable;
use crate::ucd;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of `EastAsianWidth.txt`.
    pub ucd_path: PathBuf,
    /// Worker count for the audit. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            ucd_path: PathBuf::from(DEFAULT_UCD_PATH),
            threads: None,
        }
    }
}

impl Config {
    /// Reads `TYPEWIDTH_UCD` and `TYPEWIDTH_THREADS`, falling back to the
    /// defaults for anything unset or unusable.
    pub fn from_env() -> Config {
        Config::from_vars(env::var(UCD_PATH_VAR).ok(), env::var(THREADS_VAR).ok())
    }

    fn from_vars(ucd_path: Option<String>, threads: Option<String>) -> Config {
        let mut config = Config::default();
        if let Some(path) = ucd_path.filter(|p| !p.trim().is_empty()) {
            config.ucd_path = PathBuf::from(path);
        }
        config.threads = threads.and_then(|raw| parse_threads(&raw));
        config
    }

    /// Parses the configured file into a shareable table.
    pub fn load_table(&self) -> Result<Arc<RangeTable>> {
        ucd::parse_file(&self.ucd_path).map(Arc::new)
    }
}

fn parse_threads(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<usize>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(_) => {
            warn!("ignoring {}={:?}: not a thread count", THREADS_VAR, raw);
            None
        }
    }
}
