//! File-backed plant store.
//!
//! One plant name per line, UTF-8, newline-terminated, slot 0 first.
//! Every save rewrites the whole file; soil values are never stored.
//! A missing file is not an error — it means "use the default single
//! slot".

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{info, warn};

use crate::app::ports::PlantStorePort;
use crate::error::StoreError;

/// Line-oriented plant-name store on the gateway's filesystem.
pub struct FilePlantStore {
    path: PathBuf,
}

impl FilePlantStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PlantStorePort for FilePlantStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let names: Vec<String> = text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect();
                info!("plant store: loaded {} name(s)", names.len());
                Ok(names)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => {
                warn!("plant store: read failed: {e}");
                Err(StoreError::ReadFailed)
            }
        }
    }

    fn save(&mut self, names: &[&str]) -> Result<(), StoreError> {
        let mut out = String::new();
        for name in names {
            out.push_str(name);
            out.push('\n');
        }
        fs::write(&self.path, out).map_err(|e| {
            warn!("plant store: rewrite failed: {e}");
            StoreError::WriteFailed
        })
    }
}
