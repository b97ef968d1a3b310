use anyhow::{Context, Result};
use gamez_core::{HubData, HubDataError, HubDataSource, StaticData};
use std::fs;
use std::path::{Path, PathBuf};

/// Datasets read from `<root>/<name>.json`, for checking edited data before it ships.
#[derive(Debug, Clone)]
pub struct DirData {
    root: PathBuf,
}

impl DirData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl HubDataSource for DirData {
    type Error = HubDataError;

    fn dataset(&self, name: &str) -> Result<String, Self::Error> {
        let path = self.root.join(format!("{name}.json"));
        fs::read_to_string(&path).map_err(|err| HubDataError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}

/// Embedded datasets unless a directory override is given.
pub fn load_hub_data(data_dir: Option<&Path>) -> Result<HubData> {
    match data_dir {
        Some(dir) => DirData::new(dir)
            .load_all()
            .with_context(|| format!("loading hub data from {}", dir.display())),
        None => StaticData.load_all().context("loading embedded hub data"),
    }
}
