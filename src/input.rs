use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, Stage, StampError};

/// Read template fragments from disk, keeping their order.
pub fn load_fragments(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| {
            std::fs::read_to_string(path).map_err(|e| StampError::Io {
                stage: Stage::Configure,
                context: format!("reading template {}", path.display()),
                source: e,
            })
        })
        .collect()
}

/// Load render data from a JSON file, or TOML when the extension is `.toml`.
pub fn load_data(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| StampError::Io {
        stage: Stage::Configure,
        context: format!("reading data {}", path.display()),
        source: e,
    })?;

    let parsed = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str::<Value>(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| StampError::DataParse {
        path: path.to_path_buf(),
        reason,
    })
}
