//! JSON configuration selecting the storage order
//!
//! ```json
//! { "storage_order": 0 }
//! ```
//!
//! `0` (or a missing key) selects row-major storage; any other integer
//! selects column-major.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spmat_core::OrderKind;
use tracing::debug;

use crate::error::{Error, Result};

/// Storage order settings read before a matrix is constructed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 0 for row-major, anything else for column-major
    pub storage_order: i64,
}

impl StorageConfig {
    /// Configuration that resolves to `kind`
    pub fn for_order(kind: OrderKind) -> Self {
        let storage_order = match kind {
            OrderKind::RowMajor => 0,
            OrderKind::ColumnMajor => 1,
        };
        Self { storage_order }
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON document from disk
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            storage_order = config.storage_order,
            "loaded storage config"
        );
        Ok(config)
    }

    /// Resolved storage order
    pub fn order_kind(&self) -> OrderKind {
        OrderKind::from_config_value(self.storage_order)
    }
}
