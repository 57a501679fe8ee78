use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bicycle model variants, keyed by the integer partition-key code in the
/// source data. Unknown codes map to `Undefined` rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BikeModel {
    #[serde(rename = "IBv1")]
    IbV1,
    #[serde(rename = "evIB100")]
    EvIb100,
    #[serde(rename = "evIB200")]
    EvIb200,
    #[serde(rename = "undefined")]
    Undefined,
}

impl BikeModel {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => BikeModel::IbV1,
            2 => BikeModel::EvIb100,
            3 => BikeModel::EvIb200,
            _ => BikeModel::Undefined,
        }
    }
}

/// One day of production for one model, as served on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    pub date: DateTime<Utc>,
    pub model: BikeModel,
    pub items_produced: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("production file not found at {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
