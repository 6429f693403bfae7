use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogErrorCode {
    UnknownStyle,
    UnknownColor,
    ColorNotOffered,
    UnknownCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown style '{0}'")]
    UnknownStyle(String),
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("style '{style}' is not offered in color '{color}'")]
    ColorNotOffered { style: String, color: String },
    #[error("unknown gallery category '{0}'")]
    UnknownCategory(String),
}

impl CatalogError {
    pub fn code(&self) -> CatalogErrorCode {
        match self {
            CatalogError::UnknownStyle(_) => CatalogErrorCode::UnknownStyle,
            CatalogError::UnknownColor(_) => CatalogErrorCode::UnknownColor,
            CatalogError::ColorNotOffered { .. } => CatalogErrorCode::ColorNotOffered,
            CatalogError::UnknownCategory(_) => CatalogErrorCode::UnknownCategory,
        }
    }
}
