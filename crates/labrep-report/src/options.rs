use serde::{Deserialize, Serialize};
use ts_rs::TS;

use labrep_core::models::organization::Organization;

use crate::error::ReportError;

/// Current options version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// How densely categories are packed onto printed pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LayoutMode {
    #[default]
    Normal,
    Compact,
}

impl LayoutMode {
    pub fn categories_per_page(self) -> usize {
        match self {
            LayoutMode::Normal => 2,
            LayoutMode::Compact => 3,
        }
    }

    /// Parse a layout name case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(LayoutMode::Normal),
            "compact" => Some(LayoutMode::Compact),
            _ => None,
        }
    }
}

/// Report settings supplied by the lab's settings screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportOptions {
    /// Schema version. Missing or 0 = pre-versioned options.
    #[serde(default)]
    pub config_version: u32,
    pub layout_mode: LayoutMode,
    pub show_watermark: bool,
    #[serde(default)]
    pub organization: Organization,
}

impl ReportOptions {
    /// Parse options JSON, migrating older versions first.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ReportError> {
        let on_disk_version = value
            .get("configVersion")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(value, on_disk_version)?;
        Ok(serde_json::from_value(migrated)?)
    }

    /// Serialize stamped with [`CURRENT_VERSION`], regardless of what was
    /// loaded.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        let mut stamped = self.clone();
        stamped.config_version = CURRENT_VERSION;
        Ok(serde_json::to_string_pretty(&stamped)?)
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ReportError> {
    if from_version > CURRENT_VERSION {
        return Err(ReportError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: layout and watermark become explicit
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ReportError::InvalidOptions("options are not a JSON object".to_string()))?;
        obj.entry("layoutMode")
            .or_insert(serde_json::Value::String("normal".to_string()));
        obj.entry("showWatermark")
            .or_insert(serde_json::Value::Bool(false));
        obj.insert(
            "configVersion".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated report options v0 → v1 (added layoutMode, showWatermark)");
    }

    Ok(json)
}
