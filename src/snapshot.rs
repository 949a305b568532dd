// src/snapshot.rs
//
// Persisted scenario document: one object track, ego motion and the
// absolute velocity over ground. JSON or YAML, chosen by file extension.
// Keys written by the older desktop emulator (`object_data`, `ego_data`,
// `abs_vel_over_ground`, ...) are accepted on load.

use crate::error::{InputError, InputResult};
use crate::pipeline::CycleInputs;
use crate::types::{EgoMotion, GroundVelocity, ObjectTrack};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(alias = "object_data")]
    pub object: ObjectTrack,
    #[serde(alias = "ego_data")]
    pub ego: EgoMotion,
    #[serde(alias = "abs_vel_over_ground")]
    pub abs_vel_over_ground: GroundVelocity,
    /// Carried for round-tripping; no check reads it.
    #[serde(alias = "is_mpc3_used")]
    pub is_mpc3_used: bool,
}

impl Snapshot {
    pub fn into_inputs(self) -> CycleInputs {
        CycleInputs::new(self.object, self.ego, self.abs_vel_over_ground)
    }

    pub fn parse(text: &str, format: DocumentFormat) -> InputResult<Self> {
        let snapshot: Self = match format {
            DocumentFormat::Json => serde_json::from_str(text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        };
        snapshot.object.validate()?;
        Ok(snapshot)
    }

    pub fn load(path: impl AsRef<Path>) -> InputResult<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| InputError::UnsupportedFormat(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;

        let snapshot = Self::parse(&text, format)?;
        debug!("loaded snapshot {} ({:?})", path.display(), format);
        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> InputResult<()> {
        let path = path.as_ref();
        let text = match DocumentFormat::from_path(path) {
            Some(DocumentFormat::Json) => serde_json::to_string_pretty(self)?,
            Some(DocumentFormat::Yaml) => serde_yaml::to_string(self)?,
            None => return Err(InputError::UnsupportedFormat(path.to_path_buf())),
        };
        fs::write(path, text).map_err(|e| InputError::io(path, e))
    }
}
