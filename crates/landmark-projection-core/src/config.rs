//! JSON configuration: camera intrinsics and the landmark layout.
//!
//! ```json
//! {
//!   "intrinsics": { "f": 1.0, "u0": 0.0, "v0": 0.0, "alpha": 1.0, "beta": 1.0, "theta": 1.5707963 },
//!   "landmarks": [
//!     {
//!       "id": 12,
//!       "pose": { "translation": [0.0, 0.0, 2.5], "rotation": [0.0, 0.0, 0.0] },
//!       "points": [[0.0, 0.0], [0.1, 0.0], [0.0, 0.1]]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Intrinsics, Landmark, LandmarkMap};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("landmark id {0} appears more than once")]
    DuplicateLandmark(u16),
    #[error("invalid intrinsics: {0}")]
    InvalidIntrinsics(String),
}

/// Camera intrinsics together with the landmarks it observes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub intrinsics: Intrinsics<f64>,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}

impl ProjectionConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        debug!(
            "loaded {} landmarks from {}",
            config.landmarks.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Check intrinsics and landmark ids.
    ///
    /// `f`, `alpha` and `beta` must be finite and non-zero; landmark ids must
    /// be unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = &self.intrinsics;
        for (name, value) in [("f", k.f), ("alpha", k.alpha), ("beta", k.beta)] {
            if !value.is_finite() || value == 0.0 {
                return Err(ConfigError::InvalidIntrinsics(format!(
                    "{name} must be finite and non-zero, got {value}"
                )));
            }
        }

        let mut seen = HashSet::new();
        for lm in &self.landmarks {
            if !seen.insert(lm.id) {
                return Err(ConfigError::DuplicateLandmark(lm.id));
            }
        }
        Ok(())
    }

    /// Build a [`LandmarkMap`] from the configured landmarks.
    pub fn landmark_map(&self) -> Result<LandmarkMap, ConfigError> {
        let mut map = LandmarkMap::new();
        for lm in &self.landmarks {
            if map.insert(lm.clone()).is_some() {
                return Err(ConfigError::DuplicateLandmark(lm.id));
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pose;
    use crate::Pt2;

    const SAMPLE: &str = r#"{
        "intrinsics": { "f": 1.2, "u0": 0.01, "v0": -0.02, "alpha": 1.0, "beta": 0.98, "theta": 1.5707963267948966 },
        "landmarks": [
            {
                "id": 3,
                "pose": { "translation": [0.0, 0.0, 2.5], "rotation": [0.0, 0.0, 0.0] },
                "points": [[0.0, 0.0], [0.1, 0.0]]
            },
            {
                "id": 1,
                "pose": { "translation": [1.0, 0.0, 2.5], "rotation": [0.0, 0.0, 0.3] },
                "points": [[0.05, 0.05]]
            }
        ]
    }"#;

    #[test]
    fn parses_sample() {
        let cfg = ProjectionConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(cfg.intrinsics.beta, 0.98);
        assert_eq!(cfg.landmarks.len(), 2);
        assert_eq!(cfg.landmarks[1].pose.rotation.z, 0.3);
        assert_eq!(cfg.landmarks[0].points[1], Pt2::new(0.1, 0.0));

        let map = cfg.landmark_map().unwrap();
        let ids: Vec<u16> = map.iter().map(|lm| lm.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn landmarks_default_to_empty() {
        let cfg = ProjectionConfig::from_json_str(
            r#"{ "intrinsics": { "f": 1.0, "u0": 0.0, "v0": 0.0, "alpha": 1.0, "beta": 1.0, "theta": 0.0 } }"#,
        )
        .unwrap();
        assert!(cfg.landmarks.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut cfg = ProjectionConfig::from_json_str(SAMPLE).unwrap();
        cfg.landmarks.push(Landmark::new(3, Pose::identity(), vec![]));
        assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateLandmark(3))));
        assert!(matches!(cfg.landmark_map(), Err(ConfigError::DuplicateLandmark(3))));
    }

    #[test]
    fn rejects_zero_focal_length() {
        let json = SAMPLE.replace(r#""f": 1.2"#, r#""f": 0.0"#);
        let err = ProjectionConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIntrinsics(_)), "{err}");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ProjectionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
