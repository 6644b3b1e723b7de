use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunable fly-camera settings, loadable from a JSON file.
///
/// Every field has a default, so a settings file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlycamConfig {
    /// Linear speed in units per second
    pub lin_speed: f32,
    /// Rotational speed in degrees per second
    pub rot_speed_deg: f32,
    /// Speed factor while sprinting
    pub sprint_multiplier: f32,
    /// Pretend the forward key is always held
    pub sim_forward_input: bool,
    /// Only move while the primary mouse button is held
    pub require_primary_to_move: bool,
    /// Fixed timestep in seconds; `null` uses the measured frame delta
    pub fixed_dt: Option<f32>,
}

impl Default for FlycamConfig {
    fn default() -> Self {
        Self {
            lin_speed: 10.0,
            rot_speed_deg: 70.0,
            sprint_multiplier: 3.0,
            sim_forward_input: false,
            require_primary_to_move: false,
            fixed_dt: None,
        }
    }
}

impl FlycamConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = FlycamConfig::default();
        assert_eq!(config.lin_speed, 10.0);
        assert_eq!(config.rot_speed_deg, 70.0);
        assert_eq!(config.sprint_multiplier, 3.0);
        assert!(!config.sim_forward_input);
        assert!(!config.require_primary_to_move);
        assert_eq!(config.fixed_dt, None);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: FlycamConfig =
            serde_json::from_str(r#"{ "lin_speed": 25.0, "fixed_dt": 0.0166 }"#).unwrap();

        assert_eq!(config.lin_speed, 25.0);
        assert_eq!(config.fixed_dt, Some(0.0166));
        assert_eq!(config.rot_speed_deg, 70.0);
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = FlycamConfig::default();
        config.require_primary_to_move = true;
        config.fixed_dt = Some(1.0 / 60.0);

        let text = serde_json::to_string(&config).unwrap();
        let parsed: FlycamConfig = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FlycamConfig::load(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("/does/not/exist.json"));
    }
}
