// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::FlycamConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycam")]
#[command(about = "Free-look debug camera demo", long_about = None)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Linear movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Rotation speed in degrees per second
    #[arg(long = "rot-speed")]
    pub rot_speed: Option<f32>,

    /// Lock the update loop to a fixed timestep in seconds
    #[arg(long = "fixed-dt")]
    pub fixed_dt: Option<f32>,

    /// Only move while the left mouse button is held
    #[arg(long = "require-lmb", default_value = "false")]
    pub require_lmb: bool,

    /// Simulate constant forward input (soak testing)
    #[arg(long = "sim-forward", default_value = "false")]
    pub sim_forward: bool,

    /// Drive a parent rig instead of the camera transform (XR mode)
    #[arg(long, default_value = "false")]
    pub xr: bool,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut FlycamConfig) {
        if let Some(speed) = self.speed {
            config.lin_speed = speed;
        }
        if let Some(rot_speed) = self.rot_speed {
            config.rot_speed_deg = rot_speed;
        }
        if let Some(fixed_dt) = self.fixed_dt {
            config.fixed_dt = Some(fixed_dt);
        }
        if self.require_lmb {
            config.require_primary_to_move = true;
        }
        if self.sim_forward {
            config.sim_forward_input = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_layer_onto_config() {
        let cli = Cli::parse_from(["flycam", "--speed", "42.0", "--require-lmb"]);
        let mut config = FlycamConfig::default();

        cli.apply(&mut config);

        assert_eq!(config.lin_speed, 42.0);
        assert!(config.require_primary_to_move);
        // Untouched fields keep their defaults.
        assert_eq!(config.rot_speed_deg, 70.0);
        assert_eq!(config.fixed_dt, None);
    }

    #[test]
    fn no_flags_changes_nothing() {
        let cli = Cli::parse_from(["flycam"]);
        let mut config = FlycamConfig::default();

        cli.apply(&mut config);

        assert_eq!(config, FlycamConfig::default());
        assert!(!cli.xr);
    }
}
