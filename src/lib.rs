pub mod app;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controller;
pub mod flycam;
pub mod input;
pub mod renderer;
pub mod transform;
pub mod xr;

pub use camera::{Camera, CameraUniform};
pub use clock::Clock;
pub use config::FlycamConfig;
pub use controller::{Button, Controller};
pub use flycam::FlyCam;
pub use input::WinitController;
pub use transform::Transform;
pub use xr::XrRig;
