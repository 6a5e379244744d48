pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod gui;
pub mod math;
pub mod pose;
pub mod renderer;
pub mod scene;
pub mod turbulence;
pub mod types;

pub use camera::{Camera, CameraCommand};
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use pose::Pose;
pub use scene::Scene;
pub use turbulence::{SampleRange, Sinusoid, Turbulence};
