use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, DEFAULT_MOVE_STEP, DEFAULT_ROTATION_STEP};
use crate::math::Rgba;
use crate::scene::{Light, Scene, ShadingParams};
use crate::turbulence::{SampleRange, Sinusoid, Turbulence};

/// Viewer configuration, usually read from a JSON file.
///
/// Every section is optional; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub cameras: Vec<CameraConfig>,
    pub turbulence: Option<TurbulenceConfig>,
    pub shading: ShadingConfig,
    pub light: LightConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Distance moved per key press.
    pub move_step: f32,
    /// Degrees turned per key press.
    pub rotation_step: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbulenceConfig {
    pub count: usize,
    pub amplitude: SampleRange,
    pub phase: SampleRange,
    pub frequency: SampleRange,
    /// Fixed seed for reproducible waves; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Explicit sinusoids, bypassing random generation entirely.
    pub sinusoids: Option<Vec<Sinusoid>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    pub coord_multiplier: f32,
    pub bump_multiplier: f32,
    pub light_power: f32,
    pub min_ambient_light: f32,
    pub material_shininess: f32,
    /// Degrees per second the object carousel turns.
    pub spin_speed: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub color: Rgba,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            cameras: vec![CameraConfig::default()],
            turbulence: Some(TurbulenceConfig::default()),
            shading: ShadingConfig::default(),
            light: LightConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
            title: "Real-time animation".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.75, 3.0],
            direction: [0.0, -0.25, -1.0],
            up: [0.0, 1.0, 0.0],
            fov: 45.0,
            near: 0.1,
            far: 300.0,
            move_step: DEFAULT_MOVE_STEP,
            rotation_step: DEFAULT_ROTATION_STEP,
        }
    }
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            count: 8,
            amplitude: SampleRange::new(0.01, 0.06),
            phase: SampleRange::new(0.0, std::f32::consts::TAU),
            frequency: SampleRange::new(0.5, 2.5),
            seed: None,
            sinusoids: None,
        }
    }
}

impl Default for ShadingConfig {
    fn default() -> Self {
        let params = ShadingParams::default();
        Self {
            coord_multiplier: params.coord_multiplier,
            bump_multiplier: params.bump_multiplier,
            light_power: params.light_power,
            min_ambient_light: params.min_ambient_light,
            material_shininess: params.material_shininess,
            spin_speed: 20.0,
            radius: 1.0,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        let light = Light::default();
        Self {
            position: light.position.to_array(),
            color: light.color,
        }
    }
}

impl CameraConfig {
    pub fn build(&self, width: u32, height: u32) -> crate::error::Result<Camera> {
        let camera = Camera::with_up(
            Vec3::from_array(self.position),
            Vec3::from_array(self.direction),
            Vec3::from_array(self.up),
            self.fov,
            self.near,
            self.far,
            width,
            height,
        )?;
        camera.with_steps(self.move_step, self.rotation_step)
    }
}

impl TurbulenceConfig {
    /// `seed_override` wins over the configured seed.
    pub fn build(&self, seed_override: Option<u64>) -> crate::error::Result<Turbulence> {
        if let Some(sinusoids) = &self.sinusoids {
            return Ok(Turbulence::from_sinusoids(sinusoids.clone()));
        }
        match seed_override.or(self.seed) {
            Some(seed) => Turbulence::seeded(self.count, self.amplitude, self.phase, self.frequency, seed),
            None => Turbulence::from_entropy(self.count, self.amplitude, self.phase, self.frequency),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse viewer configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate everything and assemble the scene the render loop runs on.
    pub fn build_scene(&self, seed_override: Option<u64>) -> Result<Scene> {
        let cameras = self
            .cameras
            .iter()
            .enumerate()
            .map(|(i, c)| {
                c.build(self.window.width, self.window.height)
                    .with_context(|| format!("Invalid camera {}", i))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut scene = Scene::new(cameras).context("Configuration defines no cameras")?;

        if let Some(turbulence) = &self.turbulence {
            let turbulence = turbulence
                .build(seed_override)
                .context("Invalid turbulence configuration")?;
            log::debug!("Turbulence with {} sinusoids", turbulence.sinusoids().len());
            scene = scene.with_turbulence(turbulence);
        }

        scene.params = ShadingParams {
            coord_multiplier: self.shading.coord_multiplier,
            bump_multiplier: self.shading.bump_multiplier,
            light_power: self.shading.light_power,
            min_ambient_light: self.shading.min_ambient_light,
            material_shininess: self.shading.material_shininess,
        };
        scene.spin_speed = self.shading.spin_speed;
        scene.radius = self.shading.radius;
        scene.light = Light {
            position: Vec3::from_array(self.light.position),
            color: self.light.color,
        };

        Ok(scene)
    }
}
