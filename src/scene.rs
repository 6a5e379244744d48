use std::ops::RangeInclusive;

use glam::{Mat4, Vec3};

use crate::camera::{Camera, CameraCommand};
use crate::error::{Result, ViewerError};
use crate::math::{hsv, rgb8, spread_hue, Rgba, AABB};
use crate::pose::Pose;
use crate::turbulence::Turbulence;

/// Side of the cube every displayed object is normalised to.
pub const NORM_SIZE: f32 = 1.0;

pub const COORD_MULTIPLIER_RANGE: RangeInclusive<f32> = 0.01..=10.0;
pub const BUMP_MULTIPLIER_RANGE: RangeInclusive<f32> = 0.01..=20.0;

/// Shading technique each copy of the active object is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingModel {
    BlinnPhong,
    BumpMap,
    NormalMap,
}

impl ShadingModel {
    pub const ALL: [ShadingModel; 3] = [Self::BlinnPhong, Self::BumpMap, Self::NormalMap];

    pub fn name(self) -> &'static str {
        match self {
            Self::BlinnPhong => "Blinn-Phong",
            Self::BumpMap => "Bump map",
            Self::NormalMap => "Normal map",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Rgba,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::splat(3.0),
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Values fed to the shading layer, several of them editable from the GUI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParams {
    pub coord_multiplier: f32,
    pub bump_multiplier: f32,
    pub light_power: f32,
    pub min_ambient_light: f32,
    pub material_shininess: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            coord_multiplier: 1.0,
            bump_multiplier: 5.0,
            light_power: 10.0,
            min_ambient_light: 0.5,
            material_shininess: 0.5,
        }
    }
}

/// Displayable object. Its mesh lives with the renderer; the scene only keeps
/// what is needed to place it.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub bounds: AABB,
    pub shininess: f32,
    pub pose: Pose,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, bounds: AABB) -> Self {
        Self {
            name: name.into(),
            bounds,
            shininess: 200.0,
            pose: Pose::new(),
        }
    }

    /// Object space to world space: normalise to [`NORM_SIZE`] around the
    /// bounding-box centre, then apply the accumulated pose.
    pub fn model_matrix(&self) -> Mat4 {
        self.pose.transform() * self.bounds.normalizing_matrix(NORM_SIZE)
    }
}

/// One drawn copy of the active object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub shading: ShadingModel,
    pub model: Mat4,
    pub bounds: AABB,
    pub color: Rgba,
}

/// Everything the render loop works on: cameras, objects and the parameters
/// the on-screen controls edit.
#[derive(Debug, Clone)]
pub struct Scene {
    cameras: Vec<Camera>,
    current_camera: usize,
    objects: Vec<SceneObject>,
    current_object: usize,
    textures: Vec<String>,
    current_texture: usize,
    pub params: ShadingParams,
    pub light: Light,
    pub background: Rgba,
    pub shading_models: Vec<ShadingModel>,
    /// Degrees per second the carousel of placements turns.
    pub spin_speed: f32,
    /// Distance of each placement from the world origin.
    pub radius: f32,
    pub turbulence: Option<Turbulence>,
}

impl Scene {
    /// Scene with the stock objects and texture sets. At least one camera is required.
    pub fn new(cameras: Vec<Camera>) -> Result<Self> {
        if cameras.is_empty() {
            return Err(ViewerError::IndexOutOfRange {
                what: "camera",
                index: 0,
                len: 0,
            });
        }

        Ok(Self {
            cameras,
            current_camera: 0,
            objects: default_objects(),
            current_object: 0,
            textures: ["Bricks", "Foam", "Rock", "Tiles"]
                .into_iter()
                .map(String::from)
                .collect(),
            current_texture: 0,
            params: ShadingParams::default(),
            light: Light::default(),
            background: rgb8(82, 103, 125),
            shading_models: ShadingModel::ALL.to_vec(),
            spin_speed: 20.0,
            radius: 1.0,
            turbulence: None,
        })
    }

    pub fn with_objects(mut self, objects: Vec<SceneObject>) -> Self {
        self.objects = objects;
        self.current_object = 0;
        self
    }

    pub fn with_textures(mut self, textures: Vec<String>) -> Self {
        self.textures = textures;
        self.current_texture = 0;
        self
    }

    pub fn with_turbulence(mut self, turbulence: Turbulence) -> Self {
        self.turbulence = Some(turbulence);
        self
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn textures(&self) -> &[String] {
        &self.textures
    }

    pub fn current_camera(&self) -> usize {
        self.current_camera
    }

    pub fn current_object(&self) -> usize {
        self.current_object
    }

    pub fn current_texture(&self) -> usize {
        self.current_texture
    }

    pub fn active_camera(&self) -> &Camera {
        &self.cameras[self.current_camera]
    }

    pub fn active_camera_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.current_camera]
    }

    pub fn active_object(&self) -> Option<&SceneObject> {
        self.objects.get(self.current_object)
    }

    pub fn select_camera(&mut self, index: usize) -> Result<()> {
        check_index("camera", index, self.cameras.len())?;
        if index != self.current_camera {
            log::info!("Switching to camera {}", index);
        }
        self.current_camera = index;
        Ok(())
    }

    pub fn select_object(&mut self, index: usize) -> Result<()> {
        check_index("object", index, self.objects.len())?;
        if index != self.current_object {
            log::info!("Displaying object {:?}", self.objects[index].name);
        }
        self.current_object = index;
        Ok(())
    }

    pub fn select_texture(&mut self, index: usize) -> Result<()> {
        check_index("texture", index, self.textures.len())?;
        if index != self.current_texture {
            log::info!("Using texture set {:?}", self.textures[index]);
        }
        self.current_texture = index;
        Ok(())
    }

    /// Push the window size into the active camera.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> Result<()> {
        self.active_camera_mut().set_viewport(width, height)
    }

    pub fn apply(&mut self, command: CameraCommand) {
        if command == CameraCommand::Reset {
            log::info!("Resetting camera {}", self.current_camera);
        } else {
            log::trace!("Camera {}: {:?}", self.current_camera, command);
        }
        self.active_camera_mut().apply(command);
    }

    /// Lay out one copy of the active object per shading model, evenly spaced
    /// on a circle of `radius` and turning at `spin_speed` degrees per second.
    pub fn placements(&mut self, time: f32) -> Vec<Placement> {
        let count = self.shading_models.len();
        let (radius, spin) = (self.radius, time * self.spin_speed);
        let Some(object) = self.objects.get_mut(self.current_object) else {
            return Vec::new();
        };

        self.shading_models
            .iter()
            .enumerate()
            .map(|(i, &shading)| {
                object.pose.reset();
                object.pose.translate(Vec3::new(0.0, 0.0, radius));
                object.pose.rotate(Vec3::Y, 360.0 / count as f32 * i as f32);
                object.pose.rotate(Vec3::Y, spin);

                Placement {
                    shading,
                    model: object.model_matrix(),
                    bounds: object.bounds,
                    color: hsv(spread_hue(i, count), 0.6, 0.95),
                }
            })
            .collect()
    }

    /// Ground height at `(x, z)`, animated by the scene turbulence.
    pub fn wave_height(&self, x: f32, z: f32, time: f32) -> f32 {
        self.turbulence
            .as_ref()
            .map_or(0.0, |t| t.solve(x + time) + t.solve(z + 0.5 * time))
    }
}

fn check_index(what: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(ViewerError::IndexOutOfRange { what, index, len })
    }
}

/// Placeholder bounds for the stock models (torus, sphere, glass).
pub fn default_objects() -> Vec<SceneObject> {
    vec![
        SceneObject::new("Torus", AABB::from_center_size(Vec3::ZERO, Vec3::new(2.0, 0.5, 2.0))),
        SceneObject::new("Sphere", AABB::from_center_size(Vec3::ZERO, Vec3::splat(2.0))),
        SceneObject::new(
            "Glass",
            AABB::new(Vec3::new(-0.4, 0.0, -0.4), Vec3::new(0.4, 1.6, 0.4)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turbulence::Sinusoid;

    fn scene() -> Scene {
        let a = Camera::new(Vec3::new(0.0, 0.75, 3.0), Vec3::NEG_Z, 45.0, 0.1, 300.0, 1400, 800).unwrap();
        let b = Camera::new(Vec3::new(5.0, 1.0, 0.0), Vec3::NEG_X, 60.0, 0.1, 100.0, 800, 600).unwrap();
        Scene::new(vec![a, b]).unwrap()
    }

    #[test]
    fn test_requires_a_camera() {
        assert!(Scene::new(Vec::new()).is_err());
    }

    #[test]
    fn test_defaults() {
        let scene = scene();
        assert_eq!(scene.objects().len(), 3);
        assert_eq!(scene.textures().len(), 4);
        assert_eq!(scene.params.coord_multiplier, 1.0);
        assert_eq!(scene.params.bump_multiplier, 5.0);
        assert_eq!(scene.light.position, Vec3::splat(3.0));
        assert_eq!(scene.active_object().unwrap().name, "Torus");
    }

    #[test]
    fn test_selection_bounds() {
        let mut scene = scene();
        scene.select_camera(1).unwrap();
        assert_eq!(scene.active_camera().fov(), 60.0);
        assert_eq!(
            scene.select_camera(2).unwrap_err(),
            ViewerError::IndexOutOfRange {
                what: "camera",
                index: 2,
                len: 2
            }
        );
        assert_eq!(scene.current_camera(), 1);

        scene.select_object(2).unwrap();
        assert!(scene.select_object(3).is_err());
        scene.select_texture(3).unwrap();
        assert!(scene.select_texture(4).is_err());
        assert_eq!(scene.current_texture(), 3);
    }

    #[test]
    fn test_commands_only_touch_active_camera() {
        let mut scene = scene();
        scene.select_camera(1).unwrap();
        scene.apply(CameraCommand::MoveFront);
        assert_eq!(scene.cameras()[0].transform(), Mat4::IDENTITY);
        assert_ne!(scene.cameras()[1].transform(), Mat4::IDENTITY);

        scene.apply(CameraCommand::Reset);
        assert_eq!(scene.cameras()[1].transform(), Mat4::IDENTITY);
    }

    #[test]
    fn test_viewport_goes_to_active_camera() {
        let mut scene = scene();
        scene.set_viewport(1600, 900).unwrap();
        assert_eq!(scene.active_camera().width(), 1600);
        assert!(scene.set_viewport(0, 900).is_err());
        assert_eq!(scene.active_camera().width(), 1600);
        assert_eq!(scene.cameras()[1].width(), 800);
    }

    #[test]
    fn test_placements_form_a_carousel() {
        let mut scene = scene();
        scene.select_object(1).unwrap();
        let placements = scene.placements(0.0);
        assert_eq!(placements.len(), 3);

        let centres: Vec<Vec3> = placements
            .iter()
            .map(|p| p.model.transform_point3(p.bounds.center()))
            .collect();
        for c in &centres {
            assert!((c.length() - 1.0).abs() < 1e-4, "centre {c} off the circle");
        }
        assert!(centres[0].abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-4));
        assert!(centres[0].distance(centres[1]) > 1.0);

        // Sphere of size 2 normalised to unit size.
        let p = &placements[0];
        let corner = p.model.transform_point3(p.bounds.max) - centres[0];
        assert!((corner.y - NORM_SIZE * 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_placements_spin_with_time() {
        let mut scene = scene();
        let at_rest = scene.placements(0.0)[0].model.transform_point3(Vec3::ZERO);
        // 4.5 s at 20 deg/s is a quarter turn about +Y, taking +Z to +X.
        let turned = scene.placements(4.5)[0].model.transform_point3(Vec3::ZERO);
        assert!(at_rest.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-4));
        assert!(turned.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-4), "got {turned}");
    }

    #[test]
    fn test_no_objects_no_placements() {
        let mut scene = scene().with_objects(Vec::new());
        assert!(scene.placements(1.0).is_empty());
        assert!(scene.active_object().is_none());
    }

    #[test]
    fn test_wave_height() {
        let mut scene = scene();
        assert_eq!(scene.wave_height(1.0, 2.0, 3.0), 0.0);

        scene = scene.with_turbulence(Turbulence::from_sinusoids(vec![Sinusoid::new(1.0, 0.0, 1.0)]));
        let expected = (1.0f32 + 3.0).sin() + (2.0f32 + 1.5).sin();
        assert!((scene.wave_height(1.0, 2.0, 3.0) - expected).abs() < 1e-5);
    }
}
