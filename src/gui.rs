use crate::camera::CameraCommand;
use crate::scene::{Scene, BUMP_MULTIPLIER_RANGE, COORD_MULTIPLIER_RANGE};

/// Draw the "Parameters" window and write any edits back into `scene`.
pub fn parameters_panel(ctx: &egui::Context, scene: &mut Scene) {
    egui::Window::new("Parameters")
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            let mut object = scene.current_object();
            ui.label("Object");
            for (i, o) in scene.objects().iter().enumerate() {
                ui.radio_value(&mut object, i, o.name.as_str());
            }

            let mut texture = scene.current_texture();
            ui.label("Texture");
            for (i, name) in scene.textures().iter().enumerate() {
                ui.radio_value(&mut texture, i, name.as_str());
            }

            let mut camera = scene.current_camera();
            if scene.cameras().len() > 1 {
                ui.label("Camera");
                for i in 0..scene.cameras().len() {
                    ui.radio_value(&mut camera, i, format!("Camera {}", i + 1));
                }
            }

            ui.add(egui::Slider::new(&mut scene.params.coord_multiplier, COORD_MULTIPLIER_RANGE).text("Size"));
            ui.add(egui::Slider::new(&mut scene.params.bump_multiplier, BUMP_MULTIPLIER_RANGE).text("Bump"));

            let models: Vec<_> = scene.shading_models.iter().map(|m| m.name()).collect();
            ui.label(format!("Shading: {}", models.join(", ")));

            ui.separator();
            let (position, direction) = {
                let cam = scene.active_camera();
                (cam.position(), cam.direction())
            };
            ui.label(format!(
                "Position  {:.2} {:.2} {:.2}",
                position.x, position.y, position.z
            ));
            ui.label(format!(
                "Direction {:.2} {:.2} {:.2}",
                direction.x, direction.y, direction.z
            ));
            if ui.button("Reset camera").clicked() {
                scene.apply(CameraCommand::Reset);
            }

            if object != scene.current_object() {
                report(scene.select_object(object));
            }
            if texture != scene.current_texture() {
                report(scene.select_texture(texture));
            }
            if camera != scene.current_camera() {
                report(scene.select_camera(camera));
            }
        });
}

fn report(result: crate::error::Result<()>) {
    if let Err(e) = result {
        log::warn!("Ignoring selection: {}", e);
    }
}
