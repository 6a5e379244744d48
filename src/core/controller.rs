use crate::camera::CameraCommand;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyR,
    KeyF,
    KeyQ,
    KeyE,
    KeyT,
    KeyG,
    Home,
    Escape,
}

impl Button {
    /// Camera operation bound to this button, if any.
    pub fn camera_command(self) -> Option<CameraCommand> {
        match self {
            Button::KeyW => Some(CameraCommand::MoveFront),
            Button::KeyS => Some(CameraCommand::MoveBack),
            Button::KeyA => Some(CameraCommand::MoveLeft),
            Button::KeyD => Some(CameraCommand::MoveRight),
            Button::KeyR => Some(CameraCommand::MoveUp),
            Button::KeyF => Some(CameraCommand::MoveDown),
            Button::KeyE => Some(CameraCommand::RotateLeft),
            Button::KeyQ => Some(CameraCommand::RotateRight),
            Button::KeyT => Some(CameraCommand::RotateUp),
            Button::KeyG => Some(CameraCommand::RotateDown),
            Button::Home => Some(CameraCommand::Reset),
            Button::Escape => None,
        }
    }
}
