use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::Button;

/// Adapter that turns Winit key events into a queue of button presses
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Press events since the last take_presses, key repeats included
    presses: Vec<Button>,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and queue any handled key press
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = Self::keycode_to_button(keycode) {
                    self.on_button(button, event.state);
                }
            }
        }
    }

    fn on_button(&mut self, button: Button, state: ElementState) {
        if state == ElementState::Pressed {
            self.presses.push(button);
        }
    }

    /// Drain the press events queued since the previous call, oldest first.
    pub fn take_presses(&mut self) -> Vec<Button> {
        std::mem::take(&mut self.presses)
    }

    /// Drop queued presses, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::KeyF => Some(Button::KeyF),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyT => Some(Button::KeyT),
            KeyCode::KeyG => Some(Button::KeyG),
            KeyCode::Home => Some(Button::Home),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}
