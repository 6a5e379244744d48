pub mod clock;
pub mod controller;
pub mod input_adapter;

pub use clock::{Clock, FpsCounter};
pub use controller::Button;
pub use input_adapter::WinitController;
