//! UI 组件系统

mod component;
mod drag_button;
mod surface;

pub use component::Component;
pub use drag_button::{ButtonState, ButtonStyle, Drag, DraggableButton, Mode, Outcome};
pub use surface::{CanvasSurface, DrawSurface};
