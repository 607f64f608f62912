//! 窗口模块 - 输入映射与画面提交

pub mod input;
pub mod render;

pub use input::PointerMapper;
pub use render::present_to_buffer;
