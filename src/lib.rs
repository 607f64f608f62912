//! Drag Button - 可拖动圆形按钮控件
//! 软件画布渲染、指针事件分类、长按锁定

mod canvas;
mod color;
mod geometry;
mod paint;
pub mod text;

pub use canvas::Canvas;
pub use color::Color;
pub use geometry::{Point, Size};
pub use paint::Paint;
pub use text::TextRenderer;

// 事件系统
pub mod event;

// 手势识别
pub mod gesture;

// 控件配置
pub mod config;

// UI 组件
pub mod ui;

// 单元测试
#[cfg(test)]
mod tests;
