//! 渲染相关逻辑

use drag_button::ui::{CanvasSurface, Component};
use drag_button::{Canvas, Color, TextRenderer};

/// 重绘控件并写入窗口缓冲区
pub fn present_to_buffer(
    buffer: &mut [u32],
    buffer_width: u32,
    buffer_height: u32,
    canvas: &mut Canvas,
    background: Color,
    widget: &dyn Component,
    text: Option<&TextRenderer>,
    scale_factor: f32,
) {
    canvas.clear(background);
    {
        let mut surface = CanvasSurface::new(canvas, text, scale_factor);
        widget.render(&mut surface);
    }
    canvas.present_into(buffer, buffer_width, buffer_height);
}
