//! 绘制表面 - 控件渲染的输出端

use crate::{Canvas, Paint, Point, TextRenderer};

/// 控件只依赖两种绘制原语：实心圆和居中文本
pub trait DrawSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint);
    fn draw_text_centered(&mut self, text: &str, center: Point, paint: &Paint);
}

/// 基于软件画布的绘制表面，坐标从逻辑像素换算为物理像素
pub struct CanvasSurface<'a> {
    canvas: &'a mut Canvas,
    text: Option<&'a TextRenderer>,
    scale: f32,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: &'a mut Canvas, text: Option<&'a TextRenderer>, scale: f32) -> Self {
        Self { canvas, text, scale }
    }
}

impl DrawSurface for CanvasSurface<'_> {
    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let c = center.scale(self.scale);
        self.canvas.draw_circle(c.x, c.y, radius * self.scale, paint);
    }

    fn draw_text_centered(&mut self, text: &str, center: Point, paint: &Paint) {
        // 没有字体时只画圆
        let Some(renderer) = self.text else {
            log::trace!("no font, skipping label {:?}", text);
            return;
        };
        let c = center.scale(self.scale);
        renderer.draw_text_centered(self.canvas, text, c.x, c.y, paint.text_size * self.scale, paint);
    }
}
