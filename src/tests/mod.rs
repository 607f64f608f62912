//! 单元测试模块
//! 覆盖命中测试、拖动/锁定状态转换、长按识别、画布渲染和配置

pub mod canvas_tests;
pub mod config_tests;

use crate::ui::DrawSurface;
use crate::{Paint, Point};

/// 记录绘制调用的测试表面
#[derive(Debug, Default, PartialEq)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle { center: Point, radius: f32, paint: Paint },
    Text { text: String, center: Point, paint: Paint },
}

impl DrawSurface for RecordingSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.ops.push(DrawOp::Circle { center, radius, paint: paint.clone() });
    }

    fn draw_text_centered(&mut self, text: &str, center: Point, paint: &Paint) {
        self.ops.push(DrawOp::Text { text: text.to_string(), center, paint: paint.clone() });
    }
}
