//! 画笔模块

use crate::Color;

/// 画笔（实心填充）
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub anti_alias: bool,
    /// 文本字号（逻辑像素）
    pub text_size: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            anti_alias: true,
            text_size: 16.0,
        }
    }
}

impl Paint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_anti_alias(mut self, aa: bool) -> Self {
        self.anti_alias = aa;
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }
}
