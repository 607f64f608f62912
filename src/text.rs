//! 文本渲染模块 - 基于 fontdue 的字形光栅化

use crate::{Canvas, Color, Paint};
use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings, Metrics};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// 常见系统字体位置（macOS / Linux / Windows）
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/system/fonts/Roboto-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// 文本渲染器
pub struct TextRenderer {
    font: Font,
    /// 字形缓存 (char, size_key) -> (Metrics, Bitmap)
    /// draw 方法是 &self，所以用 Mutex 做内部可变
    cache: Mutex<HashMap<(char, u32), (Metrics, Vec<u8>)>>,
}

impl TextRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8]) -> Result<Self> {
        let settings = FontSettings {
            scale: 40.0,
            ..Default::default()
        };
        let font = Font::from_bytes(font_data, settings)
            .map_err(|e| anyhow!("invalid font data: {}", e))?;
        Ok(Self {
            font,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: &str) -> Result<Self> {
        let font_data = std::fs::read(path)
            .with_context(|| format!("failed to read font file {}", path))?;
        Self::from_bytes(&font_data)
    }

    /// 加载第一个可用的系统字体
    pub fn load_system_font() -> Result<Self> {
        for path in SYSTEM_FONT_PATHS {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(renderer) => {
                    log::info!("Loaded font {}", path);
                    return Ok(renderer);
                }
                Err(e) => log::debug!("Skipping font {}: {:#}", path, e),
            }
        }
        Err(anyhow!("no usable system font found"))
    }

    fn glyph(&self, ch: char, size: f32) -> (Metrics, Vec<u8>) {
        // 保留 1 位小数精度作为缓存 key
        let key = (ch, (size * 10.0) as u32);
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache
            .entry(key)
            .or_insert_with(|| self.font.rasterize(ch, size))
            .clone()
    }

    /// 渲染文本到画布，(x, baseline) 为基线起点
    pub fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, baseline: f32, size: f32, paint: &Paint) {
        let mut cursor_x = x;

        for ch in text.chars() {
            let (metrics, bitmap) = self.glyph(ch, size);

            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = baseline - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                    if coverage <= 0.001 {
                        continue;
                    }
                    let alpha = (paint.color.a as f32 * coverage) as u8;
                    if alpha > 0 {
                        let px = (glyph_x + gx as f32).round() as i32;
                        let py = (glyph_y + gy as f32).round() as i32;
                        canvas.set_pixel(px, py, Color::new(paint.color.r, paint.color.g, paint.color.b, alpha));
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// 以 (cx, cy) 为中心绘制单行文本
    pub fn draw_text_centered(&self, canvas: &mut Canvas, text: &str, cx: f32, cy: f32, size: f32, paint: &Paint) {
        let width = self.measure_text(text, size);
        let height = self.measure_height(size);
        self.draw_text(canvas, text, cx - width / 2.0, cy + height / 2.0, size, paint);
    }

    /// 测量文本宽度
    pub fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.font.metrics(ch, size).advance_width).sum()
    }

    /// 测量大写字母高度，用于垂直居中
    pub fn measure_height(&self, size: f32) -> f32 {
        self.font.metrics('M', size).height as f32
    }
}
