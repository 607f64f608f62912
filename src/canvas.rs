//! Canvas 画布模块 - 软件光栅化渲染

use crate::{Color, Paint};
use anyhow::{anyhow, Context, Result};

/// 画布 - 像素缓冲区（物理像素）
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// 清空画布
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[self.index(x, y)]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合），越界忽略
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height || color.a == 0 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.pixels[idx] = color.blend(&self.pixels[idx]);
    }

    /// 绘制实心圆；开启抗锯齿时边缘按覆盖率混合
    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let reach = radius + 1.0;
        let x_range = (cx - reach).max(0.0) as i32..(cx + reach).min(self.width as f32) as i32;
        let y_range = (cy - reach).max(0.0) as i32..(cy + reach).min(self.height as f32) as i32;

        for y in y_range {
            let dy = y as f32 + 0.5 - cy;
            for x in x_range.clone() {
                let dx = x as f32 + 0.5 - cx;
                let d2 = dx * dx + dy * dy;

                let coverage = if paint.anti_alias {
                    (radius + 0.5 - d2.sqrt()).clamp(0.0, 1.0)
                } else if d2 <= radius * radius {
                    1.0
                } else {
                    0.0
                };
                if coverage > 0.0 {
                    let a = (paint.color.a as f32 * coverage) as u8;
                    self.set_pixel(x, y, Color { a, ..paint.color });
                }
            }
        }
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect()
    }

    /// 拷贝到窗口缓冲区（0RGB），超出画布的部分保持不变
    pub fn present_into(&self, buffer: &mut [u32], buffer_width: u32, buffer_height: u32) {
        let cols = buffer_width.min(self.width) as usize;
        for y in 0..buffer_height.min(self.height) {
            let src = self.index(0, y);
            let dst = y as usize * buffer_width as usize;
            let Some(row) = buffer.get_mut(dst..dst + cols) else {
                break;
            };
            for (out, pixel) in row.iter_mut().zip(&self.pixels[src..src + cols]) {
                *out = pixel.to_u32();
            }
        }
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: &str) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.width,
            self.height,
            self.to_rgba()
        ).ok_or_else(|| anyhow!("failed to create image buffer"))?;

        img.save(path).with_context(|| format!("failed to write {}", path))
    }
}
