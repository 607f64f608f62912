//! 控件配置 - widget.json

use crate::gesture::{DEFAULT_LONG_PRESS_TIMEOUT_MS, DEFAULT_TOUCH_SLOP};
use crate::{Color, Point, Size};
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

/// 长按超时上限（毫秒）
pub const MAX_LONG_PRESS_TIMEOUT_MS: u64 = 60_000;
/// 窗口边长上限（逻辑像素）
pub const MAX_WINDOW_EDGE: u32 = 16_384;

/// 内置默认配置
pub const DEFAULT_CONFIG_JSON: &str = include_str!("../assets/widget.json");

/// widget.json 配置结构，缺省字段取默认值
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub background_color: String,
    pub initial_x: f32,
    pub initial_y: f32,
    pub radius: f32,
    pub label: String,
    pub text_size: f32,
    pub free_color: String,
    pub locked_color: String,
    pub label_color: String,
    pub long_press_timeout_ms: u64,
    pub touch_slop: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Draggable Button".to_string(),
            window_width: 400,
            window_height: 800,
            background_color: "#FFFFFF".to_string(),
            initial_x: 200.0,
            initial_y: 200.0,
            radius: 100.0,
            label: "Drag".to_string(),
            text_size: 50.0,
            free_color: "#0000FF".to_string(),
            locked_color: "#FF0000".to_string(),
            label_color: "#FFFFFF".to_string(),
            long_press_timeout_ms: DEFAULT_LONG_PRESS_TIMEOUT_MS,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WidgetConfig = serde_json::from_str(json)
            .context("failed to parse widget config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path))?;
        Self::from_json(&json).with_context(|| format!("invalid config {}", path))
    }

    /// 有路径则读取文件，否则使用内置配置
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_json(DEFAULT_CONFIG_JSON),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            bail!("radius must be positive, got {}", self.radius);
        }
        if !(self.text_size.is_finite() && self.text_size > 0.0) {
            bail!("textSize must be positive, got {}", self.text_size);
        }
        if !(self.touch_slop.is_finite() && self.touch_slop >= 0.0) {
            bail!("touchSlop must be a non-negative number, got {}", self.touch_slop);
        }
        if !(self.initial_x.is_finite() && self.initial_y.is_finite()) {
            bail!("initial position must be finite");
        }
        if self.long_press_timeout_ms > MAX_LONG_PRESS_TIMEOUT_MS {
            bail!(
                "longPressTimeoutMs must be at most {}, got {}",
                MAX_LONG_PRESS_TIMEOUT_MS, self.long_press_timeout_ms
            );
        }
        let edges = 1..=MAX_WINDOW_EDGE;
        if !edges.contains(&self.window_width) || !edges.contains(&self.window_height) {
            bail!(
                "window size must be within 1..={}, got {}x{}",
                MAX_WINDOW_EDGE, self.window_width, self.window_height
            );
        }
        for color in [&self.background_color, &self.free_color, &self.locked_color, &self.label_color] {
            parse_color(color)?;
        }
        Ok(())
    }

    pub fn initial_position(&self) -> Point {
        Point::new(self.initial_x, self.initial_y)
    }

    pub fn window_size(&self) -> Size {
        Size::new(self.window_width as f32, self.window_height as f32)
    }

    pub fn background(&self) -> Result<Color> {
        parse_color(&self.background_color)
    }
}

pub(crate) fn parse_color(s: &str) -> Result<Color> {
    Color::parse(s).ok_or_else(|| anyhow!("invalid color {:?}", s))
}
