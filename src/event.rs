//! 事件系统 - 指针事件词汇表

use crate::Point;

/// 事件类型
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // 原始触摸/鼠标事件
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    TouchCancel(TouchEvent),

    // 由 LongPressDetector 派生
    LongPress(TapEvent),
}

/// 触摸事件（单指针）
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub touch: Touch,
    /// 毫秒
    pub timestamp: u64,
}

/// 单个触摸点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl Touch {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// 长按事件
#[derive(Debug, Clone, PartialEq)]
pub struct TapEvent {
    pub x: f32,
    pub y: f32,
    pub timestamp: u64,
}

impl TapEvent {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Event {
    pub fn touch_start(id: u64, x: f32, y: f32, timestamp: u64) -> Self {
        Event::TouchStart(TouchEvent { touch: Touch::new(id, x, y), timestamp })
    }

    pub fn touch_move(id: u64, x: f32, y: f32, timestamp: u64) -> Self {
        Event::TouchMove(TouchEvent { touch: Touch::new(id, x, y), timestamp })
    }

    pub fn touch_end(id: u64, x: f32, y: f32, timestamp: u64) -> Self {
        Event::TouchEnd(TouchEvent { touch: Touch::new(id, x, y), timestamp })
    }

    pub fn touch_cancel(id: u64, x: f32, y: f32, timestamp: u64) -> Self {
        Event::TouchCancel(TouchEvent { touch: Touch::new(id, x, y), timestamp })
    }

    pub fn long_press(x: f32, y: f32, timestamp: u64) -> Self {
        Event::LongPress(TapEvent { x, y, timestamp })
    }

    /// 事件携带的坐标
    pub fn position(&self) -> Point {
        match self {
            Event::TouchStart(e) | Event::TouchMove(e) | Event::TouchEnd(e) | Event::TouchCancel(e) => {
                e.touch.position()
            }
            Event::LongPress(tap) => tap.position(),
        }
    }

    /// 日志用的简短名称
    pub fn kind(&self) -> &'static str {
        match self {
            Event::TouchStart(_) => "press",
            Event::TouchMove(_) => "move",
            Event::TouchEnd(_) => "release",
            Event::TouchCancel(_) => "cancel",
            Event::LongPress(_) => "long-press",
        }
    }
}
