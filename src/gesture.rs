//! 手势识别 - 长按检测
//!
//! 与控件自身的原始事件分类并行观察同一事件流。按下后指针在
//! `touch_slop` 范围内停留满 `timeout_ms` 即触发一次长按，坐标为按下点。
//! 仅在恰好一个指针按下时计时，任何额外指针按下都会放弃本次长按。

use crate::event::Event;
use crate::Point;

/// 默认长按超时（毫秒）
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;
/// 默认移动容差（逻辑像素）
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

#[derive(Debug, Clone, Copy)]
struct PendingPress {
    pointer: u64,
    origin: Point,
    down_time: u64,
}

/// 长按检测器
#[derive(Debug, Clone)]
pub struct LongPressDetector {
    timeout_ms: u64,
    touch_slop: f32,
    pending: Option<PendingPress>,
    /// 当前按下的全部指针
    down: Vec<u64>,
}

impl LongPressDetector {
    pub fn new(timeout_ms: u64, touch_slop: f32) -> Self {
        Self {
            timeout_ms,
            touch_slop,
            pending: None,
            down: Vec::new(),
        }
    }

    /// 观察一个原始事件，更新待触发状态
    pub fn observe(&mut self, event: &Event) {
        match event {
            Event::TouchStart(e) => {
                if !self.down.contains(&e.touch.id) {
                    self.down.push(e.touch.id);
                }
                // 只有单指按下才计时，多指时放弃本次长按
                self.pending = (self.down.len() == 1).then(|| PendingPress {
                    pointer: e.touch.id,
                    origin: e.touch.position(),
                    down_time: e.timestamp,
                });
            }
            Event::TouchMove(e) => {
                if let Some(p) = self.pending {
                    let slop2 = self.touch_slop * self.touch_slop;
                    if p.pointer == e.touch.id && p.origin.distance_squared(&e.touch.position()) > slop2 {
                        self.pending = None;
                    }
                }
            }
            Event::TouchEnd(e) => {
                self.down.retain(|id| *id != e.touch.id);
                if self.pending.map(|p| p.pointer == e.touch.id).unwrap_or(false) {
                    self.pending = None;
                }
            }
            Event::TouchCancel(_) => {
                self.pending = None;
                self.down.clear();
            }
            Event::LongPress(_) => {}
        }
    }

    /// 到期则返回长按事件（每次按下最多一次）
    pub fn poll(&mut self, now: u64) -> Option<Event> {
        let p = self.pending?;
        if now.saturating_sub(p.down_time) < self.timeout_ms {
            return None;
        }
        self.pending = None;
        Some(Event::long_press(p.origin.x, p.origin.y, now))
    }

    /// 下一次需要 poll 的时间点
    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|p| p.down_time.saturating_add(self.timeout_ms))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for LongPressDetector {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_PRESS_TIMEOUT_MS, DEFAULT_TOUCH_SLOP)
    }
}
