//! DraggableButton - 可拖动的圆形按钮，长按切换锁定
//!
//! 几何与状态转换都是 `ButtonState` 上的纯函数；`DraggableButton`
//! 只负责保存新状态、记录重绘请求和驱动长按检测器。

use super::component::Component;
use super::surface::DrawSurface;
use crate::config::{parse_color, WidgetConfig};
use crate::event::Event;
use crate::gesture::LongPressDetector;
use crate::{Color, Paint, Point};
use anyhow::Result;

/// 按钮模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Free,
    /// 锁定时拖动不改变位置
    Locked,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Free => Mode::Locked,
            Mode::Locked => Mode::Free,
        }
    }

    pub fn is_locked(self) -> bool {
        self == Mode::Locked
    }
}

/// 进行中的拖动
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// 捕获本次拖动的指针
    pub pointer: u64,
    /// 按下点 - 圆心
    pub offset: Point,
}

/// 事件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub handled: bool,
    pub redraw: bool,
}

impl Outcome {
    pub const IGNORED: Outcome = Outcome { handled: false, redraw: false };
    pub const HANDLED: Outcome = Outcome { handled: true, redraw: false };
    pub const REDRAW: Outcome = Outcome { handled: true, redraw: true };
}

/// 按钮状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonState {
    pub position: Point,
    pub radius: f32,
    pub drag: Option<Drag>,
    pub mode: Mode,
}

impl ButtonState {
    pub fn new(position: Point, radius: f32) -> Self {
        Self {
            position,
            radius,
            drag: None,
            mode: Mode::Free,
        }
    }

    /// 圆形命中测试，边界上的点算在内
    pub fn hit_test(&self, point: &Point) -> bool {
        self.position.distance_squared(point) <= self.radius * self.radius
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn owns(&self, pointer: u64) -> bool {
        self.drag.map(|d| d.pointer == pointer).unwrap_or(false)
    }

    /// 计算事件作用后的新状态
    pub fn apply(&self, event: &Event) -> (ButtonState, Outcome) {
        let mut next = *self;
        let outcome = match event {
            Event::TouchStart(e) => {
                let point = e.touch.position();
                // 拖动中忽略其他指针
                let busy = self.drag.map(|d| d.pointer != e.touch.id).unwrap_or(false);
                if !busy && self.hit_test(&point) {
                    next.drag = Some(Drag {
                        pointer: e.touch.id,
                        offset: point - self.position,
                    });
                    Outcome::HANDLED
                } else {
                    Outcome::IGNORED
                }
            }
            Event::TouchMove(e) => match self.drag {
                Some(drag) if drag.pointer == e.touch.id => {
                    if self.mode.is_locked() {
                        Outcome::HANDLED
                    } else {
                        next.position = e.touch.position() - drag.offset;
                        Outcome::REDRAW
                    }
                }
                _ => Outcome::IGNORED,
            },
            Event::TouchEnd(e) => {
                if self.owns(e.touch.id) {
                    next.drag = None;
                    Outcome::REDRAW
                } else {
                    Outcome::IGNORED
                }
            }
            Event::TouchCancel(_) => {
                next.drag = None;
                Outcome::HANDLED
            }
            Event::LongPress(tap) => {
                if self.hit_test(&tap.position()) {
                    next.mode = self.mode.toggled();
                    Outcome::REDRAW
                } else {
                    Outcome::IGNORED
                }
            }
        };
        (next, outcome)
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new(Point::new(200.0, 200.0), 100.0)
    }
}

/// 按钮外观
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub label: String,
    pub text_size: f32,
    pub free_color: Color,
    pub locked_color: Color,
    pub label_color: Color,
}

impl ButtonStyle {
    pub fn from_config(config: &WidgetConfig) -> Result<Self> {
        Ok(Self {
            label: config.label.clone(),
            text_size: config.text_size,
            free_color: parse_color(&config.free_color)?,
            locked_color: parse_color(&config.locked_color)?,
            label_color: parse_color(&config.label_color)?,
        })
    }

    pub fn fill_color(&self, mode: Mode) -> Color {
        match mode {
            Mode::Free => self.free_color,
            Mode::Locked => self.locked_color,
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            label: "Drag".to_string(),
            text_size: 50.0,
            free_color: Color::BLUE,
            locked_color: Color::RED,
            label_color: Color::WHITE,
        }
    }
}

/// 可拖动按钮组件
pub struct DraggableButton {
    state: ButtonState,
    style: ButtonStyle,
    long_press: LongPressDetector,
    needs_redraw: bool,
}

impl DraggableButton {
    pub fn new(state: ButtonState, style: ButtonStyle, long_press: LongPressDetector) -> Self {
        Self {
            state,
            style,
            long_press,
            needs_redraw: true,
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            ButtonState::new(config.initial_position(), config.radius),
            ButtonStyle::from_config(config)?,
            LongPressDetector::new(config.long_press_timeout_ms, config.touch_slop),
        ))
    }

    pub fn state(&self) -> &ButtonState {
        &self.state
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_locked(&self) -> bool {
        self.state.mode.is_locked()
    }

    /// 长按检测器是否在等待
    pub fn long_press_pending(&self) -> bool {
        self.long_press.is_pending()
    }

    fn log_transition(&self, event: &Event, before: &ButtonState, outcome: Outcome) {
        let p = event.position();
        match event {
            Event::LongPress(_) if outcome.handled => {
                log::info!("Long press inside button at ({}, {}), mode={:?}", p.x, p.y, self.state.mode);
            }
            Event::LongPress(_) => {
                log::debug!("Long press outside button at ({}, {}), ignored", p.x, p.y);
            }
            Event::TouchCancel(_) => log::debug!("cancel, dragging was {}", before.is_dragging()),
            _ if outcome.handled => log::debug!("{}: x={}, y={}", event.kind(), p.x, p.y),
            _ => log::trace!("{} not captured: x={}, y={}", event.kind(), p.x, p.y),
        }
    }
}

impl Default for DraggableButton {
    fn default() -> Self {
        Self::new(ButtonState::default(), ButtonStyle::default(), LongPressDetector::default())
    }
}

impl Component for DraggableButton {
    fn render(&self, surface: &mut dyn DrawSurface) {
        let fill = Paint::new().with_color(self.style.fill_color(self.state.mode));
        surface.fill_circle(self.state.position, self.state.radius, &fill);

        let label = Paint::new()
            .with_color(self.style.label_color)
            .with_text_size(self.style.text_size);
        surface.draw_text_centered(&self.style.label, self.state.position, &label);
    }

    fn on_event(&mut self, event: &Event) -> bool {
        // 两个观察者：原始分类和长按检测互不依赖
        if !matches!(event, Event::LongPress(_)) {
            self.long_press.observe(event);
        }

        let before = self.state;
        let (next, outcome) = before.apply(event);
        self.state = next;
        if outcome.redraw {
            self.needs_redraw = true;
        }
        self.log_transition(event, &before, outcome);
        outcome.handled
    }

    fn hit_test(&self, point: &Point) -> bool {
        self.state.hit_test(point)
    }

    fn tick(&mut self, now: u64) -> bool {
        match self.long_press.poll(now) {
            Some(event) => self.on_event(&event),
            None => false,
        }
    }

    fn next_deadline(&self) -> Option<u64> {
        self.long_press.deadline()
    }

    fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn type_name(&self) -> &'static str {
        "DraggableButton"
    }
}
