//! 把 winit 的鼠标/触摸事件翻译成控件的指针事件

use drag_button::event::Event;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// 鼠标使用的指针 id，不与触摸 id 冲突
pub const MOUSE_POINTER_ID: u64 = u64::MAX;

pub struct PointerMapper {
    scale_factor: f32,
    /// 逻辑坐标
    cursor: (f32, f32),
    mouse_down: bool,
}

impl PointerMapper {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor: scale_factor as f32,
            cursor: (0.0, 0.0),
            mouse_down: false,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor as f32;
    }

    /// 翻译一个窗口事件；与指针无关的事件返回 None
    pub fn map(&mut self, event: &WindowEvent, now: u64) -> Option<Event> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (
                    position.x as f32 / self.scale_factor,
                    position.y as f32 / self.scale_factor,
                );
                self.mouse_down
                    .then(|| Event::touch_move(MOUSE_POINTER_ID, self.cursor.0, self.cursor.1, now))
            }
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let (x, y) = self.cursor;
                match state {
                    ElementState::Pressed => {
                        self.mouse_down = true;
                        Some(Event::touch_start(MOUSE_POINTER_ID, x, y, now))
                    }
                    ElementState::Released if self.mouse_down => {
                        self.mouse_down = false;
                        Some(Event::touch_end(MOUSE_POINTER_ID, x, y, now))
                    }
                    ElementState::Released => None,
                }
            }
            // 拖动途中失去焦点或光标离开，视为系统取消
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) if self.mouse_down => {
                self.mouse_down = false;
                Some(Event::touch_cancel(MOUSE_POINTER_ID, self.cursor.0, self.cursor.1, now))
            }
            WindowEvent::Touch(touch) => {
                let x = touch.location.x as f32 / self.scale_factor;
                let y = touch.location.y as f32 / self.scale_factor;
                Some(match touch.phase {
                    TouchPhase::Started => Event::touch_start(touch.id, x, y, now),
                    TouchPhase::Moved => Event::touch_move(touch.id, x, y, now),
                    TouchPhase::Ended => Event::touch_end(touch.id, x, y, now),
                    TouchPhase::Cancelled => Event::touch_cancel(touch.id, x, y, now),
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::{DeviceId, Touch};

    fn device() -> DeviceId {
        // 测试中只用作占位
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(x, y) }
    }

    fn left_button(state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput { device_id: device(), state, button: MouseButton::Left }
    }

    #[test]
    fn test_hover_without_press_is_ignored() {
        let mut mapper = PointerMapper::new(1.0);
        assert_eq!(mapper.map(&cursor_moved(10.0, 20.0), 0), None);
        assert_eq!(mapper.map(&WindowEvent::Focused(false), 5), None);
    }

    #[test]
    fn test_mouse_drag_in_logical_coordinates() {
        let mut mapper = PointerMapper::new(2.0);
        mapper.map(&cursor_moved(400.0, 300.0), 0);
        assert_eq!(
            mapper.map(&left_button(ElementState::Pressed), 10),
            Some(Event::touch_start(MOUSE_POINTER_ID, 200.0, 150.0, 10))
        );
        assert_eq!(
            mapper.map(&cursor_moved(500.0, 320.0), 20),
            Some(Event::touch_move(MOUSE_POINTER_ID, 250.0, 160.0, 20))
        );
        assert_eq!(
            mapper.map(&left_button(ElementState::Released), 30),
            Some(Event::touch_end(MOUSE_POINTER_ID, 250.0, 160.0, 30))
        );
        // 松开后移动不再产生事件
        assert_eq!(mapper.map(&cursor_moved(0.0, 0.0), 40), None);
    }

    #[test]
    fn test_release_without_press_is_dropped() {
        let mut mapper = PointerMapper::new(1.0);
        mapper.map(&cursor_moved(50.0, 50.0), 0);
        assert_eq!(mapper.map(&left_button(ElementState::Released), 10), None);
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut mapper = PointerMapper::new(1.0);
        let right = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Right,
        };
        assert_eq!(mapper.map(&right, 0), None);
        assert_eq!(mapper.map(&cursor_moved(5.0, 5.0), 1), None);
    }

    #[test]
    fn test_focus_loss_cancels_mouse_drag() {
        let mut mapper = PointerMapper::new(1.0);
        mapper.map(&cursor_moved(120.0, 80.0), 0);
        mapper.map(&left_button(ElementState::Pressed), 10);
        assert_eq!(
            mapper.map(&WindowEvent::Focused(false), 20),
            Some(Event::touch_cancel(MOUSE_POINTER_ID, 120.0, 80.0, 20))
        );
        // 取消后的松开被丢弃
        assert_eq!(mapper.map(&left_button(ElementState::Released), 30), None);
        assert_eq!(mapper.map(&WindowEvent::Focused(false), 40), None);
    }

    #[test]
    fn test_cursor_left_cancels_mouse_drag() {
        let mut mapper = PointerMapper::new(1.0);
        mapper.map(&left_button(ElementState::Pressed), 0);
        let left = WindowEvent::CursorLeft { device_id: device() };
        assert_eq!(mapper.map(&left, 5), Some(Event::touch_cancel(MOUSE_POINTER_ID, 0.0, 0.0, 5)));
    }

    #[test]
    fn test_touch_phases_follow_scale_factor() {
        let mut mapper = PointerMapper::new(1.0);
        mapper.set_scale_factor(2.0);
        let touch = |phase: TouchPhase, x: f64, y: f64| {
            WindowEvent::Touch(Touch {
                device_id: device(),
                phase,
                location: PhysicalPosition::new(x, y),
                force: None,
                id: 7,
            })
        };
        assert_eq!(
            mapper.map(&touch(TouchPhase::Started, 100.0, 60.0), 0),
            Some(Event::touch_start(7, 50.0, 30.0, 0))
        );
        assert_eq!(
            mapper.map(&touch(TouchPhase::Moved, 120.0, 60.0), 5),
            Some(Event::touch_move(7, 60.0, 30.0, 5))
        );
        assert_eq!(
            mapper.map(&touch(TouchPhase::Cancelled, 120.0, 60.0), 9),
            Some(Event::touch_cancel(7, 60.0, 30.0, 9))
        );
    }
}
