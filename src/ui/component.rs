//! 组件基础定义

use super::surface::DrawSurface;
use crate::event::Event;
use crate::Point;

/// 组件 trait - 宿主表面只通过它驱动控件
pub trait Component {
    /// 渲染组件，不得修改状态
    fn render(&self, surface: &mut dyn DrawSurface);

    /// 处理事件，返回是否被捕获
    fn on_event(&mut self, event: &Event) -> bool;

    /// 命中测试
    fn hit_test(&self, point: &Point) -> bool;

    /// 推进时间相关的手势（长按），返回是否处理了派生事件
    fn tick(&mut self, _now: u64) -> bool {
        false
    }

    /// 下一次需要 tick 的时间点
    fn next_deadline(&self) -> Option<u64> {
        None
    }

    /// 取出并清除重绘请求
    fn take_redraw(&mut self) -> bool;

    fn type_name(&self) -> &'static str;
}
