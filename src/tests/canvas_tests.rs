//! 画布与颜色测试

use crate::ui::{CanvasSurface, Component, DraggableButton};
use crate::event::Event;
use crate::{Canvas, Color, Paint};

#[test]
fn test_fill_circle_without_aa() {
    let mut canvas = Canvas::new(100, 100);
    canvas.clear(Color::WHITE);
    let paint = Paint::new().with_color(Color::BLUE).with_anti_alias(false);
    canvas.draw_circle(50.0, 50.0, 20.0, &paint);

    assert_eq!(canvas.get_pixel(50, 50), Color::BLUE);
    assert_eq!(canvas.get_pixel(35, 50), Color::BLUE);
    assert_eq!(canvas.get_pixel(5, 5), Color::WHITE);
    assert_eq!(canvas.get_pixel(75, 50), Color::WHITE);
}

#[test]
fn test_aa_circle_edge_is_blended() {
    let mut canvas = Canvas::new(100, 100);
    canvas.clear(Color::WHITE);
    canvas.draw_circle(50.0, 50.0, 20.0, &Paint::new().with_color(Color::BLUE));

    assert_eq!(canvas.get_pixel(50, 50), Color::BLUE);
    // 边缘像素部分覆盖，介于前景和背景之间
    let edge = canvas.get_pixel(69, 50);
    assert_ne!(edge, Color::BLUE);
    assert_ne!(edge, Color::WHITE);
    assert_eq!(edge.b, 255);
}

#[test]
fn test_circle_clipped_at_edges() {
    let mut canvas = Canvas::new(40, 40);
    canvas.clear(Color::BLACK);
    canvas.draw_circle(0.0, 0.0, 100.0, &Paint::new().with_color(Color::RED));
    assert_eq!(canvas.get_pixel(39, 39), Color::RED);
    assert_eq!(canvas.get_pixel(40, 40), Color::TRANSPARENT);
}

#[test]
fn test_blend_half_alpha() {
    let src = Color::new(255, 0, 0, 128);
    let out = src.blend(&Color::WHITE);
    assert_eq!(out.a, 255);
    assert_eq!(out.r, 255);
    assert!(out.g > 120 && out.g < 130);
}

#[test]
fn test_color_parse() {
    assert_eq!(Color::parse("#0000FF"), Some(Color::BLUE));
    assert_eq!(Color::parse("#FF000080"), Some(Color::new(255, 0, 0, 128)));
    assert_eq!(Color::parse("blue"), None);
    assert_eq!(Color::parse("#12345"), None);
    // from_str_radix 接受前导符号，这里必须拒绝
    assert_eq!(Color::parse("#+12345"), None);
    assert_eq!(Color::parse("#-1234567"), None);
    assert_eq!(Color::BLUE.to_u32(), 0x0000FF);
}

#[test]
fn test_button_renders_to_canvas() {
    let mut button = DraggableButton::default();
    let mut canvas = Canvas::new(400, 400);
    canvas.clear(Color::WHITE);
    button.render(&mut CanvasSurface::new(&mut canvas, None, 1.0));
    assert_eq!(canvas.get_pixel(200, 150), Color::BLUE);
    assert_eq!(canvas.get_pixel(350, 350), Color::WHITE);

    button.on_event(&Event::long_press(200.0, 200.0, 0));
    canvas.clear(Color::WHITE);
    button.render(&mut CanvasSurface::new(&mut canvas, None, 1.0));
    assert_eq!(canvas.get_pixel(200, 150), Color::RED);
}

#[test]
fn test_surface_applies_scale_factor() {
    let button = DraggableButton::default();
    let mut canvas = Canvas::new(800, 800);
    canvas.clear(Color::WHITE);
    button.render(&mut CanvasSurface::new(&mut canvas, None, 2.0));
    // 逻辑 (200, 200) r=100 -> 物理 (400, 400) r=200
    assert_eq!(canvas.get_pixel(400, 250), Color::BLUE);
    assert_eq!(canvas.get_pixel(650, 400), Color::WHITE);
}

#[test]
fn test_repeated_render_gives_same_pixels() {
    let button = DraggableButton::default();
    let mut first = Canvas::new(300, 300);
    let mut second = Canvas::new(300, 300);
    button.render(&mut CanvasSurface::new(&mut first, None, 1.0));
    button.render(&mut CanvasSurface::new(&mut second, None, 1.0));
    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn test_present_into_buffer() {
    let mut canvas = Canvas::new(4, 4);
    canvas.clear(Color::BLUE);
    canvas.set_pixel(1, 2, Color::RED);
    let mut buffer = vec![0u32; 6 * 3];
    canvas.present_into(&mut buffer, 6, 3);
    assert_eq!(buffer[0], 0x0000FF);
    assert_eq!(buffer[2 * 6 + 1], 0xFF0000);
    // 画布外的列保持不变
    assert_eq!(buffer[5], 0);
}
