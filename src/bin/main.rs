//! 无窗口演示 - 回放一段拖动/长按序列并导出截图

use anyhow::Result;
use drag_button::config::WidgetConfig;
use drag_button::event::Event;
use drag_button::ui::{CanvasSurface, Component, DraggableButton};
use drag_button::{Canvas, TextRenderer};

fn snapshot(widget: &dyn Component, config: &WidgetConfig, text: Option<&TextRenderer>, path: &str) -> Result<()> {
    let mut canvas = Canvas::new(config.window_width, config.window_height);
    canvas.clear(config.background()?);
    widget.render(&mut CanvasSurface::new(&mut canvas, text, 1.0));
    canvas.save_png(path)?;
    log::info!("Rendered {}", path);
    Ok(())
}

fn report(step: &str, widget: &DraggableButton) {
    let p = widget.position();
    log::info!(
        "{:<28} position=({}, {}) dragging={} mode={:?}",
        step, p.x, p.y, widget.is_dragging(), widget.mode()
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = WidgetConfig::load(config_path.as_deref())?;
    let text = TextRenderer::load_system_font()
        .map_err(|e| log::warn!("{:#}; labels will be skipped", e))
        .ok();

    let mut button = DraggableButton::from_config(&config)?;
    report("initial", &button);

    // 拖动
    let start = config.initial_position();
    let grab = (start.x + 50.0, start.y + 20.0);
    button.on_event(&Event::touch_start(0, grab.0, grab.1, 0));
    report("press inside", &button);
    button.on_event(&Event::touch_move(0, grab.0 + 20.0, grab.1 + 40.0, 16));
    button.on_event(&Event::touch_move(0, grab.0 + 50.0, grab.1 + 80.0, 32));
    report("moved", &button);
    button.on_event(&Event::touch_end(0, grab.0 + 50.0, grab.1 + 80.0, 48));
    report("released", &button);
    snapshot(&button, &config, text.as_ref(), "drag_button_free.png")?;

    // 长按锁定
    let center = button.position();
    button.on_event(&Event::touch_start(0, center.x, center.y, 1_000));
    let fire_at = button.next_deadline().unwrap_or(1_000 + config.long_press_timeout_ms);
    button.tick(fire_at);
    report("long press", &button);

    // 锁定后拖动不移动
    button.on_event(&Event::touch_move(0, center.x + 100.0, center.y + 100.0, fire_at + 16));
    report("locked move", &button);
    button.on_event(&Event::touch_end(0, center.x + 100.0, center.y + 100.0, fire_at + 32));
    snapshot(&button, &config, text.as_ref(), "drag_button_locked.png")?;

    // 按钮外的按下不被捕获
    let captured = button.on_event(&Event::touch_start(1, 0.0, 0.0, 5_000));
    button.on_event(&Event::touch_end(1, 0.0, 0.0, 5_010));
    log::info!("press outside captured={}", captured);

    Ok(())
}
