//! 带窗口的宿主表面 - 控件占满整个窗口

mod app_window;

use anyhow::{anyhow, Context, Result};
use app_window::{present_to_buffer, PointerMapper};
use drag_button::config::WidgetConfig;
use drag_button::ui::{Component, DraggableButton};
use drag_button::{Canvas, Color, TextRenderer};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

struct DragButtonWindow {
    config: WidgetConfig,
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    canvas: Option<Canvas>,
    text_renderer: Option<TextRenderer>,
    widget: Box<dyn Component>,
    background: Color,
    input: PointerMapper,
    scale_factor: f64,
    started: Instant,
}

impl DragButtonWindow {
    fn new(config: WidgetConfig) -> Result<Self> {
        let widget = DraggableButton::from_config(&config)?;
        let background = config.background()?;

        let text_renderer = match TextRenderer::load_system_font() {
            Ok(tr) => Some(tr),
            Err(e) => {
                log::warn!("{:#}; the button label will not be drawn", e);
                None
            }
        };

        Ok(Self {
            config,
            window: None,
            surface: None,
            canvas: None,
            text_renderer,
            widget: Box::new(widget),
            background,
            input: PointerMapper::new(1.0),
            scale_factor: 1.0,
            started: Instant::now(),
        })
    }

    /// 启动以来的毫秒数，作为事件时间戳
    fn now(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let size = self.config.window_size();
        let window_attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(size.width, size.height));

        let window = Arc::new(event_loop.create_window(window_attrs).context("failed to create window")?);
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer context: {}", e))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer surface: {}", e))?;

        self.scale_factor = window.scale_factor();
        self.input.set_scale_factor(self.scale_factor);
        log::info!("Window created, scale factor {}", self.scale_factor);

        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return Ok(());
        };
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };

        let stale = self.canvas.as_ref()
            .map(|c| c.width() != size.width || c.height() != size.height)
            .unwrap_or(true);
        if stale {
            self.canvas = Some(Canvas::new(size.width, size.height));
        }
        let Some(canvas) = &mut self.canvas else {
            return Ok(());
        };

        surface
            .resize(width, height)
            .map_err(|e| anyhow!("failed to resize surface: {}", e))?;
        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow!("failed to map surface buffer: {}", e))?;
        present_to_buffer(
            &mut buffer,
            size.width,
            size.height,
            canvas,
            self.background,
            self.widget.as_ref(),
            self.text_renderer.as_ref(),
            self.scale_factor as f32,
        );
        buffer
            .present()
            .map_err(|e| anyhow!("failed to present buffer: {}", e))
    }

    fn request_redraw_if_needed(&mut self) {
        if self.widget.take_redraw() {
            if let Some(w) = &self.window {
                w.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for DragButtonWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("{:#}", e);
            event_loop.exit();
            return;
        }
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                self.input.set_scale_factor(*scale_factor);
            }
            WindowEvent::Resized(_) => {
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.present() {
                    log::error!("{:#}", e);
                }
                return;
            }
            _ => {}
        }

        let now = self.now();
        if let Some(pointer_event) = self.input.map(&event, now) {
            self.widget.on_event(&pointer_event);
            self.request_redraw_if_needed();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.now();
        self.widget.tick(now);
        self.request_redraw_if_needed();

        // 有待触发的长按时定时唤醒
        let wake_at = self.widget.next_deadline()
            .and_then(|deadline| self.started.checked_add(Duration::from_millis(deadline)));
        match wake_at {
            Some(instant) => event_loop.set_control_flow(ControlFlow::WaitUntil(instant)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = WidgetConfig::load(config_path.as_deref())?;
    log::info!("Starting {} ({}x{})", config.title, config.window_width, config.window_height);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = DragButtonWindow::new(config)?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
