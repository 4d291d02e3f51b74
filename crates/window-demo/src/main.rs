// File: crates/window-demo/src/main.rs
// Summary: Interactive window: left click adds a vertex, 'c' clips, 'r' resets. Renders through
// clip-render-skia into an RGBA buffer and blits it with winit + softbuffer.

use anyhow::{anyhow, Context, Result};
use clip_core::{ClipSession, Command, DemoConfig};
use clip_render_skia::{render_to_rgba8, RenderOptions};
use log::{debug, error};
use std::num::NonZeroU32;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Arg: optional JSON config path
    let config_path = std::env::args().nth(1);
    let cfg = DemoConfig::load_or_default(config_path.as_deref())
        .with_context(|| format!("failed to load config {:?}", config_path))?;
    let opts = RenderOptions::from_config(&cfg);
    let mut session = cfg.session();

    // Fixed-size window; physical pixels map 1:1 onto scene units.
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(cfg.title.as_str())
        .with_inner_size(PhysicalSize::new(cfg.window_width as u32, cfg.window_height as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut draw = move |session: &ClipSession| -> Result<()> {
        let (rgba, w, h, _) = render_to_rgba8(session, &opts)?;
        let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
            anyhow::bail!("empty frame {w}x{h}");
        };
        surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;

        // Softbuffer pixels are 0RGB.
        let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow!("present: {e}"))?;
        Ok(())
    };

    let title = cfg.title.clone();
    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        session.handle_click(x.round() as i32, y.round() as i32);
                        window.request_redraw();
                    }
                }
                WindowEvent::ReceivedCharacter(ch) => {
                    if let Some(cmd) = session.handle_key(ch) {
                        let suffix = match cmd {
                            Command::Clip => " [clipped]",
                            Command::Reset => "",
                        };
                        window.set_title(&format!("{title}{suffix}"));
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed
                        && input.virtual_keycode == Some(VirtualKeyCode::Escape)
                    {
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                debug!("redraw: {} vertices, clipping={}", session.polygon().len(), session.is_clipping());
                if let Err(e) = draw(&session) {
                    error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}
