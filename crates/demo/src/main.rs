// File: crates/demo/src/main.rs
// Summary: Headless demo; replays clicks and key presses on a session and writes a PNG per stage.

use anyhow::{Context, Result};
use clip_core::{ClipSession, DemoConfig, Point};
use clip_render_skia::{render_to_png, RenderOptions};
use log::info;
use std::path::{Path, PathBuf};

/// Triangle straddling the default clip window, in scene coordinates.
const TRIANGLE: [Point; 3] = [Point::new(50, 50), Point::new(450, 50), Point::new(250, 350)];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Args: [config.json] [out_dir]
    let config_path = std::env::args().nth(1);
    let out_dir = std::env::args().nth(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));

    let cfg = DemoConfig::load_or_default(config_path.as_deref())
        .with_context(|| format!("failed to load config {:?}", config_path))?;
    info!("window {}x{}, clip {:?}", cfg.window_width, cfg.window_height, cfg.clip);
    let opts = RenderOptions::from_config(&cfg);
    let mut session = cfg.session();

    // Clicks arrive in raw window coordinates (origin top-left).
    for p in TRIANGLE {
        session.handle_click(p.x, cfg.window_height - p.y);
    }
    write_stage(&session, &opts, &out_dir, "polygon")?;

    session.handle_key('c');
    write_stage(&session, &opts, &out_dir, "clipped")?;
    let visible: Vec<_> = session.visible_segments().collect();
    println!(
        "{} of {} edges visible inside ({}, {})-({}, {})",
        visible.len(),
        session.polygon().edges().len(),
        cfg.clip.x_min(),
        cfg.clip.y_min(),
        cfg.clip.x_max(),
        cfg.clip.y_max(),
    );
    for s in &visible {
        println!("  ({}, {}) -> ({}, {})", s.start.x, s.start.y, s.end.x, s.end.y);
    }

    session.handle_key('r');
    write_stage(&session, &opts, &out_dir, "reset")?;
    Ok(())
}

fn write_stage(session: &ClipSession, opts: &RenderOptions, out_dir: &Path, name: &str) -> Result<()> {
    let out = out_dir.join(format!("{name}.png"));
    render_to_png(session, opts, &out).with_context(|| format!("rendering stage '{name}'"))?;
    println!("Wrote {}", out.display());
    Ok(())
}
