//! Terminal raymarcher (default binary).
//!
//! Walks a signed-distance-field scene in first person. Uses crossterm for
//! input and a framebuffer-based renderer that only redraws changed rows.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_raymarch::input::{map_command, HeldKeys};
use tui_raymarch::term::{TerminalSession, Viewer};
use tui_raymarch::types::{ScenePreset, Settings, Theme};

/// Interactive signed-distance-field renderer for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tui-raymarch")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON settings file (camelCase keys, missing keys use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting scene: default, rings, zen, corridor, playground, showcase
    #[arg(long, default_value = "default", value_parser = parse_scene)]
    scene: ScenePreset,

    /// Color theme: dark, light, cyan, green, amber
    #[arg(long, default_value = "dark", value_parser = parse_theme)]
    theme: Theme,

    /// Target frame rate (overrides the config file)
    #[arg(long)]
    fps: Option<u32>,

    /// One sample per cell instead of two stacked half blocks
    #[arg(long)]
    full_blocks: bool,

    /// Write debug logs to this file (the terminal itself is in use)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_scene(s: &str) -> Result<ScenePreset, String> {
    ScenePreset::from_str(s).ok_or_else(|| format!("unknown scene `{s}`"))
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::from_str(s).ok_or_else(|| format!("unknown theme `{s}`"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    let settings = load_settings(&args)?;
    tracing::info!(?settings, scene = args.scene.as_str(), "starting");

    let mut term = TerminalSession::new();
    term.enter()?;

    let result = run(&mut term, settings, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(fps) = args.fps {
        settings.target_fps = fps;
    }
    if args.full_blocks {
        settings.use_half_blocks = false;
    }
    settings.validate()?;
    Ok(settings)
}

fn run(term: &mut TerminalSession, settings: Settings, args: &Args) -> Result<()> {
    let (w, h) = term.size()?;
    let mut viewer = Viewer::new(settings, args.theme, args.scene, w, h);
    let mut held = HeldKeys::new();

    loop {
        // Input with timeout until the next frame.
        let timeout = viewer.pacer().time_until_next(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let movement = held.handle_event(key, Instant::now());
                    if !movement && key.kind == KeyEventKind::Press {
                        if let Some(command) = map_command(key) {
                            viewer.apply(command);
                        }
                    }
                }
                Event::Resize(w, h) => {
                    viewer.resize(w.max(1), h.max(1));
                    term.clear()?;
                }
                _ => {}
            }

            if viewer.should_quit() {
                return Ok(());
            }
            continue;
        }

        let now = Instant::now();
        let Some(dt) = viewer.frame_due(now) else {
            continue;
        };

        let intent = held.intent(now);
        viewer.frame(dt, &intent);

        let (differ, fb) = viewer.output_mut();
        term.present(differ, fb)?;
    }
}
