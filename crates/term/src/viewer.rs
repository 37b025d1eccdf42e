//! Viewer state shared by the frame loop: everything except the terminal itself.
//!
//! Commands are applied between frames; [`Viewer::frame`] advances the scene,
//! moves the camera, renders and draws the HUD. The terminal-facing loop only
//! has to feed events in and push [`Viewer::output_mut`] through a
//! [`crate::TerminalSession`].

use std::time::Instant;

use crate::core::presets::DEFAULT_CAMERA_POSE;
use crate::core::{Camera, Scene};
use crate::diff::FrameDiffer;
use crate::fb::FrameBuffer;
use crate::hud::{draw_hud, HudInfo};
use crate::pacing::FramePacer;
use crate::render::Renderer;
use crate::types::{Command, MoveIntent, ScenePreset, Settings, Theme};

/// Seconds between metric refreshes.
const STATS_INTERVAL: f32 = 0.5;

#[derive(Debug, Default)]
struct FrameMetrics {
    elapsed: f32,
    frames: u32,
    render_secs: f32,
    renders: u32,
    hud: HudInfo,
}

pub struct Viewer {
    settings: Settings,
    scene: Scene,
    preset: ScenePreset,
    camera: Camera,
    renderer: Renderer,
    fb: FrameBuffer,
    // Last rendered picture without the HUD, restored on frames that skip rendering.
    image: FrameBuffer,
    differ: FrameDiffer,
    pacer: FramePacer,
    metrics: FrameMetrics,
    paused: bool,
    quit: bool,
    // Set when the picture must be re-rendered even while paused.
    stale: bool,
}

impl Viewer {
    pub fn new(settings: Settings, theme: Theme, preset: ScenePreset, width: u16, height: u16) -> Self {
        let p = DEFAULT_CAMERA_POSE;
        let camera = Camera::new(p.position, p.yaw, p.pitch).with_fov(settings.field_of_view);
        let pacer = FramePacer::new(settings.target_fps);
        let mut viewer = Self {
            settings,
            scene: Scene::new(),
            preset,
            camera,
            renderer: Renderer::new(theme),
            fb: FrameBuffer::new(width, height),
            image: FrameBuffer::new(width, height),
            differ: FrameDiffer::new(width, height),
            pacer,
            metrics: FrameMetrics::default(),
            paused: false,
            quit: false,
            stale: true,
        };
        viewer.load_scene(preset);
        viewer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn preset(&self) -> ScenePreset {
        self.preset
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn theme(&self) -> Theme {
        self.renderer.theme()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn hud_info(&self) -> HudInfo {
        self.metrics.hud
    }

    /// Returns the elapsed seconds when a frame is due at `now`.
    pub fn frame_due(&mut self, now: Instant) -> Option<f32> {
        self.pacer.tick(now)
    }

    /// The diff state and the finished frame, for presenting.
    pub fn output_mut(&mut self) -> (&mut FrameDiffer, &FrameBuffer) {
        (&mut self.differ, &self.fb)
    }

    /// New terminal size: the next frame is fully re-rendered and redrawn.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
        self.image.resize(width, height);
        self.differ.resize(width, height);
        self.stale = true;
        tracing::debug!(width, height, "viewport resized");
    }

    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "command");
        match command {
            Command::Quit => self.quit = true,
            Command::TogglePause => self.paused = !self.paused,
            Command::CycleTheme => {
                let theme = self.renderer.theme().next();
                self.renderer.set_theme(theme);
            }
            Command::ToggleHalfBlocks => {
                self.settings.use_half_blocks = !self.settings.use_half_blocks
            }
            Command::ToggleFog => self.settings.enable_fog = !self.settings.enable_fog,
            Command::ToggleGamma => {
                self.settings.map_colors_with_gamma = !self.settings.map_colors_with_gamma
            }
            Command::ToggleDebugInfo => {
                self.settings.show_debug_info = !self.settings.show_debug_info
            }
            Command::Reset => {
                self.load_scene(self.preset);
                self.scene.rewind();
            }
            Command::SetMoveSpeed(speed) => self.settings.move_speed = speed,
            Command::SetTargetFps(fps) => {
                self.settings.target_fps = fps;
                self.pacer.set_target_fps(fps);
            }
            Command::LoadScene(preset) => self.load_scene(preset),
        }
        self.stale = true;
    }

    fn load_scene(&mut self, preset: ScenePreset) {
        match self.scene.load_preset(preset) {
            Some(pose) => self.camera.set_pose(pose),
            None => self.camera.reset(),
        }
        self.preset = preset;
        tracing::info!(scene = preset.as_str(), "scene loaded");
    }

    /// Runs one frame: simulation and camera update unless paused, render, HUD.
    pub fn frame(&mut self, dt: f32, intent: &MoveIntent) {
        if !self.paused {
            self.scene.advance(dt);
            self.camera.update(dt, intent, &self.settings);
        }

        if !self.paused || self.stale {
            let start = Instant::now();
            self.renderer
                .render(&self.scene, &self.camera, &self.settings, &mut self.image);
            self.metrics.render_secs += start.elapsed().as_secs_f32();
            self.metrics.renders += 1;
            self.stale = false;
        }
        self.fb.copy_from(&self.image);

        self.update_metrics(dt);
        draw_hud(
            &mut self.fb,
            self.renderer.theme(),
            &self.settings,
            &self.metrics.hud,
        );
    }

    fn update_metrics(&mut self, dt: f32) {
        let m = &mut self.metrics;
        m.elapsed += dt;
        m.frames += 1;
        m.hud.move_speed = self.settings.move_speed;
        m.hud.paused = self.paused;

        if m.elapsed < STATS_INTERVAL {
            return;
        }

        let stats = self.renderer.stats();
        m.hud.fps = m.frames as f32 / m.elapsed;
        if m.renders > 0 {
            m.hud.render_ms = m.render_secs * 1000.0 / m.renders as f32;
        }
        m.hud.rays_per_sec = (stats.rays as f32 / m.elapsed) as u64;
        m.hud.steps_per_ray = if stats.rays > 0 {
            stats.steps as f32 / stats.rays as f32
        } else {
            0.0
        };
        tracing::debug!(
            fps = m.hud.fps,
            render_ms = m.hud.render_ms,
            rays_per_sec = m.hud.rays_per_sec,
            steps_per_ray = m.hud.steps_per_ray,
            "render stats"
        );
        m.elapsed = 0.0;
        m.frames = 0;
        m.render_secs = 0.0;
        m.renders = 0;
    }
}
