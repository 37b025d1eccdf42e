use glam::Vec3;
use tui_raymarch::core::{march, shade_march, Camera, MarchLimits, Scene, ShadeParams};
use tui_raymarch::term::{FrameBuffer, Renderer};
use tui_raymarch::types::{
    Color, ColorToken, NamedColor, ScenePreset, Settings, Theme, FULL_BLOCK, UPPER_HALF_BLOCK,
};

fn settings(half_blocks: bool) -> Settings {
    Settings {
        use_half_blocks: half_blocks,
        ..Settings::default()
    }
}

fn sample(scene: &Scene, camera: &Camera, s: &Settings, x: u32, y: u32, w: u32, h: u32) -> ColorToken {
    let ray = camera.ray(x, y, w, h);
    let m = march(scene, &ray, MarchLimits::new(s.max_raymarch_steps, s.max_render_distance));
    shade_march(scene, &ray, &m, &ShadeParams::from_settings(s, Theme::Dark))
}

#[test]
fn half_block_cells_pack_two_independent_samples() {
    let scene = Scene::from_preset(ScenePreset::Default);
    let camera = Camera::new(Vec3::new(0.0, 1.0, -8.0), 0.0, 0.0);
    let s = settings(true);
    let mut fb = FrameBuffer::new(16, 6);
    Renderer::new(Theme::Dark).render(&scene, &camera, &s, &mut fb);

    for y in 0..6u16 {
        for x in 0..16u16 {
            let top = sample(&scene, &camera, &s, x as u32, y as u32 * 2, 16, 12);
            let bottom = sample(&scene, &camera, &s, x as u32, y as u32 * 2 + 1, 16, 12);
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.ch, UPPER_HALF_BLOCK);
            let token = cell.color.unwrap();
            assert_eq!(token.fg, top.fg, "({x},{y}) top");
            assert_eq!(token.bg, Some(bottom.fg), "({x},{y}) bottom");
        }
    }
}

#[test]
fn full_block_cells_hold_one_sample() {
    let scene = Scene::from_preset(ScenePreset::Showcase);
    let camera = Camera::new(Vec3::new(0.0, 1.0, -8.0), 0.1, -0.1);
    let s = settings(false);
    let mut fb = FrameBuffer::new(12, 5);
    Renderer::new(Theme::Dark).render(&scene, &camera, &s, &mut fb);

    for y in 0..5u16 {
        for x in 0..12u16 {
            let expected = sample(&scene, &camera, &s, x as u32, y as u32, 12, 5);
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.ch, FULL_BLOCK);
            assert_eq!(cell.color, Some(expected));
        }
    }
}

#[test]
fn render_overwrites_every_cell() {
    let scene = Scene::from_preset(ScenePreset::Zen);
    let camera = Camera::new(Vec3::new(0.0, 1.0, -8.0), 0.0, 0.0);
    let mut fb = FrameBuffer::new(10, 4);
    for y in 0..4 {
        fb.put_str(0, y, "xxxxxxxxxx", None);
    }
    Renderer::new(Theme::Dark).render(&scene, &camera, &settings(true), &mut fb);
    assert!(fb.glyphs().iter().all(|&c| c == UPPER_HALF_BLOCK));
    assert!(fb.colors().iter().all(|c| c.is_some()));
}

#[test]
fn empty_scene_background_follows_theme() {
    let scene = Scene::new();
    let camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
    let white = Color::Named(NamedColor::White);
    let black = Color::Named(NamedColor::Black);

    let mut fb = FrameBuffer::new(4, 2);
    Renderer::new(Theme::Light).render(&scene, &camera, &settings(true), &mut fb);
    let expected = ColorToken {
        fg: white,
        bg: Some(white),
    };
    assert!(fb.colors().iter().all(|&c| c == Some(expected)));

    let mut renderer = Renderer::new(Theme::Light);
    renderer.set_theme(Theme::Cyan);
    renderer.render(&scene, &camera, &settings(false), &mut fb);
    assert!(fb
        .colors()
        .iter()
        .all(|&c| c == Some(ColorToken::foreground(black))));
}

#[test]
fn repeated_renders_are_identical() {
    let scene = Scene::from_preset(ScenePreset::Rings);
    let camera = Camera::new(Vec3::new(0.0, 1.0, -8.0), 0.3, 0.2);
    let renderer = Renderer::new(Theme::Amber);
    let mut a = FrameBuffer::new(20, 8);
    let mut b = FrameBuffer::new(20, 8);
    renderer.render(&scene, &camera, &settings(true), &mut a);
    renderer.render(&scene, &camera, &settings(true), &mut b);
    assert_eq!(a, b);
}
