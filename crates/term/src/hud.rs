//! Text overlay drawn on top of a rendered frame, before diffing.

use std::borrow::Cow;

use crate::fb::FrameBuffer;
use crate::types::{Color, ColorToken, NamedColor, Settings, Theme};

const CONTROLS: &str = "WASD move | QE down/up | Arrows look | Shift sprint | Space pause | \
                        C theme | 1-4 speed | F1-F4 fps | 0,5-9 scenes | R reset | Esc quit";
const PAUSED_BANNER: &str = "[ PAUSED ]";

/// Live metrics shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudInfo {
    pub fps: f32,
    /// Average time spent tracing a frame.
    pub render_ms: f32,
    pub rays_per_sec: u64,
    pub steps_per_ray: f32,
    pub move_speed: f32,
    pub paused: bool,
}

/// Draws the controls legend, metrics, toggle states and pause banner.
pub fn draw_hud(fb: &mut FrameBuffer, theme: Theme, settings: &Settings, info: &HudInfo) {
    let width = fb.width() as usize;
    if width == 0 || fb.height() == 0 {
        return;
    }

    let primary = Some(ColorToken::foreground(theme.primary()));
    let secondary = Some(ColorToken::foreground(theme.secondary()));

    fb.put_str(0, 0, &fit(CONTROLS, width), primary);

    let mut row = 1;
    if settings.show_debug_info {
        let long = format!(
            "FPS: {:.0} | {:.1} ms | Rays: {} | Steps: {:.1} | Speed: {:.1}",
            info.fps, info.render_ms, info.rays_per_sec, info.steps_per_ray, info.move_speed
        );
        let line = if long.chars().count() <= width {
            long
        } else {
            format!("{:.0}fps {:.1}ms", info.fps, info.render_ms)
        };
        fb.put_str(0, row, &fit(&line, width), secondary);
        row += 1;
    }

    let mut x = 0u16;
    for (label, on) in [
        ("[H]HalfBlkRender", settings.use_half_blocks),
        ("[F]Fog", settings.enable_fog),
        ("[G]GammaColorMap", settings.map_colors_with_gamma),
    ] {
        let text = format!("{label}:{}", if on { "ON" } else { "OFF" });
        fb.put_str(x, row, &text, Some(toggle_color(on)));
        x = x.saturating_add(text.len() as u16 + 1);
    }
    if info.paused {
        let paused = Some(ColorToken::foreground(Color::Named(NamedColor::Yellow)));
        fb.put_str(x, row, "PAUSED", paused);

        let banner_x = (width.saturating_sub(PAUSED_BANNER.len()) / 2) as u16;
        fb.put_str(banner_x, fb.height() / 2, PAUSED_BANNER, primary);
    }
}

fn toggle_color(on: bool) -> ColorToken {
    let named = if on {
        NamedColor::BrightGreen
    } else {
        NamedColor::BrightRed
    };
    ColorToken::foreground(Color::Named(named))
}

/// Truncates `text` to `width` characters, marking the cut with `...`.
fn fit(text: &str, width: usize) -> Cow<'_, str> {
    if text.chars().count() <= width {
        return Cow::Borrowed(text);
    }
    if width <= 3 {
        return Cow::Owned(text.chars().take(width).collect());
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        fb.row(y).0.iter().collect()
    }

    #[test]
    fn legend_is_truncated_to_width() {
        let mut fb = FrameBuffer::new(20, 4);
        draw_hud(&mut fb, Theme::Dark, &Settings::default(), &HudInfo::default());
        let legend = row_text(&fb, 0);
        assert_eq!(legend.chars().count(), 20);
        assert!(legend.ends_with("..."));
    }

    #[test]
    fn metrics_row_follows_debug_toggle() {
        let mut settings = Settings::default();
        let info = HudInfo {
            fps: 60.0,
            render_ms: 16.7,
            ..HudInfo::default()
        };

        let mut fb = FrameBuffer::new(200, 5);
        draw_hud(&mut fb, Theme::Dark, &settings, &info);
        assert!(row_text(&fb, 1).starts_with("FPS: 60 | 16.7 ms"));
        assert!(row_text(&fb, 2).starts_with("[H]HalfBlkRender"));

        settings.show_debug_info = false;
        let mut fb = FrameBuffer::new(200, 5);
        draw_hud(&mut fb, Theme::Dark, &settings, &info);
        assert!(row_text(&fb, 1).starts_with("[H]HalfBlkRender"));
    }

    #[test]
    fn narrow_terminal_uses_short_metrics() {
        let info = HudInfo {
            fps: 30.0,
            render_ms: 33.3,
            ..HudInfo::default()
        };
        let mut fb = FrameBuffer::new(30, 5);
        draw_hud(&mut fb, Theme::Dark, &Settings::default(), &info);
        assert!(row_text(&fb, 1).starts_with("30fps 33.3ms"));
    }

    #[test]
    fn toggles_are_colored_by_state() {
        let mut settings = Settings::default();
        settings.enable_fog = false;
        let mut fb = FrameBuffer::new(120, 5);
        draw_hud(&mut fb, Theme::Dark, &settings, &HudInfo::default());

        let half = fb.get(0, 2).unwrap();
        assert_eq!(half.color, Some(toggle_color(true)));
        let fog_x = "[H]HalfBlkRender:ON ".len() as u16;
        let fog = fb.get(fog_x, 2).unwrap();
        assert_eq!(fog.ch, '[');
        assert_eq!(fog.color, Some(toggle_color(false)));
        assert!(row_text(&fb, 2).starts_with("[H]HalfBlkRender:ON [F]Fog:OFF [G]GammaColorMap:ON "));
    }

    #[test]
    fn pause_banner_is_centered() {
        let info = HudInfo {
            paused: true,
            ..HudInfo::default()
        };
        let mut fb = FrameBuffer::new(80, 9);
        draw_hud(&mut fb, Theme::Amber, &Settings::default(), &info);
        assert_eq!(&row_text(&fb, 4)[35..45], PAUSED_BANNER);
        assert!(row_text(&fb, 2).contains("PAUSED"));
    }

    #[test]
    fn fit_handles_tiny_widths() {
        assert_eq!(fit("abcdef", 2), "ab");
        assert_eq!(fit("abcdef", 5), "ab...");
        assert_eq!(fit("abc", 5), "abc");
    }
}
