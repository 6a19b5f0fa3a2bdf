use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Color;

/// Easing curves applied to unit progress. Closed set; screens pick a
/// variant per transition instead of supplying curve functions.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    Spring { damping: f32, stiffness: f32 },
}

impl Easing {
    /// Map raw progress `t` in `[0, 1]` through the curve. Springs may
    /// overshoot 1 before settling.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Spring { damping, stiffness } => {
                let omega = (stiffness / damping).sqrt();
                let zeta = damping / (2.0 * (stiffness * damping).sqrt());
                if zeta < 1.0 {
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let t = t * 2.0;
                    1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
                } else {
                    // Critically damped and overdamped fall back to ease-out
                    t * (2.0 - t)
                }
            }
        }
    }
}

/// A declarative transition descriptor: wait `delay`, then ease from 0 to 1
/// over `duration`. Pure with respect to elapsed time, so choreographies are
/// plain constants advanced by the render loop clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(delay_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
            easing,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.delay {
            return 0.0;
        }
        let duration = self.duration.as_secs_f32().max(f32::EPSILON);
        let t = (elapsed - self.delay).as_secs_f32() / duration;
        if t >= 1.0 {
            1.0
        } else {
            self.easing.apply(t)
        }
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Wall clock for a screen's entrance choreography, restarted on entry.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    started: Instant,
}

impl Timeline {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
impl Timeline {
    /// A timeline far enough in the past that every entrance has settled.
    pub fn settled() -> Self {
        Self {
            started: Instant::now()
                .checked_sub(Duration::from_secs(30))
                .unwrap_or_else(Instant::now),
        }
    }
}

// Press feedback settles the way the mobile design's spring did.
const PRESS_PULSE: Transition = Transition::new(
    0,
    250,
    Easing::Spring {
        damping: 15.0,
        stiffness: 400.0,
    },
);

/// Press feedback pulse: full intensity on activation, springing back to
/// rest. Fire-and-forget, no app state changes on completion.
#[derive(Debug, Clone, Copy)]
pub struct Press {
    started: Instant,
}

impl Press {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn intensity(&self) -> f32 {
        (1.0 - PRESS_PULSE.progress(self.started.elapsed())).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        PRESS_PULSE.is_done(self.started.elapsed())
    }
}

impl Default for Press {
    fn default() -> Self {
        Self::new()
    }
}

/// Blend a foreground color up from the background; `t` = 1 is fully
/// visible. Non-RGB colors snap at the halfway point.
pub fn fade(color: Color, bg: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (channels(bg), channels(color)) {
        (Some((r0, g0, b0)), Some((r1, g1, b1))) => Color::Rgb(
            lerp(r0, r1, t),
            lerp(g0, g1, t),
            lerp(b0, b1, t),
        ),
        _ => {
            if t < 0.5 {
                bg
            } else {
                color
            }
        }
    }
}

/// Fade a style's colors up from the background.
pub fn faded(style: ratatui::style::Style, bg: Color, t: f32) -> ratatui::style::Style {
    let mut style = style;
    if let Some(fg) = style.fg {
        style.fg = Some(fade(fg, bg, t));
    }
    if let Some(b) = style.bg {
        style.bg = Some(fade(b, bg, t));
    }
    style
}

/// Shift `area` down by the transition's remaining travel, clipping at its
/// own bottom edge. Progress 1 leaves the area untouched.
pub fn slide_down(area: Rect, progress: f32, travel: u16) -> Rect {
    let rows = remaining_rows(progress, travel).min(area.height);
    Rect::new(area.x, area.y + rows, area.width, area.height - rows)
}

/// Reveal `area` from the top as progress approaches 1, so content appears
/// to drop in from above.
pub fn slide_from_above(area: Rect, progress: f32, travel: u16) -> Rect {
    let rows = remaining_rows(progress, travel).min(area.height);
    Rect::new(area.x, area.y, area.width, area.height - rows)
}

fn remaining_rows(progress: f32, travel: u16) -> u16 {
    ((1.0 - progress).max(0.0) * travel as f32).round() as u16
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

fn channels(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::White => Some((255, 255, 255)),
        Color::Gray => Some((160, 160, 160)),
        Color::DarkGray => Some((80, 80, 80)),
        Color::Red => Some((205, 49, 49)),
        Color::Green => Some((13, 188, 121)),
        Color::Yellow => Some((229, 229, 16)),
        Color::Blue => Some((36, 114, 200)),
        Color::Magenta => Some((188, 63, 188)),
        Color::Cyan => Some((17, 168, 205)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWEEN: Transition = Transition::new(200, 400, Easing::EaseOut);

    #[test]
    fn transition_holds_zero_through_delay() {
        assert_eq!(TWEEN.progress(Duration::ZERO), 0.0);
        assert_eq!(TWEEN.progress(Duration::from_millis(200)), 0.0);
    }

    #[test]
    fn transition_reaches_one_after_delay_plus_duration() {
        assert_eq!(TWEEN.progress(Duration::from_millis(600)), 1.0);
        assert_eq!(TWEEN.progress(Duration::from_secs(10)), 1.0);
        assert!(TWEEN.is_done(Duration::from_millis(600)));
    }

    #[test]
    fn transition_is_monotone_for_ease_out() {
        let mut last = 0.0;
        for ms in (200..=600).step_by(20) {
            let p = TWEEN.progress(Duration::from_millis(ms));
            assert!(p >= last, "regressed at {ms}ms: {p} < {last}");
            last = p;
        }
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn spring_starts_at_rest() {
        let spring = Easing::Spring {
            damping: 15.0,
            stiffness: 100.0,
        };
        assert!(spring.apply(0.0).abs() < 1e-6);
    }

    #[test]
    fn fade_interpolates_rgb_endpoints() {
        let bg = Color::Rgb(0, 0, 0);
        let fg = Color::Rgb(200, 100, 50);
        assert_eq!(fade(fg, bg, 0.0), bg);
        assert_eq!(fade(fg, bg, 1.0), fg);
        assert_eq!(fade(fg, bg, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn slide_down_travels_and_settles() {
        let area = Rect::new(0, 2, 10, 8);
        assert_eq!(slide_down(area, 1.0, 3), area);
        let start = slide_down(area, 0.0, 3);
        assert_eq!(start.y, 5);
        assert_eq!(start.height, 5);
    }

    #[test]
    fn slide_clips_to_area_height() {
        let area = Rect::new(0, 0, 10, 2);
        let shifted = slide_down(area, 0.0, 5);
        assert_eq!(shifted.height, 0);
    }
}
