//! # Palette Fade
//!
//! Smooth color transitions between threshold palettes. The original design
//! animates every color change over a fixed duration; here the fade is a
//! small piece of presentation state the event loop samples once per frame.
//!
//! Fades are fire-and-forget: nothing waits on completion, and a new edit
//! mid-fade simply retargets the animation from its current blend, which is
//! what makes rapid typing look continuous instead of flickery.

use std::time::{Duration, Instant};

use crate::core::palette::{Palette, Rgb};

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

fn mix_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    Rgb {
        r: lerp_u8(a.r, b.r, t),
        g: lerp_u8(a.g, b.g, t),
        b: lerp_u8(a.b, b.b, t),
    }
}

fn mix_palette(a: Palette, b: Palette, t: f32) -> Palette {
    Palette {
        field: mix_rgb(a.field, b.field, t),
        screen: mix_rgb(a.screen, b.screen, t),
        counter: mix_rgb(a.counter, b.counter, t),
    }
}

/// A timed linear blend from one palette to another.
pub struct PaletteFade {
    from: Palette,
    to: Palette,
    started: Instant,
    duration: Duration,
}

impl PaletteFade {
    /// A settled fade showing `initial`.
    pub fn new(initial: Palette, duration: Duration) -> Self {
        Self {
            from: initial,
            to: initial,
            started: Instant::now(),
            duration,
        }
    }

    /// Begin fading toward `target` from whatever is on screen right now.
    /// Retargeting an in-flight fade restarts the clock from the current
    /// blend, never from the old endpoints.
    pub fn retarget(&mut self, target: Palette) {
        if target == self.to {
            return;
        }
        self.from = self.current();
        self.to = target;
        self.started = Instant::now();
    }

    /// The palette to paint this frame.
    pub fn current(&self) -> Palette {
        self.at(self.progress())
    }

    /// True while the transition is still animating (the event loop keeps
    /// redrawing at animation pace while this holds).
    pub fn in_flight(&self) -> bool {
        self.from != self.to && self.progress() < 1.0
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.started.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Blend at an explicit progress value in `[0, 1]`.
    fn at(&self, t: f32) -> Palette {
        if t >= 1.0 {
            self.to
        } else {
            mix_palette(self.from, self.to, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::palette_for;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp_u8(0, 200, 0.0), 0);
        assert_eq!(lerp_u8(0, 200, 1.0), 200);
        assert_eq!(lerp_u8(0, 200, 0.5), 100);
        assert_eq!(lerp_u8(200, 0, 0.5), 100);
    }

    #[test]
    fn test_fade_endpoints() {
        let mut fade = PaletteFade::new(palette_for(200), Duration::from_millis(250));
        fade.retarget(palette_for(0));
        assert_eq!(fade.at(0.0), palette_for(200));
        assert_eq!(fade.at(1.0), palette_for(0));
    }

    #[test]
    fn test_fade_midpoint_blends_channels() {
        let from = palette_for(200); // field FFEBEE
        let to = palette_for(0); // field 1F1F21
        let mut fade = PaletteFade::new(from, Duration::from_millis(250));
        fade.retarget(to);
        let mid = fade.at(0.5);
        assert_eq!(mid.field.r, lerp_u8(from.field.r, to.field.r, 0.5));
        assert_ne!(mid, from);
        assert_ne!(mid, to);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let mut fade = PaletteFade::new(palette_for(200), Duration::ZERO);
        fade.retarget(palette_for(150));
        assert!(!fade.in_flight());
        assert_eq!(fade.current(), palette_for(150));
    }

    #[test]
    fn test_retarget_to_same_palette_is_a_no_op() {
        let mut fade = PaletteFade::new(palette_for(200), Duration::from_millis(250));
        fade.retarget(palette_for(200));
        assert!(!fade.in_flight());
    }
}
