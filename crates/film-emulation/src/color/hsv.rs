//! HSV color representation used by hue-indexed curves.

use super::Rgb;

/// Hue / saturation / value.
///
/// `h` is in degrees, 0.0..360.0. `s` and `v` are 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value (max channel)
    pub v: f32,
}

impl Hsv {
    /// Create a new Hsv color.
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert any RGB pixel to HSV. Achromatic pixels get hue 0.
    pub fn from_rgb<C: Rgb>(color: C) -> Self {
        let [r, g, b] = color.channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if delta < 1e-6 {
            return Self::new(0.0, 0.0, max);
        }

        let s = if max > 0.0 { delta / max } else { 0.0 };

        let h = if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self::new(wrap_degrees(h), s, max)
    }

    /// Convert back to an RGB pixel of the requested encoding.
    pub fn to_rgb<C: Rgb>(self) -> C {
        let v = self.v;
        if self.s <= 0.0 {
            return C::from_channels([v, v, v]);
        }

        let h = wrap_degrees(self.h) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - self.s);
        let q = v * (1.0 - self.s * f);
        let t = v * (1.0 - self.s * (1.0 - f));

        let channels = match sector as u32 {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        };
        C::from_channels(channels)
    }
}

/// Wrap an angle into 0.0..360.0.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0.
#[inline]
pub(crate) fn wrap_degrees(h: f32) -> f32 {
    let wrapped = h.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
