//! Stroke colors in HSL space and the golden-ratio random hue policy.
//!
//! Each stroke gets a fresh hue computed as `((U + φ) mod 1) * 360`, where
//! `U` is a uniform sample in `[0, 1)` and `φ` is the fractional part of the
//! golden ratio. Saturation and lightness are fixed by the caller.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fractional part of the golden ratio.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_9;

/// Saturation used for random stroke colors, in percent.
pub const DEFAULT_SATURATION: f32 = 75.0;

/// Lightness used for random stroke colors, in percent.
pub const DEFAULT_LIGHTNESS: f32 = 50.0;

// ─── Randomness ──────────────────────────────────────────────────────────

/// A source of uniform samples in `[0, 1)`.
///
/// The browser build feeds `Math.random`; tests feed fixed sequences.
pub trait UnitRandom {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UnitRandom for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Map a uniform sample to a hue in degrees `[0, 360)`.
pub fn golden_hue(unit: f64) -> f32 {
    let turn = (unit + GOLDEN_RATIO_CONJUGATE).rem_euclid(1.0);
    let hue = (turn * 360.0) as f32;
    // f32 rounding can land exactly on 360.
    if hue >= 360.0 { 0.0 } else { hue }
}

/// Draw a new stroke color with a golden-ratio hue.
pub fn random_color(rng: &mut dyn UnitRandom, saturation: f32, lightness: f32) -> Hsl {
    Hsl::new(golden_hue(rng.next_unit()), saturation, lightness)
}

// ─── Hsl ─────────────────────────────────────────────────────────────────

/// HSL color. Hue in degrees, saturation and lightness in percent,
/// optional alpha in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: Option<f32>,
}

impl Default for Hsl {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: None,
        }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// CSS color string: `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Parse `hsl(...)` / `hsla(...)` in comma or space separated form.
    /// Hue may carry a `deg` suffix, percentages may omit `%`.
    pub fn from_css(s: &str) -> Option<Self> {
        let s = s.trim();
        let body = s
            .strip_prefix("hsla(")
            .or_else(|| s.strip_prefix("hsl("))?
            .strip_suffix(')')?;
        let parts: Vec<&str> = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let hue = parse_number(parts.first()?.trim_end_matches("deg"))?;
        let saturation = parse_number(parts.get(1)?.trim_end_matches('%'))?;
        let lightness = parse_number(parts.get(2)?.trim_end_matches('%'))?;
        let color = Self::new(hue, saturation, lightness);
        match parts.len() {
            3 => Some(color),
            4 => Some(color.with_alpha(parse_alpha(parts[3])?)),
            _ => None,
        }
    }

    /// Convert to 8-bit sRGB with alpha.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let h = self.hue.rem_euclid(360.0) / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let a = channel(self.alpha.unwrap_or(1.0));

        if s == 0.0 {
            let v = channel(l);
            return [v, v, v, a];
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
            a,
        ]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            Some(a) => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                self.hue, self.saturation, self.lightness, a
            ),
            None => write!(
                f,
                "hsl({}, {}%, {}%)",
                self.hue, self.saturation, self.lightness
            ),
        }
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hsl::from_css(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hsl color: {s:?}")))
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn parse_number(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_alpha(s: &str) -> Option<f32> {
    match s.strip_suffix('%') {
        Some(pct) => parse_number(pct).map(|v| v / 100.0),
        None => parse_number(s),
    }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// xorshift64* scaled to `[0, 1)`.
    fn xorshift(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state ^= state >> 12;
            state ^= state << 25;
            state ^= state >> 27;
            let bits = state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
            bits as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn golden_hue_offsets_sample() {
        assert!((golden_hue(0.0) - 222.492_24).abs() < 1e-3);
        // 0.5 + φ wraps past one turn.
        assert!((golden_hue(0.5) - 42.492_24).abs() < 1e-3);
    }

    #[test]
    fn golden_hue_stays_in_range() {
        for unit in [0.0, 0.381_966, 0.381_966_011_250_105, 0.999_999_999, 0.25] {
            let hue = golden_hue(unit);
            assert!((0.0..360.0).contains(&hue), "hue out of range: {hue}");
        }
    }

    #[test]
    fn random_color_uses_fixed_saturation_and_lightness() {
        let mut rng = || 0.25;
        let color = random_color(&mut rng, DEFAULT_SATURATION, DEFAULT_LIGHTNESS);
        assert_eq!(color.saturation, 75.0);
        assert_eq!(color.lightness, 50.0);
        assert_eq!(color.alpha, None);
        assert!((color.hue - golden_hue(0.25)).abs() < f32::EPSILON);
    }

    #[test]
    fn random_hues_spread_around_the_wheel() {
        let mut rng = xorshift(0x9E37_79B9_7F4A_7C15);
        let hues: Vec<f32> = (0..1000)
            .map(|_| random_color(&mut rng, 75.0, 50.0).hue)
            .collect();

        let mut bins = [0usize; 8];
        for hue in &hues {
            bins[(*hue / 45.0) as usize] += 1;
        }
        for (i, count) in bins.iter().enumerate() {
            assert!(
                (60..=190).contains(count),
                "hue bin {i} is clustered: {count} of 1000"
            );
        }

        // Mean circular distance between successive hues of a well spread
        // sequence sits near a quarter turn.
        let mean: f32 = hues
            .windows(2)
            .map(|w| {
                let d = (w[0] - w[1]).abs();
                d.min(360.0 - d)
            })
            .sum::<f32>()
            / (hues.len() - 1) as f32;
        assert!((70.0..110.0).contains(&mean), "mean hue gap {mean}");
    }

    #[test]
    fn css_roundtrip() {
        let color = Hsl::new(10.0, 75.0, 50.0);
        assert_eq!(color.to_css(), "hsl(10, 75%, 50%)");
        assert_eq!(Hsl::from_css("hsl(10,75%,50%)"), Some(color));

        let translucent = color.with_alpha(0.5);
        assert_eq!(translucent.to_css(), "hsla(10, 75%, 50%, 0.5)");
        assert_eq!(Hsl::from_css(&translucent.to_css()), Some(translucent));
    }

    #[test]
    fn css_parse_variants() {
        assert_eq!(
            Hsl::from_css("hsl(120deg 100% 25% / 50%)"),
            Some(Hsl::new(120.0, 100.0, 25.0).with_alpha(0.5))
        );
        assert_eq!(Hsl::from_css("rgb(0, 0, 0)"), None);
        assert_eq!(Hsl::from_css("hsl(10, 75%)"), None);
        assert_eq!(Hsl::from_css("hsl(10, x%, 50%)"), None);
    }

    #[test]
    fn rgba_conversion() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Hsl::new(120.0, 100.0, 25.0).to_rgba8(), [0, 128, 0, 255]);
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgba8(), [0, 0, 255, 255]);
        assert_eq!(Hsl::default().to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(
            Hsl::new(0.0, 0.0, 100.0).with_alpha(0.0).to_rgba8(),
            [255, 255, 255, 0]
        );
    }
}
