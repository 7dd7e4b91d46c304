/// Packed `0xAARRGGBB` colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Per-channel linear blend; `fraction` is clamped to `[0, 1]`.
    pub fn lerp(from: Argb, to: Argb, fraction: f32) -> Argb {
        let t = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let mix = |a: u8, b: u8| -> u8 {
            let value = a as f32 + (b as f32 - a as f32) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Argb::from_channels(
            mix(from.alpha(), to.alpha()),
            mix(from.red(), to.red()),
            mix(from.green(), to.green()),
            mix(from.blue(), to.blue()),
        )
    }

    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

/// Colours of the pairs counter at the start and end of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressPalette {
    pub none: Argb,
    pub full: Argb,
}

impl Default for ProgressPalette {
    fn default() -> Self {
        ProgressPalette {
            none: Argb::from_channels(0xFF, 0xD3, 0x2F, 0x2F),
            full: Argb::from_channels(0xFF, 0x19, 0x76, 0xD2),
        }
    }
}

impl ProgressPalette {
    pub fn color_for(&self, pairs_found: usize, total_pairs: usize) -> Argb {
        if total_pairs == 0 {
            return self.full;
        }
        Argb::lerp(self.none, self.full, pairs_found as f32 / total_pairs as f32)
    }
}
