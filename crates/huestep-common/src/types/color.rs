/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase six-digit hex, no `#`.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Each channel as `byte / 255.0`.
    pub fn magnitudes(&self) -> Magnitudes {
        Magnitudes {
            r: f64::from(self.r) / 255.0,
            g: f64::from(self.g) / 255.0,
            b: f64::from(self.b) / 255.0,
        }
    }
}

/// A color with each channel normalized to `[0.0, 1.0]`.
///
/// Nothing here clamps: arithmetic on magnitudes can leave the unit range
/// and it is up to the encoder to decide what that means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitudes {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Magnitudes {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// `self + index * increment`, channel by channel.
    pub fn step(&self, increment: Magnitudes, index: usize) -> Magnitudes {
        let i = index as f64;
        Magnitudes {
            r: self.r + i * increment.r,
            g: self.g + i * increment.g,
            b: self.b + i * increment.b,
        }
    }
}
