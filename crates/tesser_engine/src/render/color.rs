//! RGB colors

/// Linear RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub red: f32,
    /// Green component
    pub green: f32,
    /// Blue component
    pub blue: f32,
}

impl Color {
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from components
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Decode a packed `0xRRGGBB` integer
    pub fn from_packed(packed: u32) -> Self {
        let channel = |shift: u32| f32::from(((packed >> shift) & 0xFF) as u8) / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Encode as a packed `0xRRGGBB` integer
    pub fn packed(&self) -> u32 {
        let channel = |value: f32| u32::from((value.clamp(0.0, 1.0) * 255.0).round() as u8);
        (channel(self.red) << 16) | (channel(self.green) << 8) | channel(self.blue)
    }

    /// Components as an array
    pub fn to_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_packed_encoding() {
        let color = Color::from_packed(0x00FF_8000);
        assert_relative_eq!(color.red, 1.0);
        assert_relative_eq!(color.green, 128.0 / 255.0);
        assert_relative_eq!(color.blue, 0.0);
        assert_eq!(color.packed(), 0x00FF_8000);
        assert_eq!(Color::BLACK.packed(), 0);
    }
}
