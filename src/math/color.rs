/// Packed opaque color: red in bits 0-7, green in 8-15, blue in 16-23.
///
/// The top byte is ignored; pixels written with a `Color` always carry a zero
/// alpha byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r as u32 | (g as u32) << 8 | (b as u32) << 16)
    }

    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Byte pattern stored in the framebuffer for this color: (R, G, B, 0)
    pub const fn pattern(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), 0]
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}
