//! Colors with 8-bit channels.

use core::fmt::{self, Debug, Formatter};

//
// Types
//

/// An RGB color with `u8` components.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color3(pub [u8; 3]);

/// An RGBA color with `u8` components.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color4(pub [u8; 4]);

//
// Free fns
//

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color3 {
    Color3([r, g, b])
}

/// Returns a new RGBA color with `r`, `g`, `b`, and `a` components.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color4 {
    Color4([r, g, b, a])
}

/// Returns an opaque gray with all color channels equal to `lum`.
pub const fn gray(lum: u8) -> Color4 {
    rgba(lum, lum, lum, 0xFF)
}

//
// Inherent impls
//

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }

    /// Returns `self` with an alpha channel of 0xFF appended.
    #[inline]
    pub const fn to_color4(self) -> Color4 {
        let [r, g, b] = self.0;
        rgba(r, g, b, 0xFF)
    }
}

impl Color4 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0xAA_RR_GG_BB`.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        let [r, g, b, a] = self.0;
        u32::from_be_bytes([a, r, g, b])
    }

    /// Returns `self` without its alpha channel.
    #[inline]
    pub const fn to_color3(self) -> Color3 {
        let [r, g, b, _] = self.0;
        rgb(r, g, b)
    }
}

//
// Foreign trait impls
//

impl Debug for Color3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({r}, {g}, {b})")
    }
}

impl Debug for Color4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "rgba({r}, {g}, {b}, {a})")
    }
}

impl From<[u8; 3]> for Color3 {
    fn from(rgb: [u8; 3]) -> Self {
        Self(rgb)
    }
}

impl From<[u8; 4]> for Color4 {
    fn from(rgba: [u8; 4]) -> Self {
        Self(rgba)
    }
}
