// SPDX-License-Identifier: MIT
//
// Exact 8-bit sRGB triples.
//
// No float storage and no alpha: the WCAG pipeline works on the integer
// channel values a hex string encodes, and every shift saturates at the
// ends of the 0–255 range.

use std::fmt;

/// An exact sRGB color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use wd_color::Rgb;
///
/// let blue = Rgb::new(0x19, 0x76, 0xd2);
/// assert_eq!(blue.to_hex(), "#1976d2");
/// assert_eq!(blue.darken(40).to_hex(), "#004eaa");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Subtract `amount` from every channel, flooring at 0.
    #[must_use]
    pub const fn darken(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Add `amount` to every channel, capping at 255.
    #[must_use]
    pub const fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Lower-case `#rrggbb`, each channel zero-padded to two digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = *self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_hex_zero_pads_channels() {
        assert_eq!(Rgb::new(0, 5, 10).to_hex(), "#00050a");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn display_matches_to_hex() {
        let c = Rgb::new(0xc8, 0x64, 0x32);
        assert_eq!(c.to_string(), c.to_hex());
    }

    #[test]
    fn darken_floors_at_zero() {
        let c = Rgb::new(10, 40, 200).darken(40);
        assert_eq!(c, Rgb::new(0, 0, 160));
    }

    #[test]
    fn lighten_caps_at_255() {
        let c = Rgb::new(230, 215, 0).lighten(40);
        assert_eq!(c, Rgb::new(255, 255, 40));
    }

    #[test]
    fn zero_shift_is_identity() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(c.darken(0), c);
        assert_eq!(c.lighten(0), c);
    }
}
