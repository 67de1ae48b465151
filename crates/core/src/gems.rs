use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GemColor {
    White,
    Blue,
    Green,
    Red,
    Black,
}

impl GemColor {
    pub const COUNT: usize = 5;

    /// Canonical order; every gem vector is indexed this way.
    pub const ALL: [GemColor; Self::COUNT] = [
        GemColor::White,
        GemColor::Blue,
        GemColor::Green,
        GemColor::Red,
        GemColor::Black,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Blue => 'u',
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Black => 'b',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "w" => Some(Self::White),
            "u" => Some(Self::Blue),
            "g" => Some(Self::Green),
            "r" => Some(Self::Red),
            "b" => Some(Self::Black),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for GemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-width count vector, one slot per [`GemColor`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Gems([u8; GemColor::COUNT]);

impl Gems {
    pub const fn new(counts: [u8; GemColor::COUNT]) -> Self {
        Self(counts)
    }

    pub const fn splat(count: u8) -> Self {
        Self([count; GemColor::COUNT])
    }

    /// Returns `None` unless `values` has exactly one entry per colour.
    pub fn from_slice(values: &[u8]) -> Option<Self> {
        let counts: [u8; GemColor::COUNT] = values.try_into().ok()?;
        Some(Self(counts))
    }

    pub fn counts(&self) -> [u8; GemColor::COUNT] {
        self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|count| u32::from(*count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|count| *count == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GemColor, u8)> + '_ {
        GemColor::ALL.into_iter().map(move |color| (color, self[color]))
    }

    pub fn saturating_add(&self, other: &Gems) -> Gems {
        let mut out = *self;
        for color in GemColor::ALL {
            out[color] = out[color].saturating_add(other[color]);
        }
        out
    }

    pub fn saturating_sub(&self, other: &Gems) -> Gems {
        let mut out = *self;
        for color in GemColor::ALL {
            out[color] = out[color].saturating_sub(other[color]);
        }
        out
    }
}

impl Index<GemColor> for Gems {
    type Output = u8;

    fn index(&self, color: GemColor) -> &u8 {
        &self.0[color.index()]
    }
}

impl IndexMut<GemColor> for Gems {
    fn index_mut(&mut self, color: GemColor) -> &mut u8 {
        &mut self.0[color.index()]
    }
}

impl fmt::Display for Gems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (color, count)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", color.code(), count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_parser() {
        for color in GemColor::ALL {
            let code = color.code().to_string();
            assert_eq!(GemColor::from_code(&code), Some(color));
        }
        assert_eq!(GemColor::from_code("x"), None);
        assert_eq!(GemColor::from_code("r\n"), Some(GemColor::Red));
    }

    #[test]
    fn from_slice_requires_one_entry_per_color() {
        assert_eq!(Gems::from_slice(&[1, 0, 0, 0]), None);
        assert_eq!(Gems::from_slice(&[1, 0, 0, 0, 0, 0]), None);
        let gems = Gems::from_slice(&[1, 0, 2, 0, 3]).expect("five entries");
        assert_eq!(gems[GemColor::Green], 2);
        assert_eq!(gems.total(), 6);
    }

    #[test]
    fn display_lists_every_color() {
        let gems = Gems::new([3, 3, 3, 4, 4]);
        assert_eq!(gems.to_string(), "w:3 u:3 g:3 r:4 b:4");
    }
}
