//! Text direction

use crate::script::{self, Script};

/// The direction a segment of text is laid out in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    /// Not yet resolved.
    #[default]
    Invalid,
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::RightToLeft)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::TopToBottom | Direction::BottomToTop)
    }

    /// Whether glyphs are produced in reverse of logical order.
    #[inline]
    pub fn is_backward(self) -> bool {
        matches!(self, Direction::RightToLeft | Direction::BottomToTop)
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::TopToBottom)
    }

    /// The opposite direction along the same axis.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Invalid => Direction::Invalid,
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
            Direction::TopToBottom => Direction::BottomToTop,
            Direction::BottomToTop => Direction::TopToBottom,
        }
    }

    /// The horizontal direction a script is natively written in.
    ///
    /// Scripts historically written right-to-left are hard-coded; everything
    /// else resolves to left-to-right. Returns `None` for neutral scripts.
    pub fn from_script(s: Script) -> Option<Direction> {
        if s.is_neutral() {
            return None;
        }

        match s {
            // Unicode-1.1
            script::ARABIC
            | script::HEBREW
            // Unicode-3.0
            | script::SYRIAC
            | script::THAANA
            // Unicode-4.0
            | script::CYPRIOT
            // Unicode-4.1
            | script::KHAROSHTHI
            // Unicode-5.0
            | script::PHOENICIAN
            | script::NKO
            // Unicode-5.1
            | script::LYDIAN
            // Unicode-5.2
            | script::AVESTAN
            | script::IMPERIAL_ARAMAIC
            | script::INSCRIPTIONAL_PAHLAVI
            | script::INSCRIPTIONAL_PARTHIAN
            | script::OLD_SOUTH_ARABIAN
            | script::OLD_TURKIC
            | script::SAMARITAN
            // Unicode-6.0
            | script::MANDAIC
            // Unicode-6.1
            | script::MEROITIC_CURSIVE
            | script::MEROITIC_HIEROGLYPHS
            // Unicode-7.0
            | script::MANICHAEAN
            | script::NABATAEAN
            | script::OLD_NORTH_ARABIAN
            | script::PALMYRENE
            | script::PSALTER_PAHLAVI
            // Unicode-8.0
            | script::HATRAN
            // Unicode-9.0
            | script::ADLAM
            // Unicode-11.0
            | script::HANIFI_ROHINGYA
            | script::OLD_SOGDIAN
            | script::SOGDIAN
            // Unicode-12.0
            | script::ELYMAIC
            // Unicode-13.0
            | script::CHORASMIAN
            | script::YEZIDI
            // Unicode-14.0
            | script::OLD_UYGHUR => Some(Direction::RightToLeft),

            _ => Some(Direction::LeftToRight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_is_involution() {
        for d in [
            Direction::LeftToRight,
            Direction::RightToLeft,
            Direction::TopToBottom,
            Direction::BottomToTop,
        ] {
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn test_rtl_scripts() {
        assert_eq!(
            Direction::from_script(script::ARABIC),
            Some(Direction::RightToLeft)
        );
        assert_eq!(
            Direction::from_script(script::HEBREW),
            Some(Direction::RightToLeft)
        );
        assert_eq!(
            Direction::from_script(script::LATIN),
            Some(Direction::LeftToRight)
        );
        assert_eq!(Direction::from_script(script::COMMON), None);
    }
}
