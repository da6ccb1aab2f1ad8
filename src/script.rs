// WHY: classification goes through the Unicode Character Database script property,
// never block ranges, so Common-script punctuation next to RTL text stays neutral

use unicode_script::{Script, UnicodeScript};

/// Scripts treated as right-to-left
pub const RTL_SCRIPTS: [Script; 2] = [Script::Hebrew, Script::Arabic];

/// Reading direction of a single code point as far as this crate cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Neutral,
}

impl Direction {
    pub fn of(c: char) -> Self {
        if is_rtl(c) {
            Direction::Rtl
        } else {
            Direction::Neutral
        }
    }
}

/// Whether `c` belongs to the Hebrew or Arabic script.
///
/// Script extensions are not consulted: U+060C ARABIC COMMA has script
/// Common and classifies as neutral, while U+05F3 HEBREW PUNCTUATION GERESH
/// has script Hebrew and classifies as RTL.
#[inline]
pub fn is_rtl(c: char) -> bool {
    RTL_SCRIPTS.contains(&c.script())
}
