// WHY: single home for the directional marker code points shared by wrapper and reverser
// Values must stay bit-exact: downstream renderers and stored JSON depend on them

/// RIGHT-TO-LEFT MARK, opens a marked span
pub const RLM: char = '\u{200F}';

/// LEFT-TO-RIGHT MARK, closes a marked span
pub const LRM: char = '\u{200E}';

/// True for either directional marker
#[inline]
pub fn is_marker(c: char) -> bool {
    c == RLM || c == LRM
}
