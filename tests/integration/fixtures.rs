// Known inputs with expected wrapped and display forms
#![allow(dead_code)]

/// Mixed Latin, Hebrew and Arabic prose
pub const MIXED_TEXT: &str = "The word שלום means 'hello' in Hebrew, and مرحبا means 'hello' in Arabic.";

pub const MIXED_WRAPPED: &str =
    "The word \u{200F}שלום\u{200E} means 'hello' in Hebrew, and \u{200F}مرحبا\u{200E} means 'hello' in Arabic.";

pub const MIXED_DISPLAY: &str = "The word םולש means 'hello' in Hebrew, and ابحرم means 'hello' in Arabic.";

/// Hebrew citation with gershayim and Common-script digits
pub const CITATION_TEXT: &str = "בראשית ל״ה (35)";

pub const CITATION_WRAPPED: &str = "\u{200F}בראשית ל״ה\u{200E} (35)";

/// Whole-span reversal keeps the words in visual right-to-left order
pub const CITATION_DISPLAY: &str = "ה״ל תישארב (35)";

/// Multi-word RTL phrase inside LTR text
pub const PHRASE_TEXT: &str = "Hello שלום עולם World";

pub const PHRASE_DISPLAY: &str = "Hello םלוע םולש World";
