pub mod bidi_text;
pub mod error;
pub mod markers;
pub mod reader;
pub mod reverser;
pub mod script;
pub mod wrapper;

// Re-export the bidi engine for convenient access
pub use bidi_text::BidiText;
pub use error::ReverseError;
pub use markers::{is_marker, LRM, RLM};
pub use reverser::{reverse_marked, reverse_marked_into, Reverser, ReverserConfig};
pub use script::{is_rtl, Direction};
pub use wrapper::{wrap_rtl, wrap_rtl_into};
