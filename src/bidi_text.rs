// WHY: keeps the raw text as the stored value and applies markers only at the
// display/serialize boundary, so unwrapping never needs its own algorithm

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wrapper::wrap_rtl;

/// Text that picks up RTL markers whenever it is displayed or serialized.
///
/// Deserializing stores the incoming string untouched; markers already present
/// in it are left for the wrapper to pass through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BidiText(String);

impl BidiText {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Stored text without added markers
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    pub fn into_raw(self) -> String {
        self.0
    }

    /// Stored text with RTL runs wrapped
    pub fn wrapped(&self) -> String {
        wrap_rtl(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BidiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wrapped())
    }
}

impl From<&str> for BidiText {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for BidiText {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for BidiText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for BidiText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for BidiText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.wrapped())
    }
}

impl<'de> Deserialize<'de> for BidiText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}
