use std::borrow::Cow;
use std::fmt;

use super::EncodedString;

/// A string of UTF-16 code units.
///
/// The units are stored as given: a `WideString` built from `u16`s may hold
/// unpaired surrogates, which only matters when it is decoded for display.
#[derive(Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code units of this string
    #[inline]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Consumes the string and returns its code units
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Appends the UTF-16 encoding of `s`
    pub fn push_str(&mut self, s: &str) {
        self.units.extend(s.encode_utf16());
    }
}

impl EncodedString for WideString {
    #[inline]
    fn len(&self) -> usize {
        self.units.len()
    }

    fn to_string_lossy(&self) -> Cow<'_, str> {
        Cow::Owned(String::from_utf16_lossy(&self.units))
    }

    fn make_ascii_uppercase(&mut self) {
        for unit in &mut self.units {
            if let Ok(byte) = u8::try_from(*unit) {
                *unit = u16::from(byte.to_ascii_uppercase());
            }
        }
    }

    fn make_ascii_lowercase(&mut self) {
        for unit in &mut self.units {
            if let Ok(byte) = u8::try_from(*unit) {
                *unit = u16::from(byte.to_ascii_lowercase());
            }
        }
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self { units: s.encode_utf16().collect() }
    }
}

impl From<String> for WideString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

impl From<&[u16]> for WideString {
    fn from(units: &[u16]) -> Self {
        Self { units: units.to_vec() }
    }
}

impl PartialEq<str> for WideString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for WideString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:?}", self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_utf16() {
        let wide = WideString::from("hé😀");
        assert_eq!(wide.as_units(), &[0x68, 0xe9, 0xd83d, 0xde00]);
        assert_eq!(EncodedString::len(&wide), 4);
        assert_eq!(wide, "hé😀");
    }

    #[test]
    fn case_mapping_leaves_non_ascii_units() {
        let mut wide = WideString::from("server-é");
        wide.make_ascii_uppercase();
        assert_eq!(wide.to_string(), "SERVER-é");
    }

    #[test]
    fn lossy_display_of_unpaired_surrogate() {
        let wide = WideString::from(vec![0x61, 0xd800]);
        assert_eq!(wide.to_string(), "a\u{fffd}");
        assert_eq!(format!("{wide:?}"), "L\"a\u{fffd}\"");
    }

    #[test]
    fn push_str_appends() {
        let mut wide = WideString::new();
        wide.push_str("client");
        wide.push_str("-A");
        assert_eq!(wide, "client-A");
        assert_eq!(wide.into_units().len(), 8);
    }
}
