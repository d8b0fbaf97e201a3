//! Encoding tags select the string type and header container of a message.
//!
//! A [`BasicMessage`](crate::message::BasicMessage) is generic over a zero sized tag
//! implementing [`Encoding`]. The tag is fixed at compile time, so a narrow message
//! and a wide message are different types and can never be mixed up.
//!
//! Three tags are built in:
//!
//! - [`Narrow`]: UTF-8 [`String`] fields
//! - [`Wide`]: UTF-16 [`WideString`] fields
//! - [`Raw`]: opaque [`Bytes`] fields, cheap to clone and share with a codec

mod wide;

pub use wide::WideString;

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

use bytes::Bytes;

use crate::headers::{HeaderContainer, HeaderMultiMap};

/// The string type used for every textual field of a message.
pub trait EncodedString: Clone + Default + Ord + Hash + Debug + Send + Sync + 'static {
    /// Length in code units of the encoding (bytes for narrow, `u16` for wide)
    fn len(&self) -> usize;

    /// Returns true if the string holds no code units
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes the string into UTF-8, replacing invalid sequences
    fn to_string_lossy(&self) -> Cow<'_, str>;

    /// Maps ASCII letters to upper case in place, leaving everything else untouched
    fn make_ascii_uppercase(&mut self);

    /// Maps ASCII letters to lower case in place, leaving everything else untouched
    fn make_ascii_lowercase(&mut self);
}

/// A compile time encoding tag.
pub trait Encoding: 'static {
    type Str: EncodedString + From<&'static str> + From<String>;
    type Headers: HeaderContainer<Key = Self::Str, Value = Self::Str>;
}

/// The string type selected by the encoding `T`
pub type Str<T> = <T as Encoding>::Str;

/// The header container selected by the encoding `T`
pub type Headers<T> = <T as Encoding>::Headers;

/// UTF-8 strings, the default encoding
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Narrow;

impl Encoding for Narrow {
    type Str = String;
    type Headers = HeaderMultiMap<String>;
}

/// UTF-16 code unit strings
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wide;

impl Encoding for Wide {
    type Str = WideString;
    type Headers = HeaderMultiMap<WideString>;
}

/// Uninterpreted octet strings
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Raw;

impl Encoding for Raw {
    type Str = Bytes;
    type Headers = HeaderMultiMap<Bytes>;
}

impl EncodedString for String {
    #[inline]
    fn len(&self) -> usize {
        String::len(self)
    }

    fn to_string_lossy(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn make_ascii_uppercase(&mut self) {
        str::make_ascii_uppercase(self);
    }

    fn make_ascii_lowercase(&mut self) {
        str::make_ascii_lowercase(self);
    }
}

impl EncodedString for Bytes {
    #[inline]
    fn len(&self) -> usize {
        Bytes::len(self)
    }

    fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }

    // `Bytes` is immutable, the mapped copy replaces the shared buffer
    fn make_ascii_uppercase(&mut self) {
        if self.iter().any(u8::is_ascii_lowercase) {
            *self = Bytes::from(self.to_ascii_uppercase());
        }
    }

    fn make_ascii_lowercase(&mut self) {
        if self.iter().any(u8::is_ascii_uppercase) {
            *self = Bytes::from(self.to_ascii_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_case_mapping_is_ascii_only() {
        let mut value = String::from("client-ä");
        value.make_ascii_uppercase();
        assert_eq!(value, "CLIENT-ä");

        value.make_ascii_lowercase();
        assert_eq!(value, "client-ä");
    }

    #[test]
    fn raw_lossy_decoding() {
        let value = Bytes::from_static(b"ok\xff");
        assert_eq!(value.to_string_lossy(), "ok\u{fffd}");
        assert_eq!(EncodedString::len(&value), 3);
    }

    #[test]
    fn raw_case_mapping() {
        let mut value = Bytes::from_static(b"Server-B");
        value.make_ascii_lowercase();
        assert_eq!(value, Bytes::from_static(b"server-b"));

        value.make_ascii_uppercase();
        assert_eq!(value, Bytes::from_static(b"SERVER-B"));
    }

    #[test]
    fn empty_strings() {
        assert!(EncodedString::is_empty(&String::new()));
        assert!(EncodedString::is_empty(&Bytes::new()));
        assert!(EncodedString::is_empty(&WideString::default()));
    }
}
