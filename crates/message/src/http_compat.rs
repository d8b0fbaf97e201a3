//! Moving headers between a message and the `http` crate.
//!
//! Transports built on `http` keep headers in an [`HeaderMap`]. These conversions
//! keep every duplicate on both sides. Note that `http` lowercases header names, so
//! names coming back from an [`HeaderMap`] are lowercase.

use std::fmt::Debug;

use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::trace;

use crate::MessageError;
use crate::headers::{HeaderContainer, HeaderMultiMap};

/// Builds an [`HeaderMap`] from narrow or raw headers.
///
/// Fails when a name or value is not acceptable to `http`, e.g. a name with a space
/// or a value with a newline.
pub fn to_header_map<S>(headers: &HeaderMultiMap<S>) -> Result<HeaderMap, MessageError>
where
    S: Ord + Clone + Debug + AsRef<[u8]>,
{
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let lossy_name = || String::from_utf8_lossy(name.as_ref()).into_owned();

        let header_name = HeaderName::from_bytes(name.as_ref()).map_err(|cause| {
            trace!(%cause, name = ?name, "rejected header name");
            MessageError::invalid_header_name(lossy_name())
        })?;

        let header_value = HeaderValue::from_bytes(value.as_ref()).map_err(|cause| {
            trace!(%cause, name = ?name, "rejected header value");
            MessageError::invalid_header_value(lossy_name())
        })?;

        map.append(header_name, header_value);
    }

    Ok(map)
}

/// Copies the headers of an [`HeaderMap`], decoding values lossily
impl From<&HeaderMap> for HeaderMultiMap<String> {
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .map(|(name, value)| (name.as_str().to_owned(), String::from_utf8_lossy(value.as_bytes()).into_owned()))
            .collect()
    }
}

/// Copies the headers of an [`HeaderMap`] byte for byte
impl From<&HeaderMap> for HeaderMultiMap<Bytes> {
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .map(|(name, value)| (Bytes::copy_from_slice(name.as_ref()), Bytes::copy_from_slice(value.as_bytes())))
            .collect()
    }
}
