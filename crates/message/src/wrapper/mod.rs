//! Wrappers: read-only extractors that pull a value out of a message.
//!
//! A [`Wrapper`] only ever sees `&M`, so applying one can not change the message.
//! Outputs may borrow from the message through the generic associated type
//! [`Wrapper::Output`].
//!
//! Header lookups make their duplicate policy explicit in the constructor name:
//!
//! - [`header`]: the first entry in insertion order
//! - [`last_header`]: the last entry in insertion order
//! - [`header_values`]: every entry, possibly none
//!
//! A missing header is reported as [`MessageError::HeaderNotFound`](crate::MessageError),
//! except by [`header_or`], which returns the default it was given.

mod accessors;
mod header;

pub use accessors::{BodyAs, FieldOf, HeadersOf, body_as, body_of, destination_of, headers_of, source_of};
pub use header::{HeaderAs, HeaderCount, HeaderOr, HeaderValue, HeaderValues, Pick};
pub use header::{header, header_as, header_count, header_or, header_values, last_header};

use crate::message::NetworkMessage;

/// Extracts a value from a message without mutating it.
pub trait Wrapper<M: NetworkMessage> {
    /// The extracted value, which may borrow from the message
    type Output<'m>
    where
        M: 'm;

    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m>;
}

impl<M: NetworkMessage, W: Wrapper<M> + ?Sized> Wrapper<M> for &W {
    type Output<'m>
        = W::Output<'m>
    where
        M: 'm;

    #[inline]
    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        (**self).extract(message)
    }
}
