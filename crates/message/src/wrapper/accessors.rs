use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::MessageError;
use crate::encoding::{EncodedString, Headers, Str};
use crate::message::NetworkMessage;
use crate::wrapper::Wrapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Body,
    Source,
    Destination,
}

/// Borrows one of the scalar fields of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOf {
    part: Part,
}

/// The message body
pub fn body_of() -> FieldOf {
    FieldOf { part: Part::Body }
}

/// The message source
pub fn source_of() -> FieldOf {
    FieldOf { part: Part::Source }
}

/// The message destination
pub fn destination_of() -> FieldOf {
    FieldOf { part: Part::Destination }
}

impl<M: NetworkMessage> Wrapper<M> for FieldOf {
    type Output<'m>
        = &'m Str<M::Encoding>
    where
        M: 'm;

    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        match self.part {
            Part::Body => message.body(),
            Part::Source => message.source(),
            Part::Destination => message.destination(),
        }
    }
}

/// Borrows the whole header container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadersOf;

pub fn headers_of() -> HeadersOf {
    HeadersOf
}

impl<M: NetworkMessage> Wrapper<M> for HeadersOf {
    type Output<'m>
        = &'m Headers<M::Encoding>
    where
        M: 'm;

    #[inline]
    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        message.headers()
    }
}

/// Parses the body into `T`, see [`body_as`]
pub struct BodyAs<T> {
    _target: PhantomData<fn() -> T>,
}

/// Parses the body text with [`FromStr`].
///
/// The body is decoded lossily first, so a wide or raw body parses the same way
/// a narrow one does. Parse failures come back as
/// [`MessageError::InvalidBody`].
pub fn body_as<T>() -> BodyAs<T>
where
    T: FromStr,
    T::Err: Display,
{
    BodyAs { _target: PhantomData }
}

impl<M, T> Wrapper<M> for BodyAs<T>
where
    M: NetworkMessage,
    T: FromStr,
    T::Err: Display,
{
    type Output<'m>
        = Result<T, MessageError>
    where
        M: 'm;

    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        message.body().to_string_lossy().parse::<T>().map_err(MessageError::invalid_body)
    }
}

impl<T> Clone for BodyAs<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BodyAs<T> {}

impl<T> fmt::Debug for BodyAs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyAs").field("target", &std::any::type_name::<T>()).finish()
    }
}
