use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::MessageError;
use crate::encoding::{EncodedString, Str};
use crate::headers::HeaderContainer;
use crate::message::NetworkMessage;
use crate::wrapper::Wrapper;

/// Which entry a single-value header lookup returns when a name repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    First,
    Last,
}

/// A single header value, see [`header`] and [`last_header`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderValue<N> {
    name: N,
    pick: Pick,
}

/// The **first** value of the header `name`, in insertion order.
///
/// Fails with [`MessageError::HeaderNotFound`] when the message has no such header.
pub fn header<N>(name: N) -> HeaderValue<N> {
    HeaderValue { name, pick: Pick::First }
}

/// The **last** value of the header `name`, in insertion order.
///
/// Fails with [`MessageError::HeaderNotFound`] when the message has no such header.
pub fn last_header<N>(name: N) -> HeaderValue<N> {
    HeaderValue { name, pick: Pick::Last }
}

impl<M, N> Wrapper<M> for HeaderValue<N>
where
    M: NetworkMessage,
    N: Clone + Into<Str<M::Encoding>>,
{
    type Output<'m>
        = Result<&'m Str<M::Encoding>, MessageError>
    where
        M: 'm;

    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        let name: Str<M::Encoding> = self.name.clone().into();
        let mut values = message.headers().get_all(&name);

        let value = match self.pick {
            Pick::First => values.next(),
            Pick::Last => values.last(),
        };

        value.ok_or_else(|| MessageError::header_not_found(name.to_string_lossy()))
    }
}

/// Every value of one header, see [`header_values`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderValues<N> {
    name: N,
}

/// All values of the header `name` in insertion order; empty when absent
pub fn header_values<N>(name: N) -> HeaderValues<N> {
    HeaderValues { name }
}

impl<M, N> Wrapper<M> for HeaderValues<N>
where
    M: NetworkMessage,
    N: Clone + Into<Str<M::Encoding>>,
{
    type Output<'m>
        = Vec<&'m Str<M::Encoding>>
    where
        M: 'm;

    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        message.headers().get_all(&self.name.clone().into()).collect()
    }
}

/// A header value with a fallback, see [`header_or`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOr<N, D> {
    name: N,
    default: D,
}

/// The first value of the header `name`, or `default` when it is absent.
///
/// This is the only header lookup that hides absence.
pub fn header_or<N, D>(name: N, default: D) -> HeaderOr<N, D> {
    HeaderOr { name, default }
}

impl<M, N, D> Wrapper<M> for HeaderOr<N, D>
where
    M: NetworkMessage,
    N: Clone + Into<Str<M::Encoding>>,
    D: Clone + Into<Str<M::Encoding>>,
{
    type Output<'m>
        = Str<M::Encoding>
    where
        M: 'm;

    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        match message.headers().get_all(&self.name.clone().into()).next() {
            Some(value) => value.clone(),
            None => self.default.clone().into(),
        }
    }
}

/// The number of entries of one header, see [`header_count`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCount<N> {
    name: N,
}

pub fn header_count<N>(name: N) -> HeaderCount<N> {
    HeaderCount { name }
}

impl<M, N> Wrapper<M> for HeaderCount<N>
where
    M: NetworkMessage,
    N: Clone + Into<Str<M::Encoding>>,
{
    type Output<'m>
        = usize
    where
        M: 'm;

    #[inline]
    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        message.headers().count(&self.name.clone().into())
    }
}

/// The first value of one header parsed into `T`, see [`header_as`]
pub struct HeaderAs<N, T> {
    name: N,
    _target: PhantomData<fn() -> T>,
}

/// Parses the first value of the header `name` with [`FromStr`].
///
/// Absence is [`MessageError::HeaderNotFound`], a value that does not parse is
/// [`MessageError::InvalidHeaderValue`].
pub fn header_as<T, N>(name: N) -> HeaderAs<N, T>
where
    T: FromStr,
{
    HeaderAs { name, _target: PhantomData }
}

impl<M, N, T> Wrapper<M> for HeaderAs<N, T>
where
    M: NetworkMessage,
    N: Clone + Into<Str<M::Encoding>>,
    T: FromStr,
{
    type Output<'m>
        = Result<T, MessageError>
    where
        M: 'm;

    fn extract<'m>(&self, message: &'m M) -> Self::Output<'m> {
        let name: Str<M::Encoding> = self.name.clone().into();
        let value = message
            .headers()
            .get_all(&name)
            .next()
            .ok_or_else(|| MessageError::header_not_found(name.to_string_lossy()))?;

        match value.to_string_lossy().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(MessageError::invalid_header_value(name.to_string_lossy())),
        }
    }
}

impl<N: Clone, T> Clone for HeaderAs<N, T> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), _target: PhantomData }
    }
}

impl<N: fmt::Debug, T> fmt::Debug for HeaderAs<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderAs")
            .field("name", &self.name)
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<N: Display> Display for HeaderValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pick {
            Pick::First => write!(f, "first {}", self.name),
            Pick::Last => write!(f, "last {}", self.name),
        }
    }
}
