use std::fmt;
use std::mem;
use std::ops::Shl;

use tracing::trace;

use crate::directive::Directive;
use crate::encoding::{Encoding, Headers, Str};
use crate::headers::HeaderContainer;
use crate::message::NetworkMessage;
use crate::wrapper::Wrapper;

/// The common message type.
///
/// Every field is independently settable and nothing is validated: setting the
/// destination does not touch the headers, adding a header never replaces an
/// existing one with the same name.
///
/// # Example
///
/// ```
/// use micro_message::directive::{add_header, set_body};
/// use micro_message::wrapper::header;
/// use micro_message::Message;
///
/// let message = Message::new() << add_header("Content-Type", "text/plain") << set_body("hello");
///
/// assert_eq!(message.body(), "hello");
/// assert_eq!(message.extract(&header("Content-Type")).unwrap(), "text/plain");
/// ```
pub struct BasicMessage<T: Encoding> {
    headers: Headers<T>,
    body: Str<T>,
    source: Str<T>,
    destination: Str<T>,
}

impl<T: Encoding> BasicMessage<T> {
    /// Creates a message with no headers and empty fields
    pub fn new() -> Self {
        Self {
            headers: Default::default(),
            body: Default::default(),
            source: Default::default(),
            destination: Default::default(),
        }
    }

    #[inline]
    pub fn headers(&self) -> &Headers<T> {
        &self.headers
    }

    #[inline]
    pub fn headers_mut(&mut self) -> &mut Headers<T> {
        &mut self.headers
    }

    /// Replaces the whole header container
    pub fn set_headers(&mut self, headers: Headers<T>) {
        self.headers = headers;
    }

    /// Adds one header entry, keeping any entries already present under `name`
    pub fn add_header<N, V>(&mut self, name: N, value: V)
    where
        N: Into<Str<T>>,
        V: Into<Str<T>>,
    {
        self.headers.insert(name.into(), value.into());
    }

    /// Removes every header entry named `name` and returns how many were removed.
    ///
    /// Removing a name that is not present is not an error.
    pub fn remove_header<N: Into<Str<T>>>(&mut self, name: N) -> usize {
        let name = name.into();
        let removed = self.headers.remove(&name);
        trace!(name = ?name, removed, "remove header");
        removed
    }

    /// Removes every header entry, leaving body, source and destination untouched
    pub fn clear_headers(&mut self) {
        self.headers.clear();
    }

    #[inline]
    pub fn body(&self) -> &Str<T> {
        &self.body
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut Str<T> {
        &mut self.body
    }

    pub fn set_body<B: Into<Str<T>>>(&mut self, body: B) {
        self.body = body.into();
    }

    #[inline]
    pub fn source(&self) -> &Str<T> {
        &self.source
    }

    #[inline]
    pub fn source_mut(&mut self) -> &mut Str<T> {
        &mut self.source
    }

    pub fn set_source<S: Into<Str<T>>>(&mut self, source: S) {
        self.source = source.into();
    }

    #[inline]
    pub fn destination(&self) -> &Str<T> {
        &self.destination
    }

    #[inline]
    pub fn destination_mut(&mut self) -> &mut Str<T> {
        &mut self.destination
    }

    pub fn set_destination<D: Into<Str<T>>>(&mut self, destination: D) {
        self.destination = destination.into();
    }

    /// Exchanges all four fields with `other` without copying them.
    ///
    /// Calling it twice restores both messages.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.headers, &mut other.headers);
        mem::swap(&mut self.body, &mut other.body);
        mem::swap(&mut self.source, &mut other.source);
        mem::swap(&mut self.destination, &mut other.destination);
    }

    /// Applies `directive` in place and returns the message for chaining
    pub fn apply<D: Directive<Self>>(&mut self, directive: D) -> &mut Self {
        directive.apply(self);
        self
    }

    /// Applies `directive` and returns the message, for building by value
    #[must_use]
    pub fn with<D: Directive<Self>>(mut self, directive: D) -> Self {
        directive.apply(&mut self);
        self
    }

    /// Reads a value out of the message through `wrapper`
    pub fn extract<W: Wrapper<Self>>(&self, wrapper: &W) -> W::Output<'_> {
        wrapper.extract(self)
    }
}

impl<T: Encoding> NetworkMessage for BasicMessage<T> {
    type Encoding = T;

    fn headers(&self) -> &Headers<T> {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut Headers<T> {
        &mut self.headers
    }

    fn body(&self) -> &Str<T> {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Str<T> {
        &mut self.body
    }

    fn source(&self) -> &Str<T> {
        &self.source
    }

    fn source_mut(&mut self) -> &mut Str<T> {
        &mut self.source
    }

    fn destination(&self) -> &Str<T> {
        &self.destination
    }

    fn destination_mut(&mut self) -> &mut Str<T> {
        &mut self.destination
    }

    fn swap(&mut self, other: &mut Self) {
        BasicMessage::swap(self, other);
    }
}

impl<T: Encoding> Default for BasicMessage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Encoding> Clone for BasicMessage<T> {
    fn clone(&self) -> Self {
        Self {
            headers: self.headers.clone(),
            body: self.body.clone(),
            source: self.source.clone(),
            destination: self.destination.clone(),
        }
    }
}

impl<T: Encoding> PartialEq for BasicMessage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.headers == other.headers
            && self.body == other.body
            && self.source == other.source
            && self.destination == other.destination
    }
}

impl<T: Encoding> fmt::Debug for BasicMessage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicMessage")
            .field("headers", &self.headers)
            .field("body", &self.body)
            .field("source", &self.source)
            .field("destination", &self.destination)
            .finish()
    }
}

/// `message << directive` applies the directive and yields the message
impl<T: Encoding, D: Directive<BasicMessage<T>>> Shl<D> for BasicMessage<T> {
    type Output = Self;

    fn shl(self, directive: D) -> Self::Output {
        self.with(directive)
    }
}

impl<'a, T: Encoding, D: Directive<BasicMessage<T>>> Shl<D> for &'a mut BasicMessage<T> {
    type Output = &'a mut BasicMessage<T>;

    fn shl(self, directive: D) -> Self::Output {
        self.apply(directive)
    }
}
