//! The common message type and the contract every message flavour follows.
//!
//! A message carries four fields: headers, body, source and destination. It does
//! not know whether it is a request or a response; protocol layers give those
//! fields meaning on top of it.
//!
//! - [`BasicMessage`]: the concrete message, generic over an [`Encoding`] tag
//! - [`NetworkMessage`]: the access contract [`Directive`](crate::directive::Directive)s
//!   and [`Wrapper`](crate::wrapper::Wrapper)s are written against
//! - [`Message`], [`WMessage`], [`RawMessage`]: the built-in instantiations

mod basic_message;

pub use basic_message::BasicMessage;

use crate::encoding::{Encoding, Headers, Narrow, Raw, Str, Wide};

/// A message with UTF-8 fields
pub type Message = BasicMessage<Narrow>;

/// A message with UTF-16 fields
pub type WMessage = BasicMessage<Wide>;

/// A message with uninterpreted byte fields
pub type RawMessage = BasicMessage<Raw>;

/// Field level access to a message.
///
/// This is the only interface directives and wrappers use, so any type that
/// implements it can be built and inspected with them. Mutation goes through
/// `&mut self`; a shared reference to a message is read-only.
pub trait NetworkMessage: Default + Clone {
    type Encoding: Encoding;

    fn headers(&self) -> &Headers<Self::Encoding>;
    fn headers_mut(&mut self) -> &mut Headers<Self::Encoding>;

    fn body(&self) -> &Str<Self::Encoding>;
    fn body_mut(&mut self) -> &mut Str<Self::Encoding>;

    fn source(&self) -> &Str<Self::Encoding>;
    fn source_mut(&mut self) -> &mut Str<Self::Encoding>;

    fn destination(&self) -> &Str<Self::Encoding>;
    fn destination_mut(&mut self) -> &mut Str<Self::Encoding>;

    /// Exchanges every field with `other`
    fn swap(&mut self, other: &mut Self);
}
