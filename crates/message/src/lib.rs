//! The common network message shared by the micro-http transports
//!
//! This crate provides the message type every protocol layer builds on: a value with
//! headers, a body, a source and a destination. A message does not know whether it is
//! a request or a response, and it is generic over the encoding of its text fields.
//!
//! # Features
//!
//! - One message type for narrow (UTF-8), wide (UTF-16) and raw (bytes) text
//! - Multi-valued headers that keep duplicates in insertion order
//! - Composable directives to build a message step by step
//! - Read-only wrappers to pull values out, with explicit "not found" results
//! - Header conversion to and from `http::HeaderMap`
//!
//! # Example
//!
//! ```
//! use micro_message::directive::{add_header, set_body, set_destination, set_source};
//! use micro_message::wrapper::{header, header_or, header_values};
//! use micro_message::Message;
//! use tracing::{info, Level};
//! use tracing_subscriber::FmtSubscriber;
//!
//! // Initialize logging
//! let subscriber = FmtSubscriber::builder()
//!     .with_max_level(Level::TRACE)
//!     .finish();
//! tracing::subscriber::set_global_default(subscriber)
//!     .expect("setting default subscriber failed");
//!
//! let message = Message::new()
//!     << add_header("X-Test", "1")
//!     << add_header("X-Test", "2")
//!     << set_body("hello")
//!     << set_source("client-A")
//!     << set_destination("server-B");
//!
//! assert_eq!(message.extract(&header_values("X-Test")), ["1", "2"]);
//! assert_eq!(message.extract(&header("X-Test")).unwrap(), "1");
//! assert_eq!(message.extract(&header_or("Accept", "*/*")), "*/*");
//! assert!(message.extract(&header("Accept")).unwrap_err().is_not_found());
//!
//! info!(body = %message.body(), "message built");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`encoding`]: Encoding tags selecting the string and header container types
//! - [`headers`]: The header multi-map contract and its default implementation
//! - [`message`]: The message type and the [`NetworkMessage`] contract
//! - [`directive`]: Operations that mutate a message
//! - [`wrapper`]: Operations that read from a message
//! - [`http_compat`]: Header conversion for the `http` crate
//!
//! # Core Components
//!
//! ## Messages
//!
//! [`BasicMessage`] is generic over an [`encoding::Encoding`] tag. The tag is part of
//! the type, so the aliases [`Message`], [`WMessage`] and [`RawMessage`] can not be
//! mixed by accident. Messages are plain values: `Clone` copies every field and
//! `std::mem::take` leaves an empty message behind.
//!
//! ## Directives
//!
//! A [`directive::Directive`] performs one mutation. Directives run in the order they
//! are given, through [`BasicMessage::apply`], the `<<` operator, tuples, [`directive::chain`]
//! or a runtime [`directive::Pipeline`].
//!
//! ## Wrappers
//!
//! A [`wrapper::Wrapper`] reads through a shared reference only. Header lookups name
//! their duplicate policy and report absence as [`MessageError::HeaderNotFound`].
//!
//! ## Error Handling
//!
//! Building a message can not fail. [`MessageError`] covers the routine failures of
//! reading a message back: a missing header, a value that does not parse, or a header
//! `http` refuses.
//!
//! # Concurrency
//!
//! A message is an ordinary owned value with no interior mutability. Share it across
//! threads the way any other value is shared; mutation requires `&mut`.

pub mod directive;
pub mod encoding;
pub mod headers;
pub mod http_compat;
pub mod message;
pub mod wrapper;

mod error;

pub use error::MessageError;
pub use message::{BasicMessage, Message, NetworkMessage, RawMessage, WMessage};
