//! The built-in field modifiers.

use tracing::trace;

use crate::directive::Directive;
use crate::encoding::{Headers, Str};
use crate::headers::HeaderContainer;
use crate::message::NetworkMessage;

/// Adds one header entry, see [`add_header`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddHeader<N, V> {
    name: N,
    value: V,
}

/// Adds a header entry. Entries already stored under `name` are kept.
pub fn add_header<N, V>(name: N, value: V) -> AddHeader<N, V> {
    AddHeader { name, value }
}

impl<M, N, V> Directive<M> for AddHeader<N, V>
where
    M: NetworkMessage,
    N: Clone + Into<Str<M::Encoding>>,
    V: Clone + Into<Str<M::Encoding>>,
{
    fn apply(&self, message: &mut M) {
        message.headers_mut().insert(self.name.clone().into(), self.value.clone().into());
    }
}

/// Removes every entry of one header name, see [`remove_header`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveHeader<N> {
    name: N,
}

/// Removes every header entry named `name`. A missing name is not an error.
pub fn remove_header<N>(name: N) -> RemoveHeader<N> {
    RemoveHeader { name }
}

impl<M, N> Directive<M> for RemoveHeader<N>
where
    M: NetworkMessage,
    N: Clone + Into<Str<M::Encoding>>,
{
    fn apply(&self, message: &mut M) {
        let name: Str<M::Encoding> = self.name.clone().into();
        let removed = message.headers_mut().remove(&name);
        trace!(name = ?name, removed, "remove header");
    }
}

/// Removes every header entry, see [`clear_headers`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearHeaders;

/// Removes every header entry, leaving body, source and destination untouched
pub fn clear_headers() -> ClearHeaders {
    ClearHeaders
}

impl<M: NetworkMessage> Directive<M> for ClearHeaders {
    #[inline]
    fn apply(&self, message: &mut M) {
        message.headers_mut().clear();
    }
}

/// Replaces the whole header container, see [`set_headers`]
#[derive(Debug, Clone, PartialEq)]
pub struct SetHeaders<H> {
    headers: H,
}

/// Replaces every header of the message with `headers`
pub fn set_headers<H>(headers: H) -> SetHeaders<H> {
    SetHeaders { headers }
}

impl<M, H> Directive<M> for SetHeaders<H>
where
    M: NetworkMessage,
    H: Clone + Into<Headers<M::Encoding>>,
{
    fn apply(&self, message: &mut M) {
        *message.headers_mut() = self.headers.clone().into();
    }
}

macro_rules! field_directive {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $field_mut:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<S>(S);

        $(#[$doc])*
        ///
        /// The previous value is overwritten, never appended to.
        pub fn $ctor<S>(value: S) -> $name<S> {
            $name(value)
        }

        impl<M, S> Directive<M> for $name<S>
        where
            M: NetworkMessage,
            S: Clone + Into<Str<M::Encoding>>,
        {
            #[inline]
            fn apply(&self, message: &mut M) {
                *message.$field_mut() = self.0.clone().into();
            }
        }
    };
}

field_directive!(
    /// Sets the message body
    SetBody, set_body, body_mut
);
field_directive!(
    /// Sets the message source
    SetSource, set_source, source_mut
);
field_directive!(
    /// Sets the message destination
    SetDestination, set_destination, destination_mut
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::WideString;
    use crate::headers::HeaderMultiMap;
    use crate::message::{Message, RawMessage, WMessage};

    fn request() -> Message {
        Message::new()
            << add_header("X-Test", "1")
            << add_header("X-Test", "2")
            << set_body("hello")
            << set_source("client-A")
            << set_destination("server-B")
    }

    #[test]
    fn build_request() {
        let message = request();
        let values: Vec<_> = message.headers().get_all(&"X-Test".to_owned()).collect();

        assert_eq!(values, ["1", "2"]);
        assert_eq!(message.body(), "hello");
        assert_eq!(message.source(), "client-A");
        assert_eq!(message.destination(), "server-B");
    }

    #[test]
    fn remove_header_drops_duplicates_only() {
        let message = request() << add_header("Accept", "*/*") << remove_header("X-Test");

        assert_eq!(message.headers().count(&"X-Test".to_owned()), 0);
        assert_eq!(message.headers().len(), 1);
        assert_eq!(message.body(), "hello");
        assert_eq!(message.source(), "client-A");
        assert_eq!(message.destination(), "server-B");
    }

    #[test]
    fn remove_missing_header() {
        let message = request() << remove_header("X-Missing");
        assert_eq!(message, request());
    }

    #[test]
    fn clear_headers_keeps_fields() {
        let message = request() << add_header("Accept", "*/*") << clear_headers();

        assert!(message.headers().is_empty());
        assert_eq!(message.body(), "hello");
        assert_eq!(message.source(), "client-A");
        assert_eq!(message.destination(), "server-B");
    }

    #[test]
    fn later_set_wins() {
        let message = Message::new() << set_body("first") << set_body("second");
        assert_eq!(message.body(), "second");

        let repeated = Message::new() << set_source("a") << set_source("a");
        assert_eq!(repeated.source(), "a");
    }

    #[test]
    fn order_only_matters_for_overlapping_state() {
        let ab = Message::new() << add_header("X", "1") << set_body("b");
        let ba = Message::new() << set_body("b") << add_header("X", "1");
        assert_eq!(ab, ba);

        let first = Message::new() << set_body("a") << set_body("b");
        let second = Message::new() << set_body("b") << set_body("a");
        assert_ne!(first, second);
    }

    #[test]
    fn set_headers_replaces_everything() {
        let replacement: HeaderMultiMap<String> = [("Host".to_owned(), "example.com".to_owned())].into_iter().collect();
        let message = request() << set_headers(replacement.clone());

        assert_eq!(message.headers(), &replacement);
        assert_eq!(message.body(), "hello");
    }

    #[test]
    fn same_directives_on_wide_and_raw() {
        let wide = WMessage::new() << add_header("X-Test", "1") << set_body("hello") << clear_headers();
        assert!(wide.headers().is_empty());
        assert_eq!(wide.body(), &WideString::from("hello"));

        let raw = RawMessage::new() << add_header("X-Test", "1") << set_destination("server-B");
        assert_eq!(raw.headers().len(), 1);
        assert_eq!(raw.destination().as_ref(), b"server-B");
    }
}
