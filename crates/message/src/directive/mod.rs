//! Directives: small operation objects that build a message step by step.
//!
//! A [`Directive`] carries the data for one mutation and applies it to a message
//! through [`NetworkMessage`]. Directives compose, and are always applied in the
//! order given, so later steps observe earlier ones:
//!
//! ```
//! use micro_message::directive::{add_header, chain, set_body, Directive};
//! use micro_message::headers::HeaderContainer;
//! use micro_message::Message;
//!
//! let build = chain(add_header("X-Test", "1"), add_header("X-Test", "2")).then(set_body("hello"));
//!
//! let mut message = Message::new();
//! build.apply(&mut message);
//!
//! assert_eq!(message.headers().count(&"X-Test".to_owned()), 2);
//! assert_eq!(message.body(), "hello");
//! ```
//!
//! The built-in directives keep their arguments unconverted, so the same value can
//! be applied to a [`Message`](crate::Message), a [`WMessage`](crate::WMessage) or a
//! [`RawMessage`](crate::RawMessage).

mod modifiers;
mod pipeline;
mod transform;

pub use modifiers::{AddHeader, ClearHeaders, RemoveHeader, SetBody, SetDestination, SetHeaders, SetSource};
pub use modifiers::{add_header, clear_headers, remove_header, set_body, set_destination, set_headers, set_source};
pub use pipeline::Pipeline;
pub use transform::{Case, Field, Transform, to_lower, to_upper};

use crate::message::NetworkMessage;

/// One step of building a message.
pub trait Directive<M: NetworkMessage> {
    /// Performs the mutation on `message`
    fn apply(&self, message: &mut M);
}

impl<M: NetworkMessage, D: Directive<M> + ?Sized> Directive<M> for &D {
    #[inline]
    fn apply(&self, message: &mut M) {
        (**self).apply(message);
    }
}

impl<M: NetworkMessage, D: Directive<M> + ?Sized> Directive<M> for Box<D> {
    #[inline]
    fn apply(&self, message: &mut M) {
        (**self).apply(message);
    }
}

/// Two directives applied one after the other
#[derive(Debug, Clone, Copy)]
pub struct Chain<D1, D2> {
    first: D1,
    second: D2,
}

impl<D1, D2> Chain<D1, D2> {
    pub fn new(first: D1, second: D2) -> Self {
        Self { first, second }
    }

    /// Appends `next`, which runs after everything already chained
    pub fn then<D3>(self, next: D3) -> Chain<Self, D3> {
        Chain::new(self, next)
    }
}

/// Chains `first` and `second`, `first` is applied first
pub fn chain<D1, D2>(first: D1, second: D2) -> Chain<D1, D2> {
    Chain::new(first, second)
}

impl<M, D1, D2> Directive<M> for Chain<D1, D2>
where
    M: NetworkMessage,
    D1: Directive<M>,
    D2: Directive<M>,
{
    fn apply(&self, message: &mut M) {
        self.first.apply(message);
        self.second.apply(message);
    }
}

/// A directive backed by a closure
#[derive(Clone, Copy)]
pub struct DirectiveFn<F> {
    f: F,
}

pub fn directive_fn<M, F>(f: F) -> DirectiveFn<F>
where
    M: NetworkMessage,
    F: Fn(&mut M),
{
    DirectiveFn { f }
}

impl<M, F> Directive<M> for DirectiveFn<F>
where
    M: NetworkMessage,
    F: Fn(&mut M),
{
    #[inline]
    fn apply(&self, message: &mut M) {
        (self.f)(message);
    }
}

impl<F> std::fmt::Debug for DirectiveFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectiveFn").finish_non_exhaustive()
    }
}

/// impl [`Directive`] for tuples of directives, applied from left to right
macro_rules! impl_directive_for_tuple ({ $($param:ident)* } => {
    impl<M, $($param,)*> Directive<M> for ($($param,)*)
    where
        M: NetworkMessage,
        $($param: Directive<M>,)*
    {
        #[inline]
        #[allow(non_snake_case, unused_variables, reason = "generated for every tuple arity")]
        fn apply(&self, message: &mut M) {
            let ($($param,)*) = self;
            $($param.apply(message);)*
        }
    }
});

impl_directive_for_tuple! {}
impl_directive_for_tuple! { A }
impl_directive_for_tuple! { A B }
impl_directive_for_tuple! { A B C }
impl_directive_for_tuple! { A B C D }
impl_directive_for_tuple! { A B C D E }
impl_directive_for_tuple! { A B C D E F }
impl_directive_for_tuple! { A B C D E F G }
impl_directive_for_tuple! { A B C D E F G H }
impl_directive_for_tuple! { A B C D E F G H I }
impl_directive_for_tuple! { A B C D E F G H I J }
impl_directive_for_tuple! { A B C D E F G H I J K }
impl_directive_for_tuple! { A B C D E F G H I J K L }
