use crate::directive::Directive;
use crate::encoding::EncodedString;
use crate::message::NetworkMessage;

/// The field a [`Transform`] rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Source,
    Destination,
}

/// ASCII case mapping applied by a [`Transform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

/// Rewrites the source or destination of a message in place.
///
/// Only ASCII letters change; other characters, and other fields, are left as
/// they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    field: Field,
    case: Case,
}

impl Transform {
    pub fn new(field: Field, case: Case) -> Self {
        Self { field, case }
    }
}

/// Upper-cases the selected field
pub fn to_upper(field: Field) -> Transform {
    Transform::new(field, Case::Upper)
}

/// Lower-cases the selected field
pub fn to_lower(field: Field) -> Transform {
    Transform::new(field, Case::Lower)
}

impl<M: NetworkMessage> Directive<M> for Transform {
    fn apply(&self, message: &mut M) {
        let value = match self.field {
            Field::Source => message.source_mut(),
            Field::Destination => message.destination_mut(),
        };

        match self.case {
            Case::Upper => value.make_ascii_uppercase(),
            Case::Lower => value.make_ascii_lowercase(),
        }
    }
}
