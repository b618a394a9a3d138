use std::fmt;
use std::fmt::{Display, Formatter};

use crate::model::selector::Selector;

/// Errors raised by dispatch and resolution.
///
/// A failed lookup always surfaces as an error; it never degrades to a
/// silent `Value::Null`.
#[derive(Clone, Debug, PartialEq)]
pub enum ProtoError {
    /// The receiver has no prototype at all to delegate to.
    NoPrototype(Selector),
    /// The prototype/hierarchy chain was exhausted without an answer.
    NotFound(Selector),
    /// A property entry was invoked with arguments.
    NotCallable(Selector),
    /// Malformed use of the reserved `call_next` selector.
    TypeError(String),
}
impl ProtoError {
    /// The selector the failed lookup was about, when there is one.
    pub fn selector(&self) -> Option<&Selector> {
        match self {
            ProtoError::NoPrototype(s) => Some(s),
            ProtoError::NotFound(s) => Some(s),
            ProtoError::NotCallable(s) => Some(s),
            ProtoError::TypeError(_) => None,
        }
    }

    /// True for both flavors of failed lookup.
    pub fn is_not_found(&self) -> bool {
        match self {
            ProtoError::NoPrototype(_) => true,
            ProtoError::NotFound(_) => true,
            _ => false,
        }
    }
}
impl Display for ProtoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProtoError::NoPrototype(s) => {
                write!(f, "the object has no prototype and cannot handle {}", s)
            }
            ProtoError::NotFound(s) => {
                write!(f, "the prototype chain cannot handle {}", s)
            }
            ProtoError::NotCallable(s) => {
                write!(f, "{} is a property and cannot be called with arguments", s)
            }
            ProtoError::TypeError(m) => write!(f, "type error: {}", m),
        }
    }
}
impl std::error::Error for ProtoError {}
