use std::fmt;
use std::fmt::{Display, Formatter};

/// The name identifying a property or method within an object's mapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Selector(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the reserved selector routed to explicit next-call dispatch.
    pub fn is_call_next(&self) -> bool {
        self == &*SELECTOR_CALL_NEXT
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::new(name)
    }
}

/* Reserved selectors */
lazy_static! {
    pub static ref SELECTOR_CALL_NEXT: Selector = Selector::new("call_next");
}
