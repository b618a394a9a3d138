use crate::model::error::ProtoError;
use crate::model::object::{same_object, ObjectRef};
use crate::model::operations::dispatch::{resolve, send};
use crate::model::operations::object::assign;
use crate::model::selector::Selector;
use crate::model::slot::SlotEntry;
use crate::model::value::Value;

/// The binding a method body executes under.
///
/// `this` is the object physically hosting the body; `context` is the
/// logical receiver, threaded explicitly through every delegated
/// invocation so a borrowed method sees the object that originated the
/// outer call. The two addressing styles are independent and not
/// interchangeable: context-indirected access follows the rebinding and
/// sees overrides anywhere along the active call chain, direct-receiver
/// access always reads the storage of the hosting object.
pub struct MethodScope {
    this: ObjectRef,
    context: ObjectRef,
}
impl MethodScope {
    pub(crate) fn new(this: ObjectRef, context: ObjectRef) -> Self {
        MethodScope { this, context }
    }

    /// The object the executing method body is physically defined on.
    pub fn this(&self) -> &ObjectRef {
        &self.this
    }

    /// The logical receiver of the outer call.
    pub fn context(&self) -> &ObjectRef {
        &self.context
    }

    /// True when the body runs directly on the logical receiver, i.e. the
    /// method was not borrowed from a prototype.
    pub fn is_own_call(&self) -> bool {
        same_object(&self.this, &self.context)
    }

    /// Context-indirected read: full dispatch of `selector` against the
    /// logical receiver.
    pub fn get(&self, selector: &str) -> Result<Value, ProtoError> {
        send(&self.context, selector, vec![])
    }

    /// Context-indirected invocation with arguments.
    pub fn call(&self, selector: &str, args: Vec<Value>) -> Result<Value, ProtoError> {
        send(&self.context, selector, args)
    }

    /// Context-indirected write: creates or overwrites on the logical
    /// receiver itself, shadowing anything further up the chain. A callable
    /// value lands as a method, anything else as a property.
    pub fn set(&self, selector: &str, value: Value) {
        assign(&self.context, selector, value);
    }

    /// Direct-receiver read of the hosting object's own storage: a property
    /// value, or the backing storage of an overriding method. Absent fields
    /// read as `Value::Null`, the way an unset private field would.
    pub fn this_field(&self, selector: &str) -> Value {
        let selector = Selector::new(selector);
        match self.this.borrow().slots().get(&selector) {
            Some(SlotEntry::Property(v)) => v.clone(),
            Some(SlotEntry::Method(m)) => m.backing.clone().unwrap_or(Value::Null),
            None => Value::Null,
        }
    }

    /// Direct-receiver write. Lands in the backing storage when the own
    /// entry is a method, otherwise creates or overwrites a property.
    pub fn set_this_field(&self, selector: &str, value: Value) {
        let selector = Selector::new(selector);
        let mut this = self.this.borrow_mut();
        if !this.slots_mut().set_backing(&selector, value.clone()) {
            this.slots_mut().set_property(selector, value);
        }
    }

    /// Invokes the next implementation of `selector` up the delegation
    /// chain: resolution starts at the hosting object's prototype and
    /// hierarchy, never re-entering its own mapping, with the logical
    /// receiver threaded through unchanged.
    pub fn call_next(&self, selector: &str, args: Vec<Value>) -> Result<Value, ProtoError> {
        resolve(&self.this, &Selector::new(selector), args, &self.context)
    }
}
