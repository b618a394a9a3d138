//! Object construction and the property/method/prototype setter API.
//!
//! Every setter comes in two flavors: the plain one returns a new object
//! with an independently copied mapping and leaves the receiver untouched,
//! the `_mut` one changes the receiver in place.

use std::rc::Rc;

use crate::model::error::ProtoError;
use crate::model::object::{clone_object, new_object, ObjectRef};
use crate::model::operations::dispatch::responds_to_selector;
use crate::model::scope::MethodScope;
use crate::model::selector::Selector;
use crate::model::slot::MethodBody;
use crate::model::value::Value;

/// Creates a new empty prototyped object.
pub fn create() -> ObjectRef {
    new_object()
}

/// Creates a new object and runs `init` in the object's own context before
/// returning it, so the initializer can populate the mapping through the
/// scope it is handed.
pub fn create_with<F>(init: F) -> Result<ObjectRef, ProtoError>
where
    F: FnOnce(&MethodScope) -> Result<(), ProtoError>,
{
    let obj = new_object();
    let scope = MethodScope::new(obj.clone(), obj.clone());
    init(&scope)?;
    Ok(obj)
}

/// Returns a clone of `obj` with the property set.
pub fn set_property(obj: &ObjectRef, selector: &str, value: Value) -> ObjectRef {
    let copy = clone_object(obj);
    set_property_mut(&copy, selector, value);
    copy
}

/// Sets a property on `obj` itself, overwriting any previous entry under
/// the same selector.
pub fn set_property_mut(obj: &ObjectRef, selector: &str, value: Value) {
    obj.borrow_mut()
        .slots_mut()
        .set_property(Selector::new(selector), value);
}

/// Returns a clone of `obj` with the method defined.
pub fn set_method<F>(obj: &ObjectRef, selector: &str, body: F) -> ObjectRef
where
    F: Fn(&MethodScope, Vec<Value>) -> Result<Value, ProtoError> + 'static,
{
    let copy = clone_object(obj);
    set_method_mut(&copy, selector, body);
    copy
}

/// Defines a method on `obj` itself. A property previously stored under
/// the same selector becomes the method's backing storage.
pub fn set_method_mut<F>(obj: &ObjectRef, selector: &str, body: F)
where
    F: Fn(&MethodScope, Vec<Value>) -> Result<Value, ProtoError> + 'static,
{
    set_method_body_mut(obj, selector, Rc::new(body));
}

pub(crate) fn set_method_body_mut(obj: &ObjectRef, selector: &str, body: MethodBody) {
    obj.borrow_mut()
        .slots_mut()
        .set_method(Selector::new(selector), body);
}

/// The `<name> = value` form of dynamic access: a callable value is stored
/// as a method, any other value as a property. Mutates the receiver.
pub fn assign(obj: &ObjectRef, selector: &str, value: Value) {
    match value {
        Value::Callable(body) => set_method_body_mut(obj, selector, body),
        other => set_property_mut(obj, selector, other),
    }
}

/// Returns a clone of `obj` delegating to `prototype`.
///
/// The prototype's own stored context stays untouched; the context
/// rebinding for this relationship happens per invocation, when resolution
/// threads the originating receiver into the borrowed method.
pub fn set_prototype(obj: &ObjectRef, prototype: &ObjectRef) -> ObjectRef {
    let copy = clone_object(obj);
    copy.borrow_mut().set_prototype_link(Some(prototype.clone()));
    copy
}

/// Establishes the delegation link on `obj` itself and rebinds the
/// prototype's stored context to `obj` in place, so direct invocations on
/// the prototype now also address `obj` as their logical receiver.
pub fn set_prototype_mut(obj: &ObjectRef, prototype: &ObjectRef) {
    prototype.borrow_mut().set_context(obj);
    obj.borrow_mut().set_prototype_link(Some(prototype.clone()));
}

/// Returns a clone of `obj` with the last element as primary prototype and
/// all preceding elements as the auxiliary hierarchy, consulted in order
/// with last-direct-answer-wins when the primary cannot answer.
pub fn set_prototypes(obj: &ObjectRef, prototypes: &[ObjectRef]) -> ObjectRef {
    let copy = clone_object(obj);
    {
        let mut base = copy.borrow_mut();
        base.set_prototype_link(prototypes.last().cloned());
        let hierarchy = match prototypes.len() {
            0 => vec![],
            n => prototypes[..n - 1].to_vec(),
        };
        base.set_hierarchy(hierarchy);
    }
    copy
}

/// Ordered list of the selectors in `obj`'s own mapping.
pub fn selectors(obj: &ObjectRef) -> Vec<Selector> {
    obj.borrow().slots().selectors()
}

/// Whether `obj` would answer `selector`: own mapping first, then the
/// prototype transitively, then the hierarchy directly.
pub fn responds_to(obj: &ObjectRef, selector: &str) -> bool {
    responds_to_selector(obj, &Selector::new(selector))
}
