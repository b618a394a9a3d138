//! Selector dispatch and delegated resolution.
//!
//! `send` answers a selector from the receiver's own mapping when it can;
//! everything else goes through `resolve`, which walks the primary
//! prototype transitively and falls back to the auxiliary hierarchy,
//! threading the originating receiver as the context of every delegated
//! invocation.

use crate::model::error::ProtoError;
use crate::model::object::{effective_context, ObjectRef};
use crate::model::scope::MethodScope;
use crate::model::selector::Selector;
use crate::model::slot::SlotEntry;
use crate::model::value::Value;

/// Dynamic selector access on a prototyped object.
///
/// The reserved `call_next` selector expects the target selector name as
/// its first argument and routes to [`call_next`]. Any other selector is
/// answered from the receiver's own mapping, or resolved through its
/// prototype linkage when the mapping misses.
pub fn send(obj: &ObjectRef, selector: &str, args: Vec<Value>) -> Result<Value, ProtoError> {
    let selector = Selector::new(selector);
    if selector.is_call_next() {
        return send_call_next(obj, args);
    }
    let local = obj.borrow().slots().get(&selector).cloned();
    match local {
        Some(SlotEntry::Method(m)) => {
            let scope = MethodScope::new(obj.clone(), effective_context(obj));
            (m.body)(&scope, args)
        }
        Some(SlotEntry::Property(v)) => property_value(v, &selector, args),
        None => resolve(obj, &selector, args, &effective_context(obj)),
    }
}

/// Read access sugar: `send` with no arguments.
pub fn get(obj: &ObjectRef, selector: &str) -> Result<Value, ProtoError> {
    send(obj, selector, vec![])
}

/// Explicit delegated invocation for use by an overriding implementation:
/// resolution starts at `obj`'s prototype/hierarchy and never re-enters
/// `obj`'s own mapping.
pub fn call_next(obj: &ObjectRef, selector: &str, args: Vec<Value>) -> Result<Value, ProtoError> {
    resolve(obj, &Selector::new(selector), args, &effective_context(obj))
}

fn send_call_next(obj: &ObjectRef, mut args: Vec<Value>) -> Result<Value, ProtoError> {
    if args.is_empty() {
        return Err(ProtoError::TypeError(
            "call_next expects the target selector as its first argument".to_string(),
        ));
    }
    let target = args.remove(0);
    match target {
        Value::String(name) => call_next(obj, &name, args),
        other => Err(ProtoError::TypeError(format!(
            "call_next target selector must be a string, got {}",
            other
        ))),
    }
}

/// Walks the prototype/hierarchy linkage of `start` to answer `selector`,
/// with `origin` threaded through as the logical receiver of whatever
/// implementation is found.
///
/// The primary prototype is consulted first and may answer transitively;
/// the hierarchy is only scanned for members whose own mapping answers
/// directly, and among those the last one in order wins. Recursion depth
/// is the actual depth of the delegation graph; caller-built cycles are
/// not detected.
pub(crate) fn resolve(
    start: &ObjectRef,
    selector: &Selector,
    args: Vec<Value>,
    origin: &ObjectRef,
) -> Result<Value, ProtoError> {
    let prototype = start.borrow().prototype().cloned();
    let prototype = match prototype {
        None => return Err(ProtoError::NoPrototype(selector.clone())),
        Some(p) => p,
    };
    if responds_to_selector(&prototype, selector) {
        return apply(&prototype, selector, args, origin);
    }
    let fallback = start
        .borrow()
        .hierarchy()
        .iter()
        .rev()
        .find(|m| m.borrow().slots().contains(selector))
        .cloned();
    match fallback {
        Some(member) => apply(&member, selector, args, origin),
        None => Err(ProtoError::NotFound(selector.clone())),
    }
}

/// Whether `obj` can answer `selector`: its own mapping, its prototype
/// transitively, or a hierarchy member directly.
pub(crate) fn responds_to_selector(obj: &ObjectRef, selector: &Selector) -> bool {
    let base = obj.borrow();
    if base.slots().contains(selector) {
        return true;
    }
    if let Some(p) = base.prototype() {
        if responds_to_selector(p, selector) {
            return true;
        }
    }
    base.hierarchy()
        .iter()
        .any(|m| m.borrow().slots().contains(selector))
}

fn apply(
    obj: &ObjectRef,
    selector: &Selector,
    args: Vec<Value>,
    origin: &ObjectRef,
) -> Result<Value, ProtoError> {
    let local = obj.borrow().slots().get(selector).cloned();
    match local {
        Some(SlotEntry::Method(m)) => {
            let scope = MethodScope::new(obj.clone(), origin.clone());
            (m.body)(&scope, args)
        }
        Some(SlotEntry::Property(v)) => property_value(v, selector, args),
        // An intermediate prototype without its own answer can still
        // succeed through its own linkage.
        None => resolve(obj, selector, args, origin),
    }
}

fn property_value(value: Value, selector: &Selector, args: Vec<Value>) -> Result<Value, ProtoError> {
    if args.is_empty() {
        Ok(value)
    } else {
        Err(ProtoError::NotCallable(selector.clone()))
    }
}
