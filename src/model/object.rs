use std::cell::RefCell;
use std::fmt;
use std::fmt::Formatter;
use std::rc::{Rc, Weak};

use uuid::Uuid;

use crate::model::slot::SlotStore;

/// Shared handle to a prototyped object. Linkage between objects is shared,
/// not owned; every object keeps an independent lifetime.
pub type ObjectRef = Rc<RefCell<ObjectBase>>;

/// Per-object state: the own selector mapping, the primary prototype, the
/// auxiliary hierarchy and the reassignable context back-reference.
pub struct ObjectBase {
    id: Uuid,
    slots: SlotStore,
    prototype: Option<ObjectRef>,
    hierarchy: Vec<ObjectRef>,
    // Weak so that a prototype pointing back at its adopter does not keep
    // the pair alive forever under plain reference counting.
    context: Option<Weak<RefCell<ObjectBase>>>,
}
impl ObjectBase {
    pub fn new() -> Self {
        ObjectBase {
            id: Uuid::new_v4(),
            slots: SlotStore::new(),
            prototype: None,
            hierarchy: vec![],
            context: None,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut SlotStore {
        &mut self.slots
    }

    pub fn prototype(&self) -> Option<&ObjectRef> {
        self.prototype.as_ref()
    }

    pub fn set_prototype_link(&mut self, prototype: Option<ObjectRef>) {
        self.prototype = prototype;
    }

    pub fn hierarchy(&self) -> &[ObjectRef] {
        &self.hierarchy
    }

    pub fn set_hierarchy(&mut self, hierarchy: Vec<ObjectRef>) {
        self.hierarchy = hierarchy;
    }

    /// Rebinds the stored context to `target`. Used by the mutating
    /// prototype-adoption path.
    pub fn set_context(&mut self, target: &ObjectRef) {
        self.context = Some(Rc::downgrade(target));
    }

    pub fn stored_context(&self) -> Option<ObjectRef> {
        self.context.as_ref().and_then(|w| w.upgrade())
    }

    fn clone_shallow(&self) -> Self {
        ObjectBase {
            id: Uuid::new_v4(),
            slots: self.slots.clone(),
            prototype: self.prototype.clone(),
            hierarchy: self.hierarchy.clone(),
            context: self.context.clone(),
        }
    }
}
impl PartialEq for ObjectBase {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl fmt::Debug for ObjectBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProtoObject({}, {} slots)",
            self.id.to_hyphenated(),
            self.slots.len()
        )
    }
}

pub fn new_object() -> ObjectRef {
    Rc::new(RefCell::new(ObjectBase::new()))
}

/// Pure shallow clone: a fresh object with an independently copied slot
/// container and the same prototype/hierarchy links. Values that are
/// themselves reference types stay shared across the clone boundary.
pub fn clone_object(obj: &ObjectRef) -> ObjectRef {
    Rc::new(RefCell::new(obj.borrow().clone_shallow()))
}

/// Identity comparison on handles.
pub fn same_object(a: &ObjectRef, b: &ObjectRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// The logical receiver used when a method of this object runs without an
/// explicitly threaded context: the rebound context if one was stored, the
/// object itself otherwise.
pub fn effective_context(obj: &ObjectRef) -> ObjectRef {
    match obj.borrow().stored_context() {
        Some(ctx) => ctx,
        None => obj.clone(),
    }
}
