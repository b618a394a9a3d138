//! Constructor factory: reusable templates built from a configured
//! prototype.
//!
//! Copy mode flattens the prototype's own entries into every instance at
//! template-creation time; from mode links every instance to a private
//! clone of the prototype and keeps full delegation semantics. Both apply
//! a selector-to-value override list at construction: a value aimed at an
//! own method lands in that method's backing storage, anything else
//! becomes a property.

use std::rc::Rc;

use crate::model::error::ProtoError;
use crate::model::object::{clone_object, new_object, ObjectRef};
use crate::model::operations::object::set_prototype_mut;
use crate::model::selector::Selector;
use crate::model::slot::SlotStore;
use crate::model::value::Value;

/// An initialization block run against every instance of a specialized
/// template before overrides apply.
pub type ExtendBlock = Rc<dyn Fn(&ObjectRef) -> Result<(), ProtoError>>;

#[derive(Clone)]
enum Mode {
    Copy { snapshot: SlotStore },
    From { template: ObjectRef },
}

#[derive(Clone)]
pub struct Constructor {
    mode: Mode,
    extensions: Vec<ExtendBlock>,
}
impl Constructor {
    /// Copy-mode template: snapshots the prototype's own entries now.
    /// Later edits to the prototype never reach existing or future
    /// instances, and instances keep no prototype link at all.
    pub fn copy(prototype: &ObjectRef) -> Self {
        Constructor {
            mode: Mode::Copy {
                snapshot: prototype.borrow().slots().clone(),
            },
            extensions: vec![],
        }
    }

    /// From-mode template: every instance delegates to a private shallow
    /// clone of the prototype, so mutating what an instance sees never
    /// mutates the shared template.
    pub fn from(prototype: &ObjectRef) -> Self {
        Constructor {
            mode: Mode::From {
                template: prototype.clone(),
            },
            extensions: vec![],
        }
    }

    /// A further specialized template. Instances run the accumulated
    /// blocks in order, typically declaring extra properties and methods,
    /// before the construction overrides apply.
    pub fn extend_with<F>(&self, block: F) -> Self
    where
        F: Fn(&ObjectRef) -> Result<(), ProtoError> + 'static,
    {
        let mut extensions = self.extensions.clone();
        extensions.push(Rc::new(block) as ExtendBlock);
        Constructor {
            mode: self.mode.clone(),
            extensions,
        }
    }

    /// Builds an instance and applies the selector-to-value overrides.
    /// An override never fails: an unrecognized selector simply defines a
    /// new property.
    pub fn construct(&self, overrides: Vec<(&str, Value)>) -> Result<ObjectRef, ProtoError> {
        let instance = new_object();
        match &self.mode {
            Mode::Copy { snapshot } => {
                *instance.borrow_mut().slots_mut() = snapshot.clone();
            }
            Mode::From { template } => {
                let private = clone_object(template);
                set_prototype_mut(&instance, &private);
            }
        }
        for block in &self.extensions {
            block(&instance)?;
        }
        for (selector, value) in overrides {
            apply_override(&instance, &Selector::new(selector), value);
        }
        Ok(instance)
    }
}

fn apply_override(instance: &ObjectRef, selector: &Selector, value: Value) {
    let mut base = instance.borrow_mut();
    if !base.slots_mut().set_backing(selector, value.clone()) {
        base.slots_mut().set_property(selector.clone(), value);
    }
}
