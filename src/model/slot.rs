use std::rc::Rc;

use crate::model::error::ProtoError;
use crate::model::scope::MethodScope;
use crate::model::selector::Selector;
use crate::model::value::Value;

/// A method body. It receives the binding scope (physical host plus
/// logical receiver) and the positional arguments, which may end with a
/// trailing callable value.
pub type MethodBody = Rc<dyn Fn(&MethodScope, Vec<Value>) -> Result<Value, ProtoError>>;

/// One entry of an object's own mapping.
#[derive(Clone)]
pub enum SlotEntry {
    Property(Value),
    Method(MethodDef),
}
impl SlotEntry {
    pub fn is_method(&self) -> bool {
        match self {
            SlotEntry::Method(_) => true,
            _ => false,
        }
    }
}

/// A stored method together with its backing storage: the field a later
/// property write lands in once the selector is shadowed by this method.
#[derive(Clone)]
pub struct MethodDef {
    pub body: MethodBody,
    pub backing: Option<Value>,
}

/// Insertion-ordered mapping from selector to entry. Selector names are
/// unique; re-setting overwrites in place and keeps the original position.
#[derive(Clone)]
pub struct SlotStore {
    entries: Vec<(Selector, SlotEntry)>,
}
impl SlotStore {
    pub fn new() -> Self {
        SlotStore { entries: vec![] }
    }

    pub fn get(&self, selector: &Selector) -> Option<&SlotEntry> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, e)| e)
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.get(selector).is_some()
    }

    pub fn set(&mut self, selector: Selector, entry: SlotEntry) {
        match self.entries.iter_mut().find(|(s, _)| s == &selector) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((selector, entry)),
        }
    }

    pub fn set_property(&mut self, selector: Selector, value: Value) {
        self.set(selector, SlotEntry::Property(value));
    }

    /// Stores a method. A property previously registered under the same
    /// selector survives as the method's backing storage.
    pub fn set_method(&mut self, selector: Selector, body: MethodBody) {
        let backing = match self.get(&selector) {
            Some(SlotEntry::Property(v)) => Some(v.clone()),
            Some(SlotEntry::Method(m)) => m.backing.clone(),
            None => None,
        };
        self.set(selector, SlotEntry::Method(MethodDef { body, backing }));
    }

    /// Writes into an existing method's backing storage. Returns false when
    /// the selector is not a method here.
    pub fn set_backing(&mut self, selector: &Selector, value: Value) -> bool {
        match self.entries.iter_mut().find(|(s, _)| s == selector) {
            Some((_, SlotEntry::Method(m))) => {
                m.backing = Some(value);
                true
            }
            _ => false,
        }
    }

    pub fn selectors(&self) -> Vec<Selector> {
        self.entries.iter().map(|(s, _)| s.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
