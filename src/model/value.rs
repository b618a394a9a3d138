use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::model::object::{same_object, ObjectRef};
use crate::model::slot::MethodBody;

pub enum Value {
    Null,
    Boolean(bool),
    Number(NumberType),
    String(String),
    Object(ObjectRef),
    Callable(MethodBody),
}
impl Value {
    /// Wraps a closure so it can travel as an ordinary value, e.g. as the
    /// right-hand side of an assignment or a trailing callable argument.
    pub fn callable<F>(body: F) -> Self
    where
        F: Fn(
                &crate::model::scope::MethodScope,
                Vec<Value>,
            ) -> Result<Value, crate::model::error::ProtoError>
            + 'static,
    {
        Value::Callable(Rc::new(body))
    }

    pub fn is_callable(&self) -> bool {
        match self {
            Value::Callable(_) => true,
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            _ => false,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Number(NumberType::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Number(NumberType::Float(f)) => Some(*f),
            Value::Number(NumberType::Integer(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}
impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::Number(n) => Value::Number(n.clone()),
            Value::String(s) => Value::String(s.to_string()),
            Value::Object(o) => Value::Object(o.clone()),
            Value::Callable(c) => Value::Callable(c.clone()),
        }
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Value::Null => "null".to_string(),
                Value::Boolean(b) => format!("bool({})", b),
                Value::Number(n) => n.to_string(),
                Value::String(s) => format!("\"{}\"", s),
                Value::Object(o) => format!("{:?}", o.borrow()),
                Value::Callable(_) => "callable".to_string(),
            }
        )
    }
}
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Value::Null"),
            Value::Boolean(b) => write!(f, "Value::Boolean({})", b),
            Value::Number(n) => write!(f, "Value::Number({:?})", n),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::Object(_) => write!(f, "Value::Object(...)"),
            Value::Callable(_) => write!(f, "Value::Callable(...)"),
        }
    }
}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => same_object(a, b),
            (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NumberType {
    Integer(i64),
    Float(f64),
}
impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Float(nf) => write!(f, "{}", nf),
        }
    }
}
impl Clone for NumberType {
    fn clone(&self) -> Self {
        match self {
            NumberType::Integer(i) => NumberType::Integer(*i),
            NumberType::Float(nf) => NumberType::Float(*nf),
        }
    }
}
