//! # prototyped - Prototype-Based Object Model in Rust
//!
//! An in-memory prototype-based object model layered over Rust:
//! - Objects acquire properties and methods dynamically at runtime
//! - Unresolved selector access delegates to a primary prototype plus an
//!   ordered auxiliary hierarchy
//! - An explicit `call_next` protocol invokes the next implementation up
//!   the delegation chain
//! - Borrowed method bodies see the logical receiver through an explicitly
//!   threaded context, while keeping direct access to their own storage
//! - A constructor factory turns a configured prototype into a reusable
//!   template (copy-flatten or live-link mode)
//!
//! ## Quick Start
//!
//! ### Building objects dynamically
//!
//! ```
//! use prototyped::model::operations::object::{create, set_property_mut, set_method_mut};
//! use prototyped::model::operations::dispatch::send;
//! use prototyped::model::value::{NumberType, Value};
//!
//! let point = create();
//! set_property_mut(&point, "x", Value::Number(NumberType::Integer(3)));
//! set_method_mut(&point, "double_x", |scope, _args| {
//!     let x = scope.get("x")?.as_integer().unwrap_or(0);
//!     Ok(Value::Number(NumberType::Integer(x * 2)))
//! });
//!
//! let doubled = send(&point, "double_x", vec![]).unwrap();
//! assert_eq!(doubled.as_integer(), Some(6));
//! ```
//!
//! ### Delegation and `call_next`
//!
//! ```
//! use prototyped::model::operations::object::{create, set_method_mut, set_prototype};
//! use prototyped::model::operations::dispatch::send;
//! use prototyped::model::value::Value;
//!
//! let base = create();
//! set_method_mut(&base, "greet", |_scope, args| {
//!     let name = args[0].as_str().unwrap_or("").to_string();
//!     Ok(Value::String(format!("Hello {}. ", name)))
//! });
//!
//! let mid = set_prototype(&create(), &base);
//! set_method_mut(&mid, "greet", |scope, args| {
//!     let prefix = scope.call_next("greet", args)?;
//!     let prefix = prefix.as_str().unwrap_or("").to_string();
//!     Ok(Value::String(format!("{}How are you? ", prefix)))
//! });
//!
//! let greeting = send(&mid, "greet", vec![Value::String("Ann".to_string())]).unwrap();
//! assert_eq!(greeting.as_str(), Some("Hello Ann. How are you? "));
//! ```
//!
//! ### Constructor templates
//!
//! ```
//! use prototyped::factory::Constructor;
//! use prototyped::model::operations::object::{create, set_property_mut};
//! use prototyped::model::operations::dispatch::get;
//! use prototyped::model::value::{NumberType, Value};
//!
//! let warrior = create();
//! set_property_mut(&warrior, "energy", Value::Number(NumberType::Integer(100)));
//!
//! let constructor = Constructor::from(&warrior);
//! let one = constructor
//!     .construct(vec![("energy", Value::Number(NumberType::Integer(200)))])
//!     .unwrap();
//! assert_eq!(get(&one, "energy").unwrap().as_integer(), Some(200));
//! ```
//!
//! ## Architecture
//!
//! - **[`model`]** - The object model core
//!   - **[`model::object`]** - Object storage and prototype linkage
//!   - **[`model::scope`]** - Context binding for method bodies
//!   - **[`model::operations`]** - Dispatch, resolution and setter API
//! - **[`factory`]** - Constructor templates built from prototypes

#[macro_use]
extern crate lazy_static;

pub mod factory;
pub mod model;
