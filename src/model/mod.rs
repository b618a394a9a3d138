pub mod error;
pub mod object;
pub mod operations;
pub mod scope;
pub mod selector;
pub mod slot;
pub mod value;
