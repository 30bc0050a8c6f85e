//! Container module
//!
//! A container is a name plus an ordered, growable list of string items.

mod types;

pub use types::Container;
