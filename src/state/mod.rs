//! Form state module

mod contact;
mod form;
mod validate;

pub use contact::*;
pub use form::*;
