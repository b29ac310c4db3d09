//! SQL grammar validator
//!
//! A hand-written LL(1) recursive descent validator with INSERT arity and
//! type checks and keyword typo suggestions.

mod error;
mod suggest;
mod validator;

pub use error::ValidationError;
pub use suggest::{edit_distance, suggest_keyword, suggestion_tolerance};
pub use validator::{Validator, validate};
