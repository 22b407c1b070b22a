//! The dialogue layer: query classification, the required-fields table,
//! and the state machine that gates free-form chat behind field collection.

pub mod classify;
pub mod machine;
pub mod requirements;

pub use classify::classify_query;
pub use machine::{advance, Turn};
pub use requirements::{field_prompt, field_rejection, missing_fields, required_fields};
