pub mod email;
pub mod field;
mod macros;
pub mod snapshot;
pub mod validation;
pub mod values;
