//! Runtime values passed as method arguments.

mod value;

pub use value::{DataType, Value};
