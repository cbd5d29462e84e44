mod bounding_box;
mod common;
mod known_variables;
mod variable;

pub use bounding_box::*;
pub use common::*;
pub use variable::*;
