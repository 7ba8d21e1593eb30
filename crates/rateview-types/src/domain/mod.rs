pub mod environment;
pub mod value;

pub use environment::*;
pub use value::*;
