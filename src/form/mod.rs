pub mod definition;
pub mod rule;

pub use definition::*;
pub use rule::*;
