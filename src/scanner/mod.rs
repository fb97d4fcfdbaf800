pub mod core;
pub mod feature;
pub mod framework;
pub mod rules;

pub use self::core::*;
pub use feature::*;
pub use framework::*;
pub use rules::*;
