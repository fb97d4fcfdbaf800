pub mod classifier;
pub mod dataset;
pub mod polyfills;

pub use classifier::*;
pub use dataset::*;
pub use polyfills::*;
