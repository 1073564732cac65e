pub mod delivery;
pub mod item;
pub mod outcome;
pub mod report;
pub mod source;

// Re-exports for convenience
pub use delivery::*;
pub use item::*;
pub use outcome::*;
pub use report::*;
pub use source::*;
