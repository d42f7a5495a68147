pub mod certification;
pub mod compliance;
mod macros;
pub mod mandatory_item;
pub mod shift;
pub mod timesheet;

// Re-export all models for easy importing
pub use certification::*;
pub use compliance::*;
pub use mandatory_item::*;
pub use shift::*;
pub use timesheet::*;
