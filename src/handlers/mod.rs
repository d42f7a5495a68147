pub mod certifications;
pub mod compliance;
pub mod hours;
pub mod shared;
pub mod shifts;
pub mod timesheets;
