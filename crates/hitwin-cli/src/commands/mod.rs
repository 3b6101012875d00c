pub mod analyze;
pub mod judge;
pub mod windows;
