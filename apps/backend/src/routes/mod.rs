pub mod calendar;
pub mod doors;
pub mod progress;
