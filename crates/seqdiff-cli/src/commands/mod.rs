pub mod close;
pub mod diff;
pub mod ratio;
