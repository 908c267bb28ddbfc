pub mod display;
pub mod persistence;
