pub mod threads;
pub mod truncation;
