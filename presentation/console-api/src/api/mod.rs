pub mod console;
pub mod error;
pub mod health;
pub mod tags;
