//! Input handling for keyboard events.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
