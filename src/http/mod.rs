pub mod cors;
pub mod handler;
pub mod response;

pub use handler::{handle_health, handle_root, handle_task, Endpoint};
