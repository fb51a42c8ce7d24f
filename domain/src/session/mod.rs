//! Session entity and store abstraction

pub mod entities;
pub mod store;

pub use entities::Session;
pub use store::{SessionError, SessionStore};
