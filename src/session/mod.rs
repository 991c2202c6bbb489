pub mod store;
pub mod token;

pub use store::{SessionStore, SESSION_COOKIE};
