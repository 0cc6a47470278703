//! HTTP request handlers for the action layer.

mod health;
mod login;

pub use health::health_handler;
pub use login::login_action_handler;
