//! HTML template rendering handlers.

mod login;

pub use login::login_page_handler;
