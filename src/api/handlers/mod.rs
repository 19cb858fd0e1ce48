//! HTTP request handlers.

mod redirect;
mod shorten;
mod stats;

pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
