//! Domain entities.

mod click;
mod url_entry;

pub use click::ClickInfo;
pub use url_entry::UrlEntry;
