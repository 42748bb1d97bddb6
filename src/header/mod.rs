//!Headers module

pub use http::header::*;

mod errors;
mod cross_origin;
mod link;
mod store;

pub use self::errors::LinkError;
pub use self::cross_origin::CrossOrigin;
pub use self::link::{Options, Link, LinkDisplay};
pub use self::store::{HeaderStore, append, append_with, append_link, append_link_with};
