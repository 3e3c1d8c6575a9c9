//! HTML template rendering handlers.

pub mod catcher;
pub mod root;

pub use catcher::CatcherTemplate;
pub use root::{new_catcher_handler, root_page};
