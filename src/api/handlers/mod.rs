//! HTTP request handlers.

pub mod catch;
pub mod index;
pub mod init_client;
pub mod statusz;

pub use catch::catch_handler;
pub use index::index_handler;
pub use init_client::init_client_handler;
pub use statusz::statusz_handler;
