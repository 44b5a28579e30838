pub mod candidate;
pub mod server;
pub mod url;
