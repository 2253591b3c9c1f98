pub mod app_config;
pub mod auth;
pub mod booking;
pub mod directory;
pub mod http;
pub mod profile;
pub mod token_file;

pub use app_config::Config;
pub use http::HttpApi;
pub use token_file::FileTokenCache;
