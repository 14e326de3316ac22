pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{BrowseOptions, Config, TmdbConfig};
pub use credentials::{resolve_api_key, CredentialStore, API_KEY_ENV};
pub use paths::{container_base_path, PathManager};
