pub mod api;
pub mod client;
pub mod trailer;

pub use client::{MovieBundle, TmdbClient};
pub use trailer::pick_trailer;
