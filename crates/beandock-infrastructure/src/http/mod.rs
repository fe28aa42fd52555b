pub mod client;

pub use client::{JlcHttpClient, DEFAULT_BASE_URL};
