// src/fetch/mod.rs

pub mod client;
pub mod page;

pub use client::build_client;
pub use page::fetch_page;
