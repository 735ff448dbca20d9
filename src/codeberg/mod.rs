pub mod client;

pub use client::CodebergClient;
