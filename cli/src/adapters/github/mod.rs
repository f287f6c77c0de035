//! GitHub adapter

pub mod client;

pub use client::GithubClient;
