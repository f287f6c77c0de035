//! Bitbucket Cloud adapter

pub mod client;

pub use client::BitbucketClient;
