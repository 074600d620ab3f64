pub mod config;
pub mod logging;

pub mod api;
pub mod auth;
pub mod downloader;
pub mod http;
pub mod index;
pub mod links;
pub mod metadata;
pub mod naming;
pub mod progress;
pub mod storage;
pub mod sync;
pub mod writeup;
