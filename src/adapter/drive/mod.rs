//! Drive Adapter Modules
//!
//! Drive v3 API へのアップロード

pub mod client;
