//! # Domain Services

pub mod existence_guard;
