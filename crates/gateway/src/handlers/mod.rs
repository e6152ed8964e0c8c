//! API handlers module

pub mod admin;
pub mod content;
pub mod directory;
pub mod health;
