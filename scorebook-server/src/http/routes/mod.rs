//! Route handlers organized by resource

pub mod assets;
pub mod health;
pub mod login;
pub mod scores;
