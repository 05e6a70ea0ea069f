//! Domain models and request/response bodies
//!
//! Request bodies are deliberately permissive: every field is optional and
//! missing values are passed through to the store as SQL NULL.

pub mod user;

pub use user::{LoginRequest, Score, ScoreAck, ScoreUpdateRequest, UserRecord};
