//! Domain models.

pub mod chat;
