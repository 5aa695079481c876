//! HTTP handlers, one module per resource.

pub mod chat;
pub mod health;
pub mod questions;
pub mod sessions;
pub mod spa;
