//! Request/response DTOs exchanged with the quiz backend.

pub mod wire;
