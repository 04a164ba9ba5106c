pub mod pending;
pub mod pipeline;
