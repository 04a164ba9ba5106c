pub mod word;
pub mod dictionary;
pub mod registry;
pub mod state;
