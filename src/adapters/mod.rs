// Adapters layer: concrete implementations for the world outside the loop
// (console input, the stub network collaborator).

pub mod http;
pub mod input;
