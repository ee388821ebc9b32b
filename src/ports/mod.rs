mod completion_client;
mod progression_surface;

pub use completion_client::{CompletionClient, CompletionRequest, CompletionResponse};
pub use progression_surface::ProgressionSurface;
