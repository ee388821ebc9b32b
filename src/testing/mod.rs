pub mod fake_completion_client;
pub mod recording_surface;

pub use fake_completion_client::FakeCompletionClient;
pub use recording_surface::{RecordingSurface, SurfaceEvent};
