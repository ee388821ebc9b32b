use crate::ports::ProgressionSurface;

/// Everything a surface was asked to show, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    BeginProgress(String),
    EndProgress,
    Warning(String),
    Error(String),
    Result(String),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Result(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ProgressionSurface for RecordingSurface {
    fn begin_progress(&mut self, message: &str) {
        self.events.push(SurfaceEvent::BeginProgress(message.to_string()));
    }

    fn end_progress(&mut self) {
        self.events.push(SurfaceEvent::EndProgress);
    }

    fn show_warning(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Warning(message.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Error(message.to_string()));
    }

    fn show_result(&mut self, text: &str) {
        self.events.push(SurfaceEvent::Result(text.to_string()));
    }
}
