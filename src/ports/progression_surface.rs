/// Port for presenting a progression run to the user.
///
/// Implementations decide how each outcome is displayed; success output must
/// stay distinguishable from warnings and errors.
pub trait ProgressionSurface {
    /// A request is in flight and the caller is blocked on it.
    fn begin_progress(&mut self, message: &str);

    /// The in-flight request finished, successfully or not.
    fn end_progress(&mut self);

    /// Input was rejected before any request was made.
    fn show_warning(&mut self, message: &str);

    /// The request failed.
    fn show_error(&mut self, message: &str);

    /// The request succeeded; `text` is the raw model output.
    fn show_result(&mut self, text: &str);
}

