/// Logging port injected into every use case.
///
/// Messages are plain text; adapters decide target, level filtering and format.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
