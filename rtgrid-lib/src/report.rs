/// Leveled diagnostics sink handed into every builder.
///
/// Level `0` is a warning; increasing levels are increasingly chatty
/// progress detail. There is no process-wide verbosity state — callers pick
/// an implementation and a threshold.
pub trait Reporter {
    fn report(&self, level: u32, message: &str);
}

/// Discards every message.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _level: u32, _message: &str) {}
}

/// Forwards to the `log` facade so the embedding binary picks the backend.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: u32, message: &str) {
        match level {
            0 => log::warn!("{message}"),
            1..=4 => log::info!("{message}"),
            5..=19 => log::debug!("{message}"),
            _ => log::trace!("{message}"),
        }
    }
}
