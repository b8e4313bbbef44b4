/// Sink for progress events emitted by long-running algorithms.
///
/// Algorithms report a phase name when they enter a new stage of the
/// computation, and row-level progress while a stage runs. Events are purely
/// observational and never affect the result.
pub trait ProgressSink {
    /// Called when the algorithm enters a new phase.
    fn phase(&mut self, name: &str);

    /// Called periodically while a phase runs, with `current` out of `total`
    /// units completed.
    fn progress(&mut self, current: usize, total: usize);
}

/// A progress sink that discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn phase(&mut self, _name: &str) {}

    fn progress(&mut self, _current: usize, _total: usize) {}
}

/// A progress sink that forwards events to the `log` facade.
///
/// Phase changes are logged at debug level, row-level progress at trace
/// level to keep the output usable with `RUST_LOG=debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn phase(&mut self, name: &str) {
        log::debug!("{}", name);
    }

    fn progress(&mut self, current: usize, total: usize) {
        log::trace!("progress: {}/{}", current, total);
    }
}
