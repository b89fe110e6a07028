use tracing::warn;
use super::error::BuildError;

/// Receives per-widget build failures. Reporting never aborts the build.
pub trait ErrorReporter {
    fn report(&self, error: &BuildError);
}

/// Default reporter: one `warn` event per failure
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &BuildError) {
        warn!(error = %error, "chart request skipped");
    }
}

impl<F> ErrorReporter for F
where
    F: Fn(&BuildError),
{
    fn report(&self, error: &BuildError) {
        self(error)
    }
}
