// src/report.rs

use crate::common::{ErrorKind, FftError};

/// Sink for validation failures. Reporting never changes what the caller gets back.
pub trait Reporter {
    fn report(&self, kind: ErrorKind, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, kind: ErrorKind, message: &str) {
        (**self).report(kind, message)
    }
}

/// Forwards reports to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, kind: ErrorKind, message: &str) {
        tracing::error!(kind = ?kind, "{}", message);
    }
}

/// Drops every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _kind: ErrorKind, _message: &str) {}
}

/// Reports `err` and hands it back for `return Err(...)`.
pub(crate) fn reject<R: Reporter + ?Sized>(reporter: &R, err: FftError) -> FftError {
    reporter.report(err.kind(), err.message());
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(ErrorKind, String)>>);

    impl Reporter for Recorder {
        fn report(&self, kind: ErrorKind, message: &str) {
            self.0.borrow_mut().push((kind, message.to_string()));
        }
    }

    #[test]
    fn reject_reports_kind_and_message() {
        let recorder = Recorder::default();
        let err = reject(&recorder, FftError::NotPowerOfTwo);

        assert_eq!(err, FftError::NotPowerOfTwo);
        let reports = recorder.0.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, ErrorKind::InvalidInput);
        assert_eq!(reports[0].1, FftError::NotPowerOfTwo.message());
    }

    #[test]
    fn reporter_through_reference() {
        let recorder = Recorder::default();
        let by_ref: &dyn Reporter = &recorder;
        reject(&by_ref, FftError::BufferTooSmall);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn builtin_reporters_do_not_panic() {
        TracingReporter.report(ErrorKind::InvalidInput, "no subscriber installed");
        SilentReporter.report(ErrorKind::InvalidInput, "ignored");
    }
}
