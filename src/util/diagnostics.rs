//! Side channel for non-fatal failures.
//!
//! Failures recovered locally (for example a session bootstrap that degrades
//! to signed-out) are reported here instead of reaching observers.

use std::error::Error;
use std::rc::Rc;

/// Fire-and-forget failure sink. Implementations must never panic.
pub trait Diagnostics {
    fn report(&self, context: &str, error: &dyn Error);
}

/// Writes reports to the browser console (stderr under SSR).
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&self, context: &str, error: &dyn Error) {
        leptos::logging::error!("{context}: {error}");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, context: &str, error: &dyn Error) {
        (**self).report(context, error);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Rc<D> {
    fn report(&self, context: &str, error: &dyn Error) {
        (**self).report(context, error);
    }
}

/// Test sink that records every report as `(context, message)`.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingDiagnostics {
    reports: Rc<std::cell::RefCell<Vec<(String, String)>>>,
}

#[cfg(test)]
impl RecordingDiagnostics {
    pub(crate) fn reports(&self) -> Vec<(String, String)> {
        self.reports.borrow().clone()
    }
}

#[cfg(test)]
impl Diagnostics for RecordingDiagnostics {
    fn report(&self, context: &str, error: &dyn Error) {
        self.reports.borrow_mut().push((context.to_owned(), error.to_string()));
    }
}
