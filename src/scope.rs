//! Per-case reporting scopes.
//!
//! A [`Scope`] is the reporting context one case runs under. Assertions record
//! failures into it; a fatal failure unwinds out of the case but never past
//! the scope that is capturing it, so sibling cases keep running.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::report::Failure;

/// Unwind payload used by [`Scope::fatal`].
struct FatalUnwind;

/// Isolated reporting context for one case.
#[derive(Debug)]
pub struct Scope {
    name: String,
    failures: Vec<Failure>,
    capturing: bool,
}

impl Scope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failures: Vec::new(),
            capturing: false,
        }
    }

    /// The name of the case this scope reports for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records a failure and keeps going.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.failures.push(Failure::error(message));
    }

    /// Records a failure and stops the current case.
    ///
    /// Inside [`Scope::capture`] this unwinds to the end of the captured body
    /// without running the panic hook. Outside of it, it panics with the
    /// case name and the message.
    pub fn fatal(&mut self, message: impl Into<String>) -> ! {
        let message = message.into();
        if !self.capturing {
            panic!("{}: {}", self.name, message);
        }
        self.failures.push(Failure::fatal(message));
        panic::resume_unwind(Box::new(FatalUnwind))
    }

    /// Records a failure built by `message` when `condition` is false.
    pub fn check(&mut self, condition: bool, message: impl FnOnce() -> String) {
        if !condition {
            self.fail(message());
        }
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Runs `body` inside this scope.
    ///
    /// A fatal failure ends `body` early. Any other panic is recorded as a
    /// panic failure. Neither escapes the scope.
    pub fn capture<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Scope),
    {
        let was_capturing = std::mem::replace(&mut self.capturing, true);
        let outcome = {
            let scope = &mut *self;
            panic::catch_unwind(AssertUnwindSafe(move || body(scope)))
        };
        self.capturing = was_capturing;
        if let Err(payload) = outcome {
            if !payload.is::<FatalUnwind>() {
                self.failures.push(Failure::panic(panic_message(payload.as_ref())));
            }
        }
    }

    pub(crate) fn into_failures(self) -> Vec<Failure> {
        self.failures
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panicked with a non-string payload".to_string()
    }
}
