//! Interactive prompt engine.
//!
//! The engine repeatedly asks a [`Console`] for a line of text, converts it
//! to the target type, runs an optional validator, and retries on failure
//! until the value is accepted or a bounded attempt budget runs out.
//!
//! A single [`PromptRequest`] describes one question: the message, whether
//! an empty line falls back to a default, and the optional validator and
//! post-processor hooks. [`Prompter::try_prompt`] runs the loop and reports
//! the outcome explicitly; [`Prompter::prompt`] is the unbounded convenience
//! form that always returns a value.
//!
//! Conversion failures and validation failures are indistinguishable to the
//! user: both consume one attempt and print the same `Invalid value [..]`
//! notice before re-asking.

use std::fmt::Display;
use std::str::FromStr;

use crate::console::Console;
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;

/// Types that can be asked for interactively.
///
/// A promptable type has a canonical text representation: it parses from a
/// line of input, displays as the bracketed default in the prompt, and has a
/// zero value to report when a bounded prompt exhausts its attempts. All the
/// usual suspects qualify (integers, floats, `bool`, `String`, chrono's
/// naive dates and times).
///
/// Asking for a type without these capabilities is a compile error, not a
/// runtime failure.
pub trait Promptable: FromStr + Display + Default {}

impl<T> Promptable for T where T: FromStr + Display + Default {}

/// Whether an empty input line is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// An empty line is never accepted; the user must supply a value that
    /// converts (and validates).
    Required,
    /// An empty line immediately yields the request's default value,
    /// skipping conversion, validation, and post-processing.
    Optional,
}

/// One question to put to the user.
///
/// Built with [`PromptRequest::required`] or [`PromptRequest::optional`] and
/// refined with the builder methods. The request lives for a single
/// [`Prompter::prompt`] / [`Prompter::try_prompt`] call.
pub struct PromptRequest<'a, T> {
    message: String,
    mode: PromptMode,
    default_value: T,
    failure_message: Option<String>,
    validator: Option<Box<dyn Fn(&T) -> bool + 'a>>,
    post_process: Option<Box<dyn Fn(T) -> T + 'a>>,
    max_attempts: u32,
}

impl<'a, T: Promptable> PromptRequest<'a, T> {
    /// A question that must be answered; empty input is rejected.
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mode: PromptMode::Required,
            default_value: T::default(),
            failure_message: None,
            validator: None,
            post_process: None,
            max_attempts: 0,
        }
    }

    /// A question with a fallback; an empty line yields `default_value`.
    pub fn optional(message: impl Into<String>, default_value: T) -> Self {
        Self {
            message: message.into(),
            mode: PromptMode::Optional,
            default_value,
            failure_message: None,
            validator: None,
            post_process: None,
            max_attempts: 0,
        }
    }

    /// Message shown on retries instead of the original message.
    pub fn failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = Some(message.into());
        self
    }

    /// Extra check applied to a successfully converted value. Returning
    /// `false` rejects the attempt exactly like a conversion failure.
    pub fn validate(mut self, validator: impl Fn(&T) -> bool + 'a) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Transform applied once to the accepted value, after validation.
    /// Never applied to the default value of an optional prompt.
    pub fn post_process(mut self, post_process: impl Fn(T) -> T + 'a) -> Self {
        self.post_process = Some(Box::new(post_process));
        self
    }

    /// Bound the number of rejected attempts before giving up. Zero (the
    /// default) means unbounded: the loop only ends on acceptance.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The first thing written: `message`, the bracketed default when
    /// optional, and the `": "` separator.
    fn initial_prompt(&self) -> String {
        match self.mode {
            PromptMode::Optional => {
                format!("{} [{}]: ", self.message, self.default_value)
            }
            PromptMode::Required => format!("{}: ", self.message),
        }
    }

    /// The prompt re-displayed after a rejected attempt. The default suffix
    /// is recomputed here rather than cached from the first display.
    fn retry_prompt(&self) -> String {
        let message = self.failure_message.as_deref().unwrap_or(&self.message);
        match self.mode {
            PromptMode::Optional => {
                format!("{} [{}]: ", message, self.default_value)
            }
            PromptMode::Required => format!("{}: ", message),
        }
    }
}

/// Outcome of a bounded prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    /// The user supplied (or defaulted to) an acceptable value.
    Accepted(T),
    /// The attempt budget ran out before any value was accepted.
    Exhausted,
}

impl<T: Default> PromptOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PromptOutcome::Accepted(_))
    }

    /// The accepted value, or the type's zero value on exhaustion.
    pub fn into_value(self) -> T {
        match self {
            PromptOutcome::Accepted(value) => value,
            PromptOutcome::Exhausted => T::default(),
        }
    }
}

/// Runs prompt requests against a console.
///
/// Owns the console for the duration of the session. An optional
/// [`DiagnosticSink`] can be attached at construction; the retry loop never
/// writes to it, it is carried for callers that log around their prompts.
pub struct Prompter<C> {
    console: C,
    diagnostics: Option<Box<dyn DiagnosticSink>>,
}

impl<C: Console> Prompter<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            diagnostics: None,
        }
    }

    pub fn with_diagnostics(console: C, diagnostics: Box<dyn DiagnosticSink>) -> Self {
        Self {
            console,
            diagnostics: Some(diagnostics),
        }
    }

    /// The attached diagnostic sink, if any.
    pub fn diagnostics(&self) -> Option<&dyn DiagnosticSink> {
        self.diagnostics.as_deref()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Give the console back, ending the session.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Ask until an acceptable value is supplied.
    ///
    /// This is [`Prompter::try_prompt`] with the attempt budget forced to
    /// unbounded; any `max_attempts` set on the request is ignored. It only
    /// returns an error if the console itself fails.
    pub fn prompt<T: Promptable>(&mut self, request: PromptRequest<'_, T>) -> Result<T> {
        match self.try_prompt(request.max_attempts(0))? {
            PromptOutcome::Accepted(value) => Ok(value),
            PromptOutcome::Exhausted => {
                unreachable!("an unbounded prompt has no exhaustion outcome")
            }
        }
    }

    /// Ask until an acceptable value is supplied or the attempt budget runs
    /// out.
    ///
    /// Every rejected attempt (conversion failure, validation failure,
    /// empty line under [`PromptMode::Required`], or end of input) counts
    /// against the budget and triggers an `Invalid value [..]` notice
    /// followed by the retry prompt. With `max_attempts == 0` the loop is
    /// unbounded and the `Exhausted` outcome is unreachable.
    pub fn try_prompt<T: Promptable>(
        &mut self,
        request: PromptRequest<'_, T>,
    ) -> Result<PromptOutcome<T>> {
        self.console.write(&request.initial_prompt())?;

        let mut attempts: u32 = 0;

        loop {
            let line = self.console.read_line()?;

            if let Some(raw) = &line {
                if request.mode == PromptMode::Optional && raw.is_empty() {
                    // The default is accepted as-is: no conversion, no
                    // validation, no post-processing.
                    return Ok(PromptOutcome::Accepted(request.default_value));
                }
            }

            let converted = match &line {
                // Only a literally empty line triggers the optional
                // default above; whitespace still goes through conversion.
                // Under Required an empty line is rejected outright so the
                // rule holds even for types whose parse accepts "".
                Some(raw) if !raw.is_empty() => raw.parse::<T>().ok(),
                _ => None,
            };

            let accepted = match converted {
                Some(value) => match &request.validator {
                    Some(validator) => {
                        if validator(&value) {
                            Some(value)
                        } else {
                            None
                        }
                    }
                    None => Some(value),
                },
                None => None,
            };

            if let Some(mut value) = accepted {
                if let Some(post_process) = &request.post_process {
                    value = post_process(value);
                }
                return Ok(PromptOutcome::Accepted(value));
            }

            attempts += 1;
            if request.max_attempts > 0 && attempts >= request.max_attempts {
                return Ok(PromptOutcome::Exhausted);
            }

            let raw = line.as_deref().unwrap_or("");
            self.console
                .write_line(&format!("Invalid value [{}]", raw))?;
            self.console.write(&request.retry_prompt())?;
        }
    }
}
