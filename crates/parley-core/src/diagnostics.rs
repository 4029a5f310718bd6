//! Diagnostic message sink.
//!
//! A [`Prompter`](crate::prompt::Prompter) can be constructed with a sink
//! for non-fatal diagnostic messages. The retry loop itself never writes to
//! it; the sink exists so callers can route their own messages alongside
//! the prompt flow without reaching for a global logger.

/// Receives free-form diagnostic messages.
pub trait DiagnosticSink {
    fn message(&self, text: &str);
}

/// A sink that writes each message as one line to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for StderrSink {
    fn message(&self, text: &str) {
        eprintln!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        messages: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn message(&self, text: &str) {
            self.messages.borrow_mut().push(text.to_string());
        }
    }

    #[test]
    fn test_sink_receives_messages() {
        let sink = RecordingSink {
            messages: RefCell::new(Vec::new()),
        };
        sink.message("attempt rejected");
        assert_eq!(sink.messages.borrow().as_slice(), ["attempt rejected"]);
    }
}
