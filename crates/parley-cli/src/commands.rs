//! Command implementations.
//!
//! The `ask` flow is generic over the console so tests can drive it with a
//! scripted transcript instead of a terminal.

use anyhow::{anyhow, Context};
use chrono::NaiveDate;

use parley_core::console::Console;
use parley_core::prompt::{PromptOutcome, PromptRequest, Promptable, Prompter};

use crate::cli::{AskArgs, ValueKind};

/// Run the `ask` command against the given console and return the accepted
/// answer, rendered for stdout.
pub fn ask<C: Console>(console: C, args: &AskArgs) -> anyhow::Result<String> {
    let mut prompter = Prompter::new(console);
    match args.kind {
        ValueKind::Int => ask_typed::<i64, C>(&mut prompter, args),
        ValueKind::Float => ask_typed::<f64, C>(&mut prompter, args),
        ValueKind::Bool => ask_typed::<bool, C>(&mut prompter, args),
        ValueKind::Date => ask_typed::<NaiveDate, C>(&mut prompter, args),
        ValueKind::Text => ask_text(&mut prompter, args),
    }
}

fn ask_typed<T, C>(prompter: &mut Prompter<C>, args: &AskArgs) -> anyhow::Result<String>
where
    T: Promptable + PartialOrd,
    C: Console,
{
    if args.trim {
        return Err(anyhow!("--trim only applies to text answers"));
    }

    let min = parse_flag::<T>(args.min.as_deref(), "--min")?;
    let max = parse_flag::<T>(args.max.as_deref(), "--max")?;

    let mut request = match parse_flag::<T>(args.default.as_deref(), "--default")? {
        Some(default) => PromptRequest::optional(&args.message, default),
        None => PromptRequest::required(&args.message),
    };

    if let Some(failure_message) = &args.failure_message {
        request = request.failure_message(failure_message);
    }

    if min.is_some() || max.is_some() {
        request = request.validate(move |value: &T| {
            min.as_ref().is_none_or(|m| value >= m) && max.as_ref().is_none_or(|m| value <= m)
        });
    }

    finish(prompter, request.max_attempts(args.max_attempts), args)
}

fn ask_text<C: Console>(prompter: &mut Prompter<C>, args: &AskArgs) -> anyhow::Result<String> {
    if args.min.is_some() || args.max.is_some() {
        return Err(anyhow!("--min/--max are not valid for text answers"));
    }

    let mut request = match &args.default {
        Some(default) => PromptRequest::optional(&args.message, default.clone()),
        None => PromptRequest::required(&args.message),
    };

    if let Some(failure_message) = &args.failure_message {
        request = request.failure_message(failure_message);
    }

    if args.trim {
        request = request.post_process(|value: String| value.trim().to_string());
    }

    finish(prompter, request.max_attempts(args.max_attempts), args)
}

fn finish<T, C>(
    prompter: &mut Prompter<C>,
    request: PromptRequest<'_, T>,
    args: &AskArgs,
) -> anyhow::Result<String>
where
    T: Promptable,
    C: Console,
{
    match prompter.try_prompt(request)? {
        PromptOutcome::Accepted(value) => Ok(value.to_string()),
        PromptOutcome::Exhausted => Err(anyhow!(
            "No acceptable value after {} attempts",
            args.max_attempts
        )),
    }
}

fn parse_flag<T: Promptable>(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<T>> {
    raw.map(|value| {
        value
            .parse::<T>()
            .ok()
            .with_context(|| format!("Invalid value for {}: {}", flag, value))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use parley_core::console::ScriptedConsole;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: AskArgs,
    }

    fn args(flags: &[&str]) -> AskArgs {
        let argv: Vec<&str> = std::iter::once("harness").chain(flags.iter().copied()).collect();
        Harness::try_parse_from(argv).expect("valid flags").args
    }

    #[test]
    fn test_ask_int_with_retries() {
        let console = ScriptedConsole::new(["abc", "12.5", "7"]);
        let answer = ask(console, &args(&["-t", "int", "--max-attempts", "3"])).unwrap();
        assert_eq!(answer, "7");
    }

    #[test]
    fn test_ask_int_exhausts_budget() {
        let console = ScriptedConsole::new(["x", "y"]);
        let err = ask(console, &args(&["-t", "int", "--max-attempts", "2"])).unwrap_err();
        assert!(err.to_string().contains("after 2 attempts"));
    }

    #[test]
    fn test_ask_with_default_accepts_empty_line() {
        let console = ScriptedConsole::new([""]);
        let answer = ask(console, &args(&["-t", "int", "--default", "42"])).unwrap();
        assert_eq!(answer, "42");
    }

    #[test]
    fn test_ask_applies_numeric_bounds() {
        let console = ScriptedConsole::new(["80", "8080"]);
        let answer = ask(
            console,
            &args(&["-t", "int", "--min", "1024", "--max", "65535"]),
        )
        .unwrap();
        assert_eq!(answer, "8080");
    }

    #[test]
    fn test_ask_text_trims_answer() {
        let console = ScriptedConsole::new(["  hello world  "]);
        let answer = ask(console, &args(&["--trim"])).unwrap();
        assert_eq!(answer, "hello world");
    }

    #[test]
    fn test_ask_date() {
        let console = ScriptedConsole::new(["not-a-date", "2026-08-26"]);
        let answer = ask(console, &args(&["-t", "date"])).unwrap();
        assert_eq!(answer, "2026-08-26");
    }

    #[test]
    fn test_invalid_default_is_reported() {
        let console = ScriptedConsole::new(["1"]);
        let err = ask(console, &args(&["-t", "int", "--default", "nope"])).unwrap_err();
        assert!(err.to_string().contains("--default"));
    }

    #[test]
    fn test_bounds_rejected_for_text() {
        let console = ScriptedConsole::new(["anything"]);
        let err = ask(console, &args(&["--min", "a"])).unwrap_err();
        assert!(err.to_string().contains("not valid for text"));
    }

    #[test]
    fn test_trim_rejected_for_int() {
        let console = ScriptedConsole::new(["1"]);
        let err = ask(console, &args(&["-t", "int", "--trim"])).unwrap_err();
        assert!(err.to_string().contains("--trim"));
    }
}
