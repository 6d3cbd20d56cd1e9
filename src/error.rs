use std::io::Write;

use crate::object::Object;
use crate::token::{Token, Type};

/// Collects compile-time and runtime error flags across a single run.
/// Owned by the driver and passed by mutable reference into the scanner,
/// parser, resolver, and evaluator, rather than kept as process-global
/// mutable state -- this is what makes each stage testable in isolation.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error || self.had_runtime_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears both flags. Used between REPL lines so one bad line doesn't
    /// poison the rest of the session.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

/// Every error type must implement this trait.
pub trait Diagnostic {
    /// Formats the error to the given writer and records it in the sink.
    fn report(&self, sink: &mut Diagnostics, out: &mut dyn Write);
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Diagnostic for ScanError {
    fn report(&self, sink: &mut Diagnostics, out: &mut dyn Write) {
        let _ = writeln!(out, "[line {}] Error: {}", self.line, self.message);
        sink.had_error = true;
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Diagnostic for ParseError {
    fn report(&self, sink: &mut Diagnostics, out: &mut dyn Write) {
        report_token_error(&self.token, &self.message, out);
        sink.had_error = true;
    }
}

/// Represents an error that occurs during resolution.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Diagnostic for ResolveError {
    fn report(&self, sink: &mut Diagnostics, out: &mut dyn Write) {
        report_token_error(&self.token, &self.message, out);
        sink.had_error = true;
    }
}

/// Represents an error that occurs during runtime.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Diagnostic for RuntimeError {
    fn report(&self, sink: &mut Diagnostics, out: &mut dyn Write) {
        let _ = writeln!(out, "{}\n[line {}]", self.message, self.token.line);
        sink.had_runtime_error = true;
    }
}

fn report_token_error(token: &Token, message: &str, out: &mut dyn Write) {
    if token.r#type == Type::EOF {
        let _ = writeln!(out, "[line {}] Error at end: {}", token.line, message);
    } else {
        let _ = writeln!(out, "[line {}] Error at '{}': {}", token.line, token.lexeme, message);
    }
}

/// The outcome of evaluating an expression or executing a statement.
///
/// `return` is modeled as a distinct, non-error signal threaded through the
/// same `Result` machinery as runtime errors (design note: sum-typed
/// evaluator result rather than host-level exceptions). A function call
/// absorbs `Return`; a `RuntimeError` propagates untouched to the top of
/// `interpret`.
#[derive(Debug, Clone)]
pub enum Unwind {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
