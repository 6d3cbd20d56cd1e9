#![allow(clippy::needless_return)]

//! loxrs is a tree-walking interpreter for the Lox language. It is a
//! dynamically typed language with lexical scoping, first-class functions
//! and single-inheritance classes.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of converting a string of
//! characters into a list of tokens. A token is a single unit of a programming language. For
//! example, the string `1 + 2` would be converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as an iterator over the characters
//! in the source code. It is a simple state machine that returns the next token in the source code
//! when called.
//!
//! The scanner reports syntax errors in the source code as a [`ScanError`](error::ScanError).
//! These errors are trivial problems like an unterminated string literal or an unexpected character.
//! Scanning does not stop at the first error; it keeps going so a single run can surface more than
//! one problem.
//!
//! ## Parsing
//! The second step in the interpreter is parsing. Parsing is the process of converting a list of
//! tokens into an abstract syntax tree (AST). The parser is implemented in the [`parser`](parser)
//! module as a recursive descent parser. The parser transforms the list of tokens into expressions
//! and statements. [`Expressions`](expr::Expr) are pieces of code that produce a value, specifically
//! an [`Object`](object::Object). [`Statements`](stmt::Stmt) are pieces of code that perform some
//! action but do not themselves produce a value.
//!
//! The parser reports syntax errors in the source code as a [`ParseError`](error::ParseError).
//! Much like the scanner, the parser will continue parsing the source code even after it has
//! encountered a syntax error, using a technique called synchronization: this lets a single run
//! surface more than one mistake.
//!
//! ## Resolving
//! The third step in the interpreter is resolving. Resolving is the process of statically analyzing
//! the AST to determine the scope of each variable. The resolver is implemented in the
//! [`resolver`](resolver) module as a tree-walk over the AST. It runs after the parser because it
//! requires the AST to be fully constructed, and before the interpreter because the interpreter
//! relies on its output to resolve variables in constant time rather than walking the environment
//! chain on every lookup. The resolver reports errors as a [`ResolveError`](error::ResolveError).
//! These errors are syntactically valid but semantically invalid, such as referring to `this` outside
//! of a class, or a variable reading itself in its own initializer.
//!
//! ## Interpreting
//! The final step is interpreting: walking the resolved AST and evaluating it. The interpreter is
//! implemented in the [`interpreter`](interpreter) module. It reports errors as a
//! [`RuntimeError`](error::RuntimeError). While the scanner, parser and resolver try to catch as many
//! errors as possible before running the code, most errors -- like calling a number, or adding a
//! string to a number -- can only be caught at runtime. The interpreter also manages the environment,
//! a mapping of variable names to their values implemented in the [`environment`](environment) module
//! as a chain of scopes, giving the language its lexical scoping.

use std::fs;
use std::io::Write;
use std::process;

pub mod error;
pub mod token;
pub mod scanner;
pub mod expr;
pub mod stmt;
pub mod environment;
pub mod parser;
pub mod ast;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod function;
pub mod resolver;
pub mod class;

use error::{Diagnostic, Diagnostics};
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Drives the scan/parse/resolve/interpret pipeline for a single source
/// file or an interactive session. The diagnostics sink lives here rather
/// than as process-global state, so a REPL line that fails to compile
/// doesn't poison the ones that follow it.
pub struct Loxrs<'a> {
    interpreter: Interpreter<'a>,
    diagnostics: Diagnostics,
    err: &'a mut dyn Write,
}

impl<'a> Loxrs<'a> {
    /// Creates a new interpreter session. `out` is where `print` statements
    /// and native side effects write; `err` is where diagnostics are
    /// reported, kept separate so tests can capture each independently.
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Loxrs {
            interpreter: Interpreter::new(out),
            diagnostics: Diagnostics::new(),
            err,
        }
    }

    pub fn run_file(&mut self, path: &str) {
        let contents = fs::read_to_string(path)
            .unwrap_or_else(|err| {
                eprintln!("Could not read file '{path}': {err}");
                process::exit(74);
            });

        self.run(&contents);

        if self.diagnostics.had_runtime_error() {
            process::exit(70);
        }
        if self.diagnostics.had_error() {
            process::exit(65);
        }
    }

    /// Runs a source string through the full pipeline without touching the
    /// filesystem or exiting the process. Used by the REPL and by tests.
    pub fn run_source(&mut self, source: &str) {
        self.run(source);
    }

    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.diagnostics.had_runtime_error()
    }

    pub fn run_prompt(&mut self) {
        let mut editor = rustyline::DefaultEditor::new()
            .expect("terminal to support line editing");

        let history_path = home::home_dir().map(|dir| dir.join(".loxrs_history"));
        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("lox>> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                    self.diagnostics.reset();
                },
                Err(rustyline::error::ReadlineError::Interrupted) => break,
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error reading input: {err}");
                    break;
                },
            }
        }

        if let Some(path) = &history_path {
            let _ = editor.save_history(path);
        }
    }

    fn run(&mut self, source: &str) {
        let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
        for error in &scan_errors {
            error.report(&mut self.diagnostics, self.err);
        }
        if self.diagnostics.had_error() {
            return;
        }

        let (statements, parse_errors) = Parser::new(tokens).parse();
        for error in &parse_errors {
            error.report(&mut self.diagnostics, self.err);
        }
        if self.diagnostics.had_error() {
            return;
        }

        let (locals, resolve_errors) = Resolver::new().resolve(&statements);
        for error in &resolve_errors {
            error.report(&mut self.diagnostics, self.err);
        }
        if self.diagnostics.had_error() {
            return;
        }

        for (id, depth) in locals {
            self.interpreter.resolve(id, depth);
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            error.report(&mut self.diagnostics, self.err);
        }
    }
}
