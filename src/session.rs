use crate::{
    ast::Program,
    error::{Error, ScriptError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::tokenize,
        parser::core::parse,
        token::Token,
    },
};

/// The command that ends an interactive session.
pub const EXIT_COMMAND: &str = "exit";

/// A run of input lines sharing one set of variables.
///
/// Every line goes through the whole lex, parse and evaluate pipeline on its
/// own. The evaluator, and with it the environment, lives as long as the
/// session does.
///
/// # Example
/// ```
/// use setlang::session::Session;
///
/// let mut session = Session::new();
/// session.eval_line("set hello = 1").unwrap();
/// session.eval_line("hello = 321").unwrap();
/// assert_eq!(session.eval_line("hello").unwrap(), "321");
/// ```
#[derive(Debug, Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    /// Starts a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The evaluator backing this session.
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Lexes one line, terminated by an extra end-of-line token.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] if the line cannot be tokenized.
    pub fn tokenize_line(line: &str) -> Result<Vec<Token>, Error> {
        let mut tokens = tokenize(line)?;
        tokens.push(Token::eol());
        Ok(tokens)
    }

    /// Lexes and parses one line without evaluating it.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] or [`Error::Parse`].
    pub fn parse_line(line: &str) -> Result<Program, Error> {
        let tokens = Self::tokenize_line(line)?;
        Ok(parse(&tokens)?)
    }

    /// Evaluates one line and renders its value.
    ///
    /// # Errors
    /// Returns the first lexing, parsing or runtime error of the line.
    pub fn eval_line(&mut self, line: &str) -> Result<String, Error> {
        let program = Self::parse_line(line)?;
        self.eval_program(&program)
    }

    /// Evaluates an already parsed program in this session.
    ///
    /// # Errors
    /// Returns [`Error::Runtime`] if evaluation fails.
    pub fn eval_program(&mut self, program: &Program) -> Result<String, Error> {
        Ok(self.evaluator.evaluate_program(program)?)
    }

    /// Evaluates every non-blank line of `source` in order.
    ///
    /// Returns the value of the last evaluated line, or `None` when `source`
    /// holds no code at all. Evaluation stops at the first failing line.
    ///
    /// # Errors
    /// Returns a [`ScriptError`] carrying the 1-based number of the line
    /// that failed.
    ///
    /// # Example
    /// ```
    /// use setlang::session::Session;
    ///
    /// let mut session = Session::new();
    /// let result = session.eval_source("set x = 2\n\nx * 21").unwrap();
    /// assert_eq!(result.as_deref(), Some("42"));
    ///
    /// let error = session.eval_source("x\nset x = 3").unwrap_err();
    /// assert_eq!(error.line, 2);
    /// ```
    pub fn eval_source(&mut self, source: &str) -> Result<Option<String>, ScriptError> {
        let mut last = None;
        for (index, line) in source.lines().enumerate() {
            if is_blank(line) {
                continue;
            }
            let value = self.eval_line(line)
                            .map_err(|error| ScriptError { line: index + 1, error })?;
            last = Some(value);
        }
        Ok(last)
    }
}

/// Returns `true` for lines that contain nothing to evaluate.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

