//! Deciding whether to apply an update
//!
//! The yes/no question is asked through the [`Confirm`] capability so the
//! policy can run against scripted input as well as a terminal.

use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

/// Something that can answer a yes/no question.
pub trait Confirm {
    /// Ask `question`. Returns true only on an explicit yes.
    fn confirm(&mut self, question: &str) -> bool;
}

impl<C: Confirm + ?Sized> Confirm for &mut C {
    fn confirm(&mut self, question: &str) -> bool {
        (**self).confirm(question)
    }
}

impl<C: Confirm + ?Sized> Confirm for Box<C> {
    fn confirm(&mut self, question: &str) -> bool {
        (**self).confirm(question)
    }
}

/// Resolve the apply decision: forced by `auto_apply`, otherwise asked.
pub fn should_apply<C: Confirm + ?Sized>(confirm: &mut C, question: &str, auto_apply: bool) -> bool {
    if auto_apply {
        tracing::debug!("auto-apply enabled, skipping prompt");
        return true;
    }
    confirm.confirm(question)
}

/// True when `answer` is `y` or `Y`, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Line-oriented prompt: writes `<question> (y/n): ` and reads one line.
///
/// End of input and read errors count as "no".
#[derive(Debug)]
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl LineConfirm<StdinLock<'static>, Stdout> {
    /// Prompt on the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if let Err(e) = write!(self.output, "{} (y/n): ", question).and_then(|()| self.output.flush()) {
            tracing::warn!(error = %e, "could not write prompt, treating as declined");
            return false;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                tracing::debug!("no input for prompt, treating as declined");
                false
            }
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                tracing::warn!(error = %e, "could not read prompt answer, treating as declined");
                false
            }
        }
    }
}

/// Answers every question with "no". Used for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decline;

impl Confirm for Decline {
    fn confirm(&mut self, _question: &str) -> bool {
        false
    }
}
