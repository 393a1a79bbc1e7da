use anyhow::{Context, Result};
use console::style;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Yes/no gate asked before each VM creation command.
pub trait Confirmer {
    fn confirm(&mut self) -> Result<bool>;
}

/// Reads the answer from a line-oriented input. Only `y` (any case,
/// surrounding whitespace ignored) accepts; end of input declines.
pub struct LineConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirmer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn confirm(&mut self) -> Result<bool> {
        write!(
            self.output,
            "{} ",
            style("Do you want to proceed with this command? (Y/N):").bold()
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

/// Accepts every command without asking.
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&mut self) -> Result<bool> {
        Ok(true)
    }
}
