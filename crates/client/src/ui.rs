//! User-facing side effects of the client flows.

use std::io::{self, BufRead, Write};

/// Where the controller sends acknowledgments, confirmations and output.
pub trait Ui {
    /// Blocking acknowledgment the user has to see.
    fn alert(&mut self, message: &str);

    /// Yes/no question. Returns `true` only on an explicit yes.
    fn confirm(&mut self, message: &str) -> bool;

    /// Display rendered content such as the product table.
    fn show(&mut self, content: &str);
}

/// [`Ui`] over stdin/stdout.
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
}

impl TerminalUi<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line, without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            tracing::warn!(error = %err, "Failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> Ui for TerminalUi<R, W> {
    fn alert(&mut self, message: &str) {
        self.write_line(&format!("» {message}"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.prompt(&format!("{message} (s/n) ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí"),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read confirmation");
                false
            }
        }
    }

    fn show(&mut self, content: &str) {
        if let Err(err) = write!(self.output, "{content}") {
            tracing::warn!(error = %err, "Failed to write to terminal");
        }
    }
}
