//! Line input shared by the command loop and the confirmation prompt.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

use quill_common::ConfirmPrompt;

/// Lines read from stdin by a dedicated thread.
#[derive(Clone)]
pub struct LineInput {
    rx: Arc<Mutex<Receiver<String>>>,
}

impl LineInput {
    pub fn new(rx: Receiver<String>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    /// Block until the next line. `None` once stdin is closed.
    pub fn next_line(&self) -> Option<String> {
        self.rx.lock().unwrap_or_else(|e| e.into_inner()).recv().ok()
    }
}

/// Start the stdin reader thread.
pub fn spawn_stdin_reader() -> LineInput {
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("stdin read failed: {e}");
                    break;
                }
            }
        }
    });
    LineInput::new(rx)
}

/// Accepts `y`, `yes`, and Arabic `نعم`; anything else is a no.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "نعم" | "ن"
    )
}

/// [`ConfirmPrompt`] that asks on stdout and reads the answer from the
/// shared line input.
pub struct LinePrompt {
    input: LineInput,
}

impl LinePrompt {
    pub fn new(input: LineInput) -> Self {
        Self { input }
    }
}

impl ConfirmPrompt for LinePrompt {
    fn confirm(&self, question: &str) -> bool {
        print!("{question} [y/N] ");
        let _ = std::io::stdout().flush();
        self.input.next_line().is_some_and(|answer| is_yes(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES \n"));
        assert!(is_yes("نعم"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn prompt_reads_next_line() {
        let (tx, rx) = mpsc::channel();
        let prompt = LinePrompt::new(LineInput::new(rx));
        tx.send("y".to_string()).unwrap();
        tx.send("n".to_string()).unwrap();
        assert!(prompt.confirm("sure?"));
        assert!(!prompt.confirm("sure?"));
    }

    #[test]
    fn closed_input_means_no() {
        let (tx, rx) = mpsc::channel::<String>();
        drop(tx);
        let prompt = LinePrompt::new(LineInput::new(rx));
        assert!(!prompt.confirm("sure?"));
    }
}
