//! Line-oriented front end over a [`SessionController`].
//!
//! Submissions run as spawned tasks so input keeps flowing while a request
//! is in flight; anything submitted meanwhile gets the busy notice.

mod command;
mod prompt;
mod render;

use std::sync::Arc;

use quill_chat::{
    ClipboardOutcome, ExportOutcome, ResetOutcome, SessionController, SubmitOutcome, UiText,
};
use quill_common::UploadFile;
use quill_platform::{matches_accept_hint, read_upload};

use command::{Command, HELP};
pub use prompt::{spawn_stdin_reader, LineInput, LinePrompt};

enum Job {
    /// Submit the compose buffer.
    Draft,
    Upload(UploadFile),
}

/// Read commands until `/quit` or end of input.
pub async fn run(controller: Arc<SessionController>, input: LineInput) {
    let text = controller.settings().text;
    println!("{}", text.empty_transcript);
    println!("{HELP}");

    loop {
        let Some(line) = tokio::task::block_in_place(|| input.next_line()) else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Text(line) => {
                if take_line(&controller, &line) {
                    spawn_job(&controller, Job::Draft);
                } else {
                    println!("{}", text.busy_notice);
                }
            }
            Command::Send => {
                if controller.is_busy() {
                    println!("{}", text.busy_notice);
                    continue;
                }
                spawn_job(&controller, Job::Draft);
            }
            Command::Draft => {
                let draft = controller.composing_text();
                if draft.is_empty() {
                    println!("{}", text.empty_input_notice);
                } else {
                    println!("{draft}");
                }
            }
            Command::Paste => match controller.paste() {
                ClipboardOutcome::Pasted { chars } => println!("+{chars}"),
                other => print_clipboard_failure(&text, other),
            },
            Command::Upload(path) => match read_upload(&path) {
                Ok(file) => {
                    if !matches_accept_hint(&file) {
                        tracing::debug!(file = %file.name, "upload does not match accept hint");
                    }
                    if controller.is_busy() {
                        println!("{}", text.busy_notice);
                        continue;
                    }
                    println!("{}", text.analyzing_file(&file.name));
                    spawn_job(&controller, Job::Upload(file));
                }
                Err(e) => println!("{}", text.failure(&e.to_string())),
            },
            Command::Copy(id) => match controller.copy(id) {
                ClipboardOutcome::Copied(_) => println!("✓ {}", text.copied_label),
                other => print_clipboard_failure(&text, other),
            },
            Command::Export(id) => match controller.export(id) {
                ExportOutcome::Saved(location) => println!("→ {location}"),
                ExportOutcome::UnknownMessage(id) => println!("#{id}?"),
                ExportOutcome::Failed(e) => println!("{}", text.failure(&e)),
            },
            Command::History => println!("{}", render::transcript(&controller.snapshot(), &text)),
            Command::Tokens => {
                println!("{}", render::token_report(&controller.snapshot().tokens, &text))
            }
            Command::New => match tokio::task::block_in_place(|| controller.new_session()) {
                ResetOutcome::Reset => {
                    println!("{}", text.new_session_done);
                    println!("{}", text.empty_transcript);
                }
                ResetOutcome::Cancelled => println!("{}", text.new_session_cancelled),
            },
            Command::Invalid(msg) => println!("{msg}"),
        }
    }
}

/// Add a typed line to the draft. Returns whether it can be sent now; while
/// busy it stays in the draft for a later `/send`.
fn take_line(controller: &SessionController, line: &str) -> bool {
    controller.append_composing(line);
    !controller.is_busy()
}

fn print_clipboard_failure(text: &UiText, outcome: ClipboardOutcome) {
    match outcome {
        ClipboardOutcome::UnknownMessage(id) => println!("#{id}?"),
        ClipboardOutcome::Failed(e) => println!("{}", text.failure(&e)),
        ClipboardOutcome::Copied(_) | ClipboardOutcome::Pasted { .. } => {}
    }
}

fn spawn_job(controller: &Arc<SessionController>, job: Job) {
    let controller = Arc::clone(controller);
    println!("{}", controller.settings().text.working);

    tokio::spawn(async move {
        let outcome = match job {
            Job::Draft => controller.submit().await,
            Job::Upload(file) => controller.submit_file(&file).await,
        };
        report(&controller, outcome);
    });
}

fn report(controller: &SessionController, outcome: SubmitOutcome) {
    let text = controller.settings().text;
    match outcome {
        SubmitOutcome::Completed { reply_id } | SubmitOutcome::Failed { reply_id, .. } => {
            if let Some(msg) = controller.message(reply_id) {
                println!("{}", render::message(&msg, &text, false));
            }
            let snapshot = controller.snapshot();
            println!("{}", render::token_total(&snapshot.tokens, &text));
        }
        SubmitOutcome::Rejected(quill_chat::RejectReason::Busy) => println!("{}", text.busy_notice),
        SubmitOutcome::Rejected(quill_chat::RejectReason::EmptyText) => {
            println!("{}", text.empty_input_notice)
        }
        SubmitOutcome::Rejected(quill_chat::RejectReason::NoFile) | SubmitOutcome::Discarded => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use quill_chat::{EditReply, EditingService, ServiceError};
    use quill_platform::{FileExporter, MemoryClipboard};
    use tokio::sync::Notify;

    use super::*;

    /// Answers every request with "ok" once `release` is notified.
    struct HeldService {
        entered: Arc<Notify>,
        release: Arc<Notify>,
        texts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EditingService for HeldService {
        async fn submit_text(&self, text: &str) -> Result<EditReply, ServiceError> {
            self.texts.lock().unwrap().push(text.to_string());
            self.entered.notify_one();
            self.release.notified().await;
            Ok(EditReply::new("ok"))
        }

        async fn submit_file(&self, _file: &UploadFile) -> Result<EditReply, ServiceError> {
            Ok(EditReply::new("ok"))
        }
    }

    struct Yes;

    impl quill_common::ConfirmPrompt for Yes {
        fn confirm(&self, _question: &str) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn line_typed_while_busy_stays_in_draft() {
        let dir = tempfile::tempdir().unwrap();
        let service = Arc::new(HeldService {
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
            texts: Mutex::new(Vec::new()),
        });
        let controller = Arc::new(SessionController::new(
            service.clone(),
            Arc::new(MemoryClipboard::new()),
            Arc::new(FileExporter::new(dir.path())),
            Arc::new(Yes),
        ));

        assert!(take_line(&controller, "first"));
        let running = controller.clone();
        let task = tokio::spawn(async move { running.submit().await });
        service.entered.notified().await;

        assert!(!take_line(&controller, "second"));
        assert_eq!(controller.composing_text(), "second");

        service.release.notify_one();
        task.await.unwrap();

        service.release.notify_one();
        controller.submit().await;
        assert_eq!(*service.texts.lock().unwrap(), vec!["first", "second"]);
        assert!(controller.composing_text().is_empty());
    }
}
