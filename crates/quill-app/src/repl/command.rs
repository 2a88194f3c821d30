//! Parsing of input lines into commands.

use quill_common::MessageId;

pub const HELP: &str = "\
Commands:
  <text>          append to the draft and send it
  /paste          append the clipboard to the draft
  /draft          show the draft
  /send           send the draft
  /upload <path>  upload a document for editing
  /copy <n>       copy message #n to the clipboard
  /export <n>     save message #n as a text file
  /history        show the conversation
  /tokens         show token usage
  /new            start a new session
  /help           show this help
  /quit           exit
Start a line with // to send text that begins with /.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text(String),
    Paste,
    Draft,
    Send,
    Upload(String),
    Copy(MessageId),
    Export(MessageId),
    History,
    Tokens,
    New,
    Help,
    Quit,
    /// Unusable input; carries the message to show.
    Invalid(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        if let Some(escaped) = line.strip_prefix("//") {
            return Some(Command::Text(format!("/{escaped}")));
        }
        let Some(rest) = line.trim_start().strip_prefix('/') else {
            return Some(Command::Text(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "paste" => Command::Paste,
            "draft" => Command::Draft,
            "send" => Command::Send,
            "upload" if arg.is_empty() => Command::Invalid("usage: /upload <path>".into()),
            "upload" => Command::Upload(arg.to_string()),
            "copy" => message_arg(arg, "copy", Command::Copy),
            "export" => message_arg(arg, "export", Command::Export),
            "history" => Command::History,
            "tokens" => Command::Tokens,
            "new" => Command::New,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Invalid(format!("unknown command /{other}; try /help")),
        };
        Some(command)
    }
}

fn message_arg(arg: &str, name: &str, make: fn(MessageId) -> Command) -> Command {
    match arg.trim_start_matches('#').parse::<u64>() {
        Ok(n) => make(MessageId::from(n)),
        Err(_) => Command::Invalid(format!("usage: /{name} <message number>")),
    }
}
