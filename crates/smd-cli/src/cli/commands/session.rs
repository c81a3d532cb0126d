//! `smd session` – interactive page loop: fetch, watermark edits, undo/redo.

use std::time::Duration;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use smd_core::config::SmdConfig;
use smd_core::lookup::LookupClient;
use smd_core::session::{Session, FEEDBACK_ACK};

/// One line of session input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum SessionInput {
    Fetch { url: String },
    Watermark { text: String },
    Undo,
    Redo,
    Show,
    Download { index: usize },
    Feedback { text: String },
    Help,
    Quit,
    Empty,
    Invalid { usage: &'static str },
    Unknown(String),
}

fn parse_input(line: &str) -> SessionInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return SessionInput::Empty;
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };
    match word {
        "fetch" if rest.is_empty() => SessionInput::Invalid {
            usage: "usage: fetch <url>",
        },
        "fetch" => SessionInput::Fetch {
            url: rest.to_string(),
        },
        // Omitted text clears the watermark; `set` takes any string,
        // the empty one included.
        "watermark" => SessionInput::Watermark {
            text: rest.to_string(),
        },
        "undo" => SessionInput::Undo,
        "redo" => SessionInput::Redo,
        "show" => SessionInput::Show,
        "download" => match rest.parse::<usize>() {
            Ok(index) => SessionInput::Download { index },
            Err(_) => SessionInput::Invalid {
                usage: "usage: download <n>",
            },
        },
        "feedback" if rest.is_empty() => SessionInput::Invalid {
            usage: "usage: feedback <text>",
        },
        "feedback" => SessionInput::Feedback {
            text: rest.to_string(),
        },
        "help" => SessionInput::Help,
        "quit" | "exit" => SessionInput::Quit,
        _ => SessionInput::Unknown(trimmed.to_string()),
    }
}

fn print_help() {
    println!("fetch <url>       fetch metadata for a link");
    println!("watermark [text]  set the watermark text (omit to clear)");
    println!("undo              undo the last watermark edit");
    println!("redo              redo an undone watermark edit");
    println!("show              show the current result card");
    println!("download <n>      pretend to download option n");
    println!("feedback <text>   leave feedback");
    println!("help              show this help");
    println!("quit              leave the session");
}

pub async fn run_session(cfg: &SmdConfig, delay_ms: Option<u64>) -> Result<()> {
    let client = match delay_ms {
        Some(ms) => LookupClient::new(Duration::from_millis(ms)),
        None => LookupClient::from_config(cfg),
    };
    let mut session = Session::new(cfg);
    let mut rl = DefaultEditor::new()?;

    println!("smd session (type 'help' for commands, 'quit' to leave)");
    loop {
        match rl.readline("smd> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match parse_input(&line) {
                    SessionInput::Empty => continue,
                    SessionInput::Quit => break,
                    SessionInput::Help => print_help(),
                    SessionInput::Fetch { url } => {
                        if let Err(e) = session.submit(&client, &url).await {
                            println!("{}", e);
                        } else {
                            super::fetch::print_card(&session);
                        }
                    }
                    SessionInput::Watermark { text } => {
                        session.set_watermark(&text);
                        println!("watermark: '{}'", session.watermark());
                    }
                    SessionInput::Undo => {
                        if session.undo_watermark() {
                            println!("watermark: '{}'", session.watermark());
                        } else {
                            println!("nothing to undo");
                        }
                    }
                    SessionInput::Redo => {
                        if session.redo_watermark() {
                            println!("watermark: '{}'", session.watermark());
                        } else {
                            println!("nothing to redo");
                        }
                    }
                    SessionInput::Show => {
                        if session.media().is_some() {
                            super::fetch::print_card(&session);
                        } else if let Some(err) = session.error() {
                            println!("{}", err);
                        } else {
                            println!("nothing fetched yet");
                        }
                    }
                    SessionInput::Download { index } => match session.download_options() {
                        None => println!("nothing fetched yet"),
                        Some(options) if index >= 1 && index <= options.len() => {
                            let opt = options[index - 1];
                            tracing::debug!(
                                "download option picked: {} {}",
                                opt.format,
                                opt.container
                            );
                            println!("{}", session.download_message());
                        }
                        Some(options) => {
                            println!("pick an option between 1 and {}", options.len())
                        }
                    },
                    SessionInput::Feedback { text } => {
                        session.submit_feedback(&text);
                        println!("{}", FEEDBACK_ACK);
                    }
                    SessionInput::Invalid { usage } => println!("{}", usage),
                    SessionInput::Unknown(input) => {
                        println!("unrecognized input: '{}' (try 'help')", input)
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
