use anyhow::{Context, Result};
use autocomplete_core::{AutocompleteConfig, AutocompleteSession};
use crossterm::cursor::MoveTo;
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use std::io::{stdout, Stdout, Write};

const SEED_SENTENCES: [&str; 4] = ["i love you", "island", "iroman", "i love leetcode"];
const SEED_WEIGHTS: [u64; 4] = [5, 3, 2, 2];

fn main() -> Result<()> {
    env_logger::init();
    let config = AutocompleteConfig::from_env().context("failed to load autocomplete config")?;
    let mut session = AutocompleteSession::with_config(config, &SEED_SENTENCES, &SEED_WEIGHTS)
        .context("failed to seed the dictionary")?;

    let mut out = stdout();
    enable_raw_mode().context("terminal does not support raw mode")?;
    let outcome = run(&mut session, &mut out);
    disable_raw_mode()?;
    println!();
    outcome
}

fn run(session: &mut AutocompleteSession, out: &mut Stdout) -> Result<()> {
    let mut suggestions: Vec<String> = Vec::new();
    let mut status = String::new();

    loop {
        print_ui(out, session, &suggestions, &status)?;

        let Event::Key(KeyEvent { code, kind, .. }) = read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        let key = match code {
            KeyCode::Esc => break,
            // The core has no delete, so backspace abandons the sentence.
            KeyCode::Backspace => {
                session.reset();
                suggestions.clear();
                status = "buffer discarded".to_string();
                continue;
            }
            KeyCode::Enter => session.config().terminator,
            KeyCode::Char(c) => c,
            _ => continue,
        };

        let committing = key == session.config().terminator;
        let pending = session.buffer().to_string();
        match session.input(key) {
            Ok(result) => {
                suggestions = result;
                status = if committing && !pending.is_empty() {
                    format!("learned '{}'", pending)
                } else {
                    String::new()
                };
            }
            Err(e) => status = format!("[{}] {}", e.code(), e),
        }
    }
    Ok(())
}

fn print_ui(
    out: &mut Stdout,
    session: &AutocompleteSession,
    suggestions: &[String],
    status: &str,
) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    // Raw mode needs explicit carriage returns.
    write!(out, "Sentence Autocomplete\r\n")?;
    write!(out, "---------------------------------------------------------------\r\n")?;
    write!(
        out,
        "Type a-z or space. '{}' or [Enter] completes the sentence, [Backspace] discards it, [Esc] quits.\r\n\r\n",
        session.config().terminator
    )?;
    write!(out, "Input: [{}]\r\n\r\n", session.buffer())?;

    if suggestions.is_empty() {
        write!(out, "No suggestions.\r\n")?;
    } else {
        for (i, sentence) in suggestions.iter().enumerate() {
            let weight = session.index().weight_of(sentence).unwrap_or(0);
            write!(out, "  {}: {} (weight: {})\r\n", i + 1, sentence, weight)?;
        }
    }
    if !status.is_empty() {
        write!(out, "\r\n{}\r\n", status)?;
    }
    out.flush()?;
    Ok(())
}
