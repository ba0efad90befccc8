// Line-driven harness: every character of every stdin line is one keystroke,
// and every keystroke's result is written to stdout as one JSON line.
use anyhow::{Context, Result};
use autocomplete_core::{AutocompleteConfig, AutocompleteSession};
use log::info;
use serde_json::json;
use std::io::{self, BufRead, Write};

const SEED_SENTENCES: [&str; 4] = ["i love you", "island", "iroman", "i love leetcode"];
const SEED_WEIGHTS: [u64; 4] = [5, 3, 2, 2];

fn main() -> Result<()> {
    env_logger::init();
    let config = AutocompleteConfig::from_env().context("failed to load autocomplete config")?;
    let mut session = AutocompleteSession::with_config(config, &SEED_SENTENCES, &SEED_WEIGHTS)
        .context("failed to seed the dictionary")?;
    info!("seeded {} sentences", session.index().len());

    let keystrokes = run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    info!("processed {} keystrokes", keystrokes);
    Ok(())
}

/// Feeds `input` to the session one character at a time and returns the keystroke count.
/// A rejected keystroke is reported as an error object and does not stop the run.
fn run<R: BufRead, W: Write>(
    session: &mut AutocompleteSession,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut keystrokes = 0usize;
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        for c in line.chars() {
            keystrokes += 1;
            let reply = match session.input(c) {
                Ok(suggestions) => json!(suggestions),
                Err(e) => json!({ "error": e.code(), "message": e.to_string() }),
            };
            writeln!(output, "{}", reply)?;
        }
        output.flush()?;
    }
    Ok(keystrokes)
}
