//! The line loop: one narration per input line until end of input.

use std::io::{BufRead, Write};

use colored::Colorize;

use quest_engine::{Game, GameConfig, PROMPT};

/// Play a session reading commands from `input` and writing to `output`.
///
/// Every line, blank ones included, gets exactly one narration followed by
/// the prompt. Returns when `input` is exhausted.
pub fn run(config: GameConfig, input: impl BufRead, mut output: impl Write) -> Result<(), String> {
    let mut game = Game::with_config(config);

    writeln!(output, "{}", game.welcome().bold()).map_err(|e| e.to_string())?;

    for line in input.lines() {
        let line = line.map_err(|e| format!("failed to read input: {e}"))?;
        let narration = game.handle_command(&line);
        writeln!(output, "{narration}").map_err(|e| e.to_string())?;
        write!(output, "{}", PROMPT.cyan()).map_err(|e| e.to_string())?;
        output.flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}
