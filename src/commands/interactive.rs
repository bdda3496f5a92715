use crate::config::PromptConfig;
use crate::duration::{compute_duration, render};
use crate::timestamp::FORMAT_HINT;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

const START_PROMPT: &str = "Enter the START date and time: ";
const END_PROMPT: &str = "Enter the END date and time: ";
const AGAIN_PROMPT: &str = "\nDo you want to calculate another duration? (yes/no): ";

/// Run the prompt loop on the process's stdin and stdout.
pub fn run(prompt: &PromptConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&mut stdin.lock(), &mut stdout.lock(), prompt)
}

/// Prompt for pairs of timestamps until the user declines or input ends.
pub fn session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &PromptConfig,
) -> Result<()> {
    if prompt.banner {
        writeln!(out, "Welcome to the Date Duration Calculator!")?;
        writeln!(
            out,
            "Please enter dates in the format: {} (e.g., 5/22/25, 9:54:05 AM)",
            FORMAT_HINT
        )?;
    }

    let mut rounds = 0u32;
    loop {
        let Some(start) = ask(input, out, START_PROMPT)? else {
            break;
        };
        let Some(end) = ask(input, out, END_PROMPT)? else {
            break;
        };

        writeln!(out, "{}", render(&compute_duration(&start, &end)))?;
        rounds += 1;

        let Some(answer) = ask(input, out, AGAIN_PROMPT)? else {
            break;
        };
        if !wants_another(&answer) {
            break;
        }
    }

    tracing::debug!(rounds, "interactive session finished");
    writeln!(out, "Thank you for using the calculator!")?;
    out.flush()?;
    Ok(())
}

/// Only an exact, case-insensitive "yes" continues the loop.
pub fn wants_another(answer: &str) -> bool {
    answer.to_lowercase() == "yes"
}

/// Print `prompt` and read one line without its terminator. `None` on end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        writeln!(out)?;
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
