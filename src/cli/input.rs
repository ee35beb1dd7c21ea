//! Validated console input
//!
//! `Console` wraps any line reader and writer so the prompt loop can be
//! driven by a real terminal or by a byte buffer in tests. Prompts that
//! need validation keep asking until the input is acceptable or input ends.

use std::io::{BufRead, Write};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, MAX_AMOUNT};

/// Parse a non-negative amount no larger than [`MAX_AMOUNT`]
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    let input = input.trim();
    let amount = Money::parse(input).map_err(|_| TrackerError::InvalidNumber(input.to_string()))?;

    // Sub-cent negatives such as "-0.001" parse to zero but are still negative
    let negative_text = input.starts_with('-') && input.chars().any(|c| matches!(c, '1'..='9'));
    if amount.is_negative() || negative_text {
        return Err(TrackerError::NegativeAmount(input.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(TrackerError::AmountTooLarge(input.to_string()));
    }
    Ok(amount)
}

/// Capitalise the first letter of each word and lowercase the rest
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                output.extend(c.to_uppercase());
            } else {
                output.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(c);
            at_word_start = true;
        }
    }
    output
}

/// Match title-cased input against the allowed options
pub fn parse_choice<'o>(input: &str, options: &[&'o str]) -> TrackerResult<&'o str> {
    let normalized = title_case(input.trim());
    options
        .iter()
        .copied()
        .find(|option| *option == normalized)
        .ok_or_else(|| TrackerError::invalid_choice(input.trim(), options))
}

/// Line-oriented prompt/response console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> TrackerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one line without its line ending.
    /// Returns `None` once input is exhausted.
    pub fn prompt_text(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask until a non-negative amount is entered
    pub fn prompt_amount(&mut self, prompt: &str) -> TrackerResult<Option<Money>> {
        loop {
            let Some(line) = self.prompt_text(prompt)? else {
                return Ok(None);
            };
            match parse_amount(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(err) if err.is_recoverable_input() => self.say(&err.to_string())?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Ask until one of `options` is entered; input is title-cased before matching
    pub fn prompt_choice<'o>(
        &mut self,
        prompt: &str,
        options: &[&'o str],
    ) -> TrackerResult<Option<&'o str>> {
        let full_prompt = format!("{} ({}): ", prompt, options.join("/"));
        loop {
            let Some(line) = self.prompt_text(&full_prompt)? else {
                return Ok(None);
            };
            match parse_choice(&line, options) {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) if err.is_recoverable_input() => self.say(&err.to_string())?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Writer the console prints to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
