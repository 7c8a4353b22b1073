use std::fmt;
use std::io::{self, BufRead, Write};

const KEY_PROMPT: &str = "Enter your Gemini API key: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationChoice {
    Yes,
    No,
}

#[derive(Debug, Clone)]
pub struct UiError {
    message: String,
}

impl UiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UiError {}

impl From<io::Error> for UiError {
    fn from(err: io::Error) -> Self {
        UiError::new(err.to_string())
    }
}

pub fn prompt_api_key<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String, UiError> {
    writeln!(out, "🔐 DSA Sage Authentication Setup")?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "Create a key at https://aistudio.google.com/apikey")?;
    writeln!(out)?;
    write!(out, "{KEY_PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let key = line.trim();
    if key.is_empty() {
        return Err(UiError::new("API key cannot be empty"));
    }
    Ok(key.to_string())
}

pub fn prompt_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<ConfirmationChoice, UiError> {
    write!(out, "{question} [y/N]: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(ConfirmationChoice::Yes),
        _ => Ok(ConfirmationChoice::No),
    }
}
