use crate::constants::MAX_SHIFT;
use crate::error::InputError;
use crate::structs::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Run(Mode),
    Quit,
}

pub fn parse_choice(raw: &str) -> Result<Choice, InputError> {
    match raw.trim().to_lowercase().as_str() {
        "e" => Ok(Choice::Run(Mode::Encrypt)),
        "d" => Ok(Choice::Run(Mode::Decrypt)),
        "q" => Ok(Choice::Quit),
        other => Err(InputError::UnknownMode(other.to_string())),
    }
}

/// Empty input selects `default`.
pub fn parse_shift(raw: &str, default: u8) -> Result<u8, InputError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(default);
    }

    let value: i64 = raw
        .parse()
        .map_err(|_| InputError::NotAnInteger(raw.to_string()))?;

    u8::try_from(value)
        .ok()
        .filter(|shift| *shift <= MAX_SHIFT)
        .ok_or(InputError::ShiftOutOfRange(value))
}

/// Empty input selects `default`; anything else is yes iff it starts with `y`.
pub fn parse_yes_no(raw: &str, default: bool) -> bool {
    let raw = raw.trim().to_lowercase();

    if raw.is_empty() {
        default
    } else {
        raw.starts_with('y')
    }
}

pub fn require_text(raw: &str) -> Result<&str, InputError> {
    if raw.trim().is_empty() {
        Err(InputError::EmptyText)
    } else {
        Ok(raw)
    }
}
