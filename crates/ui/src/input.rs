use thiserror::Error;

use tshape_core::model::{Rating, RatingError};

/// Something the respondent typed at a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Rate(Rating),
    /// Empty line: leave the current answer as it is.
    Keep,
    Next,
    Submit,
    Restart,
    Quit,
    Help,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error("unrecognized input: {0:?}")]
    Unrecognized(String),
}

/// Parses one line of input.
///
/// Ratings may be typed as a bare number (`4`) or as the full option label
/// (`4 - Agree`); only the leading number counts.
///
/// # Errors
///
/// Returns `InputError::Rating` for numbers outside 1-5 and
/// `InputError::Unrecognized` for anything else.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Keep);
    }

    let lowered = trimmed.to_ascii_lowercase();
    match lowered.as_str() {
        "n" | "next" => return Ok(Command::Next),
        "s" | "submit" => return Ok(Command::Submit),
        "r" | "restart" | "start over" => return Ok(Command::Restart),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "?" | "help" => return Ok(Command::Help),
        _ => {}
    }

    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(InputError::Unrecognized(trimmed.to_string()));
    }
    let value: u8 = digits
        .parse()
        .map_err(|_| InputError::Unrecognized(trimmed.to_string()))?;
    Ok(Command::Rate(Rating::from_u8(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ratings() {
        assert_eq!(parse_command("4"), Ok(Command::Rate(Rating::Agree)));
        assert_eq!(
            parse_command(" 5 - Strongly Agree "),
            Ok(Command::Rate(Rating::StronglyAgree))
        );
    }

    #[test]
    fn empty_line_keeps_answer() {
        assert_eq!(parse_command("   "), Ok(Command::Keep));
    }

    #[test]
    fn parses_navigation_words() {
        assert_eq!(parse_command("Next"), Ok(Command::Next));
        assert_eq!(parse_command("s"), Ok(Command::Submit));
        assert_eq!(parse_command("start over"), Ok(Command::Restart));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert_eq!(
            parse_command("0"),
            Err(InputError::Rating(RatingError::InvalidRating(0)))
        );
        assert_eq!(
            parse_command("9"),
            Err(InputError::Rating(RatingError::InvalidRating(9)))
        );
        assert!(matches!(
            parse_command("300"),
            Err(InputError::Unrecognized(_))
        ));
    }

    #[test]
    fn rejects_noise() {
        assert_eq!(
            parse_command("maybe"),
            Err(InputError::Unrecognized("maybe".into()))
        );
    }
}
