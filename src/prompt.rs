use crate::prefix::Prefix;
use std::io::{BufRead, Write};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
const PROMPT: &str = "BIN (6 digits): ";

pub fn validate_max_attempts(max_attempts: usize) -> Result<(), String> {
    if max_attempts == 0 {
        return Err("max_attempts must be greater than 0".to_string());
    }
    Ok(())
}

pub fn collect_prefix<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> Result<Prefix, String> {
    validate_max_attempts(max_attempts)?;

    for attempt in 1..=max_attempts {
        write!(output, "{PROMPT}").map_err(|err| err.to_string())?;
        output.flush().map_err(|err| err.to_string())?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|err| err.to_string())?;
        if read == 0 {
            log::warn!("Input interrupted: end of input");
            return Err("input interrupted: end of input".to_string());
        }

        match Prefix::parse(line.trim()) {
            Ok(prefix) => {
                log::info!("Valid BIN entered: {}", prefix);
                return Ok(prefix);
            }
            Err(err) => {
                let remaining = max_attempts - attempt;
                log::debug!("rejected BIN input {:?}: {}", line.trim(), err);
                if remaining > 0 {
                    writeln!(output, "BIN Error: {err}. {remaining} attempts remaining.")
                        .map_err(|err| err.to_string())?;
                }
            }
        }
    }

    Err(format!("maximum attempts reached ({max_attempts})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, max_attempts: usize) -> (Result<Prefix, String>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = collect_prefix(&mut reader, &mut out, max_attempts);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_first_valid_line() {
        let (result, out) = run("453910\n", 5);
        assert_eq!(result.unwrap().as_str(), "453910");
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let (result, _) = run("  012345 \r\n", 5);
        assert_eq!(result.unwrap().as_str(), "012345");
    }

    #[test]
    fn reprompts_after_invalid_input() {
        let (result, out) = run("45A910\n45391\n453910\n", 5);
        assert_eq!(result.unwrap().as_str(), "453910");
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.contains("4 attempts remaining"));
        assert!(out.contains("3 attempts remaining"));
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let (result, out) = run("a\nb\nc\n453910\n", 3);
        assert_eq!(result.unwrap_err(), "maximum attempts reached (3)");
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn end_of_input_is_an_interruption() {
        let (result, _) = run("", 5);
        assert!(result.unwrap_err().starts_with("input interrupted"));

        let (result, _) = run("bad\n", 5);
        assert!(result.unwrap_err().starts_with("input interrupted"));
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let (result, out) = run("453910\n", 0);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
