use std::io::{BufRead, Write};

use newsfilter_core::{AppError, Decisions};

const KEYWORD_PROMPT: &str = "Enter a keyword to filter headlines: ";
const EXPORT_PROMPT: &str = "Do you want to export these results to CSV? (y/n): ";

/// Asks the user on stdin/stdout.
pub struct StdinDecisions;

impl Decisions for StdinDecisions {
    fn keyword(&self) -> Result<String, AppError> {
        ask(&mut std::io::stdin().lock(), &mut std::io::stdout(), KEYWORD_PROMPT)
    }

    fn confirm_export(&self) -> Result<bool, AppError> {
        let answer = ask(&mut std::io::stdin().lock(), &mut std::io::stdout(), EXPORT_PROMPT)?;
        Ok(is_yes(&answer))
    }
}

/// Print `question` and read one trimmed line. EOF reads as an empty answer.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, AppError> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| AppError::PromptError(e.to_string()))?;
    Ok(line.trim().to_string())
}

/// Only a lone `y` (any case) confirms.
fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_prints_question_and_trims_answer() {
        let mut input = "  storm  \n".as_bytes();
        let mut output = Vec::new();

        let answer = ask(&mut input, &mut output, KEYWORD_PROMPT).unwrap();

        assert_eq!(answer, "storm");
        assert_eq!(String::from_utf8(output).unwrap(), KEYWORD_PROMPT);
    }

    #[test]
    fn ask_at_eof_is_empty() {
        let mut input = "".as_bytes();
        let answer = ask(&mut input, &mut Vec::new(), EXPORT_PROMPT).unwrap();
        assert_eq!(answer, "");
    }

    #[test]
    fn only_y_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes(" Y "));
        assert!(!is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}
