//! Comma-separated numeric input.
//!
//! The blending engine only accepts parsed numbers; this is where raw text
//! from the command line becomes `Vec<f64>`.

use crate::error::{CliError, CliResult};

/// Parse `"5000, 4000, 6000"` into numbers, reporting the first bad token.
pub fn parse_list(raw_text: &str, field: &'static str) -> CliResult<Vec<f64>> {
    if raw_text.trim().is_empty() {
        return Err(CliError::Empty { field });
    }

    raw_text
        .split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<f64>().map_err(|_| CliError::Parse {
                field,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_list() {
        let v = parse_list("5000, 4000,6000 ,  7000", "flow rates").unwrap();
        assert_eq!(v, vec![5000.0, 4000.0, 6000.0, 7000.0]);
    }

    #[test]
    fn parses_negative_and_single_values() {
        assert_eq!(parse_list("-15, -3, 42", "pour points").unwrap(), vec![-15.0, -3.0, 42.0]);
        assert_eq!(parse_list("56.54", "aniline point").unwrap(), vec![56.54]);
    }

    #[test]
    fn reports_bad_token() {
        let err = parse_list("1.0, abc, 3", "flow rates").unwrap_err();
        match err {
            CliError::Parse { field, token } => {
                assert_eq!(field, "flow rates");
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trailing_comma_is_an_empty_token() {
        let err = parse_list("1.0, 2.0,", "flow rates").unwrap_err();
        assert!(matches!(err, CliError::Parse { token, .. } if token.is_empty()));
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(
            parse_list("   ", "flow rates"),
            Err(CliError::Empty { .. })
        ));
    }
}
