use std::sync::OnceLock;

use regex::Regex;

/// ASCII-only digit and whitespace classes.
const HEADER_PATTERN: &str =
    r"^([A-Z]+)(?-u:\s)*-(?-u:\s)*([-0-9]+(?-u:\s)+[:0-9]+)(?-u:\s)*-->(?-u:\s)*(.+)$";

fn header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"))
}

/// Classification of a single raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    Header {
        level: &'a str,
        timestamp: &'a str,
        message: &'a str,
    },
    Continuation,
}

/// Matches `LEVEL - <date> <time> --> message`.
pub fn match_header(line: &str) -> HeaderLine<'_> {
    let Some(caps) = header_regex().captures(line) else {
        return HeaderLine::Continuation;
    };

    match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(level), Some(timestamp), Some(message)) => HeaderLine::Header {
            level: level.as_str(),
            timestamp: timestamp.as_str(),
            message: message.as_str(),
        },
        _ => HeaderLine::Continuation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_standard_header() {
        assert_eq!(
            match_header("INFO - 2024-05-01 10:00:00 --> Server started successfully"),
            HeaderLine::Header {
                level: "INFO",
                timestamp: "2024-05-01 10:00:00",
                message: "Server started successfully",
            }
        );
    }

    #[test]
    fn tolerates_tight_spacing_around_separators() {
        assert_eq!(
            match_header("DEBUG-2024-05-01 10:00:00-->x"),
            HeaderLine::Header {
                level: "DEBUG",
                timestamp: "2024-05-01 10:00:00",
                message: "x",
            }
        );
    }

    #[test]
    fn unknown_uppercase_level_still_matches() {
        assert!(matches!(
            match_header("WARNING - 2024-05-01 10:00:00 --> disk low"),
            HeaderLine::Header { level: "WARNING", .. }
        ));
    }

    #[test]
    fn non_headers_are_continuations() {
        for line in [
            "  stack trace line 1",
            "info - 2024-05-01 10:00:00 --> lowercase level",
            "INFO - 2024-05-01 10:00:00 -->",
            "INFO - yesterday --> no digits",
            " INFO - 2024-05-01 10:00:00 --> leading space",
            "INFO - \u{ff12}\u{ff10}\u{ff12}\u{ff14}-05-01 10:00:00 --> full-width digits",
            "INFO\u{3000}- 2024-05-01 10:00:00 --> ideographic space",
        ] {
            assert_eq!(match_header(line), HeaderLine::Continuation, "{line}");
        }
    }
}
