use anyhow::{Context, Result};
use regex::Regex;

/// Shell-style file name glob: `*`, `?` and `[...]` classes (`[!...]` negates).
#[derive(Debug, Clone)]
pub struct FilePattern {
    glob: String,
    regex: Regex,
}

impl FilePattern {
    pub fn new(glob: &str) -> Result<Self> {
        let chars: Vec<char> = glob.chars().collect();
        let mut pattern = String::with_capacity(glob.len() + 8);
        pattern.push('^');

        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '*' => pattern.push_str(".*"),
                '?' => pattern.push('.'),
                '[' => match bracket_class(&chars[i + 1..]) {
                    Some((class, consumed)) => {
                        pattern.push_str(&class);
                        i += consumed;
                    }
                    None => pattern.push_str(r"\["),
                },
                other => push_literal(&mut pattern, other),
            }
            i += 1;
        }
        pattern.push('$');

        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid log file pattern: {glob}"))?;

        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }
}

fn push_literal(pattern: &mut String, c: char) {
    pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
}

/// Translates the body of a `[...]` class, `rest` starting just after `[`.
/// Returns the regex class and the number of glob chars consumed, or `None`
/// when the class is never closed.
fn bracket_class(rest: &[char]) -> Option<(String, usize)> {
    let negated = matches!(rest.first(), Some('!' | '^'));
    let start = usize::from(negated);
    // `]` right after the opening is a member, not the end
    let close = rest
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, c)| **c == ']')
        .map(|(idx, _)| idx)?;

    let body = &rest[start..close];
    let mut class = String::from(if negated { "[^" } else { "[" });
    for (idx, c) in body.iter().enumerate() {
        let is_range = *c == '-' && idx > 0 && idx + 1 < body.len();
        if is_range {
            class.push('-');
        } else {
            push_literal(&mut class, *c);
        }
    }
    class.push(']');

    Some((class, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_selects_dated_logs() {
        let p = FilePattern::new("log-*.log").unwrap();
        assert!(p.matches("log-2024-05-01.log"));
        assert!(p.matches("log-.log"));
        assert!(!p.matches("log-2024-05-01.log.gz"));
        assert!(!p.matches("index.html"));
        assert!(!p.matches("logX2024.log"));
    }

    #[test]
    fn question_mark_is_single_char_and_dots_are_literal() {
        let p = FilePattern::new("app?.txt").unwrap();
        assert!(p.matches("app1.txt"));
        assert!(!p.matches("app12.txt"));
        assert!(!p.matches("app1xtxt"));
    }

    #[test]
    fn bracket_classes_match_one_character() {
        let p = FilePattern::new("log-[0-9]*.log").unwrap();
        assert!(p.matches("log-2024-05-01.log"));
        assert!(!p.matches("log-x.log"));

        let p = FilePattern::new("log-[!a-z].log").unwrap();
        assert!(p.matches("log-7.log"));
        assert!(!p.matches("log-q.log"));

        let p = FilePattern::new("x[]-]y").unwrap();
        assert!(p.matches("x]y"));
        assert!(p.matches("x-y"));
        assert!(!p.matches("xzy"));
    }

    #[test]
    fn unclosed_bracket_is_literal_and_bad_ranges_fail() {
        let p = FilePattern::new("log[.log").unwrap();
        assert!(p.matches("log[.log"));

        assert!(FilePattern::new("log-[z-a].log").is_err());
    }
}
