//! Splitting a migration script into individual statements.

use serde::Deserialize;

/// Statement terminator.
pub const TERMINATOR: char = ';';

/// How a migration script is cut into statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Cut on every `;`.
    ///
    /// Fragments any statement that carries a `;` inside a string literal,
    /// comment or function body. Kept for scripts written against the old
    /// runner.
    Naive,

    /// Cut on `;` only outside literals, quoted identifiers, comments and
    /// dollar-quoted bodies.
    #[default]
    SqlAware,
}

impl SplitStrategy {
    /// Splits `sql` into trimmed statement bodies without their terminator.
    pub fn split<'a>(&self, sql: &'a str) -> Vec<&'a str> {
        match self {
            SplitStrategy::Naive => split_naive(sql),
            SplitStrategy::SqlAware => split_sql_aware(sql),
        }
    }
}

fn split_naive(sql: &str) -> Vec<&str> {
    sql.split(TERMINATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Code,
    SingleQuoted { backslash_escapes: bool },
    DoubleQuoted,
    LineComment,
    BlockComment { depth: u32 },
    DollarQuoted { tag_start: usize, tag_len: usize },
}

// All delimiters are ASCII, so scanning bytes never splits a UTF-8 sequence.
fn split_sql_aware(sql: &str) -> Vec<&str> {
    let bytes = sql.as_bytes();
    let mut statements = Vec::new();
    let mut state = ScanState::Code;
    let mut start = 0;
    let mut has_code = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match state {
            ScanState::Code => match b {
                b';' => {
                    if has_code {
                        statements.push(sql[start..i].trim());
                    }
                    start = i + 1;
                    has_code = false;
                }
                b'\'' => {
                    let backslash_escapes = i > 0
                        && matches!(bytes[i - 1], b'E' | b'e')
                        && (i < 2 || !is_ident_byte(bytes[i - 2]));
                    state = ScanState::SingleQuoted { backslash_escapes };
                    has_code = true;
                }
                b'"' => {
                    state = ScanState::DoubleQuoted;
                    has_code = true;
                }
                b'-' if next == Some(b'-') => {
                    state = ScanState::LineComment;
                    i += 1;
                }
                b'/' if next == Some(b'*') => {
                    state = ScanState::BlockComment { depth: 1 };
                    i += 1;
                }
                b'$' => {
                    has_code = true;
                    if let Some(tag_len) = dollar_tag_len(bytes, i) {
                        state = ScanState::DollarQuoted {
                            tag_start: i,
                            tag_len,
                        };
                        i += tag_len - 1;
                    }
                }
                b if !b.is_ascii_whitespace() => has_code = true,
                _ => {}
            },
            ScanState::SingleQuoted { backslash_escapes } => match b {
                b'\\' if backslash_escapes => i += 1,
                b'\'' if next == Some(b'\'') => i += 1,
                b'\'' => state = ScanState::Code,
                _ => {}
            },
            ScanState::DoubleQuoted => match b {
                b'"' if next == Some(b'"') => i += 1,
                b'"' => state = ScanState::Code,
                _ => {}
            },
            ScanState::LineComment => {
                if b == b'\n' {
                    state = ScanState::Code;
                }
            }
            ScanState::BlockComment { depth } => {
                if b == b'*' && next == Some(b'/') {
                    i += 1;
                    state = if depth == 1 {
                        ScanState::Code
                    } else {
                        ScanState::BlockComment { depth: depth - 1 }
                    };
                } else if b == b'/' && next == Some(b'*') {
                    i += 1;
                    state = ScanState::BlockComment { depth: depth + 1 };
                }
            }
            ScanState::DollarQuoted { tag_start, tag_len } => {
                let tag = &bytes[tag_start..tag_start + tag_len];
                if b == b'$' && bytes[i..].starts_with(tag) {
                    i += tag_len - 1;
                    state = ScanState::Code;
                }
            }
        }
        i += 1;
    }

    if has_code {
        let tail = sql[start..].trim();
        if !tail.is_empty() {
            statements.push(tail);
        }
    }
    statements
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

/// Length of a `$tag$` opener starting at `pos`, if one starts there.
///
/// Positional parameters such as `$1` and identifiers containing `$` are not
/// dollar quotes.
fn dollar_tag_len(bytes: &[u8], pos: usize) -> Option<usize> {
    if pos > 0 && is_ident_byte(bytes[pos - 1]) {
        return None;
    }
    let mut j = pos + 1;
    match bytes.get(j) {
        Some(b'$') => return Some(2),
        Some(&c) if c.is_ascii_alphabetic() || c == b'_' || c >= 0x80 => {}
        _ => return None,
    }
    while let Some(&c) = bytes.get(j) {
        if c == b'$' {
            return Some(j - pos + 1);
        }
        if !(c.is_ascii_alphanumeric() || c == b'_' || c >= 0x80) {
            return None;
        }
        j += 1;
    }
    None
}
