//! Splitting a raw input line into tokens.

use dotcmd_types::{DotcmdError, Result};

/// Split a line on whitespace, honouring single quotes, double quotes and
/// backslash escapes.
///
/// With `keep_trailing`, a line ending in whitespace gets a final empty
/// token: the fragment a tab-completing user has not started typing yet.
pub fn split_line(input: &str, keep_trailing: bool) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = input.chars().peekable();
    let mut in_single = false;
    let mut in_double = false;

    while let Some(ch) = chars.next() {
        if in_single {
            if ch == '\'' {
                in_single = false;
            } else {
                current.push(ch);
            }
        } else if in_double {
            if ch == '"' {
                in_double = false;
            } else if ch == '\\'
                && let Some(&next) = chars.peek()
                && matches!(next, '"' | '\\')
            {
                current.push(next);
                chars.next();
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '\'' => {
                    in_single = true;
                    quoted = true;
                },
                '"' => {
                    in_double = true;
                    quoted = true;
                },
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                },
                c if c.is_whitespace() => {
                    if !current.is_empty() || quoted {
                        tokens.push(std::mem::take(&mut current));
                        quoted = false;
                    }
                },
                _ => current.push(ch),
            }
        }
    }

    if in_single {
        return Err(DotcmdError::Parse("unterminated single quote".to_string()));
    }
    if in_double {
        return Err(DotcmdError::Parse("unterminated double quote".to_string()));
    }

    if !current.is_empty() || quoted {
        tokens.push(current);
    } else if keep_trailing && !tokens.is_empty() && input.ends_with(char::is_whitespace) {
        tokens.push(String::new());
    }

    Ok(tokens)
}

/// Split a line into `(label, args)`. `None` for a blank line.
pub fn split_command(input: &str, keep_trailing: bool) -> Result<Option<(String, Vec<String>)>> {
    let mut tokens = split_line(input, keep_trailing)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    let label = tokens.remove(0);
    Ok(Some((label, tokens)))
}
