//! Command parameter extraction
//!
//! A command line has the form `\name{parameter}` and must be alone on its
//! line (trailing whitespace is allowed). The parameter may contain balanced
//! braces and the escapes `\{`, `\}` and `\\`, which are kept verbatim.

use crate::exam::error::CommandSyntaxError;

/// Parses a command with the given name and returns its parameter.
///
/// Returns `Ok(None)` iff the line doesn't start with `\name{`.
///
/// Fails if the command isn't alone on the line or if its parameter isn't
/// closed on the same line.
pub fn parse_command<'a>(line: &'a str, name: &str) -> Result<Option<&'a str>, CommandSyntaxError> {
    let line = line.trim_end();

    let Some(rest) = line
        .strip_prefix('\\')
        .and_then(|rest| rest.strip_prefix(name))
        .and_then(|rest| rest.strip_prefix('{'))
    else {
        return Ok(None);
    };

    let end = find_param_end(rest)?;
    if end + 1 < rest.len() {
        return Err(CommandSyntaxError::TrailingText);
    }

    Ok(Some(&rest[..end]))
}

/// Returns the byte index of the brace closing the parameter which starts at
/// the beginning of `param`.
fn find_param_end(param: &str) -> Result<usize, CommandSyntaxError> {
    let bytes = param.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if matches!(bytes.get(i + 1), Some(b'{' | b'}' | b'\\')) => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    Err(CommandSyntaxError::UnbalancedBraces)
}
