//! Vocabulary source: lower-cased word-forms from line-oriented text.

use std::collections::BTreeSet;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{PhoneticError, Result};

/// Split a line into word tokens.
///
/// Alphanumeric runs form words, an apostrophe inside a word starts a clitic
/// token (`it's` gives `it`, `'s`), and any other non-space character is a
/// token of its own.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    let flush = |current: &mut String, tokens: &mut Vec<String>| {
        if !current.is_empty() {
            tokens.push(std::mem::take(current));
        }
    };

    for c in line.chars() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if c == '\'' && !current.is_empty() {
            flush(&mut current, &mut tokens);
            current.push(c);
        } else {
            flush(&mut current, &mut tokens);
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
    }
    flush(&mut current, &mut tokens);
    tokens
}

/// Distinct lower-cased tokens of every line
pub fn vocabulary_from_lines<I, S>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vocabulary = BTreeSet::new();
    for line in lines {
        vocabulary.extend(tokenize(&line.as_ref().to_lowercase()));
    }
    vocabulary
}

/// Read a text file line by line; invalid UTF-8 is replaced, not rejected
pub fn read_vocabulary(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| PhoneticError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut vocabulary = BTreeSet::new();
    let mut lines = 0usize;
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| PhoneticError::io(path, e))?;
        if read == 0 {
            break;
        }
        lines += 1;
        let line = String::from_utf8_lossy(&buffer).to_lowercase();
        vocabulary.extend(tokenize(&line));
    }

    info!(path = %path.display(), lines, tokens = vocabulary.len(), "vocabulary read");
    Ok(vocabulary)
}
