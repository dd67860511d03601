//! String succession for alphabetic ranges.

use std::cmp::Ordering;

/// Returns the string that follows `s` in succession order.
///
/// The rightmost ASCII alphanumeric is incremented; `z`, `Z` and `9` wrap to
/// `a`, `A` and `0` and carry into the next alphanumeric to the left, skipping
/// other characters. A carry out of the leftmost alphanumeric inserts a new
/// `a`, `A` or `1` in front of it. Strings without alphanumerics increment
/// their last character instead.
#[must_use]
pub fn successor(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    if !chars.iter().any(char::is_ascii_alphanumeric) {
        let last = chars.len() - 1;
        match next_char(chars[last]) {
            Some(c) => chars[last] = c,
            None => chars.push('\u{1}'),
        }
        return chars.into_iter().collect();
    }

    let mut end = chars.len();
    let mut carried_from = 0;
    while let Some(idx) = chars[..end].iter().rposition(char::is_ascii_alphanumeric) {
        let (bumped, carry) = bump(chars[idx]);
        chars[idx] = bumped;
        if !carry {
            return chars.into_iter().collect();
        }
        carried_from = idx;
        end = idx;
    }

    let head = match chars[carried_from] {
        '0' => '1',
        'A' => 'A',
        _ => 'a',
    };
    chars.insert(carried_from, head);
    chars.into_iter().collect()
}

/// Orders strings the way succession visits them: shorter first, then by text.
#[must_use]
pub fn succession_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Lazily walks the successor chain from a start string up to a stop string.
///
/// The chain ends after yielding `stop`, or as soon as the next candidate
/// would be longer than `stop`.
#[derive(Clone, Debug)]
pub struct Successors {
    next: Option<String>,
    stop: String,
    stop_len: usize,
}

impl Successors {
    /// Creates the chain; it is empty when `start` comes after `stop`.
    #[must_use]
    pub fn new(start: &str, stop: &str) -> Self {
        let next = match succession_order(start, stop) {
            Ordering::Greater => None,
            _ => Some(start.to_string()),
        };
        Self {
            next,
            stop: stop.to_string(),
            stop_len: stop.chars().count(),
        }
    }
}

impl Iterator for Successors {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.next.take()?;
        if current != self.stop {
            let candidate = successor(&current);
            if candidate.chars().count() <= self.stop_len {
                self.next = Some(candidate);
            }
        }
        Some(current)
    }
}

fn bump(c: char) -> (char, bool) {
    match c {
        'z' => ('a', true),
        'Z' => ('A', true),
        '9' => ('0', true),
        _ => (next_char(c).unwrap_or(c), false),
    }
}

fn next_char(c: char) -> Option<char> {
    (u32::from(c) + 1..=u32::from(char::MAX)).find_map(char::from_u32)
}
