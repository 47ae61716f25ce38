//! Text cleanup utilities for synthesized resource bodies.

/// Strips HTML/BBCode-style angle-bracket markup from a description.
///
/// Event descriptions come from a rich-text editor; DAV clients expect plain
/// text. Everything between `<` and the next `>` is dropped; an unterminated
/// tag swallows the remainder of the input.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}
