/// Removes every whitespace character from `text`.
///
/// Whitespace carries no meaning anywhere in an expression, not even between
/// the digits of a number, so `"2 3"` reads as `23`.
///
/// # Example
/// ```
/// use radica::interpreter::normalize::strip_whitespace;
///
/// assert_eq!(strip_whitespace("  9  ^ (  1 / 2 ) "), "9^(1/2)");
/// assert_eq!(strip_whitespace("1 2\t.5"), "12.5");
/// ```
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Collapses every run of adjacent `+`/`-` characters to a single sign.
///
/// Each pass walks the text left to right and replaces non-overlapping pairs:
/// `++` and `--` become `+`, `+-` and `-+` become `-`. Passes repeat until one
/// changes nothing, so a run of three signs takes two passes. The surviving
/// sign is `-` exactly when the run held an odd number of `-`.
///
/// # Example
/// ```
/// use radica::interpreter::normalize::normalize_signs;
///
/// assert_eq!(normalize_signs("1--2"), "1+2");
/// assert_eq!(normalize_signs("2+-4"), "2-4");
/// assert_eq!(normalize_signs("+-+5"), "-5");
/// assert_eq!(normalize_signs("3*---2"), "3*-2");
/// ```
#[must_use]
pub fn normalize_signs(text: &str) -> String {
    let mut current = text.to_string();
    let mut passes = 0usize;

    loop {
        let (next, changed) = collapse_pass(&current);
        passes += 1;
        if !changed {
            tracing::trace!(passes, normalized = %next, "sign normalization reached fixpoint");
            return next;
        }
        current = next;
    }
}

/// Performs one left-to-right pass of pairwise sign collapsing.
///
/// Returns the rewritten text and whether any pair was replaced.
fn collapse_pass(text: &str) -> (String, bool) {
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(first) = sign_of(c)
           && let Some(second) = chars.peek().copied().and_then(sign_of)
        {
            chars.next();
            out.push(if first == second { '+' } else { '-' });
            changed = true;
            continue;
        }
        out.push(c);
    }

    (out, changed)
}

/// Maps a sign character to `true` for `-` and `false` for `+`.
const fn sign_of(c: char) -> Option<bool> {
    match c {
        '-' => Some(true),
        '+' => Some(false),
        _ => None,
    }
}
