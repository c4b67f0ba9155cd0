//! Classification of tokens that start an option.

/// Returns `true` if `token` starts an option rather than being a value.
///
/// Markers are tokens beginning with `--`, or a single dash followed by
/// exactly one alphabetic character (`-d`). Anything else that starts with a
/// dash (`-1`, `-l2`) is an ordinary value, which keeps negative numbers
/// usable as arguments.
pub fn is_marker(token: &str) -> bool {
    if token.starts_with("--") {
        return true;
    }

    let mut chars = match token.strip_prefix('-') {
        Some(rest) => rest.chars(),
        None => return false,
    };

    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_alphabetic()
    )
}
