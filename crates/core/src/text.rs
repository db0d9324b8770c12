//! Text comparison used by name and address setters.

/// Case-insensitive equality, comparing the lowercase form of every character.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
