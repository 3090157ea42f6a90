//! Helpers for case-insensitive substring search.

/// Build an `ILIKE` pattern matching `term` anywhere in a column.
///
/// `%`, `_` and `\` in the user input are escaped so they match literally.
/// An empty term matches everything.
///
/// # Examples
///
/// ```
/// use fsnd_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Hop"), "%Hop%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
