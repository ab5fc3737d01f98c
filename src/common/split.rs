/// Splits `raw` on the literal `separator` and trims whitespace from each segment.
///
/// An empty `raw` yields a single empty segment. An empty `separator` splits
/// after every `char`, so `"123"` becomes `["1", "2", "3"]` and an empty `raw`
/// becomes no segments at all.
///
/// # Examples
/// ```
/// use envcast::common::split_segments;
///
/// assert_eq!(split_segments("1, 2,3 ", ","), vec!["1", "2", "3"]);
/// assert_eq!(split_segments("a::b", "::"), vec!["a", "b"]);
/// assert_eq!(split_segments("", ","), vec![""]);
/// assert_eq!(split_segments("123", ""), vec!["1", "2", "3"]);
/// ```
pub fn split_segments<'a>(raw: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return raw
            .char_indices()
            .map(|(i, c)| raw[i..i + c.len_utf8()].trim())
            .collect();
    }
    raw.split(separator).map(str::trim).collect()
}
