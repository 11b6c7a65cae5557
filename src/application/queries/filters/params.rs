/// Interpret a raw query parameter as an optional integer bound.
///
/// Absent, blank and unparsable values yield `None`; only plain decimal
/// integers with an optional sign parse, so digit separators such as `1_000`
/// count as unparsable. Zero also yields `None`: a zero bound has always
/// meant "no filter" on these endpoints and clients rely on `min=0`
/// returning everything.
pub fn parse_filter_value(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|value| *value != 0)
}
