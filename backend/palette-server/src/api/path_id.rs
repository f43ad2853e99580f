/// Parse an integer id from a path segment.
///
/// `None` for anything that is not an integer; such an id can never match a row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
