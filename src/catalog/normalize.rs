/// Turns a directory or file name into a catalog id.
///
/// Lower-cases the input, collapses runs of whitespace, `_` and `.` into a
/// single `-`, then drops every character outside `[a-z0-9-]`. The output
/// only contains `[a-z0-9-]`, so normalizing an id again returns it unchanged.
///
/// ```
/// use marble_planner::catalog::normalize_id;
///
/// assert_eq!(normalize_id("Orbit Return_Left"), "orbit-return-left");
/// assert_eq!(normalize_id("curve-A.stl"), "curve-a-stl");
/// ```
#[must_use]
pub fn normalize_id(raw: &str) -> String {
    let mut id = String::with_capacity(raw.len());
    let mut in_separator = false;

    for ch in raw.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '.' {
            if !in_separator {
                id.push('-');
                in_separator = true;
            }
            continue;
        }
        in_separator = false;

        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            id.push(ch);
        }
    }

    id
}
