/// Icon file name for a tower: spaces and hyphens become `_`, parentheses are
/// dropped, `.svg` is appended. No collision handling; equal results share a file.
pub fn derive_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        match c {
            ' ' | '-' => out.push('_'),
            '(' | ')' => {}
            other => out.push(other),
        }
    }
    out.push_str(".svg");
    out
}

/// Value stored in a tower's `image` field. Always `/`-separated.
pub fn image_path(prefix: &str, filename: &str) -> String {
    if prefix.is_empty() {
        filename.to_string()
    } else {
        format!("{prefix}/{filename}")
    }
}
