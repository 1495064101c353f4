//! View name transforms.
//!
//! A view name uses `.` as its separator: `layouts.main`. Slashes are accepted as well and both
//! forms resolve to the same file.

/// Replace path separators with a dot.
pub fn normalize_name(name: &str) -> String {
    name.replace('/', ".")
}

/// Replace dots with path separators.
pub fn denormalize_name(name: &str) -> String {
    name.replace('.', "/")
}

/// Resolve a view name to its file path.
///
/// The result is `directory/name.extension` with the name denormalized and every run of `/`
/// collapsed into one.
pub fn file_path(directory: &str, name: &str, extension: &str) -> String {
    let name = denormalize_name(&normalize_name(name));
    let mut path = String::with_capacity(directory.len() + name.len() + extension.len() + 2);
    path.push_str(directory);
    path.push('/');
    path.push_str(&name);
    path.push('.');
    path.push_str(extension);
    collapse_separators(&path)
}

fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut last = None;
    for ch in path.chars() {
        if ch == '/' && last == Some('/') {
            continue;
        }
        out.push(ch);
        last = Some(ch);
    }
    out
}

/// Convert a string to `camelCase`.
///
/// Words are split on `-`, `_` and whitespace. Each word gets an upper case first letter, then
/// the first letter of the result is lowered: `FooBar`, `foo_bar` and `foo-bar` all become
/// `fooBar`.
pub fn camel(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for word in value.split(|c: char| c == '-' || c == '_' || c.is_whitespace()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => out,
    }
}
