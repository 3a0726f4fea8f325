//! URL handle derivation from product titles.

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Turns a title into a URL handle.
///
/// Lower-cases, drops everything except ASCII letters, digits, whitespace and
/// hyphens, turns whitespace runs into a single hyphen, collapses repeated
/// hyphens and trims hyphens from both ends. A title with no ASCII
/// alphanumerics (e.g. one written only in CJK) yields an empty handle.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = DISALLOWED_RE.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RE.replace_all(&kept, "-");
    let collapsed = HYPHENS_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_owned()
}
