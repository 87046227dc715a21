//! Name canonicalization.
//! Pure string-to-string: no filesystem access, no shared state. Given one
//! file or directory name, produce the lowercase underscore-delimited form
//! and whether it differs from the input.

/// Outcome of canonicalizing a single name.
///
/// `changed` is `new_name != original`; callers decide what a change means
/// (rename, print, skip). Decisions are recomputed per entry, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDecision {
    pub original: String,
    pub new_name: String,
    pub changed: bool,
}

impl RenameDecision {
    fn from_parts(original: &str, new_name: String) -> Self {
        let changed = new_name != original;
        Self {
            original: original.to_string(),
            new_name,
            changed,
        }
    }

    fn unchanged(original: &str) -> Self {
        Self {
            original: original.to_string(),
            new_name: original.to_string(),
            changed: false,
        }
    }
}

/// Canonicalize one name.
///
/// The stem (everything before the last `.`) is rewritten: `&` becomes `and`,
/// every run of characters outside `[A-Za-z0-9_.]` becomes a single `_`,
/// underscores are collapsed and trimmed, the result is lowercased, and a
/// leading underscore the name already had is kept. The extension is only
/// lowercased and stripped of surrounding whitespace.
///
/// Names starting with `.` are returned untouched unless `include_dot_files`
/// is set, in which case the dot is treated as structure and the remainder is
/// canonicalized (a space directly after the dot survives as `_`). `.` and
/// `..` are never rewritten.
///
/// Idempotent: feeding the output back in yields the same output.
pub fn canonicalize(name: &str, include_dot_files: bool) -> RenameDecision {
    if let Some(rest) = name.strip_prefix('.') {
        if !include_dot_files || name == "." || name == ".." {
            return RenameDecision::unchanged(name);
        }
        let keep_leading = rest.starts_with(' ');
        let mut inner = canonical_name(rest);
        if keep_leading && !inner.starts_with('_') {
            inner.insert(0, '_');
        }
        return RenameDecision::from_parts(name, format!(".{inner}"));
    }
    RenameDecision::from_parts(name, canonical_name(name))
}

/// Split at the last dot and reassemble from the canonical stem and the
/// case-folded extension.
fn canonical_name(name: &str) -> String {
    let (stem, extension) = match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    };
    // Odd characters in the extension are left alone; only case and
    // surrounding whitespace are normalized.
    let ext = extension.to_lowercase();
    format!("{}{}", canonical_stem(stem), ext.trim())
}

fn canonical_stem(stem: &str) -> String {
    let had_leading_underscore = stem.starts_with('_');

    let mut out = String::with_capacity(stem.len());
    let mut prev_underscore = false;
    for ch in stem.chars() {
        if ch == '&' {
            out.push_str("and");
            prev_underscore = false;
        } else if ch.is_ascii_alphanumeric() || ch == '.' {
            out.push(ch.to_ascii_lowercase());
            prev_underscore = false;
        } else if !prev_underscore {
            // '_' itself and every unsafe run fold into one '_'
            out.push('_');
            prev_underscore = true;
        }
    }

    let trimmed = out.trim_matches('_');
    let mut canonical = if trimmed.is_empty() {
        // An empty stem would leave the extension (or nothing at all) as the
        // whole name, so it is padded to a single underscore.
        String::from("_")
    } else {
        trimmed.to_string()
    };
    if had_leading_underscore && !canonical.starts_with('_') {
        canonical.insert(0, '_');
    }
    canonical
}
