//! Filesystem seam: glob expansion and recursive removal.
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use glob::MatchOptions;

use crate::error::{ExpansionError, RemoveError};

/// Glob and delete primitives used by the cleanup hook.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Expand `rule` relative to `base` and return every matching path.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid or a directory could not
    /// be read; in that case the rule contributes no paths at all.
    fn glob(&self, base: &Path, rule: &str) -> Result<Vec<PathBuf>, ExpansionError>;

    /// Remove a file, symlink, or directory tree.
    ///
    /// # Errors
    ///
    /// Returns a classified [`RemoveError`] on failure.
    fn remove(&self, path: &Path) -> Result<(), RemoveError>;
}

/// [`Filesystem`] backed by the real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

/// Matching behaves like POSIX `glob(3)`: case-sensitive, wildcards never
/// cross `/`, and hidden entries must be named with a literal leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Build the glob pattern for `rule` anchored at `base`.
///
/// `base` is escaped so that brackets or asterisks in the install path are
/// matched literally. Leading separators on `rule` are dropped so that
/// `"/tests"` and `"tests"` name the same entry.
#[must_use]
pub fn anchored_pattern(base: &Path, rule: &str) -> String {
    let base = base.to_string_lossy();
    let base = base.trim_end_matches(['/', MAIN_SEPARATOR]);
    let rule = posix_pattern(rule.trim_start_matches(['/', MAIN_SEPARATOR]));
    format!("{}{MAIN_SEPARATOR}{rule}", glob::Pattern::escape(base))
}

/// Rewrite a `glob(3)` rule into `glob` crate syntax.
///
/// The crate gives `**` recursive meaning and rejects an unclosed `[`;
/// `glob(3)` has neither. Runs of `*` collapse to a single `*` and an
/// unclosed `[` is escaped so it matches itself.
fn posix_pattern(rule: &str) -> String {
    let mut out = String::with_capacity(rule.len());
    let mut rest = rule;
    while let Some(c) = rest.chars().next() {
        match c {
            '*' => {
                out.push('*');
                rest = rest.trim_start_matches('*');
            }
            '[' => {
                let closed = bracket_len(rest);
                let (head, tail) = rest
                    .split_at_checked(closed.unwrap_or(1))
                    .unwrap_or((rest, ""));
                out.push_str(if closed.is_some() { head } else { "[[]" });
                rest = tail;
            }
            _ => {
                out.push(c);
                rest = rest.get(c.len_utf8()..).unwrap_or_default();
            }
        }
    }
    out
}

/// Byte length of the bracket expression opening `s`, if it is closed.
fn bracket_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('[')?;
    let members = body.strip_prefix('!').unwrap_or(body);
    // A `]` leading the member list is a member, not the close.
    let first = members.chars().next()?.len_utf8();
    let close = members.get(first..)?.find(']')?;
    Some(s.len() - members.len() + first + close + 1)
}

impl Filesystem for StdFilesystem {
    fn glob(&self, base: &Path, rule: &str) -> Result<Vec<PathBuf>, ExpansionError> {
        let pattern = anchored_pattern(base, rule);
        let paths =
            glob::glob_with(&pattern, MATCH_OPTIONS).map_err(|e| ExpansionError::InvalidPattern {
                pattern: rule.to_string(),
                message: e.msg.to_string(),
            })?;
        paths
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ExpansionError::Read {
                pattern: rule.to_string(),
                message: e.to_string(),
            })
    }

    fn remove(&self, path: &Path) -> Result<(), RemoveError> {
        let classify = |e: std::io::Error| RemoveError::from_io(path.to_path_buf(), &e);
        let metadata = std::fs::symlink_metadata(path).map_err(classify)?;
        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            // Directory symlinks on Windows need remove_dir; never follow.
            std::fs::remove_file(path)
                .or_else(|_| std::fs::remove_dir(path))
                .map_err(classify)
        } else if file_type.is_dir() {
            std::fs::remove_dir_all(path).map_err(classify)
        } else {
            std::fs::remove_file(path).map_err(classify)
        }
    }
}
