//! Discovery of the project root and its application directories.
//!
//! A CodeIgniter monorepo keeps several applications side by side, each with
//! its own `models/` tree:
//!
//! ```text
//! {workspace}/CI3/app_common/models/...
//! {workspace}/CI3/app/models/...
//! {workspace}/CI3/app_admin/models/...
//! ```
//!
//! The `CI3/` level is optional.  Shared models live in `app_common`, which
//! is therefore always probed first.
use std::cmp::Ordering;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Layout;

/// The project root and its application directories in probe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRoots {
    pub project_root: PathBuf,
    pub app_dirs: Vec<String>,
}

/// Locate the project root under `workspace_root` and list its application
/// directories.
///
/// Never fails: when the listing is empty or cannot be read, the layout's
/// fallback roots are returned instead.
pub fn find_application_roots(workspace_root: &Path, layout: &Layout) -> ApplicationRoots {
    let project_root = project_root(workspace_root, layout);

    let mut app_dirs = match list_app_dirs(&project_root, &layout.app_prefix) {
        Ok(dirs) => dirs,
        Err(e) => {
            warn!(
                "cannot list application folders in {}: {}",
                project_root.display(),
                e
            );
            Vec::new()
        }
    };

    if app_dirs.is_empty() {
        debug!(
            "no application folders under {}, using {:?}",
            project_root.display(),
            layout.fallback_roots
        );
        app_dirs = layout.fallback_roots.clone();
    } else {
        sort_app_roots(&mut app_dirs, &layout.common_root);
    }

    ApplicationRoots {
        project_root,
        app_dirs,
    }
}

/// `{workspace}/{subproject_dir}` when that directory exists, otherwise the
/// workspace root itself.
pub fn project_root(workspace_root: &Path, layout: &Layout) -> PathBuf {
    let subproject = workspace_root.join(&layout.subproject_dir);
    if !layout.subproject_dir.is_empty() && subproject.exists() {
        subproject
    } else {
        workspace_root.to_path_buf()
    }
}

fn list_app_dirs(project_root: &Path, prefix: &str) -> io::Result<Vec<String>> {
    let entries = std::fs::read_dir(project_root)?.map(
        |entry| -> io::Result<(OsString, bool)> {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            Ok((entry.file_name(), is_dir))
        },
    );
    Ok(app_dir_names(entries, prefix))
}

/// Names of the directories among `entries` that start with `prefix`.
/// Entries that cannot be read are skipped.
fn app_dir_names(
    entries: impl IntoIterator<Item = io::Result<(OsString, bool)>>,
    prefix: &str,
) -> Vec<String> {
    let mut dirs = Vec::new();
    for entry in entries {
        let (file_name, is_dir) = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        if !is_dir {
            continue;
        }
        if let Some(name) = file_name.to_str()
            && name.starts_with(prefix)
        {
            dirs.push(name.to_string());
        }
    }
    dirs
}

/// Sort application roots: `common_root` first, the rest in natural
/// (case-insensitive, punctuation-before-alphanumerics) order.
pub fn sort_app_roots(dirs: &mut [String], common_root: &str) {
    dirs.sort_by(|a, b| compare_app_roots(a, b, common_root));
}

/// Total order over application root names.
pub fn compare_app_roots(a: &str, b: &str, common_root: &str) -> Ordering {
    match (a == common_root, b == common_root) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => locale_compare(a, b),
    }
}

/// Approximates a Unicode collation for directory names: punctuation sorts
/// before digits, digits before letters, letters compare case-insensitively
/// with lower case winning ties.  Equal keys fall back to code point order.
fn locale_compare(a: &str, b: &str) -> Ordering {
    fn primary(c: char) -> (u8, char) {
        let class = if c.is_alphabetic() {
            2
        } else if c.is_numeric() {
            1
        } else {
            0
        };
        (class, c.to_lowercase().next().unwrap_or(c))
    }

    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut dirs: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        sort_app_roots(&mut dirs, "app_common");
        dirs
    }

    #[test]
    fn common_root_sorts_first() {
        assert_eq!(
            sorted(&["app", "app_common", "appx"]),
            vec!["app_common", "app", "appx"]
        );
    }

    #[test]
    fn case_is_ignored_before_code_points() {
        assert_eq!(sorted(&["app_B", "app_a"]), vec!["app_a", "app_B"]);
        assert_eq!(sorted(&["App", "app"]), vec!["app", "App"]);
    }

    #[test]
    fn punctuation_sorts_before_letters_and_digits() {
        assert_eq!(sorted(&["appa", "app1", "app_x"]), vec!["app_x", "app1", "appa"]);
    }

    #[test]
    fn unreadable_entries_are_skipped() {
        let entries = vec![
            Ok((OsString::from("app_common"), true)),
            Err(io::Error::other("permission denied")),
            Ok((OsString::from("app"), true)),
            Ok((OsString::from("app.php"), false)),
            Ok((OsString::from("system"), true)),
        ];
        assert_eq!(app_dir_names(entries, "app"), vec!["app_common", "app"]);
    }

    #[test]
    fn duplicates_are_stable() {
        assert_eq!(
            sorted(&["app_common", "app", "app_common"]),
            vec!["app_common", "app_common", "app"]
        );
    }
}
