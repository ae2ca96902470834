//! Output file naming.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Path for the result of `profile_name` applied to `input`:
/// `<dir>/<input stem>_<profile name>.jpg`, with spaces and path separators
/// in the name turned into underscores. Without `output_dir` the file lands
/// next to the input.
pub fn output_path(input: &Path, output_dir: Option<&Path>, profile_name: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let suffix: String = profile_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();

    let dir = match output_dir {
        Some(dir) => dir,
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new(".")),
    };
    dir.join(format!("{stem}_{suffix}.jpg"))
}

/// `path`, or `<stem>_2.jpg`, `<stem>_3.jpg`, ... when an earlier profile of
/// the same run already claimed it. The returned path is added to `taken`.
pub fn claim_path(path: PathBuf, taken: &mut HashSet<PathBuf>) -> PathBuf {
    if taken.insert(path.clone()) {
        return path;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut n = 2;
    loop {
        let candidate = path.with_file_name(format!("{stem}_{n}.jpg"));
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
