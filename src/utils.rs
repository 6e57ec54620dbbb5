use std::fs;
use std::path::Path;

/// OSC8 file:// hyperlink so generated files are clickable in the terminal
pub fn file_link(path: &Path) -> String {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!(
        "\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\",
        target.display(),
        path.display()
    )
}
