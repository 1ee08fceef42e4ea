use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Reads the whole file; `\n` and `\r\n` terminators are stripped.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Truncates `path` and writes every line followed by the host line separator.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(LINE_SEPARATOR.as_bytes())?;
    }
    writer.flush()
}
