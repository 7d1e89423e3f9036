//! Line-oriented reading and writing of the input and output files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{PolyError, Result};

/// Reads every line of the input file, in order.
///
/// A line that is exactly empty, a single `;`, or a single space fails the
/// whole read; so does a file with no lines at all. Windows line endings are
/// tolerated.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    debug!("reading input lines from {}", path.display());

    let file = File::open(path).map_err(|source| PolyError::io("open input file", path, source))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PolyError::io("read input file", path, source))?;
        if line.is_empty() || line == ";" || line == " " {
            return Err(PolyError::InvalidLine {
                line_number: index + 1,
            });
        }
        lines.push(line);
    }

    if lines.is_empty() {
        return Err(PolyError::EmptyInput);
    }

    debug!("collected {} input lines", lines.len());
    Ok(lines)
}

/// Writes one result string per line to the output file, truncating any
/// previous content.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    debug!("writing {} result lines to {}", lines.len(), path.display());

    let file =
        File::create(path).map_err(|source| PolyError::io("create output file", path, source))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")
            .map_err(|source| PolyError::io("write output file", path, source))?;
    }
    writer
        .flush()
        .map_err(|source| PolyError::io("flush output file", path, source))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn reads_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "2;3\n1;2;3;4\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["2;3".to_string(), "1;2;3;4".to_string()]);
    }

    #[test]
    fn tolerates_crlf_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "2;3\r\n4;5\r\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["2;3".to_string(), "4;5".to_string()]);
    }

    #[test]
    fn blank_line_fails_the_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "1;2\n\n3;4\n").unwrap();

        let result = read_lines(&path);
        assert!(matches!(
            result,
            Err(PolyError::InvalidLine { line_number: 2 })
        ));
    }

    #[test]
    fn lone_separator_and_lone_space_fail_the_read() {
        let dir = tempdir().unwrap();

        let semicolon = dir.path().join("semicolon.txt");
        fs::write(&semicolon, ";\n").unwrap();
        assert!(matches!(
            read_lines(&semicolon),
            Err(PolyError::InvalidLine { line_number: 1 })
        ));

        let space = dir.path().join("space.txt");
        fs::write(&space, " \n").unwrap();
        assert!(matches!(
            read_lines(&space),
            Err(PolyError::InvalidLine { line_number: 1 })
        ));
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "").unwrap();

        assert!(matches!(read_lines(&path), Err(PolyError::EmptyInput)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");

        match read_lines(&path) {
            Err(PolyError::Io { context, .. }) => assert_eq!(context, "open input file"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn write_truncates_and_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        fs::write(&path, "stale content\n").unwrap();

        let lines = vec!["first".to_string(), "second".to_string()];
        write_lines(&path, &lines).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }
}
