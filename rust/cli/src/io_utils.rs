//! File and stdin helpers shared by the commands.
//!
//! Round histories may be plain `.jsonl` or Zstandard-compressed
//! `.jsonl.zst`; [`read_text_auto`] picks the decoder from the extension.

use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Reads one trimmed line. `None` on EOF or read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use tricard_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  fold \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("fold"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a text file, decompressing `.zst` and dropping a leading BOM.
pub fn read_text_auto(path: &Path) -> Result<String, String> {
    let is_zst = path.extension().is_some_and(|e| e == "zst");
    let mut content = if is_zst {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Round history files under `path`: the path itself when it is a file,
/// otherwise every `.jsonl` / `.jsonl.zst` below it, sorted.
pub fn collect_history_files(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }
    let mut files = Vec::new();
    let mut stack = vec![path.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for p in entries.filter_map(Result::ok).map(|e| e.path()) {
            if p.is_dir() {
                stack.push(p);
            } else if p
                .file_name()
                .and_then(|f| f.to_str())
                .is_some_and(|f| f.ends_with(".jsonl") || f.ends_with(".jsonl.zst"))
            {
                files.push(p);
            }
        }
    }
    files.sort();
    files
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_line_is_not_eof() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some(String::new()));
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn bom_is_stripped() {
        let mut s = "\u{feff}{}".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "{}");
    }

    #[test]
    fn reads_compressed_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl.zst");
        let packed = zstd::stream::encode_all("{\"a\":1}\n".as_bytes(), 0).unwrap();
        std::fs::write(&path, packed).unwrap();
        assert_eq!(read_text_auto(&path).unwrap(), "{\"a\":1}\n");
    }

    #[test]
    fn collects_histories_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b.jsonl");
        ensure_parent_dir(&nested).unwrap();
        std::fs::write(&nested, "").unwrap();
        std::fs::write(dir.path().join("c.jsonl.zst"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        let files = collect_history_files(dir.path());
        assert_eq!(files.len(), 2);
    }
}
