//! Loading and saving the buffer.

use crate::buffer::TextBuffer;
use crate::error::{EditorError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// Read `path` into a fresh, clean buffer.
///
/// Each line loses its trailing `\n` and `\r` bytes. Content does not have
/// to be valid UTF-8.
pub fn open(path: &Path, tab_stop: usize) -> Result<TextBuffer> {
    let open_error = |source| EditorError::Open {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    let mut reader = BufReader::new(file);
    let mut buffer = TextBuffer::new(tab_stop);
    buffer.set_filename(path);

    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).map_err(open_error)? == 0 {
            break;
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        buffer.insert_row(buffer.numrows(), &line);
    }

    buffer.mark_clean();
    tracing::info!(path = %path.display(), rows = buffer.numrows(), "opened file");
    Ok(buffer)
}

/// Write the buffer to its file, truncating it to the serialized length.
///
/// Returns the number of bytes written, or `None` if the buffer has no
/// file name. The dirty flag is left to the caller.
pub fn save(buffer: &TextBuffer) -> io::Result<Option<usize>> {
    let Some(path) = buffer.filename() else {
        return Ok(None);
    };

    let bytes = buffer.rows_to_string();
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .mode(0o644)
        .open(path)?;
    file.set_len(bytes.len() as u64)?;
    file.write_all(&bytes)?;
    file.flush()?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved file");
    Ok(Some(bytes.len()))
}
