use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::GenerationError;

/// Serialize `value` as pretty JSON and write it atomically.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), GenerationError> {
    let data = serde_json::to_vec_pretty(value)?;
    write_with_atomic(path, |writer| writer.write_all(&data))?;
    Ok(())
}

/// Stream content into a sibling temp file, then rename it over `path`.
///
/// Returns the number of bytes written. On any failure the destination is
/// untouched and the temp file is removed.
pub fn write_with_atomic<F>(path: &Path, fill: F) -> Result<u64, GenerationError>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let result = fill_and_rename(&tmp_path, path, fill);
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn fill_and_rename<F>(tmp_path: &Path, path: &Path, fill: F) -> Result<u64, GenerationError>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(tmp_path)?;
    let mut writer = CountingWriter::new(BufWriter::new(file));

    fill(&mut writer)?;
    writer.flush()?;
    let bytes = writer.bytes_written();
    let file = writer
        .into_inner()
        .into_inner()
        .map_err(|err| err.into_error())?;
    file.sync_all()?;

    std::fs::rename(tmp_path, path)?;
    Ok(bytes)
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| GenerationError::InvalidPath(path.display().to_string()))?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
