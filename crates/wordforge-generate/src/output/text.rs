use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use wordforge_core::Wordlist;

use crate::errors::GenerationError;
use crate::output::atomic::write_with_atomic;

/// Destination chosen by the save collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Path(PathBuf),
    /// No destination was chosen; nothing is written.
    Cancelled,
}

/// Where a wordlist was written and how large it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub path: PathBuf,
    pub words: usize,
    pub bytes: u64,
}

/// Suggested file name for a wordlist generated at `now`.
pub fn default_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("wordlist_{}.txt", now.format("%Y-%m-%d_%H-%M"))
}

/// Write one word per line to any writer, each line ending in `\n`.
pub fn write_lines<W: Write + ?Sized>(writer: &mut W, wordlist: &Wordlist) -> io::Result<()> {
    for word in wordlist {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write a wordlist as UTF-8 text, replacing `path` atomically.
pub fn write_wordlist(path: &Path, wordlist: &Wordlist) -> Result<u64, GenerationError> {
    write_with_atomic(path, |writer| write_lines(writer, wordlist))
}

/// Save a wordlist to the chosen target. A cancelled target is not an error.
pub fn save_wordlist(
    target: &SaveTarget,
    wordlist: &Wordlist,
) -> Result<Option<SaveOutcome>, GenerationError> {
    let SaveTarget::Path(path) = target else {
        info!("save cancelled; nothing written");
        return Ok(None);
    };
    let bytes = write_wordlist(path, wordlist)?;
    info!(path = %path.display(), words = wordlist.len(), bytes, "wordlist saved");
    Ok(Some(SaveOutcome {
        path: path.clone(),
        words: wordlist.len(),
        bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn file_name_uses_minute_precision() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(7, 5, 59))
            .expect("valid timestamp")
            .and_utc();
        assert_eq!(default_file_name::<Utc>(&now), "wordlist_2024-03-09_07-05.txt");
    }

    #[test]
    fn every_line_ends_with_newline() {
        let wordlist = Wordlist::from_set(
            ["beta", "alpha"].iter().map(|word| word.to_string()).collect(),
        );
        let mut buffer = Vec::new();
        write_lines(&mut buffer, &wordlist).expect("write to buffer");
        assert_eq!(buffer, b"alpha\nbeta\n");
    }
}
