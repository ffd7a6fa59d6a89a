//! Word list reader.
//!
//! One word per line. The line terminator (`\n`, or `\r\n`) is consumed and is
//! not part of the word; nothing else is touched, so case and alphabet are
//! whatever the file holds. Empty lines carry no word and are skipped.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Iterator over the words of a line-oriented word list.
#[derive(Debug)]
pub struct WordLines<R> {
    path: PathBuf,
    lines: std::io::Split<R>,
}

impl<R: BufRead> Iterator for WordLines<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(Error::io(&self.path, err))),
            };
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if !line.is_empty() {
                return Some(Ok(line));
            }
        }
    }
}

/// Open the word list at `path`.
///
/// A missing file is reported as [`Error::SourceNotFound`] before any word is
/// read.
pub fn open_word_list(path: impl AsRef<Path>) -> Result<WordLines<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| Error::io(path, err))?;
    Ok(WordLines { path: path.to_path_buf(), lines: BufReader::new(file).split(b'\n') })
}

/// Read the whole word list at `path` into memory.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    open_word_list(path)?.collect()
}

/// Read words from an already open source.
pub fn read_words<R: BufRead>(reader: R) -> WordLines<R> {
    WordLines { path: PathBuf::from("<reader>"), lines: reader.split(b'\n') }
}
