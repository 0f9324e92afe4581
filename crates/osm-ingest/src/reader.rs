//! Streaming reader for the tags of one attribute key.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use osm_model::TagRecord;
use tracing::debug;

use crate::error::IngestError;
use crate::stream::{TagElement, TagStream};

/// Lazy, single-pass sequence of the `node`/`way` tags whose key equals a target key.
///
/// The underlying source is owned by the reader and released when the reader
/// is dropped, whether the sequence was exhausted or abandoned early. The
/// reader stops after the first XML error.
pub struct TagReader<R> {
    stream: TagStream<R>,
    target_key: String,
    emitted: usize,
    skipped: usize,
}

impl TagReader<BufReader<File>> {
    /// Open an OSM XML file for a single streaming pass.
    pub fn open(
        path: impl AsRef<Path>,
        target_key: impl Into<String>,
    ) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IngestError::unreadable(path, e))?;
        let target_key = target_key.into();
        debug!(path = %path.display(), target_key = %target_key, "opened OSM source");
        Ok(Self::from_reader(BufReader::new(file), target_key))
    }
}

impl<R: BufRead> TagReader<R> {
    pub fn from_reader(inner: R, target_key: impl Into<String>) -> Self {
        Self {
            stream: TagStream::new(inner),
            target_key: target_key.into(),
            emitted: 0,
            skipped: 0,
        }
    }

    /// Records yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Node/way tags skipped so far because a `k` or `v` attribute was missing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn accept(&mut self, tag: TagElement) -> Option<TagRecord> {
        let owner = tag.owner?;
        match (tag.key, tag.value) {
            (Some(key), Some(value)) => {
                if key != self.target_key {
                    return None;
                }
                self.emitted += 1;
                Some(TagRecord { owner, key, value })
            }
            (Some(key), None) => {
                if key == self.target_key {
                    self.skipped += 1;
                    debug!(owner = %owner, key = %key, "skipping tag without value");
                }
                None
            }
            (None, _) => {
                self.skipped += 1;
                debug!(owner = %owner, "skipping tag without key");
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for TagReader<R> {
    type Item = Result<TagRecord, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let tag = match self.stream.next_tag() {
                Ok(Some(tag)) => tag,
                Ok(None) => return None,
                Err(error) => return Some(Err(error)),
            };
            if let Some(record) = self.accept(tag) {
                return Some(Ok(record));
            }
        }
    }
}

impl<R: BufRead> FusedIterator for TagReader<R> {}
