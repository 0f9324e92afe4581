//! Tag key shape counts across a whole document.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use osm_model::{KeyCategory, KeyTypeCounts};
use regex::Regex;
use tracing::{debug, info};

use crate::error::IngestError;
use crate::stream::TagStream;

// The key shape rules accept one final newline after the key.
static LOWER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]|_)*\n?$").expect("Invalid lower key regex"));

static LOWER_COLON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]|_)*:([a-z]|_)*\n?$").expect("Invalid lower_colon key regex")
});

static PROBLEM_CHARS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[=+/&<>;'"?%#$@,. \t\r\n]"#).expect("Invalid problemchars key regex")
});

/// Classify a tag key. Rules are tried in order and the first match wins.
pub fn classify_key(key: &str) -> KeyCategory {
    if LOWER_REGEX.is_match(key) {
        KeyCategory::Lower
    } else if LOWER_COLON_REGEX.is_match(key) {
        KeyCategory::LowerColon
    } else if PROBLEM_CHARS_REGEX.is_match(key) {
        KeyCategory::ProblemChars
    } else {
        KeyCategory::Other
    }
}

/// Count the key categories of every `<tag>` in an OSM file, whatever its parent.
pub fn scan_key_types(path: impl AsRef<Path>) -> Result<KeyTypeCounts, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IngestError::unreadable(path, e))?;
    let counts = count_key_types(BufReader::new(file))?;
    info!(path = %path.display(), tags = counts.total(), "key scan complete");
    Ok(counts)
}

pub fn count_key_types<R: BufRead>(inner: R) -> Result<KeyTypeCounts, IngestError> {
    let mut stream = TagStream::new(inner);
    let mut counts = KeyTypeCounts::new();
    while let Some(tag) = stream.next_tag()? {
        let Some(key) = tag.key else {
            debug!("skipping tag without key");
            continue;
        };
        counts.increment(classify_key(&key));
    }
    Ok(counts)
}
