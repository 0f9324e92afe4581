//! Event loop shared by the tag reader and the key-type scan.

use std::borrow::Cow;
use std::io::BufRead;

use osm_model::OwnerKind;
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};

use crate::error::IngestError;

/// A `<tag>` element with whatever `k`/`v` attributes could be decoded.
#[derive(Debug)]
pub(crate) struct TagElement {
    /// Enclosing node or way, `None` for tags under any other element.
    pub owner: Option<OwnerKind>,
    pub key: Option<String>,
    pub value: Option<String>,
}

pub(crate) struct TagStream<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    owner: Option<OwnerKind>,
    finished: bool,
}

impl<R: BufRead> TagStream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: Reader::from_reader(inner),
            buf: Vec::new(),
            owner: None,
            finished: false,
        }
    }

    /// Advance to the next `<tag>` element. Returns `Ok(None)` at end of input.
    ///
    /// After an error or end of input every further call returns `Ok(None)`.
    pub fn next_tag(&mut self) -> Result<Option<TagElement>, IngestError> {
        if self.finished {
            return Ok(None);
        }
        loop {
            self.buf.clear();
            let decoder = self.reader.decoder();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    self.finished = true;
                    return Err(IngestError::Xml {
                        position: self.reader.error_position(),
                        source,
                    });
                }
            };
            match event {
                Event::Start(element) => {
                    if let Some(kind) = OwnerKind::from_element_name(element.name().as_ref()) {
                        self.owner = Some(kind);
                    } else if element.name().as_ref() == b"tag" {
                        return Ok(Some(read_tag(&element, self.owner, decoder)));
                    }
                }
                Event::Empty(element) => {
                    if element.name().as_ref() == b"tag" {
                        return Ok(Some(read_tag(&element, self.owner, decoder)));
                    }
                }
                Event::End(element) => {
                    if OwnerKind::from_element_name(element.name().as_ref()).is_some() {
                        self.owner = None;
                    }
                }
                Event::Eof => {
                    self.finished = true;
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

fn read_tag(element: &BytesStart<'_>, owner: Option<OwnerKind>, decoder: Decoder) -> TagElement {
    let mut key = None;
    let mut value = None;
    for attribute in element.attributes() {
        // An undecodable attribute leaves its slot empty and the tag is treated as malformed.
        let Ok(attribute) = attribute else {
            continue;
        };
        let decoded = || {
            attribute
                .decode_and_unescape_value(decoder)
                .ok()
                .map(Cow::into_owned)
        };
        match attribute.key.as_ref() {
            b"k" => key = decoded(),
            b"v" => value = decoded(),
            _ => {}
        }
    }
    TagElement { owner, key, value }
}
