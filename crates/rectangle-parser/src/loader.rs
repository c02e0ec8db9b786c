//! XML loading - turn `<rectangle>` records into [`Rectangle`]s.
//!
//! The document is streamed with quick-xml rather than built into a tree.
//! Any element named `rectangle`, at any depth, is a record; its first
//! `<id>`, `<height>`, `<width>`, `<x>` and `<y>` descendants are the fields.
//!
//! A bad record never fails the load. It is skipped with a warning and
//! reported in [`LoadedRectangles::skipped`]. Only a document that is not
//! well-formed XML (or a file that cannot be read) is an error.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use thiserror::Error;

use crate::geometry::Rectangle;

const RECORD_TAG: &[u8] = b"rectangle";

/// Error type for loading a rectangle document.
///
/// ## Rust Lesson #4: `thiserror`
///
/// `#[derive(Error)]` writes the `Display` and `std::error::Error` impls
/// from the `#[error(...)]` strings, and `#[source]` wires up `.source()`
/// so callers can walk the cause chain.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("XML parse error at position {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
}

/// Why a single record was left out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("missing or empty <{0}>")]
    MissingField(&'static str),
    #[error("<{field}> is not an integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("<{field}> must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },
    #[error("id {0} has already been used")]
    DuplicateId(i64),
}

/// A record that did not make it into the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record among all `<rectangle>` elements, from 0.
    pub index: usize,
    pub reason: SkipReason,
}

/// The result of a load: accepted rectangles in document order, plus what was dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadedRectangles {
    pub rectangles: Vec<Rectangle>,
    pub skipped: Vec<SkippedRecord>,
}

/// The five child elements a record must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Height,
    Width,
    X,
    Y,
}

impl Field {
    const ALL: [Field; 5] = [Field::Id, Field::Height, Field::Width, Field::X, Field::Y];

    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"id" => Some(Field::Id),
            b"height" => Some(Field::Height),
            b"width" => Some(Field::Width),
            b"x" => Some(Field::X),
            b"y" => Some(Field::Y),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Height => "height",
            Field::Width => "width",
            Field::X => "x",
            Field::Y => "y",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Raw text collected for one `<rectangle>` while streaming.
#[derive(Default)]
struct RecordBuilder {
    values: [Option<String>; 5],
    /// Field whose text is currently being read, with the nesting depth it opened at.
    open: Option<(Field, usize)>,
}

impl RecordBuilder {
    fn open_field(&mut self, field: Field, depth: usize) {
        // Only the first occurrence of each field counts.
        if self.open.is_none() && self.values[field.index()].is_none() {
            self.values[field.index()] = Some(String::new());
            self.open = Some((field, depth));
        }
    }

    fn close_field(&mut self, depth: usize) {
        if matches!(self.open, Some((_, d)) if d == depth) {
            self.open = None;
        }
    }

    /// `<width/>` marks the field as seen but leaves it empty.
    fn empty_field(&mut self, field: Field) {
        if self.values[field.index()].is_none() {
            self.values[field.index()] = Some(String::new());
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some((field, _)) = self.open {
            if let Some(value) = self.values[field.index()].as_mut() {
                value.push_str(text);
            }
        }
    }

    fn parse(&self, field: Field) -> Result<i64, SkipReason> {
        let raw = self.values[field.index()]
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(SkipReason::MissingField(field.name()))?;

        // Records carry 32-bit integers; coordinates widen to i64 afterwards.
        raw.parse::<i32>()
            .map(i64::from)
            .map_err(|_| SkipReason::InvalidNumber {
                field: field.name(),
                value: raw.to_string(),
            })
    }

    fn build(&self) -> Result<Rectangle, SkipReason> {
        let mut parsed = [0i64; 5];
        for field in Field::ALL {
            parsed[field.index()] = self.parse(field)?;
        }
        let [id, height, width, x, y] = parsed;

        for (field, value) in [(Field::Height, height), (Field::Width, width)] {
            if value <= 0 {
                return Err(SkipReason::NonPositive { field: field.name(), value });
            }
        }

        Ok(Rectangle::with_id(id, height, width, x, y))
    }
}

/// Accepted rectangles plus the ids seen so far.
struct Collector {
    loaded: LoadedRectangles,
    ids: HashSet<i64>,
    records_seen: usize,
}

impl Collector {
    fn new() -> Self {
        Self {
            loaded: LoadedRectangles::default(),
            ids: HashSet::new(),
            records_seen: 0,
        }
    }

    fn finish_record(&mut self, record: &RecordBuilder) {
        let index = self.records_seen;
        self.records_seen += 1;

        let outcome = record.build().and_then(|rect| {
            if self.ids.insert(rect.id()) {
                Ok(rect)
            } else {
                Err(SkipReason::DuplicateId(rect.id()))
            }
        });

        match outcome {
            Ok(rect) => self.loaded.rectangles.push(rect),
            Err(reason) => {
                warn!("Rectangle at index {} was not processed: {}", index, reason);
                self.loaded.skipped.push(SkippedRecord { index, reason });
            }
        }
    }
}

/// Load rectangles from XML text.
pub fn load_rectangles(xml: &str) -> Result<LoadedRectangles, LoadError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut collector = Collector::new();
    let mut record: Option<RecordBuilder> = None;
    // Depth of the current element, and the depth the open record started at.
    let mut depth = 0usize;
    let mut record_depth = 0usize;

    let mut buf = Vec::new();
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| LoadError::Xml {
                position: reader.error_position(),
                source,
            })?;

        match event {
            Event::Start(ref e) => {
                depth += 1;
                let name = e.name();
                let tag = name.as_ref();
                if let Some(builder) = record.as_mut() {
                    if let Some(field) = Field::from_tag(tag) {
                        builder.open_field(field, depth);
                    }
                } else if tag == RECORD_TAG {
                    record = Some(RecordBuilder::default());
                    record_depth = depth;
                }
            }
            Event::Empty(ref e) => {
                let name = e.name();
                let tag = name.as_ref();
                if let Some(builder) = record.as_mut() {
                    if let Some(field) = Field::from_tag(tag) {
                        builder.empty_field(field);
                    }
                } else if tag == RECORD_TAG {
                    // `<rectangle/>` is a record with every field missing.
                    collector.finish_record(&RecordBuilder::default());
                }
            }
            Event::Text(ref e) => {
                if let Some(builder) = record.as_mut() {
                    let text = e.unescape().map_err(|source| LoadError::Xml {
                        position: reader.buffer_position(),
                        source,
                    })?;
                    builder.push_text(&text);
                }
            }
            Event::CData(ref e) => {
                if let Some(builder) = record.as_mut() {
                    builder.push_text(&String::from_utf8_lossy(e));
                }
            }
            Event::End(_) => {
                if let Some(builder) = record.as_mut() {
                    if depth == record_depth {
                        collector.finish_record(builder);
                        record = None;
                    } else {
                        builder.close_field(depth);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let loaded = collector.loaded;
    debug!(
        "Loaded {} rectangles ({} skipped)",
        loaded.rectangles.len(),
        loaded.skipped.len()
    );
    Ok(loaded)
}

/// Read a file and load its rectangles.
pub fn load_rectangles_from_path<P: AsRef<Path>>(path: P) -> Result<LoadedRectangles, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_rectangles(&content)
}

// ============================================================================
// TESTS
// ============================================================================
