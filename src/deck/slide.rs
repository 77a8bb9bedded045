use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::deck::fields::FieldValues;
use crate::deck::template::TemplateKind;
use crate::foundation::error::{CardstockError, CardstockResult};

/// Fewest slides an exportable deck may have.
pub const EXPORT_MIN_SLIDES: usize = 6;
/// Most slides an exportable deck may have.
pub const EXPORT_MAX_SLIDES: usize = 12;

/// One authored slide: a template plus its field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Which template renders this slide.
    pub template: TemplateKind,
    /// Locked slides keep their position in the editor (cover and CTA).
    #[serde(default)]
    pub locked: bool,
    /// Author note; never rendered.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// Field values consumed by the template.
    #[serde(default)]
    pub fields: FieldValues,
}

impl Slide {
    /// Empty slide for `template`.
    pub fn new(template: TemplateKind) -> Self {
        Self {
            template,
            locked: false,
            note: String::new(),
            fields: FieldValues::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Builder-style lock flag.
    pub fn lock(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// Ordered slide sequence; the unit of export.
///
/// This is the JSON-facing, human-edited document. The engine renders any
/// deck slide by slide; only export applies the sequencing gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Deck from slides in order.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Parse a deck document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardstockResult<Self> {
        let deck: Deck = serde_json::from_reader(r)
            .map_err(|e| CardstockError::validation(format!("parse deck JSON: {e}")))?;
        Ok(deck)
    }

    /// Parse a deck document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardstockResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardstockError::validation(format!("open deck JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the deck as pretty-printed JSON.
    pub fn to_writer<W: std::io::Write>(&self, w: W) -> CardstockResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| CardstockError::validation(format!("serialize deck JSON: {e}")))
    }

    /// Write the deck document to a file.
    pub fn to_path(&self, path: impl AsRef<Path>) -> CardstockResult<()> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| {
            CardstockError::validation(format!("create deck JSON '{}': {e}", path.display()))
        })?;
        self.to_writer(BufWriter::new(f))
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Check the export gate: slide count within bounds, a cover first,
    /// a call to action last.
    ///
    /// Rendering individual slides never consults this; only export does.
    pub fn ensure_exportable(&self) -> CardstockResult<()> {
        let n = self.slides.len();
        if n < EXPORT_MIN_SLIDES || n > EXPORT_MAX_SLIDES {
            return Err(CardstockError::validation(format!(
                "deck has {n} slides, exportable decks need {EXPORT_MIN_SLIDES} to {EXPORT_MAX_SLIDES}"
            )));
        }
        if self.slides[0].template != TemplateKind::Cover {
            return Err(CardstockError::validation(
                "deck must open with a cover slide",
            ));
        }
        if self.slides[n - 1].template != TemplateKind::Cta {
            return Err(CardstockError::validation(
                "deck must close with a call to action slide",
            ));
        }
        Ok(())
    }

    /// Smallest meaningful starting deck: cover, one insight, CTA.
    ///
    /// Deliberately below the export gate so authors must add substance
    /// before an export succeeds.
    pub fn custom_skeleton() -> Self {
        Self::new(vec![
            Slide::new(TemplateKind::Cover).lock(),
            Slide::new(TemplateKind::Insight),
            Slide::new(TemplateKind::Cta).lock(),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/slide.rs"]
mod tests;
