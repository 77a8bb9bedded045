use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{CardstockError, CardstockResult};

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    /// Red channel.
    pub(crate) r: u8,
    /// Green channel.
    pub(crate) g: u8,
    /// Blue channel.
    pub(crate) b: u8,
    /// Alpha channel.
    pub(crate) a: u8,
}

/// Closed set of typeface roles the templates draw with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontVariant {
    /// Heavy display face for titles and oversized figures.
    DisplayBold,
    /// Workhorse body face.
    BodyRegular,
    /// Bold body face, used for emphasis and labels.
    BodyBold,
    /// Italic body face, used for quotes.
    BodyItalic,
}

impl FontVariant {
    /// Every variant, in catalog order.
    pub const ALL: [FontVariant; 4] = [
        FontVariant::DisplayBold,
        FontVariant::BodyRegular,
        FontVariant::BodyBold,
        FontVariant::BodyItalic,
    ];

    /// Conventional file name inside a font directory.
    pub fn file_name(self) -> &'static str {
        match self {
            FontVariant::DisplayBold => "display-bold.ttf",
            FontVariant::BodyRegular => "body-regular.ttf",
            FontVariant::BodyBold => "body-bold.ttf",
            FontVariant::BodyItalic => "body-italic.ttf",
        }
    }

    /// Next variant to try when this one is missing.
    ///
    /// `BodyRegular` has no substitute: without it the catalog cannot be
    /// prepared at all.
    pub fn substitute(self) -> Option<FontVariant> {
        match self {
            FontVariant::DisplayBold => Some(FontVariant::BodyBold),
            FontVariant::BodyBold => Some(FontVariant::BodyRegular),
            FontVariant::BodyItalic => Some(FontVariant::BodyRegular),
            FontVariant::BodyRegular => None,
        }
    }

    fn weight(self) -> parley::style::FontWeight {
        match self {
            FontVariant::DisplayBold | FontVariant::BodyBold => parley::style::FontWeight::BOLD,
            FontVariant::BodyRegular | FontVariant::BodyItalic => {
                parley::style::FontWeight::NORMAL
            }
        }
    }

    fn style(self) -> parley::style::FontStyle {
        match self {
            FontVariant::BodyItalic => parley::style::FontStyle::Italic,
            _ => parley::style::FontStyle::Normal,
        }
    }
}

/// Text styling for a single run: variant, size, tracking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Typeface role.
    pub variant: FontVariant,
    /// Font size in unscaled pixels.
    pub size: f32,
    /// Additional letter spacing in unscaled pixels.
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Style in the given variant with no extra tracking.
    pub fn new(variant: FontVariant, size: f32) -> Self {
        Self {
            variant,
            size,
            letter_spacing: 0.0,
        }
    }

    /// [`FontVariant::DisplayBold`] at `size`.
    pub fn display(size: f32) -> Self {
        Self::new(FontVariant::DisplayBold, size)
    }

    /// [`FontVariant::BodyRegular`] at `size`.
    pub fn body(size: f32) -> Self {
        Self::new(FontVariant::BodyRegular, size)
    }

    /// [`FontVariant::BodyBold`] at `size`.
    pub fn bold(size: f32) -> Self {
        Self::new(FontVariant::BodyBold, size)
    }

    /// [`FontVariant::BodyItalic`] at `size`.
    pub fn italic(size: f32) -> Self {
        Self::new(FontVariant::BodyItalic, size)
    }

    /// Same style with explicit letter spacing.
    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// Width oracle used by the pure layout code.
///
/// The production implementation is the Parley-backed [`TextShaper`];
/// tests substitute deterministic fakes so wrapping and diagram geometry
/// stay checkable without font files.
pub trait TextMeasure {
    /// Full advance width of `text` in unscaled pixels, trailing
    /// whitespace included.
    fn text_width(&mut self, style: &TextStyle, text: &str) -> f64;
}

#[derive(Clone, Debug)]
struct PreparedFace {
    resolved: FontVariant,
    bytes: Arc<Vec<u8>>,
    font: vello_cpu::peniko::FontData,
}

/// Prepared, immutable font set for the closed variant roles.
///
/// `prepare` front-loads all font IO: it reads every variant file from a
/// directory, substitutes missing optional variants down their chain, and
/// fails only when no body face exists at all. Holding a catalog is the
/// "fonts ready" signal; everything downstream is pure compute.
#[derive(Debug)]
pub struct FontCatalog {
    faces: Vec<PreparedFace>,
}

impl FontCatalog {
    /// Load the variant set from `dir`, substituting missing variants.
    pub fn prepare(dir: impl AsRef<Path>) -> CardstockResult<Self> {
        let dir = dir.as_ref();
        let mut raw: Vec<Option<Arc<Vec<u8>>>> = vec![None; FontVariant::ALL.len()];
        for v in FontVariant::ALL {
            let path = dir.join(v.file_name());
            match std::fs::read(&path) {
                Ok(bytes) => raw[v as usize] = Some(Arc::new(bytes)),
                Err(e) => {
                    if v == FontVariant::BodyRegular {
                        return Err(CardstockError::font(format!(
                            "required font '{}' unreadable: {e}",
                            path.display()
                        )));
                    }
                    tracing::warn!(
                        variant = ?v,
                        path = %path.display(),
                        error = %e,
                        "font variant missing, substituting"
                    );
                }
            }
        }

        let mut faces = Vec::with_capacity(FontVariant::ALL.len());
        for v in FontVariant::ALL {
            let mut pick = v;
            let bytes = loop {
                if let Some(b) = &raw[pick as usize] {
                    break b.clone();
                }
                pick = pick.substitute().ok_or_else(|| {
                    CardstockError::font(format!("no usable font for {v:?}"))
                })?;
            };
            let font = vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                0,
            );
            faces.push(PreparedFace {
                resolved: pick,
                bytes,
                font,
            });
        }
        Ok(Self { faces })
    }

    /// Build a catalog from in-memory font bytes, `BodyRegular` required.
    ///
    /// Follows the same substitution rules as [`FontCatalog::prepare`].
    pub fn from_bytes(
        fonts: impl IntoIterator<Item = (FontVariant, Vec<u8>)>,
    ) -> CardstockResult<Self> {
        let mut raw: Vec<Option<Arc<Vec<u8>>>> = vec![None; FontVariant::ALL.len()];
        for (v, bytes) in fonts {
            raw[v as usize] = Some(Arc::new(bytes));
        }
        if raw[FontVariant::BodyRegular as usize].is_none() {
            return Err(CardstockError::font("BodyRegular font bytes are required"));
        }

        let mut faces = Vec::with_capacity(FontVariant::ALL.len());
        for v in FontVariant::ALL {
            let mut pick = v;
            let bytes = loop {
                if let Some(b) = &raw[pick as usize] {
                    break b.clone();
                }
                pick = pick.substitute().ok_or_else(|| {
                    CardstockError::font(format!("no usable font for {v:?}"))
                })?;
            };
            if pick != v {
                tracing::warn!(variant = ?v, resolved = ?pick, "font variant substituted");
            }
            let font = vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                0,
            );
            faces.push(PreparedFace {
                resolved: pick,
                bytes,
                font,
            });
        }
        Ok(Self { faces })
    }

    /// Variant actually backing `v` after substitution.
    pub fn resolved(&self, v: FontVariant) -> FontVariant {
        self.faces[v as usize].resolved
    }

    /// True when every variant is backed by its own file.
    pub fn is_complete(&self) -> bool {
        FontVariant::ALL.iter().all(|&v| self.resolved(v) == v)
    }

    fn face(&self, v: FontVariant) -> &PreparedFace {
        &self.faces[v as usize]
    }
}

/// Stateful Parley shaper bound to a prepared catalog.
///
/// Shaping and glyph drawing share the same font bytes per variant, so
/// glyph ids from a layout are always valid against the font data handed
/// to the rasterizer.
pub(crate) struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    families: Vec<String>,
    fonts: Vec<vello_cpu::peniko::FontData>,
}

impl TextShaper {
    /// Register every catalog face with fresh Parley contexts.
    pub(crate) fn new(catalog: &FontCatalog) -> CardstockResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let layout_ctx = parley::LayoutContext::new();

        let mut families = Vec::with_capacity(FontVariant::ALL.len());
        let mut fonts = Vec::with_capacity(FontVariant::ALL.len());
        for v in FontVariant::ALL {
            let face = catalog.face(v);
            let registered = font_ctx.collection.register_fonts(
                parley::fontique::Blob::from(face.bytes.as_ref().clone()),
                None,
            );
            let family_id = registered.first().map(|(id, _)| *id).ok_or_else(|| {
                CardstockError::font(format!(
                    "no font families registered from '{}'",
                    face.resolved.file_name()
                ))
            })?;
            let family_name = font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| CardstockError::font("registered font family has no name"))?
                .to_string();
            families.push(family_name);
            fonts.push(face.font.clone());
        }

        Ok(Self {
            font_ctx,
            layout_ctx,
            families,
            fonts,
        })
    }

    /// vello_cpu font data for a variant.
    pub(crate) fn font_data(&self, v: FontVariant) -> &vello_cpu::peniko::FontData {
        &self.fonts[v as usize]
    }

    /// Shape a single run of text as one unbroken line.
    pub(crate) fn shape(
        &mut self,
        style: &TextStyle,
        text: &str,
        brush: TextBrushRgba8,
    ) -> CardstockResult<parley::Layout<TextBrushRgba8>> {
        if !style.size.is_finite() || style.size <= 0.0 {
            return Err(CardstockError::validation(
                "text size must be finite and > 0",
            ));
        }

        let family = self.families[style.variant as usize].clone();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            style.variant.weight(),
        ));
        builder.push_default(parley::style::StyleProperty::FontStyle(
            style.variant.style(),
        ));
        if style.letter_spacing != 0.0 {
            builder.push_default(parley::style::StyleProperty::LetterSpacing(
                style.letter_spacing,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasure for TextShaper {
    fn text_width(&mut self, style: &TextStyle, text: &str) -> f64 {
        self.shape(style, text, TextBrushRgba8::default())
            .map(|layout| f64::from(layout.full_width()))
            .unwrap_or(0.0)
    }
}

/// Deterministic measurer for tests: every char advances a fixed amount.
#[cfg(test)]
pub(crate) struct FixedAdvance {
    advance: f64,
}

#[cfg(test)]
impl FixedAdvance {
    pub(crate) fn new(advance: f64) -> Self {
        Self { advance }
    }
}

#[cfg(test)]
impl TextMeasure for FixedAdvance {
    fn text_width(&mut self, _style: &TextStyle, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/store.rs"]
mod tests;
