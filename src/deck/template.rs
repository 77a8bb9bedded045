use serde::{Deserialize, Serialize};

use crate::deck::fields::FieldSpec;
use crate::foundation::error::{CardstockError, CardstockResult};

/// Closed set of slide templates.
///
/// The registry is this enum: adding a template means adding a variant
/// and extending the exhaustive matches, so an unknown template id cannot
/// reach the render path. Deck documents spell variants in snake_case
/// (`"two_up"`, `"cta"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Opening slide: three bands, hook title, accent rule.
    Cover,
    /// One oversized statement, vertically centered.
    Punchline,
    /// Kicker, headline, and supporting body.
    Insight,
    /// Numbered list of 2 to 5 items.
    Numbered,
    /// Two titled cards side by side.
    TwoUp,
    /// Three titled columns.
    ThreeUp,
    /// Checklist with tick squares.
    Checklist,
    /// Labeled diagram: flow, quadrant, cycle, or hierarchy.
    Framework,
    /// Two contrasted halves with headers.
    Comparison,
    /// Large pulled quote with attribution.
    Quote,
    /// One oversized figure with label and source.
    Evidence,
    /// Section divider with a part label.
    Divider,
    /// Closing call to action.
    Cta,
    /// Background and guides only, free slot for manual artwork.
    Blank,
}

impl TemplateKind {
    /// Every template, in registry order.
    pub const ALL: [TemplateKind; 14] = [
        TemplateKind::Cover,
        TemplateKind::Punchline,
        TemplateKind::Insight,
        TemplateKind::Numbered,
        TemplateKind::TwoUp,
        TemplateKind::ThreeUp,
        TemplateKind::Checklist,
        TemplateKind::Framework,
        TemplateKind::Comparison,
        TemplateKind::Quote,
        TemplateKind::Evidence,
        TemplateKind::Divider,
        TemplateKind::Cta,
        TemplateKind::Blank,
    ];

    /// Static definition: display name and field schema.
    pub fn def(self) -> &'static TemplateDef {
        match self {
            TemplateKind::Cover => &COVER,
            TemplateKind::Punchline => &PUNCHLINE,
            TemplateKind::Insight => &INSIGHT,
            TemplateKind::Numbered => &NUMBERED,
            TemplateKind::TwoUp => &TWO_UP,
            TemplateKind::ThreeUp => &THREE_UP,
            TemplateKind::Checklist => &CHECKLIST,
            TemplateKind::Framework => &FRAMEWORK,
            TemplateKind::Comparison => &COMPARISON,
            TemplateKind::Quote => &QUOTE,
            TemplateKind::Evidence => &EVIDENCE,
            TemplateKind::Divider => &DIVIDER,
            TemplateKind::Cta => &CTA,
            TemplateKind::Blank => &BLANK,
        }
    }

    /// Stable snake_case id as spelled in deck documents.
    pub fn id(self) -> &'static str {
        match self {
            TemplateKind::Cover => "cover",
            TemplateKind::Punchline => "punchline",
            TemplateKind::Insight => "insight",
            TemplateKind::Numbered => "numbered",
            TemplateKind::TwoUp => "two_up",
            TemplateKind::ThreeUp => "three_up",
            TemplateKind::Checklist => "checklist",
            TemplateKind::Framework => "framework",
            TemplateKind::Comparison => "comparison",
            TemplateKind::Quote => "quote",
            TemplateKind::Evidence => "evidence",
            TemplateKind::Divider => "divider",
            TemplateKind::Cta => "cta",
            TemplateKind::Blank => "blank",
        }
    }

    /// Human-facing template name.
    pub fn display_name(self) -> &'static str {
        self.def().name
    }

    /// Templates that never carry a position label, regardless of where
    /// they sit in the deck.
    pub fn suppresses_index(self) -> bool {
        matches!(
            self,
            TemplateKind::Cover
                | TemplateKind::Punchline
                | TemplateKind::Divider
                | TemplateKind::Cta
        )
    }

    /// Parse a template id as written in documents or on the CLI.
    pub fn parse(s: &str) -> CardstockResult<Self> {
        let kind = s.trim().to_ascii_lowercase();
        if kind.is_empty() {
            return Err(CardstockError::validation("template id must be non-empty"));
        }

        match kind.as_str() {
            "cover" => Ok(TemplateKind::Cover),
            "punchline" => Ok(TemplateKind::Punchline),
            "insight" => Ok(TemplateKind::Insight),
            "numbered" => Ok(TemplateKind::Numbered),
            "two_up" | "twoup" | "2up" => Ok(TemplateKind::TwoUp),
            "three_up" | "threeup" | "3up" => Ok(TemplateKind::ThreeUp),
            "checklist" => Ok(TemplateKind::Checklist),
            "framework" => Ok(TemplateKind::Framework),
            "comparison" => Ok(TemplateKind::Comparison),
            "quote" => Ok(TemplateKind::Quote),
            "evidence" => Ok(TemplateKind::Evidence),
            "divider" => Ok(TemplateKind::Divider),
            "cta" => Ok(TemplateKind::Cta),
            "blank" => Ok(TemplateKind::Blank),
            other => Err(CardstockError::validation(format!(
                "unknown template '{other}'"
            ))),
        }
    }
}

/// Static template definition.
#[derive(Debug)]
pub struct TemplateDef {
    /// Display name.
    pub name: &'static str,
    /// Ordered field schema.
    pub fields: &'static [FieldSpec],
}

impl TemplateDef {
    /// Spec for `key`, if the template has such a field.
    pub fn spec(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Placeholder text for `key`, empty when the field is unknown.
    pub fn placeholder(&self, key: &str) -> &'static str {
        self.spec(key).map(|f| f.placeholder).unwrap_or("")
    }
}

static COVER: TemplateDef = TemplateDef {
    name: "Cover",
    fields: &[
        FieldSpec::text("title", "Title", 80, "The hook that earns the next tap"),
        FieldSpec::text("subtitle", "Subtitle", 120, "One sentence of supporting promise"),
        FieldSpec::text("tagline", "Tagline", 40, "@yourhandle"),
    ],
};

static PUNCHLINE: TemplateDef = TemplateDef {
    name: "Punchline",
    fields: &[
        FieldSpec::multiline("text", "Statement", 180, "One idea, stated plainly"),
        FieldSpec::text("emphasis", "Emphasized words", 40, ""),
    ],
};

static INSIGHT: TemplateDef = TemplateDef {
    name: "Insight",
    fields: &[
        FieldSpec::text("kicker", "Kicker", 28, "THE SHIFT"),
        FieldSpec::text("headline", "Headline", 90, "Name the insight in one line"),
        FieldSpec::multiline("body", "Body", 260, "Back it up in two or three sentences."),
    ],
};

static NUMBERED: TemplateDef = TemplateDef {
    name: "Numbered list",
    fields: &[
        FieldSpec::text("title", "Title", 70, "Five moves that matter"),
        FieldSpec::text("item1", "Item 1", 110, "First move"),
        FieldSpec::text("item2", "Item 2", 110, "Second move"),
        FieldSpec::text("item3", "Item 3", 110, "Third move"),
        FieldSpec::text("item4", "Item 4", 110, ""),
        FieldSpec::text("item5", "Item 5", 110, ""),
    ],
};

static TWO_UP: TemplateDef = TemplateDef {
    name: "Two up",
    fields: &[
        FieldSpec::text("title", "Title", 70, "Two ways to read this"),
        FieldSpec::text("left_title", "Left card title", 40, "Before"),
        FieldSpec::text("left_body", "Left card body", 160, ""),
        FieldSpec::text("right_title", "Right card title", 40, "After"),
        FieldSpec::text("right_body", "Right card body", 160, ""),
    ],
};

static THREE_UP: TemplateDef = TemplateDef {
    name: "Three up",
    fields: &[
        FieldSpec::text("title", "Title", 70, "Three levers"),
        FieldSpec::text("a_title", "Column A title", 32, "One"),
        FieldSpec::text("a_body", "Column A body", 120, ""),
        FieldSpec::text("b_title", "Column B title", 32, "Two"),
        FieldSpec::text("b_body", "Column B body", 120, ""),
        FieldSpec::text("c_title", "Column C title", 32, "Three"),
        FieldSpec::text("c_body", "Column C body", 120, ""),
    ],
};

static CHECKLIST: TemplateDef = TemplateDef {
    name: "Checklist",
    fields: &[
        FieldSpec::text("title", "Title", 70, "Before you ship"),
        FieldSpec::text("item1", "Item 1", 110, "First check"),
        FieldSpec::text("item2", "Item 2", 110, "Second check"),
        FieldSpec::text("item3", "Item 3", 110, "Third check"),
        FieldSpec::text("item4", "Item 4", 110, ""),
        FieldSpec::text("item5", "Item 5", 110, ""),
    ],
};

static FRAMEWORK: TemplateDef = TemplateDef {
    name: "Framework",
    fields: &[
        FieldSpec::text("title", "Title", 70, "How the loop closes"),
        FieldSpec::list("steps", "Steps", 200, "Draft, Edit, Ship", ','),
        FieldSpec::choice(
            "shape",
            "Shape",
            &["flow", "quadrant", "cycle", "hierarchy"],
            "flow",
        ),
        FieldSpec::text("caption", "Caption", 90, ""),
    ],
};

static COMPARISON: TemplateDef = TemplateDef {
    name: "Comparison",
    fields: &[
        FieldSpec::text("title", "Title", 70, "Pick a side"),
        FieldSpec::text("left_label", "Left label", 24, "Myth"),
        FieldSpec::text("left_body", "Left body", 170, ""),
        FieldSpec::text("right_label", "Right label", 24, "Reality"),
        FieldSpec::text("right_body", "Right body", 170, ""),
    ],
};

static QUOTE: TemplateDef = TemplateDef {
    name: "Quote",
    fields: &[
        FieldSpec::multiline("quote", "Quote", 240, "Something worth repeating"),
        FieldSpec::text("attribution", "Attribution", 40, "Name"),
        FieldSpec::text("role", "Role", 60, ""),
    ],
};

static EVIDENCE: TemplateDef = TemplateDef {
    name: "Evidence",
    fields: &[
        FieldSpec::text("stat", "Stat", 16, "3x"),
        FieldSpec::text("label", "Label", 90, "What the number means"),
        FieldSpec::text("source", "Source", 90, ""),
    ],
};

static DIVIDER: TemplateDef = TemplateDef {
    name: "Divider",
    fields: &[
        FieldSpec::text("part", "Part", 12, "01"),
        FieldSpec::text("title", "Title", 80, "Next section"),
    ],
};

static CTA: TemplateDef = TemplateDef {
    name: "Call to action",
    fields: &[
        FieldSpec::text("headline", "Headline", 90, "Want more like this?"),
        FieldSpec::text("body", "Body", 170, ""),
        FieldSpec::text("action", "Action", 40, "Follow for the next drop"),
        FieldSpec::text("handle", "Handle", 30, "@yourhandle"),
    ],
};

static BLANK: TemplateDef = TemplateDef {
    name: "Blank",
    fields: &[FieldSpec::multiline("body", "Body", 260, "")],
};

#[cfg(test)]
#[path = "../../tests/unit/deck/template.rs"]
mod tests;
