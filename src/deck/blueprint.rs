use crate::deck::slide::{Deck, Slide};
use crate::deck::template::TemplateKind;

/// One slot in a blueprint: a template plus editor guidance.
#[derive(Debug, Clone, Copy)]
pub struct SlotDef {
    /// Template for this slot.
    pub template: TemplateKind,
    /// Whether the slot is position-locked in the editor.
    pub locked: bool,
    /// Authoring note seeded into the slide.
    pub note: &'static str,
}

impl SlotDef {
    const fn slot(template: TemplateKind, note: &'static str) -> Self {
        Self {
            template,
            locked: false,
            note,
        }
    }

    const fn locked_slot(template: TemplateKind, note: &'static str) -> Self {
        Self {
            template,
            locked: true,
            note,
        }
    }
}

/// Named, ordered starting structure for a new deck.
///
/// Blueprints are read-only factories: instantiating one yields a fresh
/// deck with empty fields, locked cover and CTA, and notes carrying the
/// intent of each slot. Every built-in blueprint satisfies the export
/// gate as created.
#[derive(Debug, Clone, Copy)]
pub struct SequenceBlueprint {
    /// Stable blueprint id.
    pub name: &'static str,
    /// One-line description for pickers.
    pub description: &'static str,
    /// Slot sequence.
    pub slots: &'static [SlotDef],
}

impl SequenceBlueprint {
    /// All built-in blueprints.
    pub fn catalog() -> &'static [SequenceBlueprint] {
        &CATALOG
    }

    /// Look up a blueprint by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static SequenceBlueprint> {
        let needle = name.trim();
        CATALOG.iter().find(|bp| bp.name.eq_ignore_ascii_case(needle))
    }

    /// Build a fresh deck from this blueprint.
    pub fn instantiate(&self) -> Deck {
        Deck::new(
            self.slots
                .iter()
                .map(|slot| {
                    let mut slide = Slide::new(slot.template);
                    slide.locked = slot.locked;
                    slide.note = slot.note.to_string();
                    slide
                })
                .collect(),
        )
    }
}

static CATALOG: [SequenceBlueprint; 4] = [
    SequenceBlueprint {
        name: "explainer",
        description: "Teach one concept end to end: claim, proof, framework, close.",
        slots: &[
            SlotDef::locked_slot(TemplateKind::Cover, "Lead with the payoff, not the topic."),
            SlotDef::slot(TemplateKind::Insight, "Name the core idea in one line."),
            SlotDef::slot(TemplateKind::Numbered, "Break the idea into 3-5 moves."),
            SlotDef::slot(TemplateKind::Framework, "Show how the moves connect."),
            SlotDef::slot(TemplateKind::TwoUp, "Contrast doing it wrong vs right."),
            SlotDef::slot(TemplateKind::Evidence, "One number that makes it real."),
            SlotDef::slot(TemplateKind::Punchline, "Restate the idea so it sticks."),
            SlotDef::locked_slot(TemplateKind::Cta, "Ask for exactly one action."),
        ],
    },
    SequenceBlueprint {
        name: "myth-buster",
        description: "Take a common belief apart and replace it.",
        slots: &[
            SlotDef::locked_slot(TemplateKind::Cover, "State the myth as the hook."),
            SlotDef::slot(TemplateKind::Punchline, "The myth, said out loud."),
            SlotDef::slot(TemplateKind::Comparison, "Myth vs reality, side by side."),
            SlotDef::slot(TemplateKind::Insight, "Why the myth survives."),
            SlotDef::slot(TemplateKind::Evidence, "The number that breaks it."),
            SlotDef::slot(TemplateKind::Quote, "Borrowed authority, if you have it."),
            SlotDef::locked_slot(TemplateKind::Cta, "Tell readers what to do instead."),
        ],
    },
    SequenceBlueprint {
        name: "playbook",
        description: "A sectioned, reference-grade walkthrough.",
        slots: &[
            SlotDef::locked_slot(TemplateKind::Cover, "Promise the complete playbook."),
            SlotDef::slot(TemplateKind::Divider, "Part one."),
            SlotDef::slot(TemplateKind::Checklist, "Prerequisites before starting."),
            SlotDef::slot(TemplateKind::ThreeUp, "The three pillars."),
            SlotDef::slot(TemplateKind::Divider, "Part two."),
            SlotDef::slot(TemplateKind::Framework, "The full system in one diagram."),
            SlotDef::slot(TemplateKind::Insight, "The mistake everyone makes."),
            SlotDef::slot(TemplateKind::Evidence, "Proof it works."),
            SlotDef::slot(TemplateKind::Punchline, "The rule to remember."),
            SlotDef::locked_slot(TemplateKind::Cta, "Close with the save/share ask."),
        ],
    },
    SequenceBlueprint {
        name: "story",
        description: "The shortest exportable arc: hook, turn, proof, close.",
        slots: &[
            SlotDef::locked_slot(TemplateKind::Cover, "Open mid-scene."),
            SlotDef::slot(TemplateKind::Quote, "The line that started it."),
            SlotDef::slot(TemplateKind::Insight, "What it taught you."),
            SlotDef::slot(TemplateKind::Evidence, "What changed, in numbers."),
            SlotDef::slot(TemplateKind::Punchline, "The takeaway."),
            SlotDef::locked_slot(TemplateKind::Cta, "Invite the conversation."),
        ],
    },
];

#[cfg(test)]
#[path = "../../tests/unit/deck/blueprint.rs"]
mod tests;
