//! Slide layout compiler.
//!
//! Compilation is pure: a template, its field values, an optional deck
//! position, and a width oracle go in; a flat [`plan::SlidePlan`] of draw
//! ops in unscaled canvas coordinates comes out. No fonts are touched
//! here beyond measurement, which keeps every layout decision testable
//! with a deterministic fake measurer.

pub(crate) mod chrome;
pub(crate) mod context;
pub(crate) mod diagram;
/// Plan fingerprints for determinism checks and duplicate elision.
pub mod fingerprint;
/// Draw ops and slide plans.
pub mod plan;
pub(crate) mod templates;
pub(crate) mod theme;

use crate::compile::context::PlanCx;
use crate::deck::fields::FieldValues;
use crate::deck::template::TemplateKind;
use crate::fonts::store::TextMeasure;
use crate::foundation::core::SlideIndex;

/// Compile one slide into its draw plan.
///
/// `index` is the position label to draw, already filtered by the caller;
/// the compiler renders whatever it is handed and applies no suppression
/// policy of its own. Field values are never validated here: blank fields
/// fall back or drop out per template, over-length values flow through.
pub fn compile_slide(
    kind: TemplateKind,
    fields: &FieldValues,
    index: Option<SlideIndex>,
    measure: &mut dyn TextMeasure,
) -> plan::SlidePlan {
    let mut cx = PlanCx::new(measure, kind.def(), fields);
    match kind {
        TemplateKind::Cover => templates::cover::plan(&mut cx),
        TemplateKind::Punchline => templates::punchline::plan(&mut cx),
        TemplateKind::Insight => templates::insight::plan(&mut cx),
        TemplateKind::Numbered => templates::list::plan_numbered(&mut cx),
        TemplateKind::TwoUp => templates::columns::plan_two_up(&mut cx),
        TemplateKind::ThreeUp => templates::columns::plan_three_up(&mut cx),
        TemplateKind::Checklist => templates::list::plan_checklist(&mut cx),
        TemplateKind::Framework => templates::framework::plan(&mut cx),
        TemplateKind::Comparison => templates::comparison::plan(&mut cx),
        TemplateKind::Quote => templates::quote::plan(&mut cx),
        TemplateKind::Evidence => templates::evidence::plan(&mut cx),
        TemplateKind::Divider => templates::divider::plan(&mut cx),
        TemplateKind::Cta => templates::cta::plan(&mut cx),
        TemplateKind::Blank => templates::blank::plan(&mut cx),
    }
    chrome::index_label(&mut cx, index);
    cx.into_plan()
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compile_slide.rs"]
mod tests;
