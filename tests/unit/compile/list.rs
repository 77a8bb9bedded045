use super::*;
use crate::compile::plan::SlidePlan;
use crate::deck::fields::FieldValues;
use crate::deck::template::TemplateKind;
use crate::fonts::store::FixedAdvance;

fn marker_baselines(plan: &SlidePlan) -> Vec<(String, f64)> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            crate::compile::plan::DrawOp::TextRun { origin, text, .. }
                if text.ends_with('.') && text.len() <= 3 =>
            {
                Some((text.clone(), origin.y))
            }
            _ => None,
        })
        .collect()
}

fn stroke_count(plan: &SlidePlan) -> usize {
    plan.ops
        .iter()
        .filter(|op| matches!(op, crate::compile::plan::DrawOp::StrokePath { .. }))
        .count()
}

#[test]
fn spacing_table_tightens_with_count() {
    assert_eq!(item_spacing(1), 150.0);
    assert_eq!(item_spacing(2), 150.0);
    assert_eq!(item_spacing(3), 150.0);
    assert_eq!(item_spacing(4), 120.0);
    assert_eq!(item_spacing(5), 96.0);
}

#[test]
fn numbered_markers_step_by_the_density_spacing() {
    let mut measure = FixedAdvance::new(10.0);
    let fields: FieldValues = [
        ("title", "T"),
        ("item1", "one"),
        ("item2", "two"),
        ("item3", "three"),
        ("item4", "four"),
        ("item5", "five"),
    ]
    .into_iter()
    .collect();
    let mut cx = PlanCx::new(&mut measure, TemplateKind::Numbered.def(), &fields);
    plan_numbered(&mut cx);

    let markers = marker_baselines(&cx.into_plan());
    let labels: Vec<&str> = markers.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(labels, ["1.", "2.", "3.", "4.", "5."]);
    assert_eq!(markers[1].1 - markers[0].1, 96.0);
    assert_eq!(markers[4].1 - markers[0].1, 4.0 * 96.0);
}

#[test]
fn three_items_use_the_wide_spacing() {
    let mut measure = FixedAdvance::new(10.0);
    let fields: FieldValues = [("item1", "a"), ("item2", "b"), ("item3", "c")]
        .into_iter()
        .collect();
    let mut cx = PlanCx::new(&mut measure, TemplateKind::Numbered.def(), &fields);
    plan_numbered(&mut cx);

    let markers = marker_baselines(&cx.into_plan());
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[1].1 - markers[0].1, 150.0);
}

#[test]
fn blank_items_fall_back_to_three_placeholders() {
    let mut measure = FixedAdvance::new(10.0);
    let fields = FieldValues::new();
    let mut cx = PlanCx::new(&mut measure, TemplateKind::Numbered.def(), &fields);
    plan_numbered(&mut cx);

    let markers = marker_baselines(&cx.into_plan());
    let labels: Vec<&str> = markers.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(labels, ["1.", "2.", "3."]);
}

#[test]
fn checklist_draws_a_box_and_check_per_item() {
    let mut measure = FixedAdvance::new(10.0);
    let fields: FieldValues = [("item1", "a"), ("item2", "b")].into_iter().collect();

    let mut cx = PlanCx::new(&mut measure, TemplateKind::Checklist.def(), &fields);
    plan_checklist(&mut cx);
    assert_eq!(stroke_count(&cx.into_plan()), 4);

    let mut cx = PlanCx::new(&mut measure, TemplateKind::Numbered.def(), &fields);
    plan_numbered(&mut cx);
    assert_eq!(stroke_count(&cx.into_plan()), 0);
}
