use cardstock::compile::compile_slide;
use cardstock::deck::fields::FieldValues;
use cardstock::fonts::store::TextStyle;
use cardstock::{TemplateKind, TextMeasure};

// Compilation needs only a width oracle, so plans can be inspected with
// no font files at all.
struct TypewriterMeasure(f64);

impl TextMeasure for TypewriterMeasure {
    fn text_width(&mut self, _style: &TextStyle, text: &str) -> f64 {
        text.chars().count() as f64 * self.0
    }
}

fn main() {
    let fields: FieldValues = [
        ("title", "Margins over volume"),
        ("steps", "scope, quote, ship, review"),
        ("shape", "cycle"),
    ]
    .into_iter()
    .collect();

    let mut measure = TypewriterMeasure(14.0);
    for kind in [TemplateKind::Cover, TemplateKind::Framework] {
        let plan = compile_slide(kind, &fields, None, &mut measure);
        print!("{}", plan.dump());
    }
}
