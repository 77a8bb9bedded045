use super::*;

#[test]
fn registry_covers_every_variant() {
    assert_eq!(TemplateKind::ALL.len(), 14);
    for kind in TemplateKind::ALL {
        let def = kind.def();
        assert!(!def.name.is_empty());
        assert!(!def.fields.is_empty(), "{kind:?} has no fields");
        for f in def.fields {
            assert!(!f.key.is_empty());
            assert!(f.max_chars > 0);
        }
    }
}

#[test]
fn field_keys_are_unique_within_a_template() {
    for kind in TemplateKind::ALL {
        let fields = kind.def().fields;
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert_ne!(a.key, b.key, "{kind:?} repeats key {}", a.key);
            }
        }
    }
}

#[test]
fn parse_round_trips_serde_names() {
    for kind in TemplateKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        let name = json.trim_matches('"');
        assert_eq!(TemplateKind::parse(name).unwrap(), kind);
    }
}

#[test]
fn parse_accepts_aliases_and_rejects_unknown() {
    assert_eq!(TemplateKind::parse("2up").unwrap(), TemplateKind::TwoUp);
    assert_eq!(TemplateKind::parse("3up").unwrap(), TemplateKind::ThreeUp);
    assert_eq!(TemplateKind::parse(" COVER ").unwrap(), TemplateKind::Cover);
    assert!(TemplateKind::parse("hero").is_err());
    assert!(TemplateKind::parse("").is_err());
}

#[test]
fn index_suppression_set_is_exact() {
    let suppressed: Vec<_> = TemplateKind::ALL
        .into_iter()
        .filter(|k| k.suppresses_index())
        .collect();
    assert_eq!(
        suppressed,
        vec![
            TemplateKind::Cover,
            TemplateKind::Punchline,
            TemplateKind::Divider,
            TemplateKind::Cta,
        ]
    );
}

#[test]
fn placeholder_lookup_tolerates_unknown_keys() {
    let def = TemplateKind::Cover.def();
    assert!(!def.placeholder("title").is_empty());
    assert_eq!(def.placeholder("no_such_field"), "");
    assert!(def.spec("subtitle").is_some());
    assert!(def.spec("no_such_field").is_none());
}

#[test]
fn framework_shape_is_a_closed_choice() {
    let def = TemplateKind::Framework.def();
    let spec = def.spec("shape").unwrap();
    let crate::deck::fields::FieldKind::Choice(options) = spec.kind else {
        panic!("expected choice kind");
    };
    assert_eq!(options, &["flow", "quadrant", "cycle", "hierarchy"]);
}
