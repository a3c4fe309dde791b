//! Name resolution tests.
//!
//! These tests verify that names inside hints resolve through the scope chain
//! (global → class → class/mapped type) and that override hints are
//! substituted as copies without recursing forever.

use rstest::rstest;
use typehint::{Direction, HintNode};

use crate::helpers::hint_assertions::*;
use crate::helpers::table_fixtures::gui;

// =============================================================================
// CLASSES AND ENUMS
// =============================================================================

#[test]
fn test_resolve_global_class() {
    let mut fixture = gui();
    let root = tree(&mut fixture.table, "Widget", Direction::In);
    assert_eq!(root, Some(HintNode::Class(fixture.widget)));
}

#[rstest]
#[case("Outer.Inner")]
#[case("Outer::Inner")]
#[case(" Outer::Inner ")]
fn test_resolve_nested_class(#[case] text: &str) {
    let mut fixture = gui();
    let root = tree(&mut fixture.table, text, Direction::In);
    assert_eq!(root, Some(HintNode::Class(fixture.inner)));
}

#[test]
fn test_leading_global_scope_is_stripped() {
    let mut fixture = gui();
    let table = &mut fixture.table;
    assert_eq!(
        tree(table, "::Widget", Direction::In),
        Some(HintNode::Class(fixture.widget))
    );
    assert_eq!(
        tree(table, "::Outer::Inner", Direction::In),
        Some(HintNode::Class(fixture.inner))
    );
}

#[test]
fn test_dot_and_colon_paths_resolve_identically() {
    let mut fixture = gui();
    let dotted = tree(&mut fixture.table, "Outer.Inner.Mode", Direction::In);
    let scoped = tree(&mut fixture.table, "Outer::Inner::Mode", Direction::In);
    assert_eq!(dotted, scoped);
    assert_eq!(dotted, Some(HintNode::Enum(fixture.mode)));
}

#[test]
fn test_resolve_enums() {
    let mut fixture = gui();
    let table = &mut fixture.table;
    assert_eq!(
        tree(table, "Color", Direction::In),
        Some(HintNode::Enum(fixture.color))
    );
    assert_eq!(
        tree(table, "Outer.Orientation", Direction::In),
        Some(HintNode::Enum(fixture.orientation))
    );
    assert_eq!(
        tree(table, "QFlags.Option", Direction::In),
        Some(HintNode::Enum(fixture.flag_option))
    );
}

#[test]
fn test_scoped_enum_wins_over_global_enum() {
    let mut fixture = gui();
    assert_eq!(
        tree(&mut fixture.table, "Object.Color", Direction::In),
        Some(HintNode::Enum(fixture.core_color))
    );
}

#[test]
fn test_global_enum_visible_in_class_scope() {
    let mut fixture = gui();
    assert_eq!(
        tree(&mut fixture.table, "Outer.Color", Direction::In),
        Some(HintNode::Enum(fixture.color))
    );
}

#[test]
fn test_class_resolves_inside_generic() {
    let mut fixture = gui();
    let root = tree(&mut fixture.table, "Dict[Color, List[Outer.Inner]]", Direction::In).unwrap();

    assert_eq!(root.generic_name(), Some("Dict"));
    assert_eq!(root.args()[0], HintNode::Enum(fixture.color));
    assert_eq!(root.args()[1].args(), &[HintNode::Class(fixture.inner)]);
}

// =============================================================================
// SOFT MISSES
// =============================================================================

#[rstest]
#[case("int", "int")]
#[case("Unknown", "Unknown")]
#[case("Any", "Any")]
#[case("Opaque", "Opaque")]
#[case("Inner", "Inner")]
#[case("Outer.Missing", "Outer.Missing")]
#[case("Color.Red", "Color.Red")]
#[case("QFlags.Widget", "QFlags.Widget")]
#[case("QFlags.Option.Extra", "QFlags.Option.Extra")]
#[case("Widget::Outer", "Widget::Outer")]
#[case("Outer..Inner", "Outer..Inner")]
#[case("Outer::::Inner", "Outer::::Inner")]
#[case("Outer.", "Outer.")]
#[case(".Outer", ".Outer")]
#[case("::::Widget", "::::Widget")]
fn test_unresolved_names(#[case] text: &str, #[case] expected: &str) {
    let mut fixture = gui();
    assert_unresolved(&mut fixture.table, text, expected);
}

#[test]
fn test_external_class_is_skipped() {
    let mut fixture = gui();
    let root = tree(&mut fixture.table, "Optional[Opaque]", Direction::In).unwrap();
    assert_eq!(root.args(), &[HintNode::unresolved("Opaque")]);
}

// =============================================================================
// MAPPED TYPES AND OVERRIDES
// =============================================================================

#[test]
fn test_mapped_type_override_substituted() {
    let mut fixture = gui();
    assert_eq!(
        tree(&mut fixture.table, "QString", Direction::In),
        Some(HintNode::unresolved("str"))
    );
}

#[test]
fn test_mapped_type_override_follows_direction() {
    let mut fixture = gui();
    let incoming = tree(&mut fixture.table, "Optional[QList]", Direction::In).unwrap();
    assert_eq!(incoming.args()[0].generic_name(), Some("Iterable"));

    let mut fixture = gui();
    let outgoing = tree(&mut fixture.table, "Optional[QList]", Direction::Out).unwrap();
    assert_eq!(outgoing.args()[0].generic_name(), Some("List"));
}

#[test]
fn test_mapped_type_without_override_has_no_type() {
    let mut fixture = gui();
    assert_no_type(&mut fixture.table, "QFlags", Direction::In);
}

#[test]
fn test_mapped_type_with_empty_override_has_no_type() {
    let mut fixture = gui();
    assert_no_type(&mut fixture.table, "QVoid", Direction::Out);
}

#[test]
fn test_no_type_argument_is_dropped() {
    let mut fixture = gui();
    let root = tree(&mut fixture.table, "Tuple[QFlags, int]", Direction::In).unwrap();
    assert_eq!(root.args(), &[HintNode::unresolved("int")]);
}

#[test]
fn test_class_override_substituted() {
    let mut fixture = gui();
    let root = tree(&mut fixture.table, "Point", Direction::In).unwrap();
    assert_eq!(
        root,
        HintNode::generic(
            "Tuple",
            Some(vec![HintNode::unresolved("int"), HintNode::unresolved("int")])
        )
    );
}

#[test]
fn test_class_override_only_for_its_direction() {
    let mut fixture = gui();
    assert_eq!(
        tree(&mut fixture.table, "Handle", Direction::In),
        Some(HintNode::Class(fixture.handle))
    );
}

#[test]
fn test_substitution_copies_the_override_tree() {
    let mut fixture = gui();
    let table = &mut fixture.table;
    let pair = tree(table, "Tuple[Point, Point]", Direction::In).unwrap();
    let point = tree(table, "Tuple[int, int]", Direction::In).unwrap();

    assert_eq!(pair.args(), &[point.clone(), point]);
}

#[test]
fn test_empty_override_has_no_type() {
    let mut fixture = gui();
    assert_no_type(&mut fixture.table, "Sink", Direction::Out);
    assert!(fixture.table.hint_registry().lookup("").is_none());
}

#[test]
fn test_empty_override_is_dropped_from_arguments() {
    let mut fixture = gui();
    let table = &mut fixture.table;

    let root = tree(table, "Tuple[Sink, int]", Direction::Out).unwrap();
    assert_eq!(root.args(), &[HintNode::unresolved("int")]);
    assert_eq!(qualified(table, "List[Sink]", Direction::Out), "List[]");
}

#[test]
fn test_empty_override_only_for_its_direction() {
    let mut fixture = gui();
    assert!(
        fixture
            .table
            .symbols()
            .class(fixture.sink)
            .hints
            .as_ref()
            .is_some_and(|hints| hints.declares_void_result())
    );
    assert_eq!(
        tree(&mut fixture.table, "Sink", Direction::In),
        Some(HintNode::Class(fixture.sink))
    );
}

// =============================================================================
// RECURSION GUARD
// =============================================================================

#[test]
fn test_self_referential_override_resolves_to_class() {
    let mut fixture = gui();
    assert_eq!(
        tree(&mut fixture.table, "Handle", Direction::Out),
        Some(HintNode::Class(fixture.handle))
    );
}

#[test]
fn test_self_referential_override_inside_generic() {
    let mut fixture = gui();
    let root = tree(&mut fixture.table, "List[Handle]", Direction::Out).unwrap();
    assert_eq!(root.args(), &[HintNode::Class(fixture.handle)]);
}

#[test]
fn test_mutual_override_cycle_terminates() {
    let mut fixture = gui();
    let table = &mut fixture.table;

    // Ping → "Pong" → Pong → "Ping" (mid-parse, ignored) → Pong.
    assert_eq!(
        tree(table, "Ping", Direction::Out),
        Some(HintNode::Class(fixture.pong))
    );
    // "Pong" was parsed during the cycle and is reused as is.
    assert_eq!(
        tree(table, "Pong", Direction::Out),
        Some(HintNode::Class(fixture.pong))
    );
    assert_eq!(table.parse_count(), 2);
}

#[test]
fn test_mutual_cycle_from_the_other_side() {
    let mut fixture = gui();
    assert_eq!(
        tree(&mut fixture.table, "Pong", Direction::Out),
        Some(HintNode::Class(fixture.ping))
    );
}

#[test]
fn test_fixture_entities_are_distinct() {
    let fixture = gui();
    let symbols = fixture.table.symbols();

    assert_eq!(symbols.class(fixture.outer).name, "Outer");
    assert_eq!(symbols.class(fixture.object).module, "core");
    assert!(symbols.class(fixture.point).hints.is_some());
    assert_eq!(symbols.mapped_type(fixture.qstring).name, "QString");
    assert_eq!(symbols.mapped_type(fixture.qflags).name, "QFlags");
}
