//! Registry tests: hint identity, parse-once caching and per-table isolation.

use typehint::{Direction, ParseState, SymbolTable};

use crate::helpers::hint_assertions::*;
use crate::helpers::table_fixtures::gui;

// =============================================================================
// IDENTITY
// =============================================================================

#[test]
fn test_get_hint_is_idempotent() {
    let mut table = SymbolTable::new();
    let a = table.get_hint("Optional[Widget]");
    let b = table.get_hint("Optional[Widget]");

    assert_eq!(a, b);
    assert_eq!(a.id(), b.id());
    assert_eq!(table.hint_registry().len(), 1);
}

#[test]
fn test_get_hint_does_not_parse() {
    let mut table = SymbolTable::new();
    let hint = table.get_hint("List[int");

    assert_eq!(table.parse_count(), 0);
    assert_eq!(
        table.managed_hint(&hint).map(|m| m.state()),
        Some(ParseState::Required)
    );
}

// =============================================================================
// PARSE ONCE
// =============================================================================

#[test]
fn test_parse_happens_once_across_modes() {
    let mut fixture = gui();
    let table = &mut fixture.table;
    let hint = table.get_hint("Dict[str, Widget]");

    table.render_qualified(&hint, Direction::In).unwrap();
    table.render_qualified(&hint, Direction::In).unwrap();
    table
        .render_annotation(&hint, Direction::In, Some("gui"), None)
        .unwrap();
    table.render_cross_reference(&hint, Direction::In).unwrap();

    assert_eq!(table.parse_count(), 1);
    assert_eq!(
        table.managed_hint(&hint).map(|m| m.state()),
        Some(ParseState::Parsed)
    );
}

#[test]
fn test_requesting_same_text_twice_parses_once() {
    let mut fixture = gui();
    let table = &mut fixture.table;

    qualified(table, "Optional[Widget]", Direction::Out);
    qualified(table, "Optional[Widget]", Direction::Out);

    assert_eq!(table.parse_count(), 1);
}

#[test]
fn test_override_hints_are_parsed_once() {
    let mut fixture = gui();
    let table = &mut fixture.table;

    // "str" is parsed once as QString's override and reused afterwards.
    qualified(table, "QString", Direction::In);
    qualified(table, "List[QString]", Direction::In);
    qualified(table, "str", Direction::In);

    assert_eq!(table.parse_count(), 3);
    assert!(table.hint_registry().lookup("str").is_some());
}

#[test]
fn test_first_direction_decides_the_tree() {
    let mut fixture = gui();
    let table = &mut fixture.table;

    assert_eq!(qualified(table, "QList", Direction::In), "Iterable[object]");
    let count = table.parse_count();
    assert_eq!(qualified(table, "QList", Direction::Out), "Iterable[object]");
    assert_eq!(table.parse_count(), count);

    let mut fresh = gui();
    assert_eq!(
        qualified(&mut fresh.table, "QList", Direction::Out),
        "List[object]"
    );
}

// =============================================================================
// CROSS-REFERENCE CACHE
// =============================================================================

#[test]
fn test_cross_reference_is_cached() {
    let mut fixture = gui();
    let table = &mut fixture.table;
    let hint = table.get_hint("Optional[Widget]");

    assert!(table.managed_hint(&hint).unwrap().cross_reference().is_none());

    let first = table.render_cross_reference(&hint, Direction::Out).unwrap();
    let count = table.parse_count();
    let second = table.render_cross_reference(&hint, Direction::Out).unwrap();

    assert_eq!(first, second);
    assert_eq!(table.parse_count(), count);
    assert_eq!(
        table.managed_hint(&hint).unwrap().cross_reference(),
        Some(first.as_str())
    );
}

#[test]
fn test_annotation_is_not_cached() {
    let mut fixture = gui();
    let table = &mut fixture.table;

    let inside = annotation(table, "Widget", Direction::In, Some("gui"), None);
    let outside = annotation(table, "Widget", Direction::In, Some("app"), None);

    assert_eq!(inside, "Widget");
    assert_eq!(outside, "gui.Widget");
    assert!(
        table
            .hint_registry()
            .lookup("Widget")
            .unwrap()
            .cross_reference()
            .is_none()
    );
}

// =============================================================================
// ISOLATION
// =============================================================================

#[test]
fn test_tables_do_not_share_state() {
    let mut first = gui();
    let mut second = SymbolTable::new();

    assert_eq!(qualified(&mut first.table, "Widget", Direction::In), "gui.Widget");
    assert_eq!(qualified(&mut second, "Widget", Direction::In), "Widget");
    assert_eq!(first.table.parse_count(), 1);
    assert_eq!(second.parse_count(), 1);
}

#[test]
fn test_failed_parse_is_reported_again() {
    let mut table = SymbolTable::new();
    let hint = table.get_hint("List[int");

    let first = table.render_qualified(&hint, Direction::In).unwrap_err();
    let second = table.render_qualified(&hint, Direction::In).unwrap_err();

    assert_eq!(first, second);
    assert_eq!(table.parse_count(), 0);
    assert_eq!(
        table.managed_hint(&hint).map(|m| m.state()),
        Some(ParseState::Required)
    );
}
