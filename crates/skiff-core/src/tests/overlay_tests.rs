//! Tests for the overlay controller: lifecycle, focus traversal and the
//! staleness guard.

use super::fixtures::*;
use crate::overlay::{Focus, NavTarget, Overlay};
use std::sync::Arc;

fn overlay() -> Overlay {
    Overlay::new(Arc::new(test_registry()), Arc::new(test_config()))
}

fn listing(overlay: &mut Overlay, input: &str, suggestions: &[&str]) {
    let pass = overlay.input_changed(input).unwrap();
    let list: Vec<String> = suggestions.iter().map(ToString::to_string).collect();
    assert!(overlay.apply_suggestions(&pass.query, &list));
}

#[test]
fn test_stray_trigger_closes_on_next_frame() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    assert!(overlay.is_open());

    overlay.frame_tick();
    assert!(!overlay.is_open());
}

#[test]
fn test_trigger_with_input_stays_open() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    overlay.input_changed("g");

    overlay.frame_tick();
    assert!(overlay.is_open());

    // Later ticks are inert.
    overlay.frame_tick();
    assert!(overlay.is_open());
}

#[test]
fn test_empty_input_closes_and_clears() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "g rust", &["g rust book"]);
    assert!(!overlay.suggestions().is_empty());

    assert!(overlay.input_changed("   ").is_none());
    assert!(!overlay.is_open());
    assert!(overlay.input().is_empty());
    assert!(overlay.suggestions().is_empty());
}

#[test]
fn test_stale_pass_is_discarded_whole() {
    let mut overlay = overlay();
    overlay.open_on_trigger();

    // Pass issued for "f " (classifies to query "f")...
    let stale = overlay.input_changed("f ").unwrap();
    // ...then the input moves on before the external lookup resolves.
    let fresh = overlay.input_changed("f/").unwrap();

    assert!(!overlay.apply_suggestions(&stale.query, &["f stale".to_string()]));
    assert!(overlay.suggestions().is_empty(), "no partial render of a stale pass");

    assert!(overlay.apply_suggestions(&fresh.query, &["f/hn".to_string()]));
    assert_eq!(overlay.suggestions()[0].text, "f/hn");
}

#[test]
fn test_pass_for_cleared_input_is_discarded() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    let pass = overlay.input_changed("g rust").unwrap();
    overlay.input_changed("");

    assert!(!overlay.apply_suggestions(&pass.query, &["g rust book".to_string()]));
}

#[test]
fn test_equivalent_input_still_applies() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    let pass = overlay.input_changed("g rust").unwrap();
    // Trailing whitespace classifies to the same query; the pass is valid.
    overlay.input_changed("g rust ");

    assert!(overlay.apply_suggestions(&pass.query, &["g rust book".to_string()]));
}

#[test]
fn test_applied_suggestions_carry_highlights() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "g rust", &["g rust book", "unrelated"]);

    let suggestions = overlay.suggestions();
    let span = suggestions[0].matched.unwrap();
    assert_eq!(&suggestions[0].text[span.start..span.end], "g rust");
    assert!(suggestions[1].matched.is_none());
}

#[test]
fn test_focus_traversal_forward() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "g rust", &["a", "b", "c"]);

    assert_eq!(overlay.focus(), Focus::Input);
    overlay.focus_next();
    assert_eq!(overlay.focus(), Focus::Suggestion(0));
    overlay.focus_next();
    overlay.focus_next();
    assert_eq!(overlay.focus(), Focus::Suggestion(2));
    // Falling off the end leaves focus on the input.
    overlay.focus_next();
    assert_eq!(overlay.focus(), Focus::Input);
}

#[test]
fn test_focus_traversal_backward() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "g rust", &["a", "b", "c"]);

    // From the input, backward wraps to the last suggestion.
    overlay.focus_previous();
    assert_eq!(overlay.focus(), Focus::Suggestion(2));
    overlay.focus_previous();
    assert_eq!(overlay.focus(), Focus::Suggestion(1));
    overlay.focus_previous();
    overlay.focus_previous();
    assert_eq!(overlay.focus(), Focus::Input);
}

#[test]
fn test_focus_with_no_suggestions_stays_on_input() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    overlay.input_changed("g rust");

    overlay.focus_next();
    assert_eq!(overlay.focus(), Focus::Input);
    overlay.focus_previous();
    assert_eq!(overlay.focus(), Focus::Input);
}

#[test]
fn test_focus_resets_when_list_shrinks() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "g rust", &["a", "b", "c"]);
    overlay.focus_previous();
    assert_eq!(overlay.focus(), Focus::Suggestion(2));

    let pass = overlay.input_changed("g rust").unwrap();
    assert!(overlay.apply_suggestions(&pass.query, &["a".to_string()]));
    assert_eq!(overlay.focus(), Focus::Input);
}

#[test]
fn test_submit_commits_input_text() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    overlay.input_changed("y q");

    let navigation = overlay.submit().unwrap();
    assert_eq!(
        navigation.url,
        "https://www.youtube.com/results?search_query=q"
    );
    assert_eq!(navigation.target, NavTarget::SameTab);
    assert!(!overlay.is_open());
    assert!(overlay.input().is_empty());
}

#[test]
fn test_submit_commits_focused_suggestion() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "f", &["f/hn", "f/lobsters"]);
    overlay.focus_next();

    let navigation = overlay.submit().unwrap();
    assert_eq!(navigation.url, "https://news.ycombinator.com");
    assert!(!overlay.is_open());
}

#[test]
fn test_submit_empty_input_navigates_nowhere() {
    let mut overlay = overlay();
    overlay.open_on_trigger();

    assert!(overlay.submit().is_none());
    assert!(!overlay.is_open());
}

#[test]
fn test_pointer_activation_resolves_suggestion_text() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "g rust", &["g rust book"]);

    let navigation = overlay.activate_suggestion(0).unwrap();
    assert_eq!(navigation.url, "https://github.com/search?q=rust%20book");
    assert!(!overlay.is_open());
}

#[test]
fn test_pointer_activation_out_of_range() {
    let mut overlay = overlay();
    overlay.open_on_trigger();
    listing(&mut overlay, "g rust", &["g rust book"]);

    assert!(overlay.activate_suggestion(5).is_none());
    // A miss is not an activation; the overlay stays open.
    assert!(overlay.is_open());
}

#[test]
fn test_new_tab_target_honored() {
    let mut config = test_config();
    config.open_links_in_new_tab = true;
    let mut overlay = Overlay::new(Arc::new(test_registry()), Arc::new(config));

    overlay.open_on_trigger();
    overlay.input_changed("example.com");
    let navigation = overlay.submit().unwrap();
    assert_eq!(navigation.target, NavTarget::NewTab);
}

#[test]
fn test_two_overlays_do_not_interfere() {
    let registry = Arc::new(test_registry());
    let config = Arc::new(test_config());
    let mut first = Overlay::new(Arc::clone(&registry), Arc::clone(&config));
    let mut second = Overlay::new(registry, config);

    first.open_on_trigger();
    first.input_changed("g rust");
    second.open_on_trigger();
    second.input_changed("y q");

    assert_eq!(first.input(), "g rust");
    assert_eq!(second.input(), "y q");
    first.close();
    assert!(second.is_open());
}
