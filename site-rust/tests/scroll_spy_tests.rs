use portfolio_site::scroll_spy::{
    resolve_active_section, ScrollSpy, ACTIVE_THRESHOLD_PX, SCROLLED_THRESHOLD_PX,
};
use std::collections::HashMap;

fn tops(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(id, top)| ((*id).to_string(), *top))
        .collect()
}

#[test]
fn lowest_section_within_threshold_wins() {
    assert_eq!(
        resolve_active_section(&[("a", 500.0), ("b", 300.0), ("c", 100.0)], ACTIVE_THRESHOLD_PX),
        Some("c")
    );
    assert_eq!(
        resolve_active_section(&[("a", -400.0), ("b", 140.0), ("c", 90.0)], ACTIVE_THRESHOLD_PX),
        Some("c")
    );
    assert_eq!(
        resolve_active_section(&[("a", -400.0), ("b", 140.0), ("c", 600.0)], ACTIVE_THRESHOLD_PX),
        Some("b")
    );
}

#[test]
fn threshold_is_inclusive() {
    assert_eq!(
        resolve_active_section(&[("a", 0.0), ("b", 150.0)], ACTIVE_THRESHOLD_PX),
        Some("b")
    );
    assert_eq!(
        resolve_active_section(&[("a", 151.0)], ACTIVE_THRESHOLD_PX),
        None
    );
}

#[test]
fn starts_on_the_first_section_and_unscrolled() {
    let spy = ScrollSpy::default();
    assert_eq!(spy.active_section(), "home");
    assert!(!spy.is_scrolled());
}

#[test]
fn scroll_updates_active_section_and_scrolled_flag() {
    let mut spy = ScrollSpy::new(["a", "b", "c"]);
    let layout = tops(&[("a", -260.0), ("b", 140.0), ("c", 90.0)]);

    assert!(spy.on_scroll(760.0, |id| layout.get(id).copied()));
    assert_eq!(spy.active_section(), "c");
    assert!(spy.is_scrolled());

    // Same measurement again is not a change.
    assert!(!spy.on_scroll(760.0, |id| layout.get(id).copied()));
}

#[test]
fn scrolled_flag_switches_strictly_past_the_threshold() {
    let mut spy = ScrollSpy::new(["a"]);
    spy.on_scroll(SCROLLED_THRESHOLD_PX, |_| Some(0.0));
    assert!(!spy.is_scrolled());
    spy.on_scroll(SCROLLED_THRESHOLD_PX + 1.0, |_| Some(0.0));
    assert!(spy.is_scrolled());
}

#[test]
fn previous_section_is_kept_when_nothing_qualifies() {
    let mut spy = ScrollSpy::new(["a", "b"]);
    let layout = tops(&[("a", -100.0), ("b", 100.0)]);
    spy.on_scroll(900.0, |id| layout.get(id).copied());
    assert_eq!(spy.active_section(), "b");

    spy.on_scroll(900.0, |_| Some(400.0));
    assert_eq!(spy.active_section(), "b");
}

#[test]
fn missing_sections_are_skipped() {
    let mut spy = ScrollSpy::new(["a", "b", "c"]);
    let layout = tops(&[("a", -100.0), ("b", 20.0)]);
    spy.on_scroll(300.0, |id| layout.get(id).copied());
    assert_eq!(spy.active_section(), "b");
}

#[test]
fn mount_measurement_marks_the_jumped_to_section() {
    let mut spy = ScrollSpy::default();
    assert!(spy.jump_to("certificates", 900.0));
    assert_eq!(spy.active_section(), "certificates");
    assert!(spy.is_scrolled());

    assert!(spy.jump_to("home", 900.0));
    assert_eq!(spy.active_section(), "home");
    assert!(!spy.is_scrolled());
}

#[test]
fn mount_measurement_for_an_unknown_section_stays_at_the_top() {
    let mut spy = ScrollSpy::default();
    spy.jump_to("contact", 900.0);
    spy.jump_to("blog", 900.0);
    assert_eq!(spy.active_section(), "home");
    assert!(!spy.is_scrolled());
}
