use portfolio_site::{
    typing::{TypingEffect, TypingPhase, TypingTimings},
    Lifecycle, SiteError,
};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

const PHRASES: [&str; 3] = ["FullStack", "Frontend", "Backend"];

fn effect() -> TypingEffect {
    TypingEffect::new(PHRASES, TypingTimings::default()).unwrap()
}

#[test]
fn empty_phrase_list_is_rejected() {
    let result = TypingEffect::new(Vec::<String>::new(), TypingTimings::default());
    assert!(matches!(result, Err(SiteError::InvalidInput(_))));
}

#[test]
fn display_text_is_always_a_prefix_of_the_current_phrase() {
    let mut effect = effect();
    for _ in 0..500 {
        effect.tick();
        assert!(effect.current_phrase().starts_with(&effect.display_text()));
        assert!(effect.text_index() < PHRASES.len());
    }
}

#[test]
fn types_pauses_deletes_and_moves_to_the_next_phrase() {
    let timings = TypingTimings::default();
    let mut effect = effect();

    for expected in ["F", "Fu", "Ful", "Full", "FullS", "FullSt", "FullSta", "FullStac"] {
        assert_eq!(effect.tick(), timings.speed);
        assert_eq!(effect.display_text(), expected);
    }
    assert_eq!(effect.tick(), timings.pause_time);
    assert_eq!(effect.display_text(), "FullStack");
    assert_eq!(effect.phase(), TypingPhase::Pausing);

    assert_eq!(effect.tick(), timings.delete_speed);
    assert_eq!(effect.phase(), TypingPhase::Deleting);

    for _ in 0.."FullStack".len() - 1 {
        assert_eq!(effect.tick(), timings.delete_speed);
    }
    assert_eq!(effect.display_text(), "F");

    assert_eq!(effect.tick(), timings.speed);
    assert_eq!(effect.display_text(), "");
    assert_eq!(effect.text_index(), 1);
    assert_eq!(effect.phase(), TypingPhase::Typing);
}

#[test]
fn index_wraps_after_the_last_phrase() {
    let mut effect = effect();
    let mut indices = vec![effect.text_index()];
    while indices.len() < 5 {
        effect.tick();
        if indices.last() != Some(&effect.text_index()) {
            indices.push(effect.text_index());
        }
    }
    assert_eq!(indices, vec![0, 1, 2, 0, 1]);
}

#[test]
fn single_character_phrases_still_cycle() {
    let mut effect = TypingEffect::new(["a", "b"], TypingTimings::default()).unwrap();
    let mut shown = Vec::new();
    for _ in 0..8 {
        effect.tick();
        shown.push(effect.display_text());
    }
    assert_eq!(shown, vec!["a", "a", "", "b", "b", "", "a", "a"]);
}

#[tokio::test(start_paused = true)]
async fn spawned_effect_stops_when_the_lifecycle_unmounts() {
    let lifecycle = Lifecycle::mount();
    let updates = Arc::new(Mutex::new(Vec::new()));

    let handle = effect().spawn(&lifecycle, {
        let updates = updates.clone();
        move |state| updates.lock().unwrap().push(state.display_text)
    });
    assert!(handle.is_some());

    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(*updates.lock().unwrap(), vec!["F", "Fu", "Ful"]);

    lifecycle.unmount();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(updates.lock().unwrap().len(), 3);
    assert_eq!(lifecycle.active_tasks(), 0);
}

#[tokio::test]
async fn spawning_after_unmount_does_nothing() {
    let lifecycle = Lifecycle::mount();
    lifecycle.unmount();
    assert!(effect().spawn(&lifecycle, |_| {}).is_none());
}
