use std::time::Duration;

use kata_social_network::{
    clock::ManualClock,
    engine::{DEFAULT_ROSTER, Engine},
    entry::{EntryKind, LogEntry},
};

fn engine() -> (Engine<ManualClock>, ManualClock) {
    let clock = ManualClock::default();
    (Engine::with_default_roster(clock.clone()), clock)
}

fn results(entries: &[LogEntry]) -> &[LogEntry] {
    assert_eq!(entries[0].kind, EntryKind::Command, "first entry is the echo");
    &entries[1..]
}

#[test]
fn every_user_can_post_and_read_back() {
    for user in DEFAULT_ROSTER {
        let (mut engine, clock) = engine();
        engine.submit(&format!("{user} -> x"));
        clock.advance(Duration::from_secs(1));

        let entries = engine.submit(user);
        let results = results(&entries);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, EntryKind::Post);
        assert!(results[0].text.contains('x'));
    }
}

#[test]
fn unknown_author_leaves_store_unchanged() {
    let (mut engine, _) = engine();
    engine.submit("Alice -> first");

    let entries = engine.submit("Dave -> Hi");
    let results = results(&entries);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_error());
    assert_eq!(engine.posts().len(), 1);
}

#[test]
fn self_follow_always_errors() {
    let (mut engine, _) = engine();
    for name in ["Alice", "Bob", "Dave", "nobody"] {
        let entries = engine.submit(&format!("{name} follows {name}"));
        let results = results(&entries);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, format!("> {name} or {name} doesn't exists."));
    }
}

#[test]
fn wall_shows_followed_posts() {
    let (mut engine, clock) = engine();
    let mut transcript = Vec::new();
    for line in ["Alice -> Hello", "Bob follows Alice", "Bob wall"] {
        transcript.extend(engine.submit(line));
        clock.advance(Duration::from_secs(2));
    }

    assert!(transcript.iter().all(|entry| !entry.is_error()));
    let last = transcript.last().expect("wall output");
    assert_eq!(last.kind, EntryKind::Post);
    assert_eq!(last.text, "> Alice - Hello (4 seconds ago)");
}

#[test]
fn timeline_ages_cover_every_unit() {
    let (mut engine, clock) = engine();
    engine.submit("Alice -> I love the weather today");
    clock.advance(Duration::from_secs(2 * 3_600));
    engine.submit("Bob -> Damn! We lost!");
    clock.advance(Duration::from_secs(60));
    engine.submit("Bob -> Good game though.");
    clock.advance(Duration::from_secs(1));
    engine.submit("Charlie -> I'm in New York today! Anyone wants to have a coffee?");
    engine.submit("Charlie follows Alice");
    engine.submit("Charlie follows Bob");
    clock.advance(Duration::from_secs(15));

    let texts: Vec<String> = engine
        .submit("Charlie wall")
        .into_iter()
        .skip(1)
        .map(|entry| entry.text)
        .collect();
    assert_eq!(
        texts,
        [
            "> Charlie - I'm in New York today! Anyone wants to have a coffee? (15 seconds ago)",
            "> Bob - Good game though. (16 seconds ago)",
            "> Bob - Damn! We lost! (1 minute ago)",
            "> Alice - I love the weather today (2 hours ago)",
        ]
    );
}
