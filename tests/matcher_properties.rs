//! Matcher behavior checked through the public API only.

use tagmend::{
    MatchConfig, TitleSelector, edit_distance, normalize, similarity, split_filename,
};

fn owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

#[test]
fn spaced_dash_has_priority_over_underscore() {
    let segments = split_filename("Alan Walker _ Iselin Solheim - Sing Me to Sleep");

    assert_eq!(segments, ["Alan Walker _ Iselin Solheim", "Sing Me to Sleep"]);
}

#[test]
fn kitten_to_sitting_takes_three_edits() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
}

#[test]
fn threshold_is_strict() {
    let selector = TitleSelector::new(MatchConfig::default());

    // 3 of 10 code points: exactly 0.3
    assert!(selector.select(&owned(&["abc"]), "abcdefghij").is_none());

    // 31 of 100 code points: 0.31
    let title = "x".repeat(100);
    let candidate = "x".repeat(31);
    let selection = selector.select(&owned(&[&candidate]), &title);
    assert_eq!(selection.map(|s| s.text), Some(candidate));
}

#[test]
fn scores_of_normalized_inputs_are_bounded() {
    let titles = ["Shape of You", "晴天", "Anti-Hero", "Sing Me to Sleep"];
    let candidates = ["Shape of You (Remix)", "周杰伦", "Midnights", "", "sleep"];

    for title in titles {
        for candidate in candidates {
            let score = similarity(&normalize(candidate), &normalize(title));
            assert!((0.0..=1.0).contains(&score), "{candidate} / {title}: {score}");
        }
    }
}

#[test]
fn selection_prefers_leftmost_on_ties() {
    let selection = TitleSelector::default()
        .select(&owned(&["Song", "song", "SONG!"]), "song")
        .expect("exact matches qualify");

    assert_eq!(selection.index, 0);
}
