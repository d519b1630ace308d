//! End-to-end card scenarios: dealing, marking, winning, resetting.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_bingo::{BingoCard, CardError, CellIndex, Grid, ShowRecord, WinLineId};

fn phrases(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("P{i}")).collect()
}

fn card(n: usize, seed: u64) -> BingoCard {
    BingoCard::seeded(ShowRecord::new(phrases(n), None), seed).expect("enough phrases")
}

#[test]
fn test_scenario_a_center_label_and_full_pool() {
    let mut rng = StdRng::seed_from_u64(2024);
    let grid = Grid::generate(&phrases(24), Some("X"), &mut rng).expect("24 phrases");

    assert_eq!(grid.cells().len(), 25);
    assert_eq!(grid.cells()[12], "X");

    let mut dealt: Vec<&str> = grid.phrases().collect();
    dealt.sort_unstable();
    let pool = phrases(24);
    let mut expected: Vec<&str> = pool.iter().map(String::as_str).collect();
    expected.sort_unstable();
    assert_eq!(dealt, expected);
}

#[test]
fn test_scenario_b_twenty_three_phrases_fail() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = Grid::generate(&phrases(23), Some("X"), &mut rng);
    assert_eq!(result, Err(CardError::InsufficientPhrases { found: 23 }));

    let card = BingoCard::seeded(ShowRecord::new(phrases(23), None), 0);
    assert!(matches!(card, Err(CardError::InsufficientPhrases { found: 23 })));
}

#[test]
fn test_scenario_c_top_row_bingo() {
    let mut card = card(24, 3);
    assert_eq!(card.current_selection(), &BTreeSet::from([CellIndex::CENTER]));

    for i in 0..5 {
        card.toggle_index(i);
    }

    assert!(card.current_winning_lines().contains(&WinLineId::Row(0)));
    assert!(card.alert_visible());
}

#[test]
fn test_scenario_d_reset_after_bingo() {
    let mut card = card(24, 3);
    for i in 0..5 {
        card.toggle_index(i);
    }

    card.reset();

    assert_eq!(card.current_selection(), &BTreeSet::from([CellIndex::CENTER]));
    assert!(card.current_winning_lines().is_empty());
    assert!(!card.alert_visible());
}

#[test]
fn test_dealt_cells_are_distinct_subset_of_large_pool() {
    let pool = phrases(100);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate(&pool, None, &mut rng).expect("enough phrases");
        let dealt: BTreeSet<&str> = grid.phrases().collect();
        assert_eq!(dealt.len(), 24, "no phrase repeated");
        assert!(dealt.iter().all(|p| pool.iter().any(|q| q.as_str() == *p)));
        assert_eq!(grid.center(), "FREE SPACE");
    }
}

#[test]
fn test_same_seed_same_grid() {
    assert_eq!(card(60, 77).grid(), card(60, 77).grid());
}

#[test]
fn test_large_pool_yields_different_subsets() {
    let mut card = card(60, 5);
    let mut subsets = BTreeSet::new();
    for _ in 0..10 {
        let dealt: BTreeSet<String> = card.grid().phrases().map(str::to_string).collect();
        subsets.insert(dealt);
        card.regenerate();
    }
    assert!(subsets.len() > 1);
}

#[test]
fn test_center_marked_after_every_fresh_start() {
    let mut card = card(30, 9);
    assert!(card.is_marked(CellIndex::CENTER));

    card.toggle(CellIndex::CENTER);
    assert!(!card.is_marked(CellIndex::CENTER));
    card.regenerate();
    assert!(card.is_marked(CellIndex::CENTER));

    card.toggle(CellIndex::CENTER);
    card.reset();
    assert!(card.is_marked(CellIndex::CENTER));
}

#[test]
fn test_toggle_twice_is_identity() {
    let mut card = card(24, 1);
    for cell in CellIndex::all() {
        let before = card.current_selection().clone();
        card.toggle(cell);
        card.toggle(cell);
        assert_eq!(card.current_selection(), &before);
    }
}

#[test]
fn test_alert_edge_trigger_sequence() {
    let mut card = card(24, 4);

    // Column 0: 0, 5, 10, 15, 20. Alert fires on the fifth mark.
    let steps = [0, 5, 10, 15, 20];
    for (k, &i) in steps.iter().enumerate() {
        let outcome = card.toggle_index(i);
        assert_eq!(outcome.bingo, k == steps.len() - 1);
    }
    assert!(card.alert_visible());

    // Count stays at one: alert stays up but never re-fires.
    for i in [1, 2, 3] {
        let outcome = card.toggle_index(i);
        assert!(!outcome.bingo);
        assert!(card.alert_visible());
    }

    card.dismiss_alert();
    assert!(!card.alert_visible());

    // Unmarking and re-marking within the same count does not re-fire.
    card.toggle_index(1);
    assert!(!card.alert_visible());

    // Completing row 0 raises the count to two and fires again.
    card.toggle_index(1);
    let outcome = card.toggle_index(4);
    assert_eq!(outcome.lines, 2);
    assert!(outcome.bingo);
    assert!(card.alert_visible());
}

#[test]
fn test_losing_a_line_hides_nothing_and_fires_nothing() {
    let mut card = card(24, 4);
    for i in 0..5 {
        card.toggle_index(i);
    }
    let outcome = card.toggle_index(0);
    assert_eq!(outcome.lines, 0);
    assert!(!outcome.bingo);
    assert!(card.alert_visible());
}

#[test]
fn test_winning_cells_highlight() {
    let mut card = card(24, 8);
    for i in [0, 6, 18, 24] {
        card.toggle_index(i);
    }
    assert_eq!(
        card.current_winning_lines(),
        &BTreeSet::from([WinLineId::Diagonal])
    );
    let highlighted: Vec<usize> = card.winning_cells().iter().map(|c| c.index()).collect();
    assert_eq!(highlighted, vec![0, 6, 12, 18, 24]);
}
