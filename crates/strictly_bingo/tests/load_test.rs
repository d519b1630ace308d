//! Tests for the card load lifecycle.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_bingo::{CardError, CardPhase, CellIndex, InMemoryShowProvider, ShowId, ShowRecord};

fn provider() -> InMemoryShowProvider {
    let mut provider = InMemoryShowProvider::new();
    provider.insert(
        "pilot",
        ShowRecord::new((1..=30).map(|i| format!("Line {i}")).collect(), Some("Coffee".to_string()))
            .with_name("Pilot"),
    );
    provider.insert(
        "short",
        ShowRecord::new((1..=23).map(|i| format!("Line {i}")).collect(), None),
    );
    provider
}

#[tokio::test]
async fn test_load_ready() {
    let phase = CardPhase::load(&provider(), &ShowId::new("pilot"), StdRng::seed_from_u64(1)).await;

    assert!(phase.is_ready());
    let card = phase.card().expect("ready card");
    assert_eq!(card.grid().center(), "Coffee");
    assert_eq!(card.show().name().as_deref(), Some("Pilot"));
    assert!(card.is_marked(CellIndex::CENTER));
    assert!(!card.alert_visible());
}

#[tokio::test]
async fn test_load_not_found_fails() {
    let id = ShowId::new("nope");
    let phase = CardPhase::load(&provider(), &id, StdRng::seed_from_u64(1)).await;

    assert!(!phase.is_ready());
    assert_eq!(phase.error(), Some(&CardError::NotFound(id)));
}

#[tokio::test]
async fn test_load_insufficient_phrases_fails() {
    let phase = CardPhase::load(&provider(), &ShowId::new("short"), StdRng::seed_from_u64(1)).await;

    let error = phase.error().expect("failed phase");
    assert_eq!(error, &CardError::InsufficientPhrases { found: 23 });
    assert!(error.is_editable());
}

#[tokio::test]
async fn test_load_through_boxed_provider() {
    let boxed: Box<dyn strictly_bingo::ShowProvider> = Box::new(provider());
    let phase = CardPhase::load(&boxed, &ShowId::new("pilot"), StdRng::seed_from_u64(2)).await;
    assert!(phase.is_ready());
}

#[tokio::test]
async fn test_ready_card_is_playable() {
    let mut phase =
        CardPhase::load(&provider(), &ShowId::new("pilot"), StdRng::seed_from_u64(3)).await;
    let card = phase.card_mut().expect("ready card");

    for i in [2, 7, 17, 22] {
        card.toggle_index(i);
    }
    assert!(card.alert_visible());

    card.regenerate();
    assert!(!card.alert_visible());
    assert_eq!(card.current_selection().len(), 1);

    let card = phase.into_result().expect("settled").expect("ready");
    assert!(card.current_winning_lines().is_empty());
}
