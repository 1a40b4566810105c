//! Round flow integration tests.
//!
//! These drive the public `reduce` entry point through whole turns and
//! rounds the way a presentation layer would.

use rust_rummy::cards::{parse_cards, Card, Meld, Rank};
use rust_rummy::core::{Action, GamePhase, GameRng, GameState, PlayerId, RummyConfig, StateBuilder};
use rust_rummy::rules::{outcome, reduce, try_reduce, GameResult, Rejection};

fn cards(tokens: &[&str]) -> Vec<Card> {
    parse_cards(tokens).unwrap()
}

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn listed(cards: &im::Vector<Card>) -> Vec<Card> {
    cards.iter().copied().collect()
}

// =============================================================================
// Dealing
// =============================================================================

/// Test that a fresh deal splits the deck into hands, discard, and stock.
#[test]
fn test_initial_deal() {
    let state = GameState::initial(Some(7));

    assert_eq!(state.hand(PlayerId::One).len(), 9);
    assert_eq!(state.hand(PlayerId::Two).len(), 9);
    assert_eq!(state.discard().len(), 1);
    assert_eq!(state.deck_size(), 52 - 19);
    assert!(state.melds().is_empty());
    assert_eq!(state.active(), PlayerId::One);
    assert_eq!(state.phase(), GamePhase::Draw);
    assert_eq!(state.must_meld(), None);
    assert_eq!(state.round(), 1);
    assert!(state.is_conserved());
}

/// Test that the same seed deals the same game.
#[test]
fn test_deal_is_deterministic() {
    assert_eq!(GameState::initial(Some(99)), GameState::initial(Some(99)));
    assert_ne!(GameState::initial(Some(99)), GameState::initial(Some(100)));
}

/// Test that custom configs change the deal size.
#[test]
fn test_configured_deal() {
    let config = RummyConfig::default().with_hand_size(7).with_initial_discard(3);
    let state = GameState::new(config, &mut GameRng::new(3));

    assert_eq!(state.hand(PlayerId::One).len(), 7);
    assert_eq!(state.hand(PlayerId::Two).len(), 7);
    assert_eq!(state.discard().len(), 3);
    assert_eq!(state.deck_size(), 52 - 17);
    assert!(state.is_conserved());
}

// =============================================================================
// Turn Flow
// =============================================================================

/// Test a full draw-then-discard turn for each player.
#[test]
fn test_turns_alternate() {
    let mut state = GameState::initial(Some(11));

    for expected in [PlayerId::One, PlayerId::Two, PlayerId::One] {
        assert_eq!(state.active(), expected);
        state = reduce(&state, &Action::Draw);
        assert_eq!(state.phase(), GamePhase::Play);
        assert_eq!(state.active_hand().len(), 10);

        let thrown = state.active_hand()[0];
        state = reduce(&state, &Action::discard(thrown));
        assert_eq!(state.top_discard(), Some(thrown));
        assert_eq!(state.phase(), GamePhase::Draw);
        assert!(state.is_conserved());
    }
}

/// Test the end-to-end meld scenario: cards leave the hand sorted onto the
/// active player's side.
#[test]
fn test_meld_from_hand() {
    let state = StateBuilder::new()
        .hand(PlayerId::One, cards(&["4H", "2H", "3H", "9S", "KD"]))
        .discard(cards(&["5C"]))
        .phase(GamePhase::Play)
        .build();

    let next = reduce(&state, &Action::meld(cards(&["4H", "2H", "3H"])));

    assert_eq!(next.melds().len(), 1);
    assert_eq!(listed(next.melds()[0].side(PlayerId::One)), cards(&["2H", "3H", "4H"]));
    assert!(next.melds()[0].side(PlayerId::Two).is_empty());
    assert_eq!(listed(next.active_hand()), cards(&["9S", "KD"]));
    assert_eq!(next.phase(), GamePhase::Play);
    assert!(next.is_conserved());
}

/// Test that a pickup must be melded before the turn can end.
#[test]
fn test_pickup_then_meld_then_discard() {
    let state = StateBuilder::new()
        .hand(PlayerId::One, cards(&["7S", "7D", "KC"]))
        .discard(cards(&["2C", "7H", "9D"]))
        .build();

    let picked = reduce(&state, &Action::pickup(1));
    assert_eq!(picked.phase(), GamePhase::Play);
    assert_eq!(picked.must_meld(), Some(card("7H")));
    assert_eq!(listed(picked.discard()), cards(&["9D"]));
    assert_eq!(
        listed(picked.active_hand()),
        cards(&["7S", "7D", "KC", "7H", "2C"])
    );

    // Discarding is refused while the pickup is unmelded.
    assert_eq!(
        try_reduce(&picked, &Action::discard(card("KC"))),
        Err(Rejection::MustMeldPending(card("7H")))
    );

    let melded = reduce(&picked, &Action::meld(cards(&["7S", "7D", "7H"])));
    assert_eq!(melded.must_meld(), None);

    let ended = reduce(&melded, &Action::discard(card("KC")));
    assert_eq!(ended.active(), PlayerId::Two);
    assert_eq!(ended.top_discard(), Some(card("KC")));
    assert!(ended.is_conserved());
}

/// Test laying off onto the opponent's meld credits the laying player.
#[test]
fn test_lay_off_onto_opponent_meld() {
    let theirs = Meld::from_side(PlayerId::One, cards(&["8C", "8D", "8S"]));
    let state = StateBuilder::new()
        .hand(PlayerId::Two, cards(&["8H", "3S"]))
        .melds([theirs.clone()])
        .discard(cards(&["QH"]))
        .active(PlayerId::Two)
        .phase(GamePhase::Play)
        .build();

    let next = reduce(&state, &Action::lay_off(cards(&["8H"]), theirs));

    assert_eq!(listed(next.melds()[0].side(PlayerId::Two)), cards(&["8H"]));
    assert_eq!(next.melded_points(PlayerId::Two), 5);
    assert_eq!(next.melded_points(PlayerId::One), 15);
    assert_eq!(listed(next.active_hand()), cards(&["3S"]));
}

/// Test that a low-ace run scores the Ace at its low value.
#[test]
fn test_low_ace_run_scoring() {
    let state = StateBuilder::new()
        .hand(PlayerId::One, cards(&["AS", "2S", "3S", "9H"]))
        .discard(cards(&["5C"]))
        .phase(GamePhase::Play)
        .build();

    let next = reduce(&state, &Action::meld(cards(&["AS", "2S", "3S"])));

    let side = listed(next.melds()[0].side(PlayerId::One));
    assert_eq!(side[0].rank, Rank::LowAce);
    assert_eq!(side[0].identity(), card("AS"));
    assert_eq!(next.melded_points(PlayerId::One), 15);
    assert!(next.is_conserved());
}

// =============================================================================
// Deck Exhaustion
// =============================================================================

/// Test that drawing from an empty deck turns the discard pile over.
#[test]
fn test_reshuffle_on_empty_deck() {
    let state = StateBuilder::new()
        .discard(cards(&["6D", "5D", "4D"]))
        .deck(Vec::new())
        .build();

    let next = reduce(&state, &Action::Draw);

    // Equivalent to drawing from the rebuilt deck [4D, 5D].
    let rebuilt = StateBuilder::from_state(&state)
        .discard(cards(&["6D"]))
        .deck(cards(&["4D", "5D"]))
        .build();
    assert_eq!(next, reduce(&rebuilt, &Action::Draw));
    assert_eq!(listed(next.deck()), cards(&["5D"]));
    assert_eq!(listed(next.discard()), cards(&["6D"]));
}

/// Test that a draw with no cards anywhere is refused.
#[test]
fn test_draw_with_single_discard_and_no_deck() {
    let state = StateBuilder::new()
        .discard(cards(&["6D"]))
        .deck(Vec::new())
        .build();

    assert_eq!(reduce(&state, &Action::Draw), state);
    assert_eq!(try_reduce(&state, &Action::Draw), Err(Rejection::DeckExhausted));
}

// =============================================================================
// Going Out and Scoring
// =============================================================================

/// Test the scoring scenario: the opponent loses their hand's points and a
/// new round is dealt from the seed.
#[test]
fn test_go_out_scoring() {
    let state = StateBuilder::new()
        .hand(PlayerId::Two, cards(&["AH", "KS", "3C"]))
        .discard(cards(&["9D"]))
        .phase(GamePhase::Play)
        .score(PlayerId::One, 40)
        .score(PlayerId::Two, 60)
        .build();

    let next = reduce(&state, &Action::go_out(Some(1)));

    assert_eq!(next.score(PlayerId::One), 40);
    assert_eq!(next.score(PlayerId::Two), 60 - 30);
    assert_eq!(next.round(), 2);
    assert_eq!(next.phase(), GamePhase::Draw);
    assert_eq!(next.first(), PlayerId::Two);
    assert_eq!(next.active(), PlayerId::Two);
    assert!(next.melds().is_empty());
    assert_eq!(next.must_meld(), None);

    let expected = state.next_round(&mut GameRng::new(1));
    assert_eq!(next.hand(PlayerId::One), expected.hand(PlayerId::One));
    assert_eq!(next.hand(PlayerId::Two), expected.hand(PlayerId::Two));
    assert_eq!(next.discard(), expected.discard());
    assert_eq!(next, reduce(&state, &Action::go_out(Some(1))));
}

/// Test that melded points are credited to both players on go out.
#[test]
fn test_go_out_credits_melds() {
    let state = StateBuilder::new()
        .hand(PlayerId::Two, cards(&["4S"]))
        .melds([
            Meld::from_side(PlayerId::One, cards(&["TH", "JH", "QH"])),
            Meld::from_side(PlayerId::Two, cards(&["9C", "9D", "9S"])),
        ])
        .discard(cards(&["2D"]))
        .phase(GamePhase::Play)
        .build();

    let next = reduce(&state, &Action::go_out(Some(8)));

    assert_eq!(next.score(PlayerId::One), 30);
    assert_eq!(next.score(PlayerId::Two), 15 - 5);
}

/// Test that crossing the threshold completes the game after dealing.
#[test]
fn test_completion_threshold() {
    let state = StateBuilder::new()
        .melds([Meld::from_side(PlayerId::One, cards(&["QS", "KS", "AS"]))])
        .discard(cards(&["2D"]))
        .phase(GamePhase::Play)
        .score(PlayerId::One, 470)
        .build();

    let next = reduce(&state, &Action::go_out(Some(1)));

    assert_eq!(next.score(PlayerId::One), 505);
    assert_eq!(next.phase(), GamePhase::Complete);
    assert_eq!(next.hand(PlayerId::One).len(), 9);
    assert_eq!(outcome(&next), Some(GameResult::Winner(PlayerId::One)));

    // Nothing moves once the game is over.
    for action in [Action::Draw, Action::pickup(0), Action::go_out(Some(2))] {
        assert_eq!(try_reduce(&next, &action), Err(Rejection::GameComplete));
    }
}

/// Test that a lower win threshold ends the game sooner.
#[test]
fn test_custom_threshold() {
    let config = RummyConfig::default().with_win_threshold(20);
    let state = StateBuilder::new()
        .config(config)
        .melds([Meld::from_side(PlayerId::One, cards(&["7C", "8C", "9C"]))])
        .discard(cards(&["2D"]))
        .phase(GamePhase::Play)
        .score(PlayerId::One, 5)
        .build();

    let next = reduce(&state, &Action::go_out(Some(1)));

    assert_eq!(next.score(PlayerId::One), 20);
    assert!(next.is_complete());
}

// =============================================================================
// Rejections
// =============================================================================

/// Test that each precondition violation leaves the state untouched.
#[test]
fn test_rejections_are_noops() {
    let drawing = StateBuilder::new()
        .hand(PlayerId::One, cards(&["2H", "3H", "9S"]))
        .discard(cards(&["KC"]))
        .build();
    let playing = StateBuilder::from_state(&drawing).phase(GamePhase::Play).build();
    let pending = StateBuilder::from_state(&playing).must_meld(Some(card("2H"))).build();

    let cases = [
        (&drawing, Action::discard(card("2H"))),
        (&drawing, Action::meld(cards(&["2H", "3H", "9S"]))),
        (&drawing, Action::go_out(Some(1))),
        (&drawing, Action::pickup(0)),
        (&drawing, Action::pickup(4)),
        (&playing, Action::Draw),
        (&playing, Action::pickup(0)),
        (&playing, Action::discard(card("KC"))),
        (&playing, Action::meld(cards(&["2H", "3H", "9S"]))),
        (&playing, Action::meld(Vec::new())),
        (&playing, Action::go_out(Some(1))),
        (&pending, Action::discard(card("9S"))),
        (&pending, Action::meld(cards(&["3H", "9S"]))),
    ];

    for (state, action) in cases {
        assert_eq!(&reduce(state, &action), state, "{:?}", action);
    }
}
