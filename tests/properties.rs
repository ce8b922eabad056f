//! Property tests over seeded rounds and reference strategy answers.

use std::cell::RefCell;
use std::rc::Rc;

use president::{
    Aggressive, Board, Conservative, Error, Hand, Move, Player, Pose, Rank, Round, RoundError,
    RoundEvent, RoundOptions, RoundResult, Rule, TurnView, play_round,
};
use proptest::prelude::*;

fn table(players: usize, aggressive: u8) -> Vec<Player> {
    (0..players)
        .map(|seat| {
            if aggressive & (1 << seat) == 0 {
                Player::new(Conservative)
            } else {
                Player::new(Aggressive)
            }
        })
        .collect()
}

/// `None` when the round ran into a revolution, which reference strategies
/// can trigger by leading four of a kind.
fn finished(options: RoundOptions, players: Vec<Player>, seed: u64) -> Option<RoundResult> {
    match play_round(options, players, seed) {
        Ok(result) => Some(result),
        Err(Error::Round(RoundError::UnsupportedRule {
            rule: Rule::Revolution,
            ..
        })) => None,
        Err(err) => panic!("round failed: {err}"),
    }
}

/// At most four copies of each of the thirteen ranks.
fn hand() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::vec(0usize..=4, 13)
        .prop_map(|counts| {
            counts
                .iter()
                .enumerate()
                .flat_map(|(rank, &count)| std::iter::repeat_n(rank as Rank, count))
                .collect::<Vec<_>>()
        })
        .prop_filter("a strategy is never asked with an empty hand", |cards| {
            !cards.is_empty()
        })
}

fn board() -> impl Strategy<Value = Option<(Rank, usize, bool)>> {
    prop::option::of((0u8..13, 1usize..=3, any::<bool>()))
}

fn view(cards: Vec<Rank>, top: Option<(Rank, usize, bool)>) -> TurnView {
    let (board, jump_risk) = match top {
        Some((rank, count, jump)) => {
            let pose = Pose::of(rank, count).unwrap();
            let poses = if jump { vec![pose, pose] } else { vec![pose] };
            (Board::from(poses), jump)
        }
        None => (Board::new(), false),
    };
    TurnView {
        hand: Hand::new(cards),
        board,
        jump_risk,
        played: Vec::new(),
    }
}

/// An answer a validator would accept for `view`.
fn is_legal(view: &TurnView, answer: &Move) -> bool {
    let cards = match answer {
        Move::Pass => return !view.board.is_empty(),
        Move::Play(cards) => cards,
    };
    let Ok(pose) = Pose::new(cards) else {
        return false;
    };
    if !view.hand.contains_pose(&pose) {
        return false;
    }
    match view.board.top() {
        None => true,
        Some(top) if view.jump_risk => pose == *top,
        Some(top) => pose.len() == top.len() && pose.rank() >= top.rank(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn seeded_rounds_rank_every_player(
        seed in any::<u64>(),
        players in 2usize..=6,
        aggressive in any::<u8>(),
    ) {
        let options = RoundOptions::default()
            .with_players(players)
            .with_record_events(false);
        let Some(result) = finished(options, table(players, aggressive), seed) else {
            return Ok(());
        };

        prop_assert!(result.violators.is_empty());
        let mut ranking = result.ranking();
        ranking.sort_unstable();
        prop_assert_eq!(ranking, (0..players).collect::<Vec<_>>());

        let held: usize = result.final_hands.iter().map(Hand::len).sum();
        prop_assert_eq!(held + result.played.len() + result.discarded.len(), 52);
        let in_tricks: usize = result.trick_history.iter().flatten().map(Pose::len).sum();
        prop_assert_eq!(in_tricks, result.played.len());
    }

    #[test]
    fn tricks_never_go_down(seed in any::<u64>(), aggressive in any::<u8>()) {
        let options = RoundOptions::default().with_record_events(false);
        let Some(result) = finished(options, table(4, aggressive), seed) else {
            return Ok(());
        };

        for trick in &result.trick_history {
            prop_assert!(!trick.is_empty());
            prop_assert!(trick.windows(2).all(|w| w[0].rank() <= w[1].rank()));
            prop_assert!(trick.iter().all(|pose| pose.len() == trick[0].len()));
        }
    }

    #[test]
    fn observed_plays_never_undercut_the_board(seed in any::<u64>(), aggressive in any::<u8>()) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let options = RoundOptions::default().with_record_events(false);
        let mut round = Round::new_observed(options, table(4, aggressive), seed, move |event: &RoundEvent| {
            sink.borrow_mut().push(event.clone());
        })
        .unwrap();
        let _ = round.play();

        let mut top: Option<Pose> = None;
        let mut jump_risk = false;
        for event in events.borrow().iter() {
            match event {
                RoundEvent::Played { pose, hand, .. } => {
                    prop_assert!(hand.contains_pose(pose));
                    if let Some(top) = top {
                        if jump_risk {
                            prop_assert_eq!(*pose, top);
                        }
                        prop_assert!(pose.rank() >= top.rank());
                        prop_assert_eq!(pose.len(), top.len());
                    }
                    jump_risk = top == Some(*pose);
                    top = Some(*pose);
                }
                RoundEvent::Jumped { .. } => jump_risk = false,
                RoundEvent::LeadTaken { .. } => {
                    top = None;
                    jump_risk = false;
                }
                _ => {}
            }
        }
    }

    #[test]
    fn same_seed_same_round(seed in any::<u64>()) {
        let options = RoundOptions::default();
        let first = play_round(options.clone(), table(4, 0b0101), seed);
        let second = play_round(options, table(4, 0b0101), seed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reference_answers_are_legal(cards in hand(), top in board()) {
        let view = view(cards, top);
        prop_assert!(is_legal(&view, &Conservative::choose(&view)));
        prop_assert!(is_legal(&view, &Aggressive::choose(&view)));
    }

    #[test]
    fn aggressive_plays_whenever_conservative_does(cards in hand(), top in board()) {
        let view = view(cards, top);
        if Conservative::choose(&view) != Move::Pass {
            prop_assert_ne!(Aggressive::choose(&view), Move::Pass);
        }
    }
}
