//! Text rendering tests.

use president::format::{
    Action, DELIMITER, RankSymbols, format_actions, format_hand, format_pose, format_ranks,
};
use president::{EventLog, Hand, Pose, Role, RoundEvent, RoundObserver};

#[test]
fn classic_symbols() {
    let symbols = RankSymbols::classic();
    assert_eq!(symbols.symbol(0), "3");
    assert_eq!(symbols.symbol(7), "10");
    assert_eq!(symbols.symbol(11), "A");
    assert_eq!(symbols.symbol(12), "2");
    assert_eq!(symbols.symbol(13), "?");
    assert_eq!(RankSymbols::default(), symbols);
    assert_eq!(RankSymbols::for_ranks(13), symbols);
}

#[test]
fn numeric_symbols_for_short_decks() {
    let symbols = RankSymbols::for_ranks(5);
    assert_eq!(symbols.symbol(0), "0");
    assert_eq!(symbols.symbol(4), "4");
    assert_eq!(symbols.symbol(5), "?");
}

#[test]
fn runs_are_glued_and_delimited() {
    let symbols = RankSymbols::classic();
    assert_eq!(format_ranks(&[11, 11, 0], &symbols, "."), "AA.3");
    assert_eq!(format_ranks(&[0, 0, 1, 0], &symbols, "|"), "33|4|3");
    assert_eq!(format_ranks(&[], &symbols, "."), "");
}

#[test]
fn hands_render_sorted() {
    let hand = Hand::new(vec![12, 0, 1, 0]);
    assert_eq!(format_hand(&hand, &RankSymbols::classic()), "33.4.2");
}

#[test]
fn poses_render_without_delimiters() {
    let pose = Pose::of(9, 3).unwrap();
    assert_eq!(format_pose(&pose, &RankSymbols::classic()), "QQQ");
}

#[test]
fn action_symbols() {
    let symbols = RankSymbols::classic();
    let actions = [
        Action::Play(Pose::of(5, 1).unwrap()),
        Action::Pass,
        Action::Pass,
        Action::Jumped,
        Action::Violator,
        Action::Play(Pose::of(5, 1).unwrap()),
        Action::Play(Pose::of(5, 1).unwrap()),
    ];
    assert_eq!(format_actions(&actions, &symbols, DELIMITER), "8.--.~.X.88");
}

#[test]
fn event_log_renders_lines_and_actions() {
    let symbols = RankSymbols::for_ranks(5);
    let mut log = EventLog::new(&["a", "b"], vec![Role::Neutral; 2], symbols);

    log.on_event(&RoundEvent::Played {
        player: 0,
        pose: Pose::of(1, 1).unwrap(),
        hand: Hand::new(vec![0, 1]),
    });
    log.on_event(&RoundEvent::Passed { player: 1 });
    log.on_event(&RoundEvent::LeadTaken { player: 0 });

    assert_eq!(log.actions(), "1.-");
    assert_eq!(
        log.render(),
        "0_a with 0.1 plays 1\n1_b passes\n0_a (Neutral) takes the lead\nactions: 1.-"
    );
}
