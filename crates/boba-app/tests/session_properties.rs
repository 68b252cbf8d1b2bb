//! Property-based tests for the Session state machine.
//!
//! Tests verify that invariants hold under arbitrary operation sequences.
//! This ensures behavioral correctness across all possible execution paths.

use boba_app::{KeyInput, Message, Origin, Session, SessionAction, SessionEvent, WidgetConfig};
use proptest::prelude::*;

/// Operations a user or the runtime can apply to a session.
#[derive(Debug, Clone)]
enum Op {
    Open,
    Close,
    Draft(String),
    Send(Option<String>),
    Suggestion(usize),
    Reply(String),
    Fail,
    Settle,
    StaleSettle,
    Key(KeyInput),
}

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => proptest::char::range('a', 'z').prop_map(KeyInput::Char),
        1 => Just(KeyInput::Char(' ')),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
        2 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Esc),
        1 => (0u8..6).prop_map(KeyInput::Function),
    ]
}

/// Generate random session operations.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Open),
        1 => Just(Op::Close),
        2 => "[a-z ]{0,8}".prop_map(Op::Draft),
        3 => proptest::option::of("[a-z ]{0,8}").prop_map(Op::Send),
        1 => (0usize..6).prop_map(Op::Suggestion),
        3 => "[a-z ]{0,8}".prop_map(Op::Reply),
        1 => Just(Op::Fail),
        2 => Just(Op::Settle),
        1 => Just(Op::StaleSettle),
        4 => key_strategy().prop_map(Op::Key),
    ]
}

fn apply(session: &mut Session, op: Op) -> Vec<SessionAction> {
    let turn = session.turn();
    match op {
        Op::Open => session.open(),
        Op::Close => session.close(),
        Op::Draft(text) => session.update_draft(text),
        Op::Send(text) => session.send(text),
        Op::Suggestion(index) => session.send_suggestion(index),
        Op::Reply(reply) => session.handle(SessionEvent::ReplyReceived { turn, reply }),
        Op::Fail => session.handle(SessionEvent::ReplyFailed { turn, reason: "offline".into() }),
        Op::Settle => session.handle(SessionEvent::Settled { turn }),
        Op::StaleSettle => {
            session.handle(SessionEvent::Settled { turn: turn.wrapping_sub(1) })
        },
        Op::Key(key) => session.handle(SessionEvent::Key(key)),
    }
}

fn posts(actions: &[SessionAction]) -> Vec<(&String, &Vec<Message>)> {
    actions
        .iter()
        .filter_map(|action| match action {
            SessionAction::PostMessage { message, history, .. } => Some((message, history)),
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_session_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut session = Session::new(WidgetConfig::default());

        for op in ops {
            let before = session.clone();
            let actions = apply(&mut session, op);

            // Append-only transcript
            prop_assert!(session.transcript().len() >= before.transcript().len());
            prop_assert!(session.transcript().starts_with(before.transcript()));
            prop_assert!(session.transcript().len() <= before.transcript().len() + 1);

            // Suggestions are hidden while a reply is pending
            if session.is_awaiting_reply() {
                prop_assert!(!session.quick_suggestions_visible());
            }

            // At most one request in flight, carrying the prior transcript
            let posted = posts(&actions);
            prop_assert!(posted.len() <= 1);
            if let Some((message, history)) = posted.first() {
                prop_assert!(!before.is_awaiting_reply());
                prop_assert!(!message.trim().is_empty());
                prop_assert_eq!(history.as_slice(), before.transcript());
                let appended = Message::user(message.as_str());
                prop_assert_eq!(session.transcript().last(), Some(&appended));
                prop_assert!(session.is_awaiting_reply());
            }

            // Users and assistant turns pair up, offset by the pending request
            let users = session.transcript().iter().filter(|m| m.origin() == Origin::User).count();
            let assistants = session.transcript().len() - users;
            prop_assert_eq!(assistants, 1 + users - usize::from(session.is_awaiting_reply()));
        }
    }

    #[test]
    fn prop_open_close_idempotent(open_first in any::<bool>(), repeats in 1usize..5) {
        let mut once = Session::default();
        let mut many = Session::default();

        for session in [&mut once, &mut many] {
            if open_first {
                let _ = session.open();
            }
        }

        let _ = if open_first { once.close() } else { once.open() };
        for _ in 0..repeats {
            let _ = if open_first { many.close() } else { many.open() };
        }

        prop_assert_eq!(once.is_open(), many.is_open());
        prop_assert_eq!(once.transcript(), many.transcript());
    }

    #[test]
    fn prop_n_successful_sends_give_one_plus_two_n(texts in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let mut session = Session::default();
        let _ = session.open();

        for text in &texts {
            let actions = session.send(Some(text.clone()));
            prop_assert_eq!(posts(&actions).len(), 1);
            let turn = session.turn();
            let _ = session.handle(SessionEvent::ReplyReceived { turn, reply: "ok".into() });
        }

        prop_assert_eq!(session.transcript().len(), 1 + 2 * texts.len());
        prop_assert!(!session.is_awaiting_reply());
    }
}
