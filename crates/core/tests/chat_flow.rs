//! Concierge conversation against the scripted backend with paused time.

mod helpers;

use helpers::DELAY;
use vibe_core::backend::{canned_replies, Concierge, ScriptedConcierge};
use vibe_core::chat::ChatSession;
use vibe_core::types::{ChatAuthor, ChatContext};

fn context() -> ChatContext {
    ChatContext {
        city: "Delhi".into(),
        category: "Cafes".into(),
        preferences: vec!["cozy".into()],
    }
}

#[tokio::test(start_paused = true)]
async fn test_message_gets_exactly_one_canned_reply() {
    let concierge = ScriptedConcierge::with_seed(DELAY, 1);
    let mut session = ChatSession::new(context());

    let pending = session.begin_send("test").expect("send accepted");
    let after_send = session.messages().len();
    assert_eq!(after_send, 2);
    let user = session.messages().last().unwrap();
    assert_eq!(user.author, ChatAuthor::User);
    assert_eq!(user.content, "test");

    let start = tokio::time::Instant::now();
    let outcome = concierge.reply(&pending.prompt, &pending.context).await;
    assert!(start.elapsed() >= DELAY);
    assert_eq!(session.messages().len(), after_send, "bot reply must wait for the delay");

    session.finish_reply(pending, outcome);
    assert_eq!(session.messages().len(), after_send + 1);
    let bot = session.messages().last().unwrap();
    assert_eq!(bot.author, ChatAuthor::Bot);
    assert!(canned_replies(&context()).contains(&bot.content));
    assert!(!session.is_waiting());
}

#[tokio::test(start_paused = true)]
async fn send_message_round_trip() {
    let concierge = ScriptedConcierge::with_seed(DELAY, 3);
    let mut session = ChatSession::new(context());
    assert!(session.send_message(&concierge, "Where can I read?").await);
    assert!(!session.send_message(&concierge, "   ").await);

    let authors: Vec<ChatAuthor> = session.messages().iter().map(|m| m.author).collect();
    assert_eq!(authors, vec![ChatAuthor::Bot, ChatAuthor::User, ChatAuthor::Bot]);
}

#[tokio::test(start_paused = true)]
async fn seeded_concierges_agree() {
    let a = ScriptedConcierge::with_seed(DELAY, 2024);
    let b = ScriptedConcierge::with_seed(DELAY, 2024);
    let mut left = ChatSession::new(context());
    let mut right = ChatSession::new(context());
    for text in ["one", "two", "three", "four"] {
        left.send_message(&a, text).await;
        right.send_message(&b, text).await;
    }
    let contents =
        |s: &ChatSession| s.messages().iter().map(|m| m.content.clone()).collect::<Vec<_>>();
    assert_eq!(contents(&left), contents(&right));
}
