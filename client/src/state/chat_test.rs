use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_starts_closed_and_idle() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(!state.thinking);
}

#[test]
fn chat_state_default_seeds_assistant_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Assistant);
    assert_eq!(state.messages[0].content, GREETING);
}

// =============================================================
// Transcript append order
// =============================================================

#[test]
fn transcript_preserves_append_order() {
    let mut state = ChatState::default();
    state.messages.push(ChatMessage::user("delete buy milk"));
    state.messages.push(ChatMessage::assistant("Done — removed it."));
    let roles: Vec<ChatRole> = state.messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
}

#[test]
fn message_constructors_tag_roles() {
    assert_eq!(ChatMessage::user("hi").role, ChatRole::User);
    assert_eq!(ChatMessage::assistant("hello").role, ChatRole::Assistant);
}
