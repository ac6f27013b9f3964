//! Floating assistant chat widget.
//!
//! DESIGN
//! ======
//! The bridge half of the assistant: appends the user's message locally,
//! forwards it to the remote assistant endpoint, and appends the reply. The
//! assistant may have mutated tasks server-side while interpreting the
//! message, so a successful exchange publishes `TasksChanged`; a failed one
//! appends a generic failure line and publishes nothing. At most one request
//! is outstanding — the input stays disabled while thinking.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatRole, ChatState, FAILURE_REPLY};
use crate::state::tasks::TasksChanged;

/// Chat widget: floating toggle button plus the transcript panel.
#[component]
pub fn ChatWidget(user_id: String) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let changes = expect_context::<TasksChanged>();

    let user_id = StoredValue::new(user_id);
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.thinking;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get().trim().to_owned();
        if text.is_empty() || chat.get().thinking {
            return;
        }
        input.set(String::new());
        chat.update(|c| {
            c.messages.push(ChatMessage::user(text.clone()));
            c.thinking = true;
        });

        #[cfg(feature = "hydrate")]
        {
            let user_id = user_id.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::send_chat(&user_id, &text).await {
                    Ok(reply) => {
                        chat.update(|c| {
                            c.messages.push(ChatMessage::assistant(reply));
                            c.thinking = false;
                        });
                        changes.notify();
                    }
                    Err(_) => {
                        chat.update(|c| {
                            c.messages.push(ChatMessage::assistant(FAILURE_REPLY));
                            c.thinking = false;
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, changes, user_id);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().thinking;

    view! {
        <button
            type="button"
            class="chat-widget__fab"
            aria-label=move || if chat.get().open { "Close chat" } else { "Open chat" }
            on:click=move |_| chat.update(|c| c.open = !c.open)
        >
            "💬"
        </button>

        <Show when=move || chat.get().open>
            <div class="chat-widget">
                <div class="chat-widget__header">
                    <span>"AI Assistant"</span>
                    <button
                        type="button"
                        class="chat-widget__close"
                        aria-label="Close"
                        on:click=move |_| chat.update(|c| c.open = false)
                    >
                        "✕"
                    </button>
                </div>

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        chat.get()
                            .messages
                            .iter()
                            .map(|msg| {
                                let from_user = msg.role == ChatRole::User;
                                let content = msg.content.clone();
                                view! {
                                    <div
                                        class="chat-widget__message"
                                        class:chat-widget__message--user=from_user
                                    >
                                        {content}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || chat.get().thinking>
                        <div class="chat-widget__thinking">"..."</div>
                    </Show>
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Type a message..."
                        disabled=move || chat.get().thinking
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        type="button"
                        class="btn btn--primary chat-widget__send"
                        aria-label="Send"
                        disabled=move || !can_send()
                        on:click=move |_| do_send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
