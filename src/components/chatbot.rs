//! Chatbot Widget
//!
//! Self-contained floating assistant backed by the chat endpoint. The
//! transcript is in-memory only and append-only; a failed call yields
//! exactly one apology message and the input always comes back, so the
//! widget stays usable for the next attempt.

use leptos::html::Div;
use leptos::*;

use crate::api::client as api;

pub const GREETING: &str =
    "Hello! I am SmartBot, your AI banking assistant. How can I help you today?";
pub const APOLOGY: &str = "Sorry, I'm having trouble connecting right now.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Append-only conversation history, seeded with the greeting.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn seeded() -> Self {
        Self {
            messages: vec![ChatMessage {
                speaker: Speaker::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: text.to_string(),
        });
    }

    pub fn push_assistant(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: text.to_string(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// Floating chatbot toggle and conversation window.
#[component]
pub fn Chatbot() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (draft, set_draft) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let transcript = create_rw_signal(Transcript::seeded());

    let messages_ref = create_node_ref::<Div>();

    let send = move || {
        let message = draft.get_untracked().trim().to_string();
        if message.is_empty() || busy.get_untracked() {
            return;
        }

        transcript.update(|t| t.push_user(&message));
        set_draft.set(String::new());
        set_busy.set(true);
        scroll_to_latest(messages_ref);

        spawn_local(async move {
            let reply = match api::chatbot_reply(&message).await {
                Ok(reply) => reply,
                Err(_) => APOLOGY.to_string(),
            };
            transcript.update(|t| t.push_assistant(&reply));
            // Both arms land here: the input is re-enabled and the
            // indicator hidden no matter how the call went.
            set_busy.set(false);
            scroll_to_latest(messages_ref);
        });
    };

    let on_key = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="fixed bottom-4 right-4 z-40">
            // Conversation window
            <div
                class="w-80 bg-gray-800 rounded-xl shadow-xl mb-3 flex flex-col"
                class:hidden=move || !open.get()
            >
                <div class="flex items-center justify-between px-4 py-3 border-b border-gray-700">
                    <span class="font-semibold">"SmartBot"</span>
                    <button
                        on:click=move |_| set_open.set(false)
                        class="text-gray-400 hover:text-white"
                    >
                        "×"
                    </button>
                </div>

                <div node_ref=messages_ref class="h-64 overflow-y-auto p-4 space-y-3">
                    {move || {
                        transcript.with(|t| t.messages().to_vec())
                            .into_iter()
                            .map(|message| {
                                let align = match message.speaker {
                                    Speaker::User => "ml-auto bg-primary-600",
                                    Speaker::Assistant => "mr-auto bg-gray-700",
                                };
                                view! {
                                    <div class=format!(
                                        "max-w-[85%] rounded-lg px-3 py-2 text-sm {align}"
                                    )>
                                        {message.text}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}

                    // Typing indicator
                    <div
                        class="mr-auto bg-gray-700 rounded-lg px-3 py-2 text-sm text-gray-400"
                        class:hidden=move || !busy.get()
                    >
                        "SmartBot is typing..."
                    </div>
                </div>

                <div class="flex items-center space-x-2 p-3 border-t border-gray-700">
                    <input
                        type="text"
                        placeholder="Ask me anything..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=on_key
                        disabled=move || busy.get()
                        class="flex-1 bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none
                               disabled:opacity-50"
                    />
                    <button
                        on:click=move |_| send()
                        disabled=move || busy.get()
                        class="px-3 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        "Send"
                    </button>
                </div>
            </div>

            // Toggle button
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="ml-auto block w-14 h-14 bg-primary-600 hover:bg-primary-700
                       rounded-full shadow-lg text-2xl"
            >
                "💬"
            </button>
        </div>
    }
}

fn scroll_to_latest(messages_ref: NodeRef<Div>) {
    if let Some(list) = messages_ref.get_untracked() {
        list.set_scroll_top(list.scroll_height());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let transcript = Transcript::seeded();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].speaker, Speaker::Assistant);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }

    #[test]
    fn test_transcript_appends_in_order() {
        let mut transcript = Transcript::seeded();
        transcript.push_user("What is my balance?");
        transcript.push_assistant("You can check that in the Overview section.");
        transcript.push_user("Thanks");

        let speakers: Vec<Speaker> = transcript
            .messages()
            .iter()
            .map(|m| m.speaker)
            .collect();
        assert_eq!(
            speakers,
            vec![
                Speaker::Assistant,
                Speaker::User,
                Speaker::Assistant,
                Speaker::User
            ]
        );
    }

    #[test]
    fn test_failed_reply_appends_single_apology() {
        let mut transcript = Transcript::seeded();
        transcript.push_user("hello?");
        transcript.push_assistant(APOLOGY);
        assert_eq!(transcript.messages().last().unwrap().text, APOLOGY);
        assert_eq!(transcript.messages().len(), 3);
    }
}
