//! Chat panel: a local transcript with quick replies that hand off to other programs.
//!
//! The transcript and the unsent draft live in panel-local signals, so they survive
//! minimize/restore while the window stays mounted.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{PanelModule, PanelMountContext, ProgramId};
use leptos::*;
use system_ui::prelude::*;

const GREETING: &str = "Hi there! Thanks for stopping by. Ask me anything below, or pick a \
quick option to get started.";
const ACKNOWLEDGEMENT: &str = "Thanks for the message! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    Bot,
    Visitor,
}

impl Speaker {
    fn token(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::Visitor => "visitor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    speaker: Speaker,
    text: String,
}

impl ChatMessage {
    fn bot(text: &str) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct QuickOption {
    label: &'static str,
    opens: &'static str,
}

const QUICK_OPTIONS: [QuickOption; 2] = [
    QuickOption {
        label: "Show me your work",
        opens: "work",
    },
    QuickOption {
        label: "How can I reach you?",
        opens: "contact",
    },
];

/// Appends the trimmed draft and a reply to `transcript`. Blank drafts are ignored.
fn submit_draft(transcript: &mut Vec<ChatMessage>, draft: &str) -> bool {
    let text = draft.trim();
    if text.is_empty() {
        return false;
    }
    transcript.push(ChatMessage {
        speaker: Speaker::Visitor,
        text: text.to_string(),
    });
    transcript.push(ChatMessage::bot(ACKNOWLEDGEMENT));
    true
}

#[component]
/// Chat panel window contents.
pub fn ChatPanel(
    /// Runtime-provided mount context.
    context: PanelMountContext,
) -> impl IntoView {
    let operations = context.operations;
    let transcript = create_rw_signal(vec![ChatMessage::bot(GREETING)]);
    let draft = create_rw_signal(String::new());

    let send = Callback::new(move |()| {
        let mut sent = false;
        transcript.update(|messages| sent = submit_draft(messages, &draft.get_untracked()));
        if sent {
            draft.set(String::new());
        }
    });

    view! {
        <Panel layout_class="chat-panel">
            <ol class="chat-transcript" aria-live="polite">
                <For
                    each=move || transcript.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    let:item
                >
                    <li data-speaker=item.1.speaker.token()>
                        <Text>{item.1.text}</Text>
                    </li>
                </For>
            </ol>
            <div class="chat-quick-options">
                {QUICK_OPTIONS
                    .iter()
                    .map(|option| {
                        let opens = option.opens;
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                on_click=Callback::new(move |_| {
                                    operations.open_program(ProgramId::trusted(opens));
                                })
                            >
                                {option.label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            <TextArea
                aria_label="Message"
                placeholder="Type a message and press Enter"
                value=draft
                on_input=Callback::new(move |value| draft.set(value))
                on_submit=send
            />
            <Button variant=ButtonVariant::Primary on_click=Callback::new(move |_| send.call(()))>
                "Send"
            </Button>
        </Panel>
    }
}

fn mount(context: PanelMountContext) -> View {
    view! { <ChatPanel context=context /> }.into_view()
}

/// Registry panel module for the chat program.
pub fn panel_module() -> PanelModule {
    PanelModule::new(mount)
}
