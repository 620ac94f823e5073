//! Contact panel: an invitation to get in touch plus outbound profile links.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{PanelModule, PanelMountContext, ProgramId};
use leptos::*;
use system_ui::prelude::*;

const INVITATION: &str = "Let's chat! I'm always happy to meet new people. Grab a coffee with \
me, or just shoot me a message.";

const LINKS: [(&str, &str); 4] = [
    ("Email", "mailto:hello@example.com"),
    ("LinkedIn", "https://linkedin.com/in/example"),
    ("GitHub", "https://github.com/example"),
    ("Twitter", "https://twitter.com/example"),
];

#[component]
/// Contact panel window contents.
pub fn ContactPanel(
    /// Runtime-provided mount context.
    context: PanelMountContext,
) -> impl IntoView {
    let operations = context.operations;
    let program = context.program_id;

    view! {
        <Panel layout_class="contact-panel">
            <Text>{INVITATION}</Text>
            <ul class="contact-links">
                {LINKS
                    .iter()
                    .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                    .collect_view()}
            </ul>
            <Button
                variant=ButtonVariant::Primary
                on_click=Callback::new(move |_| {
                    operations.open_program(ProgramId::trusted("chat"));
                })
            >
                "Open chat"
            </Button>
            <Button
                variant=ButtonVariant::Quiet
                on_click=Callback::new(move |_| operations.close_program(program.clone()))
            >
                "Done"
            </Button>
        </Panel>
    }
}

fn mount(context: PanelMountContext) -> View {
    view! { <ContactPanel context=context /> }.into_view()
}

/// Registry panel module for the contact program.
pub fn panel_module() -> PanelModule {
    PanelModule::new(mount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_link_has_a_scheme() {
        for (label, href) in LINKS {
            assert!(
                href.starts_with("mailto:") || href.starts_with("https://"),
                "{label}"
            );
        }
    }
}
