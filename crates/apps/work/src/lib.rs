//! Work panel: a portfolio list of past projects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{PanelModule, PanelMountContext, ProgramId};
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Project {
    title: &'static str,
    url: &'static str,
    summary: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Retail accessories storefront",
        url: "https://example.com/accessories",
        summary: "Brought an in-store accessories experience online, with real-time inventory \
                  and a cart shared across product lines.",
    },
    Project {
        title: "Studio case studies",
        url: "https://example.com/studio",
        summary: "A CMS-driven case study template that can be reordered freely and loads \
                  video-heavy pages quickly.",
    },
    Project {
        title: "Foundation website",
        url: "https://example.com/foundation",
        summary: "Performance work for readers on slow northern connections, plus user testing \
                  and CMS training for the client team.",
    },
];

#[component]
/// Work panel window contents.
pub fn WorkPanel(
    /// Runtime-provided mount context.
    context: PanelMountContext,
) -> impl IntoView {
    let operations = context.operations;

    view! {
        <Panel layout_class="work-panel">
            <Heading>"Selected work"</Heading>
            <ul class="work-projects">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <li>
                                <Heading role=TextRole::Caption>
                                    <a href=project.url>{project.title}</a>
                                </Heading>
                                <Text>{project.summary}</Text>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Button on_click=Callback::new(move |_| {
                operations.open_program(ProgramId::trusted("chat"));
            })>
                "Ask me about a project"
            </Button>
        </Panel>
    }
}

fn mount(context: PanelMountContext) -> View {
    view! { <WorkPanel context=context /> }.into_view()
}

/// Registry panel module for the work program.
pub fn panel_module() -> PanelModule {
    PanelModule::new(mount)
}
