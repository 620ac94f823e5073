use leptos::*;
use system_ui::{Button, ButtonVariant, Heading, Overlay, Text};

use crate::components::use_desktop_runtime;

#[component]
/// Full-screen shutdown overlay. Restart returns to an empty running desktop.
pub(super) fn ShutdownScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Overlay layout_class="shutdown-screen" aria_label="Shut down">
            <Heading>"It's now safe to turn off your computer."</Heading>
            <Text>"Or, if you'd rather stick around:"</Text>
            <Button
                variant=ButtonVariant::Primary
                ui_slot="restart"
                on_click=Callback::new(move |_| runtime.restart())
            >
                "Restart"
            </Button>
        </Overlay>
    }
}
