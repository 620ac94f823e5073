use desktop_app_contract::{PanelMountContext, ProgramId};
use leptos::*;
use system_ui::{
    AppIcon, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

use crate::{apps, components::use_desktop_runtime};

/// Returns whether a mousedown on the window frame should focus the window.
///
/// Presses on the title bar controls never focus: close and minimize act on the window as it is,
/// leaving the focus history untouched.
fn focuses_on_mousedown(focused: bool, minimized: bool, on_window_control: bool) -> bool {
    !focused && !minimized && !on_window_control
}

fn pressed_window_control(ev: &ev::MouseEvent) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        ev.target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| {
                element
                    .closest("[data-ui-kind=\"window-controls\"]")
                    .ok()
                    .flatten()
            })
            .is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
        false
    }
}

#[component]
/// Window chrome around one program's panel.
pub(super) fn ProgramWindow(program: ProgramId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let Some(entry) = apps::registry_entry(&program) else {
        logging::warn!("no registry entry for `{program}`; window not rendered");
        return ().into_view();
    };

    let focused = Signal::derive({
        let program = program.clone();
        move || state.with(|s| s.is_active(&program))
    });
    let minimized = Signal::derive({
        let program = program.clone();
        move || state.with(|s| s.is_minimized(&program))
    });

    let panel = entry.panel.mount(PanelMountContext {
        program_id: program.clone(),
        lifecycle: runtime.panel_lifecycle(),
        operations: runtime.panel_operations(),
        settings_options: apps::settings_options(),
    });

    let focus = Callback::new({
        let program = program.clone();
        move |ev: ev::MouseEvent| {
            if focuses_on_mousedown(
                focused.get_untracked(),
                minimized.get_untracked(),
                pressed_window_control(&ev),
            ) {
                runtime.set_active_program(program.clone());
            }
        }
    });
    let minimize = Callback::new({
        let program = program.clone();
        move |_| runtime.toggle_minimize(program.clone(), true)
    });
    let close = Callback::new({
        let program = program.clone();
        move |_| runtime.close_program(program.clone())
    });

    view! {
        <WindowFrame
            aria_label=entry.display_name.clone()
            data_program=program.to_string()
            focused=focused
            minimized=minimized
            on_mousedown=focus
        >
            <WindowTitleBar on_dblclick=minimize>
                <WindowTitle>
                    <AppIcon src=entry.icon_url.clone() alt=entry.icon_alt.clone() />
                    <span>{entry.display_name.clone()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Minimize" on_click=minimize>
                        "_"
                    </WindowControlButton>
                    <WindowControlButton aria_label="Close" on_click=close>
                        "x"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{panel}</WindowBody>
        </WindowFrame>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_presses_outside_the_controls_focus_a_background_window() {
        assert!(focuses_on_mousedown(false, false, false));
        assert!(!focuses_on_mousedown(false, false, true));
        assert!(!focuses_on_mousedown(true, false, false));
        assert!(!focuses_on_mousedown(false, true, false));
    }
}
