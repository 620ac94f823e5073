//! Root compositor: desktop surface, icons, program windows, taskbar and shutdown screen.

mod menus;
mod shutdown_screen;
mod taskbar;
mod window;

use desktop_app_contract::ProgramId;
use leptos::*;
use system_ui::{
    AppIcon, DesktopIconButton, DesktopIconGrid, DesktopIconLink, DesktopRoot,
    DesktopWindowLayer,
};

use self::{
    menus::StartMenu, shutdown_screen::ShutdownScreen, taskbar::DesktopTaskbar,
    window::ProgramWindow,
};
use crate::{apps, model::LifecycleState};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Programs whose panels are mounted, in registry order.
///
/// Minimized programs stay in the list so their panels keep local state while hidden.
pub fn visible_panels(state: &LifecycleState) -> Vec<ProgramId> {
    apps::window_registry()
        .iter()
        .filter(|entry| state.is_open(&entry.id) || state.is_minimized(&entry.id))
        .map(|entry| entry.id.clone())
        .collect()
}

pub(crate) fn theme_class(theme: &str) -> String {
    format!("theme-{}", theme.to_ascii_lowercase())
}

pub(crate) fn background_style(url: &str) -> String {
    format!("background-image: url('{url}');")
}

#[component]
/// Root desktop compositor. Must be rendered inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.with_untracked(|s| s.start_menu_open) {
            ev.prevent_default();
            runtime.toggle_start_menu(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let theme = Signal::derive(move || state.with(|s| theme_class(&s.system_settings.theme)));
    let background = Signal::derive(move || {
        state.with(|s| background_style(&s.system_settings.background.url))
    });
    let power = Signal::derive(move || state.with(|s| s.power_state.as_str().to_string()));
    let running = move || state.with(|s| !s.is_shutting_down());
    let resume = &apps::desktop_config().resume;

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            theme_class=theme
            style=background
            data_power=power
        >
            <Show when=running fallback=|| view! { <ShutdownScreen /> }>
                <div
                    data-ui-slot="dismiss-layer"
                    on:mousedown=move |_| {
                        if state.with_untracked(|s| s.start_menu_open) {
                            runtime.toggle_start_menu(false);
                        }
                    }
                />
                <DesktopIconGrid>
                    {apps::desktop_icon_programs()
                        .into_iter()
                        .map(|entry| {
                            let program = entry.id.clone();
                            view! {
                                <DesktopIconButton
                                    title=entry.display_name.clone()
                                    data_program=entry.id.to_string()
                                    on_click=Callback::new(move |_| {
                                        runtime.open_program(program.clone());
                                    })
                                >
                                    <AppIcon src=entry.icon_url.clone() alt=entry.icon_alt.clone() />
                                    <span>{entry.display_name.clone()}</span>
                                </DesktopIconButton>
                            }
                        })
                        .collect_view()}
                    <DesktopIconLink href=resume.url.clone() title=resume.label.clone()>
                        <AppIcon src=resume.icon_url.clone() alt=resume.icon_alt.clone() />
                        <span>{resume.label.clone()}</span>
                    </DesktopIconLink>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.with(visible_panels)
                        key=|program| program.clone()
                        let:program
                    >
                        <ProgramWindow program=program />
                    </For>
                </DesktopWindowLayer>

                <Show when=move || state.with(|s| s.start_menu_open) fallback=|| ()>
                    <StartMenu />
                </Show>
                <DesktopTaskbar />
            </Show>
        </DesktopRoot>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> ProgramId {
        ProgramId::trusted(raw)
    }

    #[test]
    fn visible_panels_follow_registry_order_not_open_order() {
        let mut state = LifecycleState::default();
        state.open_programs = vec![id("settings"), id("contact"), id("chat")];
        state.active_program = Some(id("chat"));

        assert_eq!(
            visible_panels(&state),
            vec![id("chat"), id("contact"), id("settings")]
        );
    }

    #[test]
    fn minimized_panels_stay_mounted() {
        let mut state = LifecycleState::default();
        state.open_programs.push(id("work"));
        state.minimized_programs.push(id("work"));

        assert_eq!(visible_panels(&state), vec![id("chat"), id("work")]);
    }

    #[test]
    fn unregistered_ids_are_never_rendered() {
        let mut state = LifecycleState::default();
        state.open_programs.push(id("paint"));

        assert_eq!(visible_panels(&state), vec![id("chat")]);
    }

    #[test]
    fn shutdown_renders_no_panels() {
        let mut state = LifecycleState::default();
        crate::shutdown::begin_shutdown(&mut state);

        assert!(visible_panels(&state).is_empty());
    }

    #[test]
    fn appearance_tokens_are_derived_from_settings() {
        assert_eq!(theme_class("Dark"), "theme-dark");
        assert_eq!(
            background_style("/backgrounds/aurora.jpg"),
            "background-image: url('/backgrounds/aurora.jpg');"
        );
    }
}
