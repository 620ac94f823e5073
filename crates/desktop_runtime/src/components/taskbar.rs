use desktop_app_contract::ProgramId;
use leptos::*;
use system_ui::{AppIcon, Taskbar, TaskbarButton, TaskbarSection};

use crate::{
    apps, components::use_desktop_runtime, model::LifecycleState, reducer::DesktopAction,
};

/// Action for a click on a program's taskbar entry.
///
/// The focused program minimizes; any other program is restored (if minimized) and focused.
pub(super) fn taskbar_click_action(state: &LifecycleState, program: &ProgramId) -> DesktopAction {
    let force_minimize = state.is_active(program) && !state.is_minimized(program);
    DesktopAction::ToggleMinimize {
        program: program.clone(),
        force_minimize,
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_open = Signal::derive(move || state.with(|s| s.start_menu_open));

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    id="taskbar-start-button"
                    ui_slot="start-button"
                    aria_label="Start"
                    aria_expanded=start_open
                    pressed=start_open
                    on_click=Callback::new(move |_| {
                        runtime.toggle_start_menu(!start_open.get_untracked());
                    })
                >
                    "Start"
                </TaskbarButton>
            </TaskbarSection>
            <TaskbarSection ui_slot="programs" aria_label="Open programs">
                <For
                    each=move || state.with(|s| s.open_programs.clone())
                    key=|program| program.clone()
                    let:program
                >
                    <TaskbarEntry program=program />
                </For>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarEntry(program: ProgramId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let entry = apps::registry_entry(&program);
    let label = apps::display_name(&program);

    let active = Signal::derive({
        let program = program.clone();
        move || state.with(|s| s.is_active(&program))
    });
    let minimized = Signal::derive({
        let program = program.clone();
        move || state.with(|s| s.is_minimized(&program))
    });

    view! {
        <TaskbarButton
            aria_label=label.clone()
            title=label.clone()
            aria_pressed=active
            pressed=active
            selected=minimized
            on_click=Callback::new(move |_| {
                let action = state.with_untracked(|s| taskbar_click_action(s, &program));
                runtime.dispatch_action(action);
            })
        >
            {entry.map(|entry| view! { <AppIcon src=entry.icon_url.clone() alt=entry.icon_alt.clone() /> })}
            <span>{label}</span>
        </TaskbarButton>
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
    fn clicking_the_focused_entry_minimizes_it() {
        let state = LifecycleState::default();

        assert_eq!(
            taskbar_click_action(&state, &id("chat")),
            DesktopAction::ToggleMinimize {
                program: id("chat"),
                force_minimize: true,
            }
        );
    }

    #[test]
    fn clicking_a_background_or_minimized_entry_restores_it() {
        let mut state = LifecycleState::default();
        state.open_programs.push(id("work"));
        state.minimized_programs.push(id("work"));

        assert_eq!(
            taskbar_click_action(&state, &id("work")),
            DesktopAction::ToggleMinimize {
                program: id("work"),
                force_minimize: false,
            }
        );

        state.active_program = None;
        assert_eq!(
            taskbar_click_action(&state, &id("chat")),
            DesktopAction::ToggleMinimize {
                program: id("chat"),
                force_minimize: false,
            }
        );
    }
}
