//! Settings panel for choosing the desktop background and theme.
//!
//! Selections go through [`desktop_app_contract::PanelOperations::change_system_settings`], which
//! applies them to the desktop and persists them. The panel behaves like a dialog: "Done" closes it
//! and hands focus back to the program that had it before.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{
    BackgroundOption, PanelModule, PanelMountContext, ProgramId, SettingsOptions,
};
use leptos::*;
use system_ui::prelude::*;

fn background_named(options: &SettingsOptions, name: &str) -> Option<BackgroundOption> {
    options
        .backgrounds
        .iter()
        .find(|background| background.name == name)
        .cloned()
}

fn theme_named(options: &SettingsOptions, name: &str) -> Option<String> {
    options.themes.iter().find(|theme| *theme == name).cloned()
}

fn theme_label(theme: &str) -> String {
    let mut chars = theme.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Program to refocus after `closing` is dismissed: the previously focused program, provided it is
/// still open and visible.
fn return_focus_target(
    closing: &ProgramId,
    previous: Option<ProgramId>,
    open: &[ProgramId],
    minimized: &[ProgramId],
) -> Option<ProgramId> {
    previous.filter(|program| {
        program != closing && open.contains(program) && !minimized.contains(program)
    })
}

#[component]
/// Settings panel window contents.
pub fn SettingsPanel(
    /// Runtime-provided mount context.
    context: PanelMountContext,
) -> impl IntoView {
    let operations = context.operations;
    let lifecycle = context.lifecycle;
    let program = store_value(context.program_id);
    let options = store_value(context.settings_options);

    let current_background =
        Signal::derive(move || lifecycle.system_settings.get().background.name);
    let current_theme = Signal::derive(move || lifecycle.theme());

    let on_background = Callback::new(move |name: String| {
        match options.with_value(|options| background_named(options, &name)) {
            Some(background) => operations.change_system_settings(Some(background), None),
            None => logging::warn!("settings: unknown background `{name}`"),
        }
    });
    let on_theme = Callback::new(move |name: String| {
        match options.with_value(|options| theme_named(options, &name)) {
            Some(theme) => operations.change_system_settings(None, Some(theme)),
            None => logging::warn!("settings: unknown theme `{name}`"),
        }
    });

    let on_done = Callback::new(move |_| {
        let program = program.get_value();
        let target = return_focus_target(
            &program,
            lifecycle.previous_active_program.get_untracked(),
            &lifecycle.open_programs.get_untracked(),
            &lifecycle.minimized_programs.get_untracked(),
        );
        operations.close_program(program);
        if let Some(target) = target {
            operations.set_active_program(target);
        }
    });

    view! {
        <Panel layout_class="settings-panel">
            <Heading>"Display"</Heading>
            <label>
                <Text role=TextRole::Caption>"Background"</Text>
                <SelectField
                    aria_label="Background"
                    ui_slot="background"
                    value=current_background
                    on_change=on_background
                >
                    {options.with_value(|options| {
                        options
                            .backgrounds
                            .iter()
                            .map(|background| {
                                view! {
                                    <option value=background.name.clone()>
                                        {background.label.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    })}
                </SelectField>
            </label>
            <label>
                <Text role=TextRole::Caption>"Theme"</Text>
                <SelectField
                    aria_label="Theme"
                    ui_slot="theme"
                    value=current_theme
                    on_change=on_theme
                >
                    {options.with_value(|options| {
                        options
                            .themes
                            .iter()
                            .map(|theme| {
                                view! { <option value=theme.clone()>{theme_label(theme)}</option> }
                            })
                            .collect_view()
                    })}
                </SelectField>
            </label>
            <Button variant=ButtonVariant::Primary on_click=on_done>
                "Done"
            </Button>
        </Panel>
    }
}

fn mount(context: PanelMountContext) -> View {
    view! { <SettingsPanel context=context /> }.into_view()
}

/// Registry panel module for the settings program.
pub fn panel_module() -> PanelModule {
    PanelModule::new(mount)
}
