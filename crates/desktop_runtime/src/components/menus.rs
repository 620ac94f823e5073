use desktop_app_contract::ProgramId;
use leptos::*;
use system_ui::{AppIcon, LauncherMenu, MenuItem, MenuSeparator};

use crate::{apps, components::use_desktop_runtime};

#[component]
/// Start menu: launcher entries, Settings and Shut Down.
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let settings = ProgramId::trusted(apps::SETTINGS_PROGRAM);

    view! {
        <LauncherMenu id="desktop-start-menu">
            {apps::launcher_programs()
                .into_iter()
                .map(|entry| {
                    let program = entry.id.clone();
                    view! {
                        <MenuItem
                            aria_label=entry.display_name.clone()
                            on_click=Callback::new(move |_| runtime.open_program(program.clone()))
                        >
                            <AppIcon src=entry.icon_url.clone() alt=entry.icon_alt.clone() />
                            <span>{entry.display_name.clone()}</span>
                        </MenuItem>
                    }
                })
                .collect_view()}
            <MenuSeparator />
            <MenuItem
                aria_label="Settings"
                on_click=Callback::new(move |_| runtime.open_program(settings.clone()))
            >
                "Settings"
            </MenuItem>
            <MenuItem
                aria_label="Shut Down"
                on_click=Callback::new(move |_| runtime.begin_shutdown())
            >
                "Shut Down..."
            </MenuItem>
        </LauncherMenu>
    }
}
