//! Runtime provider and context wiring for the desktop.
//!
//! This module owns the long-lived lifecycle state container, the runtime effect queue and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use desktop_app_contract::{
    BackgroundOption, PanelCommand, PanelLifecycle, PanelOperations, ProgramId,
};
use leptos::*;
use platform_host::HostServices;

use crate::{
    apps, effect_executor,
    host::DesktopHostContext,
    model::LifecycleState,
    persistence,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading lifecycle state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive lifecycle state signal.
    pub state: RwSignal<LifecycleState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn open_program(&self, program: ProgramId) {
        self.dispatch_action(DesktopAction::OpenProgram { program });
    }

    pub fn close_program(&self, program: ProgramId) {
        self.dispatch_action(DesktopAction::CloseProgram { program });
    }

    pub fn toggle_minimize(&self, program: ProgramId, force_minimize: bool) {
        self.dispatch_action(DesktopAction::ToggleMinimize {
            program,
            force_minimize,
        });
    }

    pub fn set_active_program(&self, program: ProgramId) {
        self.dispatch_action(DesktopAction::SetActiveProgram { program });
    }

    pub fn toggle_start_menu(&self, open: bool) {
        self.dispatch_action(DesktopAction::ToggleStartMenu { open });
    }

    pub fn change_system_settings(
        &self,
        background: Option<BackgroundOption>,
        theme: Option<String>,
    ) {
        self.dispatch_action(DesktopAction::ChangeSystemSettings { background, theme });
    }

    pub fn begin_shutdown(&self) {
        self.dispatch_action(DesktopAction::BeginShutdown);
    }

    pub fn restart(&self) {
        self.dispatch_action(DesktopAction::Restart);
    }

    /// Read-only lifecycle slice handed to panels.
    pub fn panel_lifecycle(&self) -> PanelLifecycle {
        let state = self.state;
        PanelLifecycle {
            open_programs: Signal::derive(move || state.with(|s| s.open_programs.clone())),
            minimized_programs: Signal::derive(move || {
                state.with(|s| s.minimized_programs.clone())
            }),
            active_program: Signal::derive(move || state.with(|s| s.active_program.clone())),
            previous_active_program: Signal::derive(move || {
                state.with(|s| s.previous_active_program.clone())
            }),
            system_settings: Signal::derive(move || state.with(|s| s.system_settings.clone())),
        }
    }

    /// Command handle handed to panels; every command goes through the reducer.
    pub fn panel_operations(&self) -> PanelOperations {
        let dispatch = self.dispatch;
        PanelOperations::new(Callback::new(move |command: PanelCommand| {
            dispatch.call(DesktopAction::from(command));
        }))
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext, settings_loaded: bool) {
    let host = runtime.host.get_value();
    if !settings_loaded {
        host.install_boot_hydration(runtime.dispatch);
    }
    host.install_link_interception();
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted settings.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host_context = DesktopHostContext::new(host_services);
    // Synchronous stores seed the first render; anything else hydrates after mount.
    let loaded_settings =
        persistence::load_system_settings_now(host_context.prefs_store().as_ref());
    let settings_loaded = loaded_settings.is_some();
    let initial = match loaded_settings {
        Some(settings) => {
            logging::log!(
                "settings loaded at creation via {} host: background `{}`, theme `{}`",
                host_context.host_strategy_name(),
                settings.background.name,
                settings.theme
            );
            LifecycleState::initial(apps::default_program_id(), settings)
        }
        None => LifecycleState::default(),
    };

    let host = store_value(host_context);
    let state = create_rw_signal(initial);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut lifecycle = state.get_untracked();
        let previous = lifecycle.clone();

        match reduce_desktop(&mut lifecycle, action) {
            Ok(new_effects) => {
                debug_assert_eq!(lifecycle.check_invariants(), Ok(()));
                if lifecycle != previous {
                    state.set(lifecycle);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime, settings_loaded);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
