//! Reducer actions, side-effect intents, and transition logic for the lifecycle manager.

use desktop_app_contract::{BackgroundOption, PanelCommand, ProgramId, SystemSettings};
use thiserror::Error;

use crate::{
    apps,
    model::LifecycleState,
    persistence::SettingKey,
    shutdown,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`LifecycleState`].
pub enum DesktopAction {
    /// Open (or refocus) a program and close the start menu.
    OpenProgram {
        /// Program to open.
        program: ProgramId,
    },
    /// Close a program. Focus is cleared if it was active.
    CloseProgram {
        /// Program to close.
        program: ProgramId,
    },
    /// Minimize, or restore/focus, a program and close the start menu.
    ToggleMinimize {
        /// Target program.
        program: ProgramId,
        /// `true` always minimizes.
        force_minimize: bool,
    },
    /// Focus an open, visible program.
    SetActiveProgram {
        /// Program to focus.
        program: ProgramId,
    },
    /// Show or hide the start menu.
    ToggleStartMenu {
        /// Desired visibility.
        open: bool,
    },
    /// Apply and persist the provided settings fields.
    ChangeSystemSettings {
        /// New background, if changing.
        background: Option<BackgroundOption>,
        /// New theme, if changing.
        theme: Option<String>,
    },
    /// Show the shutdown screen and clear all lifecycle state.
    BeginShutdown,
    /// Leave the shutdown screen.
    Restart,
    /// Replace settings with values loaded from the settings store at boot.
    HydrateSettings {
        /// Loaded settings.
        settings: SystemSettings,
    },
}

impl From<PanelCommand> for DesktopAction {
    fn from(command: PanelCommand) -> Self {
        match command {
            PanelCommand::OpenProgram(program) => Self::OpenProgram { program },
            PanelCommand::CloseProgram(program) => Self::CloseProgram { program },
            PanelCommand::ToggleMinimize {
                program,
                force_minimize,
            } => Self::ToggleMinimize {
                program,
                force_minimize,
            },
            PanelCommand::SetActiveProgram(program) => Self::SetActiveProgram { program },
            PanelCommand::ChangeSystemSettings { background, theme } => {
                Self::ChangeSystemSettings { background, theme }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Write one settings token to the settings store.
    PersistSetting {
        /// Settings key.
        key: SettingKey,
        /// Plain-text token.
        token: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected actions. State is left untouched when one is returned.
pub enum ReducerError {
    /// The program is not in the window registry.
    #[error("program `{0}` is not registered")]
    InvalidProgramId(ProgramId),
    /// The program must be open for this operation.
    #[error("program `{0}` is not open")]
    ProgramNotOpen(ProgramId),
    /// The program must be visible for this operation.
    #[error("program `{0}` is minimized")]
    ProgramMinimized(ProgramId),
    /// The background is not one of the configured options.
    #[error("background `{0}` is not a configured option")]
    UnknownBackground(String),
    /// The theme is not one of the configured themes.
    #[error("theme `{0}` is not a configured theme")]
    UnknownTheme(String),
}

/// Applies a [`DesktopAction`] to the lifecycle state and collects resulting side effects.
///
/// Program operations are ignored while the shutdown screen is shown. Settings changes are still
/// applied.
///
/// # Errors
///
/// Returns a [`ReducerError`] when the action names an unregistered program, targets a program
/// in the wrong state, or carries a settings value outside the configured options.
pub fn reduce_desktop(
    state: &mut LifecycleState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenProgram { program } => {
            ensure_registered(&program)?;
            if state.is_shutting_down() {
                return Ok(effects);
            }
            if !state.is_open(&program) {
                state.open_programs.push(program.clone());
            }
            state.minimized_programs.retain(|id| id != &program);
            set_active(state, Some(program));
            state.start_menu_open = false;
        }
        DesktopAction::CloseProgram { program } => {
            ensure_registered(&program)?;
            if state.is_shutting_down() || !state.is_open(&program) {
                return Ok(effects);
            }
            state.open_programs.retain(|id| id != &program);
            state.minimized_programs.retain(|id| id != &program);
            if state.is_active(&program) {
                set_active(state, None);
            }
        }
        DesktopAction::ToggleMinimize {
            program,
            force_minimize,
        } => {
            ensure_registered(&program)?;
            if state.is_shutting_down() {
                return Ok(effects);
            }
            ensure_open(state, &program)?;
            if force_minimize {
                if !state.is_minimized(&program) {
                    state.minimized_programs.push(program.clone());
                }
                if state.is_active(&program) {
                    set_active(state, None);
                }
            } else {
                state.minimized_programs.retain(|id| id != &program);
                set_active(state, Some(program));
            }
            state.start_menu_open = false;
        }
        DesktopAction::SetActiveProgram { program } => {
            ensure_registered(&program)?;
            if state.is_shutting_down() {
                return Ok(effects);
            }
            ensure_open(state, &program)?;
            if state.is_minimized(&program) {
                return Err(ReducerError::ProgramMinimized(program));
            }
            set_active(state, Some(program));
        }
        DesktopAction::ToggleStartMenu { open } => {
            if !state.is_shutting_down() {
                state.start_menu_open = open;
            }
        }
        DesktopAction::ChangeSystemSettings { background, theme } => {
            let background = background
                .map(|background| {
                    apps::background_by_name(&background.name)
                        .cloned()
                        .ok_or(ReducerError::UnknownBackground(background.name))
                })
                .transpose()?;
            if let Some(theme) = theme.as_ref() {
                if !apps::is_known_theme(theme) {
                    return Err(ReducerError::UnknownTheme(theme.clone()));
                }
            }

            if let Some(background) = background {
                effects.push(RuntimeEffect::PersistSetting {
                    key: SettingKey::Background,
                    token: background.name.clone(),
                });
                state.system_settings.background = background;
            }
            if let Some(theme) = theme {
                effects.push(RuntimeEffect::PersistSetting {
                    key: SettingKey::Theme,
                    token: theme.clone(),
                });
                state.system_settings.theme = theme;
            }
        }
        DesktopAction::BeginShutdown => shutdown::begin_shutdown(state),
        DesktopAction::Restart => shutdown::restart(state),
        DesktopAction::HydrateSettings { settings } => state.system_settings = settings,
    }

    Ok(effects)
}

fn ensure_registered(program: &ProgramId) -> Result<(), ReducerError> {
    if apps::is_registered(program) {
        Ok(())
    } else {
        Err(ReducerError::InvalidProgramId(program.clone()))
    }
}

fn ensure_open(state: &LifecycleState, program: &ProgramId) -> Result<(), ReducerError> {
    if state.is_open(program) {
        Ok(())
    } else {
        Err(ReducerError::ProgramNotOpen(program.clone()))
    }
}

// Every change of the active program shifts the old value into `previous_active_program`.
fn set_active(state: &mut LifecycleState, next: Option<ProgramId>) {
    if state.active_program == next {
        return;
    }
    state.previous_active_program = std::mem::replace(&mut state.active_program, next);
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryPrefsStore, PrefsStore};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::model::PowerState;

    fn id(raw: &str) -> ProgramId {
        ProgramId::trusted(raw)
    }

    fn ids(raw: &[&str]) -> Vec<ProgramId> {
        raw.iter().map(|raw| id(raw)).collect()
    }

    fn reduce(state: &mut LifecycleState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action).expect("action accepted")
    }

    fn open(state: &mut LifecycleState, program: &str) {
        reduce(
            state,
            DesktopAction::OpenProgram {
                program: id(program),
            },
        );
    }

    fn minimize(state: &mut LifecycleState, program: &str, force_minimize: bool) {
        reduce(
            state,
            DesktopAction::ToggleMinimize {
                program: id(program),
                force_minimize,
            },
        );
    }

    #[test]
    fn opening_a_program_focuses_it_and_closes_the_start_menu() {
        let mut state = LifecycleState::default();
        reduce(&mut state, DesktopAction::ToggleStartMenu { open: true });

        let effects = reduce(
            &mut state,
            DesktopAction::OpenProgram {
                program: id("work"),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.open_programs, ids(&["chat", "work"]));
        assert_eq!(state.active_program, Some(id("work")));
        assert_eq!(state.previous_active_program, Some(id("chat")));
        assert!(!state.start_menu_open);
    }

    #[test]
    fn force_minimize_clears_focus() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");

        minimize(&mut state, "work", true);

        assert_eq!(state.minimized_programs, ids(&["work"]));
        assert_eq!(state.active_program, None);
        assert_eq!(state.previous_active_program, Some(id("work")));
    }

    #[test]
    fn opening_twice_keeps_a_single_entry_in_place() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        open(&mut state, "contact");

        open(&mut state, "work");

        assert_eq!(state.open_programs, ids(&["chat", "work", "contact"]));
        assert_eq!(state.active_program, Some(id("work")));
        assert_eq!(state.previous_active_program, Some(id("contact")));
    }

    #[test]
    fn reopening_a_minimized_program_restores_it() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        minimize(&mut state, "work", true);

        open(&mut state, "work");

        assert!(state.minimized_programs.is_empty());
        assert_eq!(state.open_programs, ids(&["chat", "work"]));
        assert_eq!(state.active_program, Some(id("work")));
    }

    #[test]
    fn minimize_then_restore_returns_focus() {
        let mut state = LifecycleState::default();
        minimize(&mut state, "chat", true);
        minimize(&mut state, "chat", true);
        assert_eq!(state.minimized_programs, ids(&["chat"]));

        minimize(&mut state, "chat", false);

        assert!(state.minimized_programs.is_empty());
        assert_eq!(state.active_program, Some(id("chat")));
    }

    #[test]
    fn unforced_toggle_on_a_visible_program_only_focuses_it() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        open(&mut state, "contact");
        minimize(&mut state, "contact", true);
        reduce(&mut state, DesktopAction::ToggleStartMenu { open: true });

        minimize(&mut state, "chat", false);

        assert_eq!(state.minimized_programs, ids(&["contact"]));
        assert_eq!(state.active_program, Some(id("chat")));
        assert!(!state.start_menu_open);
    }

    #[test]
    fn closing_the_active_program_clears_focus_without_refocusing() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        reduce(&mut state, DesktopAction::ToggleStartMenu { open: true });

        reduce(
            &mut state,
            DesktopAction::CloseProgram {
                program: id("work"),
            },
        );

        assert_eq!(state.open_programs, ids(&["chat"]));
        assert_eq!(state.active_program, None);
        assert_eq!(state.previous_active_program, Some(id("work")));
        assert!(state.start_menu_open);
    }

    #[test]
    fn closing_a_minimized_program_drops_it_from_both_sets() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        minimize(&mut state, "work", true);

        reduce(
            &mut state,
            DesktopAction::CloseProgram {
                program: id("work"),
            },
        );

        assert_eq!(state.open_programs, ids(&["chat"]));
        assert!(state.minimized_programs.is_empty());
    }

    #[test]
    fn closing_a_program_that_is_not_open_is_a_noop() {
        let mut state = LifecycleState::default();
        let before = state.clone();

        reduce(
            &mut state,
            DesktopAction::CloseProgram {
                program: id("contact"),
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn set_active_on_the_active_program_keeps_previous() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        let before = state.clone();

        reduce(
            &mut state,
            DesktopAction::SetActiveProgram {
                program: id("work"),
            },
        );
        assert_eq!(state, before);

        reduce(
            &mut state,
            DesktopAction::SetActiveProgram {
                program: id("chat"),
            },
        );
        assert_eq!(state.active_program, Some(id("chat")));
        assert_eq!(state.previous_active_program, Some(id("work")));
    }

    #[test]
    fn invalid_actions_are_rejected_without_touching_state() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        minimize(&mut state, "work", true);
        let before = state.clone();

        let cases = [
            (
                DesktopAction::OpenProgram {
                    program: id("paint"),
                },
                ReducerError::InvalidProgramId(id("paint")),
            ),
            (
                DesktopAction::SetActiveProgram {
                    program: id("contact"),
                },
                ReducerError::ProgramNotOpen(id("contact")),
            ),
            (
                DesktopAction::SetActiveProgram {
                    program: id("work"),
                },
                ReducerError::ProgramMinimized(id("work")),
            ),
            (
                DesktopAction::ToggleMinimize {
                    program: id("contact"),
                    force_minimize: true,
                },
                ReducerError::ProgramNotOpen(id("contact")),
            ),
            (
                DesktopAction::ChangeSystemSettings {
                    background: None,
                    theme: Some("neon".to_string()),
                },
                ReducerError::UnknownTheme("neon".to_string()),
            ),
        ];

        for (action, expected) in cases {
            assert_eq!(reduce_desktop(&mut state, action), Err(expected));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn theme_change_keeps_background_and_persists_the_token() {
        let mut state = LifecycleState::default();
        let background = state.system_settings.background.clone();

        let effects = reduce(
            &mut state,
            DesktopAction::ChangeSystemSettings {
                background: None,
                theme: Some("dark".to_string()),
            },
        );

        assert_eq!(state.system_settings.background, background);
        assert_eq!(state.system_settings.theme, "dark");
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistSetting {
                key: SettingKey::Theme,
                token: "dark".to_string(),
            }]
        );

        let store = MemoryPrefsStore::default();
        for effect in effects {
            let RuntimeEffect::PersistSetting { key, token } = effect;
            futures::executor::block_on(store.save_pref(key.as_str(), &token)).expect("save");
        }
        assert_eq!(store.snapshot("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn background_change_resolves_the_configured_option() {
        let mut state = LifecycleState::default();
        let forest = apps::background_by_name("forest").cloned().expect("forest");

        let effects = reduce(
            &mut state,
            DesktopAction::ChangeSystemSettings {
                background: Some(forest.clone()),
                theme: Some("retro".to_string()),
            },
        );

        assert_eq!(state.system_settings.background, forest);
        assert_eq!(state.system_settings.theme, "retro");
        assert_eq!(effects.len(), 2);

        let bogus = BackgroundOption {
            name: "moon".to_string(),
            label: "Moon".to_string(),
            url: "/moon.jpg".to_string(),
        };
        assert_eq!(
            reduce_desktop(
                &mut state,
                DesktopAction::ChangeSystemSettings {
                    background: Some(bogus),
                    theme: None,
                },
            ),
            Err(ReducerError::UnknownBackground("moon".to_string()))
        );
    }

    #[test]
    fn shutdown_ignores_program_operations_until_restart() {
        let mut state = LifecycleState::default();
        open(&mut state, "work");
        reduce(&mut state, DesktopAction::BeginShutdown);

        open(&mut state, "contact");
        reduce(&mut state, DesktopAction::ToggleStartMenu { open: true });
        assert!(state.open_programs.is_empty());
        assert!(!state.start_menu_open);
        assert_eq!(state.power_state, PowerState::ShuttingDown);

        reduce(&mut state, DesktopAction::Restart);
        assert_eq!(state.power_state, PowerState::Running);
        assert!(state.open_programs.is_empty());
        assert_eq!(state.active_program, None);

        open(&mut state, "contact");
        assert_eq!(state.open_programs, ids(&["contact"]));
        assert_eq!(state.previous_active_program, None);
    }

    #[test]
    fn hydrate_settings_replaces_boot_defaults() {
        let mut state = LifecycleState::default();
        let mut settings = state.system_settings.clone();
        settings.theme = "dark".to_string();

        let effects = reduce(
            &mut state,
            DesktopAction::HydrateSettings {
                settings: settings.clone(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.system_settings, settings);
    }

    #[test]
    fn panel_commands_map_onto_actions() {
        assert_eq!(
            DesktopAction::from(PanelCommand::ToggleMinimize {
                program: id("chat"),
                force_minimize: true,
            }),
            DesktopAction::ToggleMinimize {
                program: id("chat"),
                force_minimize: true,
            }
        );
        assert_eq!(
            DesktopAction::from(PanelCommand::SetActiveProgram(id("work"))),
            DesktopAction::SetActiveProgram {
                program: id("work")
            }
        );
    }

    fn random_action(rng: &mut StdRng) -> DesktopAction {
        const PROGRAMS: [&str; 5] = ["chat", "work", "contact", "settings", "paint"];
        let program = id(PROGRAMS[rng.gen_range(0..PROGRAMS.len())]);
        match rng.gen_range(0..10) {
            0 | 1 => DesktopAction::OpenProgram { program },
            2 => DesktopAction::CloseProgram { program },
            3 | 4 => DesktopAction::ToggleMinimize {
                program,
                force_minimize: rng.gen_bool(0.5),
            },
            5 => DesktopAction::SetActiveProgram { program },
            6 => DesktopAction::ToggleStartMenu {
                open: rng.gen_bool(0.5),
            },
            7 => DesktopAction::ChangeSystemSettings {
                background: None,
                theme: Some(["light", "dark", "neon"][rng.gen_range(0..3)].to_string()),
            },
            8 => DesktopAction::BeginShutdown,
            _ => DesktopAction::Restart,
        }
    }

    #[test]
    fn invariants_hold_across_random_action_sequences() {
        for seed in 0..64_u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = LifecycleState::default();
            for step in 0..200 {
                let action = random_action(&mut rng);
                let before = state.clone();
                let result = reduce_desktop(&mut state, action.clone());
                if result.is_err() {
                    assert_eq!(state, before, "seed {seed} step {step}: {action:?}");
                }
                if let Err(violation) = state.check_invariants() {
                    panic!("seed {seed} step {step}: {action:?} broke {violation}");
                }
            }
        }
    }

    #[test]
    fn begin_shutdown_from_random_states_always_clears() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let mut state = LifecycleState::default();
            for _ in 0..rng.gen_range(0..40) {
                let _ = reduce_desktop(&mut state, random_action(&mut rng));
            }

            reduce(&mut state, DesktopAction::BeginShutdown);
            assert!(state.open_programs.is_empty());
            assert!(state.minimized_programs.is_empty());
            assert_eq!(state.active_program, None);
            assert!(!state.start_menu_open);

            reduce(&mut state, DesktopAction::Restart);
            assert_eq!(state.power_state, PowerState::Running);
            assert!(state.open_programs.is_empty());
        }
    }
}
