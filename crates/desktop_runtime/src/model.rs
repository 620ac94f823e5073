//! Lifecycle state owned by the desktop runtime and the invariants every transition preserves.

use desktop_app_contract::{ProgramId, SystemSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Whether the desktop is running or showing the shutdown screen.
pub enum PowerState {
    /// Normal operation.
    #[default]
    Running,
    /// Shutdown screen shown; nothing else is rendered.
    ShuttingDown,
}

impl PowerState {
    /// Stable token used in DOM data attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::ShuttingDown => "shutting-down",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The complete lifecycle state of the desktop.
pub struct LifecycleState {
    /// Open programs in open order, without duplicates.
    pub open_programs: Vec<ProgramId>,
    /// Minimized programs; always a subset of `open_programs`.
    pub minimized_programs: Vec<ProgramId>,
    /// Focused program; open and not minimized when set.
    pub active_program: Option<ProgramId>,
    /// Value of `active_program` before its most recent change.
    pub previous_active_program: Option<ProgramId>,
    /// Whether the start menu overlay is shown.
    pub start_menu_open: bool,
    /// Current appearance settings.
    pub system_settings: SystemSettings,
    /// Running or shutting down.
    pub power_state: PowerState,
}

impl LifecycleState {
    /// Boot state: `default_program` open and focused, start menu closed.
    pub fn initial(default_program: ProgramId, system_settings: SystemSettings) -> Self {
        Self {
            open_programs: vec![default_program.clone()],
            minimized_programs: Vec::new(),
            active_program: Some(default_program),
            previous_active_program: None,
            start_menu_open: false,
            system_settings,
            power_state: PowerState::Running,
        }
    }

    pub fn is_open(&self, program: &ProgramId) -> bool {
        self.open_programs.contains(program)
    }

    pub fn is_minimized(&self, program: &ProgramId) -> bool {
        self.minimized_programs.contains(program)
    }

    pub fn is_active(&self, program: &ProgramId) -> bool {
        self.active_program.as_ref() == Some(program)
    }

    pub fn is_shutting_down(&self) -> bool {
        self.power_state == PowerState::ShuttingDown
    }

    /// Checks the structural invariants of the lifecycle state.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (index, program) in self.open_programs.iter().enumerate() {
            if self.open_programs[..index].contains(program) {
                return Err(InvariantViolation::DuplicateOpenProgram(program.clone()));
            }
        }

        if let Some(program) = self
            .minimized_programs
            .iter()
            .find(|program| !self.open_programs.contains(program))
        {
            return Err(InvariantViolation::MinimizedNotOpen(program.clone()));
        }

        if let Some(active) = self.active_program.as_ref() {
            if !self.is_open(active) || self.is_minimized(active) {
                return Err(InvariantViolation::ActiveNotVisible(active.clone()));
            }
        }

        if self.is_shutting_down()
            && (!self.open_programs.is_empty()
                || !self.minimized_programs.is_empty()
                || self.active_program.is_some()
                || self.start_menu_open)
        {
            return Err(InvariantViolation::ShutdownNotCleared);
        }

        Ok(())
    }
}

impl Default for LifecycleState {
    fn default() -> Self {
        Self::initial(
            crate::apps::default_program_id(),
            crate::apps::default_system_settings(),
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Broken lifecycle invariant. Reaching one is a programming error.
pub enum InvariantViolation {
    /// A program appears more than once in the open list.
    #[error("program `{0}` is open more than once")]
    DuplicateOpenProgram(ProgramId),
    /// A minimized program is not open.
    #[error("program `{0}` is minimized but not open")]
    MinimizedNotOpen(ProgramId),
    /// The active program is closed or minimized.
    #[error("active program `{0}` is not open and visible")]
    ActiveNotVisible(ProgramId),
    /// Lifecycle sets were not cleared while shutting down.
    #[error("lifecycle state not cleared while shutting down")]
    ShutdownNotCleared,
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::BackgroundOption;
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> ProgramId {
        ProgramId::trusted(raw)
    }

    fn settings() -> SystemSettings {
        SystemSettings {
            background: BackgroundOption {
                name: "aurora".to_string(),
                label: "Aurora".to_string(),
                url: "/backgrounds/aurora.jpg".to_string(),
            },
            theme: "light".to_string(),
        }
    }

    #[test]
    fn initial_state_opens_and_focuses_default_program() {
        let state = LifecycleState::initial(id("chat"), settings());

        assert_eq!(state.open_programs, vec![id("chat")]);
        assert_eq!(state.active_program, Some(id("chat")));
        assert_eq!(state.previous_active_program, None);
        assert!(!state.start_menu_open);
        assert_eq!(state.power_state, PowerState::Running);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn invariant_checker_reports_each_violation() {
        let mut state = LifecycleState::initial(id("chat"), settings());
        state.open_programs.push(id("chat"));
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::DuplicateOpenProgram(id("chat")))
        );

        let mut state = LifecycleState::initial(id("chat"), settings());
        state.minimized_programs.push(id("work"));
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::MinimizedNotOpen(id("work")))
        );

        let mut state = LifecycleState::initial(id("chat"), settings());
        state.minimized_programs.push(id("chat"));
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::ActiveNotVisible(id("chat")))
        );

        let mut state = LifecycleState::initial(id("chat"), settings());
        state.power_state = PowerState::ShuttingDown;
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::ShutdownNotCleared)
        );
    }

    #[test]
    fn default_state_uses_catalog_defaults() {
        let state = LifecycleState::default();

        assert_eq!(state.open_programs, vec![id("chat")]);
        assert_eq!(state.system_settings.theme, "light");
        assert_eq!(state.system_settings.background.name, "aurora");
    }
}
