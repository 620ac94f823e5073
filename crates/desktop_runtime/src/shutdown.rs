//! Shutdown controller: `Running -> ShuttingDown` and back, clearing lifecycle state both ways.

use crate::model::{LifecycleState, PowerState};

fn clear_lifecycle(state: &mut LifecycleState) {
    state.open_programs.clear();
    state.minimized_programs.clear();
    state.active_program = None;
    state.previous_active_program = None;
    state.start_menu_open = false;
}

/// Enters the shutdown screen. Idempotent.
pub fn begin_shutdown(state: &mut LifecycleState) {
    clear_lifecycle(state);
    state.power_state = PowerState::ShuttingDown;
}

/// Leaves the shutdown screen. Nothing is reopened.
pub fn restart(state: &mut LifecycleState) {
    clear_lifecycle(state);
    state.power_state = PowerState::Running;
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ProgramId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn busy_state() -> LifecycleState {
        let mut state = LifecycleState::default();
        state.open_programs.push(ProgramId::trusted("work"));
        state.minimized_programs.push(ProgramId::trusted("work"));
        state.previous_active_program = Some(ProgramId::trusted("contact"));
        state.start_menu_open = true;
        state
    }

    #[test]
    fn begin_shutdown_clears_everything_but_settings() {
        let mut state = busy_state();
        let settings = state.system_settings.clone();

        begin_shutdown(&mut state);

        assert!(state.open_programs.is_empty());
        assert!(state.minimized_programs.is_empty());
        assert_eq!(state.active_program, None);
        assert_eq!(state.previous_active_program, None);
        assert!(!state.start_menu_open);
        assert_eq!(state.power_state, PowerState::ShuttingDown);
        assert_eq!(state.system_settings, settings);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn restart_returns_to_an_empty_running_desktop() {
        let mut state = busy_state();
        begin_shutdown(&mut state);
        begin_shutdown(&mut state);

        restart(&mut state);

        assert_eq!(state.power_state, PowerState::Running);
        assert!(state.open_programs.is_empty());
        assert_eq!(state.active_program, None);
        assert_eq!(state.check_invariants(), Ok(()));
    }
}
