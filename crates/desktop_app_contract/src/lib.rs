//! Shared contract types between the desktop lifecycle runtime and its program panels.
//!
//! A panel receives a [`PanelMountContext`]: read-only reactive views of the lifecycle state
//! ([`PanelLifecycle`]) and a command handle ([`PanelOperations`]) whose calls are routed through
//! the runtime reducer. Panels never mutate lifecycle state directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, SignalGet, SignalWith, View};
use serde::{Deserialize, Serialize};

/// Stable, opaque identifier of a program (for example `chat` or `settings`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(String);

impl ProgramId {
    /// Returns a program identifier when `raw` is a lowercase slug.
    ///
    /// Accepted ids start with an ASCII lowercase letter, contain only lowercase letters, digits
    /// and `-`, do not end with `-`, and are at most 32 bytes long.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_program_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid program id `{raw}`; expected a lowercase slug such as `chat`"
            ))
        }
    }

    /// Creates an id without validation for build-time validated catalog constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_program_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 32 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// One selectable desktop background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundOption {
    /// Persisted token (the value written under the `background` key).
    pub name: String,
    /// Human-readable label shown in pickers.
    pub label: String,
    /// Image URL applied to the desktop root.
    pub url: String,
}

/// Global appearance settings applied by the desktop root and persisted by the settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Active desktop background.
    pub background: BackgroundOption,
    /// Active theme name (also the persisted `theme` token).
    pub theme: String,
}

/// Enumerated option lists a settings panel may offer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsOptions {
    /// Selectable backgrounds, in display order.
    pub backgrounds: Vec<BackgroundOption>,
    /// Selectable theme names, in display order.
    pub themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lifecycle requests a panel may send to the runtime.
pub enum PanelCommand {
    /// Open (or refocus) a program.
    OpenProgram(ProgramId),
    /// Close a program.
    CloseProgram(ProgramId),
    /// Minimize (`force_minimize`) or restore/focus a program.
    ToggleMinimize {
        /// Target program.
        program: ProgramId,
        /// `true` always minimizes; `false` restores a minimized program or focuses a visible one.
        force_minimize: bool,
    },
    /// Focus an open, visible program.
    SetActiveProgram(ProgramId),
    /// Apply and persist any provided settings fields.
    ChangeSystemSettings {
        /// New background, if changing.
        background: Option<BackgroundOption>,
        /// New theme name, if changing.
        theme: Option<String>,
    },
}

#[derive(Clone, Copy)]
/// Read-only reactive view of the lifecycle state handed to panels.
pub struct PanelLifecycle {
    /// Open programs in open order.
    pub open_programs: Signal<Vec<ProgramId>>,
    /// Minimized programs (always a subset of `open_programs`).
    pub minimized_programs: Signal<Vec<ProgramId>>,
    /// Focused program, if any.
    pub active_program: Signal<Option<ProgramId>>,
    /// Focused program before the most recent focus change.
    pub previous_active_program: Signal<Option<ProgramId>>,
    /// Current appearance settings.
    pub system_settings: Signal<SystemSettings>,
}

impl PanelLifecycle {
    /// Returns the current theme name (tracked).
    pub fn theme(&self) -> String {
        self.system_settings.get().theme
    }
}

#[derive(Clone, Copy)]
/// Command handle through which panels request lifecycle transitions.
pub struct PanelOperations {
    sender: Callback<PanelCommand>,
}

impl PanelOperations {
    /// Creates an operations handle from the runtime command callback.
    pub fn new(sender: Callback<PanelCommand>) -> Self {
        Self { sender }
    }

    /// Opens (or refocuses) `program`.
    pub fn open_program(&self, program: ProgramId) {
        self.sender.call(PanelCommand::OpenProgram(program));
    }

    /// Closes `program`.
    pub fn close_program(&self, program: ProgramId) {
        self.sender.call(PanelCommand::CloseProgram(program));
    }

    /// Minimizes, restores or focuses `program`.
    pub fn toggle_minimize(&self, program: ProgramId, force_minimize: bool) {
        self.sender.call(PanelCommand::ToggleMinimize {
            program,
            force_minimize,
        });
    }

    /// Focuses `program`.
    pub fn set_active_program(&self, program: ProgramId) {
        self.sender.call(PanelCommand::SetActiveProgram(program));
    }

    /// Applies and persists the provided settings fields; `None` fields are left unchanged.
    pub fn change_system_settings(
        &self,
        background: Option<BackgroundOption>,
        theme: Option<String>,
    ) {
        self.sender
            .call(PanelCommand::ChangeSystemSettings { background, theme });
    }
}

#[derive(Clone)]
/// Mount context injected by the runtime, once per program window.
pub struct PanelMountContext {
    /// Program this panel instance renders.
    pub program_id: ProgramId,
    /// Read-only lifecycle view.
    pub lifecycle: PanelLifecycle,
    /// Lifecycle command handle.
    pub operations: PanelOperations,
    /// Option lists from the static desktop configuration.
    pub settings_options: SettingsOptions,
}

/// Static panel mount function used by the runtime window registry.
pub type PanelMountFn = fn(PanelMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable panel descriptor (the registry's panel factory).
pub struct PanelModule {
    mount_fn: PanelMountFn,
}

impl PanelModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: PanelMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the panel view with a runtime-provided context.
    pub fn mount(self, context: PanelMountContext) -> View {
        (self.mount_fn)(context)
    }
}
