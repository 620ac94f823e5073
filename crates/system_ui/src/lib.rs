//! Shared UI primitive library for the desktop shell and its program panels.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the desktop stylesheet. Panels compose these primitives instead of emitting ad hoc chrome.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    AppIcon, Button, ButtonVariant, DesktopIconButton, DesktopIconGrid, DesktopIconLink,
    DesktopRoot, DesktopWindowLayer, Heading, LauncherMenu, MenuItem, MenuSeparator, Overlay,
    Panel, SelectField, Taskbar, TaskbarButton, TaskbarSection, Text, TextArea, TextRole,
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for panel crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppIcon, Button, ButtonVariant, Heading, MenuItem, Panel, SelectField, Text, TextArea,
        TextRole,
    };
}
