//! Shared shell, overlay, control, and data-display primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod data_display;
mod overlays;
mod shell;

pub use controls::{Button, SelectField, TextArea};
pub use data_display::{AppIcon, Heading, Panel, Text};
pub use overlays::{LauncherMenu, MenuItem, MenuSeparator, Overlay};
pub use shell::{
    DesktopIconButton, DesktopIconGrid, DesktopIconLink, DesktopRoot, DesktopWindowLayer, Taskbar,
    TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic button variants.
pub enum ButtonVariant {
    /// Default raised button.
    #[default]
    Standard,
    /// Emphasized call-to-action.
    Primary,
    /// Chrome-less button for titlebars, taskbars and menus.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Typography roles for text primitives.
pub enum TextRole {
    /// Body copy.
    #[default]
    Body,
    /// Section or window title.
    Title,
    /// Small supporting text.
    Caption,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Title => "title",
            Self::Caption => "caption",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn forward_click(handler: Option<Callback<MouseEvent>>, ev: MouseEvent) {
    if let Some(handler) = handler.as_ref() {
        handler.call(ev);
    }
}
