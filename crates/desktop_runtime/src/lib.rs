//! Desktop lifecycle runtime: window registry, lifecycle reducer, settings store, shutdown
//! controller and the root compositor.

pub mod apps;
pub mod components;
mod effect_executor;
mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod shutdown;

pub use components::{
    use_desktop_runtime, visible_panels, DesktopProvider, DesktopRuntimeContext, DesktopShell,
};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{
    load_setting, load_system_settings, load_system_settings_now, save_setting, SettingKey,
};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
