//! Window registry: the static program catalog generated from app manifests and `desktop.toml`.

use std::sync::OnceLock;

use desktop_app_contract::{
    BackgroundOption, PanelModule, ProgramId, SettingsOptions, SystemSettings,
};
use leptos::logging;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Program opened by the start menu's Settings entry.
pub const SETTINGS_PROGRAM: &str = "settings";

#[derive(Debug, Clone, Deserialize)]
struct AppManifest {
    program_id: String,
    display_name: String,
    icon_url: String,
    icon_alt: String,
    show_on_desktop: bool,
    show_in_launcher: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct DesktopConfigFile {
    default_program: String,
    default_background: String,
    default_theme: String,
    themes: Vec<String>,
    backgrounds: Vec<BackgroundOption>,
    resume: ResumeLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Desktop icon that links out instead of opening a program.
pub struct ResumeLink {
    pub label: String,
    pub url: String,
    pub icon_url: String,
    pub icon_alt: String,
}

#[derive(Debug, Clone)]
/// One registered program: display metadata plus its panel factory.
pub struct WindowRegistryEntry {
    pub id: ProgramId,
    pub display_name: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub show_on_desktop: bool,
    pub show_in_launcher: bool,
    pub panel: PanelModule,
}

#[derive(Debug, Clone)]
/// Static desktop configuration.
pub struct DesktopConfig {
    pub default_program: ProgramId,
    pub default_background: String,
    pub default_theme: String,
    pub options: SettingsOptions,
    pub resume: ResumeLink,
}

fn panel_module(program_id: &str) -> Option<PanelModule> {
    match program_id {
        "chat" => Some(desktop_app_chat::panel_module()),
        "work" => Some(desktop_app_work::panel_module()),
        "contact" => Some(desktop_app_contact::panel_module()),
        "settings" => Some(desktop_app_settings::panel_module()),
        _ => None,
    }
}

/// Returns the registry in registry order. Built once per process.
pub fn window_registry() -> &'static [WindowRegistryEntry] {
    static REGISTRY: OnceLock<Vec<WindowRegistryEntry>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let manifests: Vec<AppManifest> = serde_json::from_str(APP_MANIFEST_CATALOG_JSON)
            .expect("generated app manifest catalog should parse");
        manifests
            .into_iter()
            .filter_map(|manifest| {
                let Some(panel) = panel_module(&manifest.program_id) else {
                    logging::warn!(
                        "app manifest `{}` has no panel module; skipping",
                        manifest.program_id
                    );
                    return None;
                };
                Some(WindowRegistryEntry {
                    id: ProgramId::trusted(manifest.program_id),
                    display_name: manifest.display_name,
                    icon_url: manifest.icon_url,
                    icon_alt: manifest.icon_alt,
                    show_on_desktop: manifest.show_on_desktop,
                    show_in_launcher: manifest.show_in_launcher,
                    panel,
                })
            })
            .collect()
    })
}

pub fn registry_entry(program: &ProgramId) -> Option<&'static WindowRegistryEntry> {
    window_registry().iter().find(|entry| &entry.id == program)
}

pub fn is_registered(program: &ProgramId) -> bool {
    registry_entry(program).is_some()
}

/// Display name for a program id, falling back to the raw id.
pub fn display_name(program: &ProgramId) -> String {
    registry_entry(program)
        .map(|entry| entry.display_name.clone())
        .unwrap_or_else(|| program.to_string())
}

pub fn desktop_icon_programs() -> Vec<&'static WindowRegistryEntry> {
    window_registry()
        .iter()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn launcher_programs() -> Vec<&'static WindowRegistryEntry> {
    window_registry()
        .iter()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

pub fn desktop_config() -> &'static DesktopConfig {
    static CONFIG: OnceLock<DesktopConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let file: DesktopConfigFile = serde_json::from_str(DESKTOP_CONFIG_JSON)
            .expect("generated desktop config should parse");
        DesktopConfig {
            default_program: ProgramId::trusted(file.default_program),
            default_background: file.default_background,
            default_theme: file.default_theme,
            options: SettingsOptions {
                backgrounds: file.backgrounds,
                themes: file.themes,
            },
            resume: file.resume,
        }
    })
}

pub fn default_program_id() -> ProgramId {
    desktop_config().default_program.clone()
}

pub fn settings_options() -> SettingsOptions {
    desktop_config().options.clone()
}

pub fn default_background() -> BackgroundOption {
    let config = desktop_config();
    background_by_name(&config.default_background)
        .cloned()
        .expect("build script validates the default background")
}

pub fn background_by_name(name: &str) -> Option<&'static BackgroundOption> {
    desktop_config()
        .options
        .backgrounds
        .iter()
        .find(|background| background.name == name)
}

pub fn default_system_settings() -> SystemSettings {
    SystemSettings {
        background: default_background(),
        theme: desktop_config().default_theme.clone(),
    }
}

pub fn is_known_theme(theme: &str) -> bool {
    desktop_config()
        .options
        .themes
        .iter()
        .any(|known| known == theme)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(entries: &[&WindowRegistryEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| entry.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn registry_lists_every_panel_in_manifest_order() {
        let all = window_registry().iter().collect::<Vec<_>>();
        assert_eq!(ids(&all), vec!["chat", "work", "contact", "settings"]);
        assert!(window_registry()
            .iter()
            .all(|entry| ProgramId::new(entry.id.as_str()).is_ok()));
    }

    #[test]
    fn settings_is_only_reachable_from_its_start_menu_entry() {
        assert_eq!(
            ids(&desktop_icon_programs()),
            vec!["chat", "work", "contact"]
        );
        assert_eq!(ids(&launcher_programs()), vec!["chat", "work", "contact"]);
        assert!(is_registered(&ProgramId::trusted(SETTINGS_PROGRAM)));
    }

    #[test]
    fn unknown_programs_are_not_registered() {
        assert!(!is_registered(&ProgramId::trusted("paint")));
        assert_eq!(display_name(&ProgramId::trusted("paint")), "paint");
        assert_eq!(display_name(&ProgramId::trusted("chat")), "Chat");
    }

    #[test]
    fn desktop_defaults_come_from_config() {
        let settings = default_system_settings();
        assert_eq!(default_program_id().as_str(), "chat");
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.background.name, "aurora");
        assert_eq!(settings_options().backgrounds.len(), 4);
        assert_eq!(settings_options().backgrounds[2], settings.background);
        assert!(is_known_theme("dark"));
        assert!(!is_known_theme("neon"));
        assert!(desktop_config().resume.url.starts_with("https://"));
    }
}
