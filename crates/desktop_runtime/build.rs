use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PANEL_CRATES: [&str; 4] = ["chat", "work", "contact", "settings"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    program_id: String,
    display_name: String,
    icon_url: String,
    icon_alt: String,
    show_on_desktop: bool,
    show_in_launcher: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BackgroundEntry {
    name: String,
    label: String,
    url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ResumeLink {
    label: String,
    url: String,
    icon_url: String,
    icon_alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfig {
    schema_version: u32,
    default_program: String,
    default_background: String,
    default_theme: String,
    themes: Vec<String>,
    backgrounds: Vec<BackgroundEntry>,
    resume: ResumeLink,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    PANEL_CRATES
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn is_slug(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= 32
        && raw.as_bytes()[0].is_ascii_lowercase()
        && !raw.ends_with('-')
        && raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn validate_manifests(manifests: &[AppManifest]) {
    let mut seen = BTreeSet::new();
    for manifest in manifests {
        if manifest.schema_version != 1 {
            panic!(
                "manifest schema mismatch for `{}`: expected 1 found {}",
                manifest.program_id, manifest.schema_version
            );
        }
        if !is_slug(&manifest.program_id) {
            panic!("program id `{}` is not a lowercase slug", manifest.program_id);
        }
        if !seen.insert(manifest.program_id.clone()) {
            panic!("duplicate program id `{}`", manifest.program_id);
        }
    }
}

fn validate_desktop_config(config: &DesktopConfig, manifests: &[AppManifest]) {
    if config.schema_version != 1 {
        panic!(
            "desktop.toml schema mismatch: expected 1 found {}",
            config.schema_version
        );
    }
    if !manifests
        .iter()
        .any(|manifest| manifest.program_id == config.default_program)
    {
        panic!(
            "default program `{}` has no app manifest",
            config.default_program
        );
    }
    if config.themes.is_empty() || config.backgrounds.is_empty() {
        panic!("desktop.toml must list at least one theme and one background");
    }
    if !config.themes.contains(&config.default_theme) {
        panic!("default theme `{}` is not a listed theme", config.default_theme);
    }
    if !config
        .backgrounds
        .iter()
        .any(|background| background.name == config.default_background)
    {
        panic!(
            "default background `{}` is not a listed background",
            config.default_background
        );
    }
    let mut names = BTreeSet::new();
    for background in &config.backgrounds {
        if !names.insert(background.name.as_str()) {
            panic!("duplicate background `{}`", background.name);
        }
    }
    let mut themes = BTreeSet::new();
    for theme in &config.themes {
        if !is_slug(theme) || !themes.insert(theme.as_str()) {
            panic!("theme `{theme}` is duplicated or not a lowercase slug");
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));

    let manifests: Vec<AppManifest> = app_manifest_paths(&crate_root)
        .iter()
        .map(|path| read_toml(path))
        .collect();
    validate_manifests(&manifests);

    let desktop: DesktopConfig = read_toml(&crate_root.join("desktop.toml"));
    validate_desktop_config(&desktop, &manifests);

    let catalog_json =
        serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let desktop_json = serde_json::to_string_pretty(&desktop).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON (registry order).\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{catalog_json}\"##;\n\
/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{desktop_json}\"##;\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
