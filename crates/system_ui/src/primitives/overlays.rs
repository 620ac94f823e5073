use super::*;

#[component]
/// Start-menu launcher surface.
pub fn LauncherMenu(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-launcher-menu", layout_class)
            id=id
            role="menu"
            aria-label="Start menu"
            data-ui-primitive="true"
            data-ui-kind="launcher-menu"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="menuitem"
            aria_label=aria_label
            selected=selected
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| forward_click(on_click, ev))
        >
            {children()}
        </Button>
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <hr
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        />
    }
}

#[component]
/// Full-viewport overlay that covers the desktop (shutdown screen).
pub fn Overlay(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-overlay", layout_class)
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="overlay"
        >
            {children()}
        </div>
    }
}
