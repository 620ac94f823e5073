use super::*;

#[component]
/// Shared button primitive with standardized states.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_pressed: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-expanded=move || bool_token(aria_expanded.get())
            aria-pressed=move || bool_token(aria_pressed.get())
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-state=move || {
                if pressed.get() {
                    "pressed"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            on:click=move |ev| forward_click(on_click, ev)
            on:mousedown=move |ev| forward_click(on_mousedown, ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared select-field primitive.
pub fn SelectField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class=merge_layout_class("ui-field", layout_class)
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-slot=ui_slot
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(event_target_value(&ev));
                }
            }
        >
            {children()}
        </select>
    }
}

#[component]
/// Shared multi-line text input.
pub fn TextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_submit: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-field", layout_class)
            aria-label=aria_label
            placeholder=placeholder
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="textarea"
            data-ui-slot=ui_slot
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if ev.key() == "Enter" && !ev.shift_key() {
                    if let Some(on_submit) = on_submit.as_ref() {
                        ev.prevent_default();
                        on_submit.call(());
                    }
                }
            }
        ></textarea>
    }
}
