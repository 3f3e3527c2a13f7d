//! Button component: host element, inner native control, and the semantic
//! `ig-click` event contract.

use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::model::{ButtonSize, ButtonState, ButtonType, ButtonVariant};

/// Name of the semantic activation event dispatched from the host element.
pub const IG_CLICK_EVENT: &str = "ig-click";

/// Detail key carrying the originating native event on [`IG_CLICK_EVENT`].
pub const IG_CLICK_ORIGINAL_EVENT_KEY: &str = "originalEvent";

/// Host element tag name wrapping the inner control.
pub const BUTTON_HOST_TAG: &str = "ig-button";

#[component]
/// Themeable button with standardized variants, sizes, icon slots, and a
/// bubbling `ig-click` activation event.
///
/// The host `<ig-button>` element reflects `disabled`, `loading`, and
/// `fullwidth` as attributes for CSS targeting and external observers;
/// `variant`, `size`, `type`, and the aria passthroughs stay internal to the
/// rendered control. A disabled or loading button cancels native activations
/// instead of emitting the semantic event.
pub fn Button(
    #[prop(default = ButtonVariant::Filled)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] fullwidth: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    /// Content projected before the label, rendered in every state.
    #[prop(optional)]
    icon_start: Option<View>,
    /// Content projected after the label, rendered in every state.
    #[prop(optional)]
    icon_end: Option<View>,
    /// Framework-level callback fired on the same qualifying activations as
    /// the `ig-click` DOM event.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Default label content, omitted while `loading`.
    children: ChildrenFn,
) -> impl IntoView {
    let state = move || ButtonState {
        variant,
        size,
        disabled: disabled.get(),
        loading: loading.get(),
    };

    let handle_click = move |ev: MouseEvent| {
        let snapshot = ButtonState {
            variant,
            size,
            disabled: disabled.get_untracked(),
            loading: loading.get_untracked(),
        };
        if snapshot.suppresses_activation() {
            ev.prevent_default();
            ev.stop_propagation();
            return;
        }

        dispatch_semantic_click(&ev);
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    view! {
        <ig-button
            disabled=move || disabled.get()
            loading=move || loading.get()
            fullwidth=move || fullwidth.get()
        >
            <button
                class=move || state().classes()
                type=button_type.token()
                disabled=move || state().native_disabled()
                aria-label=aria_label
                aria-describedby=aria_describedby
                aria-labelledby=aria_labelledby
                aria-busy=move || state().aria_busy()
                on:click=handle_click
            >
                {icon_start.map(|icon_start| {
                    view! { <span class="ig-button-icon" data-slot="icon-start">{icon_start}</span> }
                })}
                <Show when=move || !loading.get() fallback=|| ()>
                    <span class="ig-button-label" data-slot="label">{children()}</span>
                </Show>
                {icon_end.map(|icon_end| {
                    view! { <span class="ig-button-icon" data-slot="icon-end">{icon_end}</span> }
                })}
            </button>
        </ig-button>
    }
}

/// Publish the semantic activation event from the host element. The event
/// bubbles and is marked composed so it would cross a shadow boundary; the
/// detail payload references the originating native event.
fn dispatch_semantic_click(ev: &MouseEvent) {
    let host = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(BUTTON_HOST_TAG).ok().flatten());
    let Some(host) = host else {
        return;
    };

    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &detail,
        &JsValue::from_str(IG_CLICK_ORIGINAL_EVENT_KEY),
        ev.as_ref(),
    );

    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);

    let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(IG_CLICK_EVENT, &init) else {
        return;
    };
    let _ = host.dispatch_event(&event);
}
