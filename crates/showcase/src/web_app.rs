use leptos::ev::Custom;
use leptos::*;
use ui_kit::prelude::*;

const VARIANTS: [ButtonVariant; 5] = [
    ButtonVariant::Filled,
    ButtonVariant::Outlined,
    ButtonVariant::Text,
    ButtonVariant::Elevated,
    ButtonVariant::Tonal,
];

const SIZES: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

#[component]
/// Review surface exercising every button variant, size, and state.
pub fn ShowcaseApp() -> impl IntoView {
    let disabled = create_rw_signal(false);
    let loading = create_rw_signal(false);
    let fullwidth = create_rw_signal(false);
    let callback_clicks = create_rw_signal(0u32);
    let bubbled_clicks = create_rw_signal(0u32);

    // Semantic events bubble out of the host element all the way to the
    // window, so a single listener here observes every button on the page.
    window_event_listener(
        Custom::<web_sys::CustomEvent>::new(IG_CLICK_EVENT),
        move |_| bubbled_clicks.update(|count| *count += 1),
    );

    let count_click = Callback::new(move |_| callback_clicks.update(|count| *count += 1));

    view! {
        <main class="showcase">
            <h1>"Button showcase"</h1>

            <section class="showcase-section">
                <h2>"Variants"</h2>
                <div class="showcase-row">
                    {VARIANTS
                        .into_iter()
                        .map(|variant| {
                            view! {
                                <Button variant=variant on_click=count_click>
                                    {variant.token()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="showcase-section">
                <h2>"Sizes"</h2>
                <div class="showcase-row">
                    {SIZES
                        .into_iter()
                        .map(|size| {
                            view! {
                                <Button size=size on_click=count_click>
                                    {size.token()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="showcase-section">
                <h2>"States"</h2>
                <div class="showcase-row">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || disabled.get()
                            on:change=move |_| disabled.update(|value| *value = !*value)
                        />
                        " disabled"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || loading.get()
                            on:change=move |_| loading.update(|value| *value = !*value)
                        />
                        " loading"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || fullwidth.get()
                            on:change=move |_| fullwidth.update(|value| *value = !*value)
                        />
                        " fullwidth"
                    </label>
                </div>
                <div class="showcase-row">
                    <Button
                        disabled=disabled
                        loading=loading
                        fullwidth=fullwidth
                        on_click=count_click
                    >
                        "Stateful button"
                    </Button>
                </div>
            </section>

            <section class="showcase-section">
                <h2>"Icon slots"</h2>
                <div class="showcase-row">
                    <Button
                        variant=ButtonVariant::Tonal
                        icon_start=view! { <span aria-hidden="true">"\u{2193}"</span> }.into_view()
                        on_click=count_click
                    >
                        "Download"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outlined
                        icon_end=view! { <span aria-hidden="true">"\u{2192}"</span> }.into_view()
                        on_click=count_click
                    >
                        "Continue"
                    </Button>
                    <Button
                        variant=ButtonVariant::Text
                        aria_label="Dismiss".to_string()
                        on_click=count_click
                    >
                        "\u{00d7}"
                    </Button>
                </div>
            </section>

            <section class="showcase-section">
                <h2>"Submit and reset"</h2>
                <form on:submit=move |ev| ev.prevent_default()>
                    <div class="showcase-row">
                        <Button button_type=ButtonType::Submit on_click=count_click>
                            "Submit"
                        </Button>
                        <Button
                            button_type=ButtonType::Reset
                            variant=ButtonVariant::Outlined
                            on_click=count_click
                        >
                            "Reset"
                        </Button>
                    </div>
                </form>
            </section>

            <section class="showcase-section">
                <h2>"Activation log"</h2>
                <p>"callback activations: " {move || callback_clicks.get()}</p>
                <p>"ig-click events observed at the window: " {move || bubbled_clicks.get()}</p>
            </section>
        </main>
    }
}
