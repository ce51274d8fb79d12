use leptos::prelude::*;

/// 带标签和错误提示的输入框
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    /// input 的 id / name
    id: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                class=move || {
                    if error.with(Option::is_some) {
                        "input input-bordered input-error"
                    } else {
                        "input input-bordered"
                    }
                }
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error.get().map(|msg| view! { <span class="text-error text-sm mt-1">{msg}</span> })
            }}
        </div>
    }
}
