use crate::auth::use_auth;
use crate::components::form_field::FormField;
use crate::web::router::{Link, use_router};
use authgate::AppRoute;
use authgate::form::Field;
use authgate::login::LoginFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let flow = RwSignal::new(LoginFlow::new());

    let is_submitting = Signal::derive(move || flow.with(LoginFlow::is_submitting));
    let field_value = move |field: Field| {
        Signal::derive(move || {
            flow.with(|f| match field {
                Field::Email => f.form().email.clone(),
                Field::Password => f.form().password.clone(),
                _ => String::new(),
            })
        })
    };
    let field_error = move |field: Field| {
        Signal::derive(move || flow.with(|f| f.errors().get(field).map(str::to_string)))
    };
    let on_edit = move |field: Field| {
        Callback::new(move |value: String| flow.update(|f| f.set_field(field, value)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // 校验失败或正在提交时不发请求
        let Some(request) = flow.try_update(LoginFlow::begin_submit).flatten() else {
            return;
        };

        let auth = auth.clone();
        spawn_local(async move {
            let outcome = auth.api.login(&request).await;
            let target = flow
                .try_update(|f| f.finish(outcome, &auth.session))
                .flatten();
            if let Some(route) = target {
                router.navigate_to(route);
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                    <p class="text-base-content/70">"Sign in to your account"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        {move || {
                            flow.with(|f| f.notice().map(str::to_string))
                                .map(|notice| {
                                    view! {
                                        <div role="alert" class="alert alert-error text-sm py-2">
                                            <span class="flex-1">{notice}</span>
                                            <button
                                                type="button"
                                                class="btn btn-ghost btn-xs"
                                                on:click=move |_| flow.update(LoginFlow::dismiss_notice)
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                        }}

                        <FormField
                            label="Email"
                            id=Field::Email.name()
                            placeholder="Enter your email"
                            value=field_value(Field::Email)
                            error=field_error(Field::Email)
                            disabled=is_submitting
                            on_input=on_edit(Field::Email)
                        />
                        <FormField
                            label="Password"
                            id=Field::Password.name()
                            input_type="password"
                            placeholder="Enter your password"
                            value=field_value(Field::Password)
                            error=field_error(Field::Password)
                            disabled=is_submitting
                            on_input=on_edit(Field::Password)
                        />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <p class="text-sm">
                    "Don't have an account? "
                    <Link to=AppRoute::Register class="link link-primary">"Sign up"</Link>
                </p>
            </div>
        </div>
    }
}
