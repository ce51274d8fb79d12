use crate::auth::use_auth;
use crate::components::form_field::FormField;
use crate::web::router::Link;
use authgate::AppRoute;
use authgate::form::Field;
use authgate::register::RegisterFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let flow = RwSignal::new(RegisterFlow::new());

    let is_submitting = Signal::derive(move || flow.with(RegisterFlow::is_submitting));
    let field_value = move |field: Field| {
        Signal::derive(move || {
            flow.with(|f| {
                let form = f.form();
                match field {
                    Field::Username => form.username.clone(),
                    Field::Email => form.email.clone(),
                    Field::Password => form.password.clone(),
                    Field::ConfirmPassword => form.confirm_password.clone(),
                    Field::Api => String::new(),
                }
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

        let Some(request) = flow.try_update(RegisterFlow::begin_submit).flatten() else {
            return;
        };

        let api = auth.api.clone();
        spawn_local(async move {
            let outcome = api.register(&request).await;
            flow.update(|f| f.finish(outcome));
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <h2 class="card-title text-2xl">"Register"</h2>

                        {move || {
                            flow.with(|f| f.errors().get(Field::Api).map(str::to_string))
                                .map(|msg| view! {
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{msg}</span>
                                    </div>
                                })
                        }}
                        <Show when=move || flow.with(RegisterFlow::succeeded)>
                            <div role="status" class="alert alert-success text-sm py-2">
                                <span>"Registration successful!"</span>
                            </div>
                        </Show>

                        <FormField
                            label="Username"
                            id=Field::Username.name()
                            placeholder="Enter your username"
                            value=field_value(Field::Username)
                            error=field_error(Field::Username)
                            disabled=is_submitting
                            on_input=on_edit(Field::Username)
                        />
                        <FormField
                            label="Email"
                            id=Field::Email.name()
                            input_type="email"
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
                        <FormField
                            label="Confirm Password"
                            id=Field::ConfirmPassword.name()
                            input_type="password"
                            placeholder="Confirm your password"
                            value=field_value(Field::ConfirmPassword)
                            error=field_error(Field::ConfirmPassword)
                            disabled=is_submitting
                            on_input=on_edit(Field::ConfirmPassword)
                        />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Registering..." }.into_any()
                                } else {
                                    "Register".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <p class="text-sm">
                    "Already have an account? "
                    <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                </p>
            </div>
        </div>
    }
}
