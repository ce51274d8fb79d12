use crate::auth::use_auth;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        let target = auth.logout();
        router.navigate_to(target);
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <h1 class="btn btn-ghost text-xl">"Dashboard"</h1>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error">
                            "Log out"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
