use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn UserPage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || params.with(|params| params.get("user_id").cloned().unwrap_or_default());

    view! {
        <section class="user-page">
            <p>"Hello user, " {user_id}</p>
        </section>
    }
}
