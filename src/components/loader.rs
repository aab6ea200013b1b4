use leptos::*;

/// Full-page spinner shown while a submission is in flight.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-overlay">
            <div class="spinner-border" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}
