use leptos::ev::SubmitEvent;
use leptos::*;

mod api;
mod components;
mod flow;
mod types;

use api::ApiError;
use components::{entries_table::EntriesTable, loader::Loader, modal::ConfirmModal};
use flow::{Collection, Ui};
use types::{EntryList, FormDraft, SubmitSurveyRequest, SurveyEntry};

/// Remote collection resource; GET lists entries, POST appends one.
const COLLECTION_URL: &str = "https://form-rehema.herokuapp.com/form";

const GENDER_OPTIONS: &[(&str, &str)] = &[("m", "Male"), ("f", "Female"), ("o", "Other")];

struct HttpCollection;

impl Collection for HttpCollection {
    async fn append(&self, req: &SubmitSurveyRequest) -> Result<serde_json::Value, ApiError> {
        api::post_json(COLLECTION_URL, req).await
    }

    async fn list(&self) -> Result<EntryList, ApiError> {
        api::get_json(COLLECTION_URL).await
    }
}

/// Flow effects wired to the app's signals; errors surface as blocking alerts.
#[derive(Clone, Copy)]
struct AppUi {
    loading: RwSignal<bool>,
    modal: RwSignal<bool>,
    entries: RwSignal<Vec<SurveyEntry>>,
}

impl Ui for AppUi {
    fn set_loading(&self, on: bool) {
        self.loading.set(on);
    }

    fn show_modal(&self) {
        self.modal.set(true);
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn set_entries(&self, entries: Vec<SurveyEntry>) {
        self.entries.set(entries);
    }
}

#[component]
fn App() -> impl IntoView {
    let draft = create_rw_signal(FormDraft::default());
    // No radio is pre-selected, so an unanswered form submits as false ("No").
    let satisfied = create_rw_signal(false);
    let loading = create_rw_signal(false);
    let show_modal = create_rw_signal(false);
    let entries = create_rw_signal(Vec::<SurveyEntry>::new());

    let ui = AppUi {
        loading,
        modal: show_modal,
        entries,
    };

    spawn_local(async move { flow::load_entries(&HttpCollection, &ui).await });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Advisory only: nothing stops a second submit while this one runs.
        let payload = draft.get_untracked().to_request(satisfied.get_untracked());
        spawn_local(async move { flow::submit(&HttpCollection, &ui, payload).await });
    };

    view! {
        <div class="container">
            {move || loading.get().then(|| view! { <Loader/> })}
            {move || show_modal.get().then(|| view! { <ConfirmModal visible=show_modal/> })}

            <div class="row">
                <div class="col-md-12">
                    <h2 class="text-center mt-2">"Survey Form"</h2>
                </div>
                <form on:submit=on_submit>
                    <div class="col-md-12 mt-2">
                        <div class="form-group position-relative">
                            <label for="name">"Name"</label>
                            <input
                                type="text"
                                class="form-control"
                                id="name"
                                name="name"
                                autocomplete="off"
                                required
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.set_field("name", event_target_value(&ev)))
                                }
                            />
                            <div class="asteric">"*"</div>
                        </div>
                    </div>
                    <div class="col-md-12 mt-2">
                        <div class="form-group position-relative">
                            <label for="gender">"Gender"</label>
                            <select
                                class="form-select"
                                name="gender"
                                required
                                prop:value=move || draft.with(|d| d.gender.clone())
                                on:change=move |ev| {
                                    draft.update(|d| d.set_field("gender", event_target_value(&ev)))
                                }
                            >
                                <option value="">"What gender do you identify with?"</option>
                                {GENDER_OPTIONS
                                    .iter()
                                    .map(|(value, label)| {
                                        view! { <option value=*value>{*label}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                    </div>
                    <div class="col-md-12 mt-2">
                        <div class="form-group position-relative">
                            <label for="age">"Age"</label>
                            <input
                                type="number"
                                class="form-control"
                                name="age"
                                autocomplete="off"
                                placeholder="Enter your age"
                                required
                                prop:value=move || draft.with(|d| d.age.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.set_field("age", event_target_value(&ev)))
                                }
                            />
                            <div class="asteric">"*"</div>
                        </div>
                    </div>
                    <div class="col-md-12 mt-2">
                        <div class="form-group position-relative">
                            <label for="phone">"Phone Number"</label>
                            <input
                                type="number"
                                class="form-control"
                                name="phone"
                                autocomplete="off"
                                placeholder="Enter your phone number"
                                required
                                prop:value=move || draft.with(|d| d.phone.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.set_field("phone", event_target_value(&ev)))
                                }
                            />
                            <div class="asteric">"*"</div>
                        </div>
                    </div>
                    <div class="col-md-12 mt-2">
                        <div class="form-group position-relative">
                            <label for="services">
                                "Are you satisfied with the services received"
                            </label>
                            <div class="form-check">
                                <input
                                    class="form-check-input"
                                    type="radio"
                                    name="satisfaction"
                                    id="satisfaction-yes"
                                    on:change=move |_| satisfied.set(true)
                                />
                                <label class="form-check-label" for="satisfaction-yes">
                                    "Yes"
                                </label>
                            </div>
                            <div class="form-check">
                                <input
                                    class="form-check-input"
                                    type="radio"
                                    name="satisfaction"
                                    id="satisfaction-no"
                                    on:change=move |_| satisfied.set(false)
                                />
                                <label class="form-check-label" for="satisfaction-no">
                                    "No"
                                </label>
                            </div>
                        </div>
                    </div>
                    <div class="col-md-12 mt-2">
                        <label for="feedback">
                            "Give us your feedback on the services delivery."
                        </label>
                        <textarea
                            name="feedback"
                            class="form-control"
                            required
                            prop:value=move || draft.with(|d| d.feedback.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.set_field("feedback", event_target_value(&ev)))
                            }
                        ></textarea>
                    </div>
                    <div class="col-md-12 text-center">
                        <button type="submit" class="mt-4 btn btn-dark rounded-5 w-50">
                            "Submit"
                        </button>
                    </div>
                </form>
            </div>

            <div class="row">
                <EntriesTable entries=entries/>
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // SSR or native: do nothing
}
