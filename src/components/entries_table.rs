use leptos::*;

use crate::types::{satisfied_label, SurveyEntry};

/// Read-only table of submitted entries, in the order the server returned them.
#[component]
pub fn EntriesTable(entries: RwSignal<Vec<SurveyEntry>>) -> impl IntoView {
    view! {
        <table class="table table-striped mt-5">
            <thead>
                <tr>
                    <th scope="col">"Name"</th>
                    <th scope="col">"Age"</th>
                    <th scope="col">"Gender"</th>
                    <th scope="col">"Phone"</th>
                    <th scope="col">"Feedback"</th>
                    <th scope="col">"Satisfied"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    entries
                        .get()
                        .iter()
                        .map(|entry| {
                            view! {
                                <tr>
                                    <td>{entry.name.clone()}</td>
                                    <td>{entry.age.clone()}</td>
                                    <td>{entry.gender.clone()}</td>
                                    <td>{entry.phone.clone()}</td>
                                    <td>{entry.feedback.clone()}</td>
                                    <td>{satisfied_label(entry.satisfied)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
