use leptos::*;

/// Confirmation overlay shown after a successful submission. Only state is
/// the shared visibility flag; closing just clears it.
#[component]
pub fn ConfirmModal(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="modal d-block" tabindex="-1">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">"Thank you!"</h5>
                        <button
                            type="button"
                            class="btn-close"
                            on:click=move |_| visible.set(false)
                        ></button>
                    </div>
                    <div class="modal-body">
                        <p>"Your survey response has been submitted."</p>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn-dark"
                            on:click=move |_| visible.set(false)
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
