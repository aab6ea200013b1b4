use crate::api::ApiError;
use crate::types::{EntryList, SubmitSurveyRequest, SurveyEntry};

/// Remote collection resource: list the submitted entries, append one more.
pub trait Collection {
    async fn append(&self, req: &SubmitSurveyRequest) -> Result<serde_json::Value, ApiError>;
    async fn list(&self) -> Result<EntryList, ApiError>;
}

/// Surface the flows report into; the app implements this over its signals.
pub trait Ui {
    fn set_loading(&self, on: bool);
    fn show_modal(&self);
    fn alert(&self, message: &str);
    fn set_entries(&self, entries: Vec<SurveyEntry>);
}

/// Replace the displayed list with the server's current one. On failure the
/// previous list stays on screen.
pub async fn load_entries<C: Collection, U: Ui>(collection: &C, ui: &U) {
    match collection.list().await {
        Ok(list) => ui.set_entries(list.data),
        Err(err) => ui.alert(&err.to_string()),
    }
}

/// One submission end to end: loading flag around the POST, then modal plus a
/// single refetch on success, alert and no modal on failure. The loading flag
/// clears once the POST resolves either way.
pub async fn submit<C: Collection, U: Ui>(collection: &C, ui: &U, req: SubmitSurveyRequest) {
    ui.set_loading(true);
    let res = collection.append(&req).await;
    ui.set_loading(false);
    match res {
        Ok(_) => {
            ui.show_modal();
            // Refresh after write; the new entry is never merged locally.
            load_entries(collection, ui).await;
        }
        Err(err) => ui.alert(&err.to_string()),
    }
}
