use serde::{Deserialize, Serialize};

/// In-progress, unsaved field values for the entry being composed.
/// Field values stay strings exactly as typed (age/phone included).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormDraft {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub phone: String,
    pub feedback: String,
}

impl FormDraft {
    /// Merge one `{field: value}` pair into the draft, leaving every other
    /// field untouched. Unknown field names are ignored.
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "gender" => self.gender = value,
            "age" => self.age = value,
            "phone" => self.phone = value,
            "feedback" => self.feedback = value,
            _ => {}
        }
    }

    pub fn to_request(&self, satisfied: bool) -> SubmitSurveyRequest {
        SubmitSurveyRequest {
            name: self.name.clone(),
            gender: self.gender.clone(),
            age: self.age.clone(),
            phone: self.phone.clone(),
            satisfied,
            feedback: self.feedback.clone(),
        }
    }
}

/// One persisted, server-assigned submission as returned by the list endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SurveyEntry {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub phone: String,
    pub feedback: String,
    pub satisfied: bool,
}

/// GET response shape: `{ "data": [...] }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryList {
    pub data: Vec<SurveyEntry>,
}

/// POST body for one new submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitSurveyRequest {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub phone: String,
    pub satisfied: bool,
    pub feedback: String,
}

pub fn satisfied_label(satisfied: bool) -> &'static str {
    if satisfied {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_overwrites_only_the_named_field() {
        let mut draft = FormDraft::default();
        draft.set_field("name", "Alice".into());
        draft.set_field("age", "30".into());
        draft.set_field("age", "31".into());

        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.age, "31");
        assert_eq!(draft.gender, "");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.feedback, "");
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let mut draft = FormDraft::default();
        draft.set_field("name", "Alice".into());
        draft.set_field("nickname", "Al".into());
        assert_eq!(
            draft,
            FormDraft {
                name: "Alice".into(),
                ..FormDraft::default()
            }
        );
    }

    #[test]
    fn request_body_keeps_age_and_phone_as_typed() {
        let mut draft = FormDraft::default();
        draft.set_field("age", "007".into());
        draft.set_field("phone", "0712345678".into());
        let req = draft.to_request(true);
        assert_eq!(req.age, "007");
        assert_eq!(req.phone, "0712345678");
        assert!(req.satisfied);
    }

    #[test]
    fn request_body_serializes_with_exact_field_names() {
        let mut draft = FormDraft::default();
        draft.set_field("name", "A".into());
        draft.set_field("gender", "m".into());
        draft.set_field("age", "30".into());
        draft.set_field("phone", "123".into());
        draft.set_field("feedback", "ok".into());
        let json = serde_json::to_value(draft.to_request(false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "gender": "m",
                "age": "30",
                "phone": "123",
                "satisfied": false,
                "feedback": "ok",
            })
        );
    }

    #[test]
    fn entry_list_decodes_the_collection_response() {
        let body = r#"{"data":[{"name":"A","age":"30","gender":"m","phone":"123","feedback":"ok","satisfied":true}]}"#;
        let list: EntryList = serde_json::from_str(body).unwrap();
        assert_eq!(list.data.len(), 1);
        let entry = &list.data[0];
        assert_eq!(entry.name, "A");
        assert_eq!(entry.age, "30");
        assert_eq!(entry.gender, "m");
        assert_eq!(entry.phone, "123");
        assert_eq!(entry.feedback, "ok");
        assert_eq!(satisfied_label(entry.satisfied), "Yes");
    }

    #[test]
    fn satisfied_label_renders_yes_no() {
        assert_eq!(satisfied_label(true), "Yes");
        assert_eq!(satisfied_label(false), "No");
    }
}
