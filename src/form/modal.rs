use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::EntityKind;

use super::Draft;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("form is not open")]
    NotOpen,

    #[error("form is saving")]
    Busy,

    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("form field '{0}' must be a string")]
    NotText(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// What an open form will do on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "lowercase")]
pub enum FormTarget {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, PartialEq)]
enum ModalState<D> {
    Closed,
    Open { target: FormTarget, draft: D },
}

/// Create/edit dialog around an entity's draft fields.
///
/// The form owns chrome and open/closed state only. Validation and the
/// effect of a submit belong to the handler passed to [`EntityForm::submit`].
#[derive(Debug, Clone)]
pub struct EntityForm<D> {
    kind: EntityKind,
    state: ModalState<D>,
    loading: bool,
}

impl<D: Draft> EntityForm<D> {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            state: ModalState::Closed,
            loading: false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn target(&self) -> Option<&FormTarget> {
        match &self.state {
            ModalState::Open { target, .. } => Some(target),
            ModalState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match &self.state {
            ModalState::Open { draft, .. } => Some(draft),
            ModalState::Closed => None,
        }
    }

    pub fn open_create(&mut self) {
        self.loading = false;
        self.state = ModalState::Open {
            target: FormTarget::Create,
            draft: D::default(),
        };
    }

    pub fn open_edit(&mut self, id: impl Into<String>, draft: D) {
        self.loading = false;
        self.state = ModalState::Open {
            target: FormTarget::Edit(id.into()),
            draft,
        };
    }

    /// Overwrites the named draft fields. Unknown fields and non-string
    /// values are rejected and leave the draft untouched.
    pub fn patch(&mut self, patch: Map<String, Value>) -> Result<(), FormError> {
        let ModalState::Open { draft, .. } = &mut self.state else {
            return Err(FormError::NotOpen);
        };

        let mut fields = match serde_json::to_value(&*draft)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        for (name, value) in patch {
            if !fields.contains_key(&name) {
                return Err(FormError::UnknownField(name));
            }
            if !value.is_string() {
                return Err(FormError::NotText(name));
            }
            fields.insert(name, value);
        }

        *draft = serde_json::from_value(Value::Object(fields))?;
        Ok(())
    }

    pub fn set_loading(&mut self, loading: bool) -> Result<(), FormError> {
        if !self.is_open() {
            return Err(FormError::NotOpen);
        }
        self.loading = loading;
        Ok(())
    }

    /// Runs `handler` against the open form. On success the form closes; on
    /// failure it stays open with the draft intact.
    pub fn submit<R, E>(
        &mut self,
        handler: impl FnOnce(&FormTarget, &D) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: From<FormError>,
    {
        let ModalState::Open { target, draft } = &self.state else {
            return Err(FormError::NotOpen.into());
        };
        if self.loading {
            return Err(FormError::Busy.into());
        }

        let outcome = handler(target, draft)?;
        self.close();
        Ok(outcome)
    }

    /// Discards the draft.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.state = ModalState::Closed;
        self.loading = false;
    }

    pub fn title(&self) -> Option<String> {
        self.target().map(|target| match target {
            FormTarget::Create => format!("Add {}", self.kind.name()),
            FormTarget::Edit(_) => format!("Edit {}", self.kind.name()),
        })
    }

    pub fn description(&self) -> Option<String> {
        self.target().map(|target| match target {
            FormTarget::Create => format!("Enter new {} information", self.kind.lowercase()),
            FormTarget::Edit(_) => format!("Update {} information", self.kind.lowercase()),
        })
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Saving..."
        } else if matches!(self.target(), Some(FormTarget::Edit(_))) {
            "Update"
        } else {
            "Create"
        }
    }

    pub fn view(&self) -> ModalView<'_, D> {
        match &self.state {
            ModalState::Closed => ModalView::Closed,
            ModalState::Open { target, draft } => ModalView::Open {
                title: self.title().unwrap_or_default(),
                description: self.description().unwrap_or_default(),
                target,
                submit_label: self.submit_label(),
                cancel_label: "Cancel",
                loading: self.loading,
                required: D::REQUIRED,
                draft,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ModalView<'a, D> {
    Closed,
    Open {
        title: String,
        description: String,
        target: &'a FormTarget,
        submit_label: &'static str,
        cancel_label: &'static str,
        loading: bool,
        required: &'static [&'static str],
        draft: &'a D,
    },
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct NoteDraft {
        title: String,
        body: String,
    }

    impl Draft for NoteDraft {
        const REQUIRED: &'static [&'static str] = &["title"];

        fn value(&self, field: &str) -> Option<&str> {
            match field {
                "title" => Some(&self.title),
                "body" => Some(&self.body),
                _ => None,
            }
        }
    }

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn starts_closed() {
        let form = EntityForm::<NoteDraft>::new(EntityKind::Course);
        assert!(!form.is_open());
        assert_eq!(form.title(), None);
        assert!(matches!(form.view(), ModalView::Closed));
    }

    #[test]
    fn create_and_edit_chrome() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Department);
        form.open_create();
        assert_eq!(form.title().as_deref(), Some("Add Department"));
        assert_eq!(form.description().as_deref(), Some("Enter new department information"));
        assert_eq!(form.submit_label(), "Create");

        form.open_edit("d1", NoteDraft::default());
        assert_eq!(form.title().as_deref(), Some("Edit Department"));
        assert_eq!(form.description().as_deref(), Some("Update department information"));
        assert_eq!(form.submit_label(), "Update");
        assert_eq!(form.target(), Some(&FormTarget::Edit("d1".to_string())));
    }

    #[test]
    fn loading_shows_saving_and_blocks_submit() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Course);
        form.open_create();
        form.set_loading(true).unwrap();
        assert_eq!(form.submit_label(), "Saving...");

        let result: Result<(), FormError> = form.submit(|_, _| Ok(()));
        assert!(matches!(result, Err(FormError::Busy)));
        assert!(form.is_open());
    }

    #[test]
    fn loading_requires_an_open_form() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Course);
        assert!(matches!(form.set_loading(true), Err(FormError::NotOpen)));
        assert_eq!(form.submit_label(), "Create");
    }

    #[test]
    fn successful_submit_closes() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Course);
        form.open_create();
        form.patch(patch(json!({ "title": "Syllabus" }))).unwrap();

        let seen: Result<String, FormError> = form.submit(|target, draft| {
            assert_eq!(target, &FormTarget::Create);
            Ok(draft.title.clone())
        });
        assert_eq!(seen.unwrap(), "Syllabus");
        assert!(!form.is_open());
    }

    #[test]
    fn failed_submit_keeps_draft() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Course);
        form.open_create();
        form.patch(patch(json!({ "body": "notes" }))).unwrap();

        let result: Result<(), FormError> = form.submit(|_, _| Err(FormError::NotOpen));
        assert!(result.is_err());
        assert_eq!(form.draft().unwrap().body, "notes");
    }

    #[test]
    fn patch_rejects_unknown_and_non_text_fields() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Course);
        assert!(matches!(
            form.patch(patch(json!({ "title": "x" }))),
            Err(FormError::NotOpen)
        ));

        form.open_create();
        assert!(matches!(
            form.patch(patch(json!({ "colour": "red" }))),
            Err(FormError::UnknownField(name)) if name == "colour"
        ));
        assert!(matches!(
            form.patch(patch(json!({ "title": 3 }))),
            Err(FormError::NotText(name)) if name == "title"
        ));
        assert_eq!(form.draft(), Some(&NoteDraft::default()));
    }

    #[test]
    fn cancel_discards() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Course);
        form.open_edit("c1", NoteDraft { title: "t".into(), body: "b".into() });
        form.cancel();
        assert_eq!(form.draft(), None);

        let result: Result<(), FormError> = form.submit(|_, _| Ok(()));
        assert!(matches!(result, Err(FormError::NotOpen)));
    }

    #[test]
    fn open_view_serializes_chrome_and_draft() {
        let mut form = EntityForm::<NoteDraft>::new(EntityKind::Student);
        form.open_create();
        let view = serde_json::to_value(form.view()).unwrap();
        assert_eq!(view["state"], "open");
        assert_eq!(view["title"], "Add Student");
        assert_eq!(view["target"]["mode"], "create");
        assert_eq!(view["required"], json!(["title"]));
        assert_eq!(view["draft"]["title"], "");
    }
}
