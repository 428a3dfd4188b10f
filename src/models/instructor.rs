use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{Draft, optional};

use super::{Draftable, Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department_id: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructorDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department_id: String,
    pub title: String,
}

impl Draft for InstructorDraft {
    const REQUIRED: &'static [&'static str] = &["name", "email", "department_id"];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "department_id" => Some(&self.department_id),
            "title" => Some(&self.title),
            _ => None,
        }
    }
}

impl Entity for Instructor {
    const KIND: EntityKind = EntityKind::Instructor;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = self.meta.fields();
        fields.extend([
            ("name", FieldValue::text(&self.name)),
            ("email", FieldValue::text(&self.email)),
            ("phone", FieldValue::optional_text(self.phone.as_deref())),
            ("department_id", FieldValue::text(&self.department_id)),
            ("title", FieldValue::optional_text(self.title.as_deref())),
        ]);
        fields
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Draftable for Instructor {
    type Draft = InstructorDraft;

    fn to_draft(&self) -> InstructorDraft {
        InstructorDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            department_id: self.department_id.clone(),
            title: self.title.clone().unwrap_or_default(),
        }
    }

    fn from_draft(meta: Meta, draft: &InstructorDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            meta,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: optional(&draft.phone),
            department_id: draft.department_id.clone(),
            title: optional(&draft.title),
        })
    }
}
