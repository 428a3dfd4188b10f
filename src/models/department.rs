use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{Draft, optional};

use super::{Draftable, Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    pub code: String,
    pub head_instructor_id: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentDraft {
    pub name: String,
    pub code: String,
    pub head_instructor_id: String,
    pub description: String,
}

impl Draft for DepartmentDraft {
    const REQUIRED: &'static [&'static str] = &["name", "code"];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "code" => Some(&self.code),
            "head_instructor_id" => Some(&self.head_instructor_id),
            "description" => Some(&self.description),
            _ => None,
        }
    }
}

impl Entity for Department {
    const KIND: EntityKind = EntityKind::Department;

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
            ("code", FieldValue::text(&self.code)),
            (
                "head_instructor_id",
                FieldValue::optional_text(self.head_instructor_id.as_deref()),
            ),
            ("description", FieldValue::optional_text(self.description.as_deref())),
        ]);
        fields
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Draftable for Department {
    type Draft = DepartmentDraft;

    fn to_draft(&self) -> DepartmentDraft {
        DepartmentDraft {
            name: self.name.clone(),
            code: self.code.clone(),
            head_instructor_id: self.head_instructor_id.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
        }
    }

    fn from_draft(meta: Meta, draft: &DepartmentDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            meta,
            name: draft.name.clone(),
            code: draft.code.clone(),
            head_instructor_id: optional(&draft.head_instructor_id),
            description: optional(&draft.description),
        })
    }
}
