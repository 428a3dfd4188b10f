use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{Draft, format_date, optional, parse_optional_date};

use super::{Draftable, Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    pub email: String,
    /// Registrar number, distinct from the record id.
    pub student_id: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    /// `YYYY-MM-DD`, or empty.
    pub date_of_birth: String,
    pub address: String,
}

impl Draft for StudentDraft {
    const REQUIRED: &'static [&'static str] = &["name", "email", "student_id"];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "student_id" => Some(&self.student_id),
            "date_of_birth" => Some(&self.date_of_birth),
            "address" => Some(&self.address),
            _ => None,
        }
    }
}

impl Entity for Student {
    const KIND: EntityKind = EntityKind::Student;

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
            ("student_id", FieldValue::text(&self.student_id)),
            ("date_of_birth", FieldValue::optional_date(self.date_of_birth)),
            ("phone", FieldValue::optional_text(self.phone.as_deref())),
            ("address", FieldValue::optional_text(self.address.as_deref())),
        ]);
        fields
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Draftable for Student {
    type Draft = StudentDraft;

    fn to_draft(&self) -> StudentDraft {
        StudentDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            student_id: self.student_id.clone(),
            date_of_birth: format_date(self.date_of_birth),
            address: self.address.clone().unwrap_or_default(),
        }
    }

    fn from_draft(meta: Meta, draft: &StudentDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            meta,
            name: draft.name.clone(),
            email: draft.email.clone(),
            student_id: draft.student_id.clone(),
            date_of_birth: parse_optional_date("date_of_birth", &draft.date_of_birth)?,
            phone: optional(&draft.phone),
            address: optional(&draft.address),
        })
    }
}
