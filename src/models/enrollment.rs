use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Dropped,
    Completed,
}

impl EnrollmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Dropped => "dropped",
            EnrollmentStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(flatten)]
    pub meta: Meta,
    pub student_id: String,
    pub section_id: String,
    pub enrollment_date: NaiveDate,
    pub grade: Option<String>,
    pub status: EnrollmentStatus,
}

impl Entity for Enrollment {
    const KIND: EntityKind = EntityKind::Enrollment;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = self.meta.fields();
        fields.extend([
            ("student_id", FieldValue::text(&self.student_id)),
            ("section_id", FieldValue::text(&self.section_id)),
            ("enrollment_date", FieldValue::Date(self.enrollment_date)),
            ("grade", FieldValue::optional_text(self.grade.as_deref())),
            ("status", FieldValue::text(self.status.as_str())),
        ]);
        fields
    }

    fn label(&self) -> String {
        format!("Enrollment {}", self.meta.id)
    }
}
