use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Excused => "excused",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    #[serde(flatten)]
    pub meta: Meta,
    pub enrollment_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

impl Entity for Attendance {
    const KIND: EntityKind = EntityKind::Attendance;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = self.meta.fields();
        fields.extend([
            ("enrollment_id", FieldValue::text(&self.enrollment_id)),
            ("date", FieldValue::Date(self.date)),
            ("status", FieldValue::text(self.status.as_str())),
            ("notes", FieldValue::optional_text(self.notes.as_deref())),
        ]);
        fields
    }

    fn label(&self) -> String {
        format!("Attendance {}", self.meta.id)
    }
}
