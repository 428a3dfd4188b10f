use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::Draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Instructor,
    Department,
    Course,
    Section,
    Student,
    Enrollment,
    Attendance,
    Schedule,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Instructor => "Instructor",
            EntityKind::Department => "Department",
            EntityKind::Course => "Course",
            EntityKind::Section => "Section",
            EntityKind::Student => "Student",
            EntityKind::Enrollment => "Enrollment",
            EntityKind::Attendance => "Attendance",
            EntityKind::Schedule => "Schedule",
        }
    }

    pub fn lowercase(self) -> String {
        self.name().to_lowercase()
    }
}

/// Identity and timestamps shared by every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meta {
    pub fn new(id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn seeded(id: &str, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            created_at,
            updated_at,
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub(crate) fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::text(&self.id)),
            ("created_at", FieldValue::Timestamp(self.created_at)),
            ("updated_at", FieldValue::Timestamp(self.updated_at)),
        ]
    }
}

/// The raw value of one record field, as the table searches and sorts it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::text)
    }

    pub fn number(value: impl Into<f64>) -> Self {
        FieldValue::Number(value.into())
    }

    pub fn optional_date(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Date)
    }

    /// String form used for searching. Absent and empty values have none.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) if s.is_empty() => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Some(format!("{}", *n as i64))
            }
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FieldValue::Timestamp(t) => Some(t.to_rfc3339()),
        }
    }
}

pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn meta(&self) -> &Meta;

    fn meta_mut(&mut self) -> &mut Meta;

    /// Every field of the record, including identity and timestamps.
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// Human-readable name used in notifications.
    fn label(&self) -> String;

    fn id(&self) -> &str {
        &self.meta().id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

/// A record that can be created and edited through a string-typed draft.
pub trait Draftable: Entity {
    type Draft: Draft;

    fn to_draft(&self) -> Self::Draft;

    /// Builds the record a draft describes. Required-field checks happen
    /// before this is called; parsing failures are reported here.
    fn from_draft(meta: Meta, draft: &Self::Draft) -> Result<Self, ValidationError>;
}

/// Uppercases the first character, as status badges display.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_search_without_fraction() {
        assert_eq!(FieldValue::number(4).search_text().as_deref(), Some("4"));
        assert_eq!(FieldValue::Number(2.5).search_text().as_deref(), Some("2.5"));
    }

    #[test]
    fn absent_values_never_match() {
        assert_eq!(FieldValue::Null.search_text(), None);
        assert_eq!(FieldValue::text("").search_text(), None);
    }

    #[test]
    fn capitalize_status() {
        assert_eq!(capitalize("biweekly"), "Biweekly");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn touch_keeps_creation_time() {
        let created = DateTime::<Utc>::UNIX_EPOCH;
        let later = created + chrono::Duration::days(1);
        let mut meta = Meta::new("x", created);
        meta.touch(later);
        assert_eq!(meta.created_at, created);
        assert_eq!(meta.updated_at, later);
    }
}
