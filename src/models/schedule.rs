use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Weekly,
    Biweekly,
    Monthly,
    Once,
}

impl Recurrence {
    pub fn as_str(self) -> &'static str {
        match self {
            Recurrence::Weekly => "weekly",
            Recurrence::Biweekly => "biweekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Once => "once",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(flatten)]
    pub meta: Meta,
    pub section_id: String,
    pub day_of_week: DayOfWeek,
    /// `HH:MM`
    pub start_time: String,
    pub end_time: String,
    pub recurrence: Recurrence,
    pub location: Option<String>,
}

impl Entity for Schedule {
    const KIND: EntityKind = EntityKind::Schedule;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = self.meta.fields();
        fields.extend([
            ("section_id", FieldValue::text(&self.section_id)),
            ("day_of_week", FieldValue::text(self.day_of_week.as_str())),
            ("start_time", FieldValue::text(&self.start_time)),
            ("end_time", FieldValue::text(&self.end_time)),
            ("recurrence", FieldValue::text(self.recurrence.as_str())),
            ("location", FieldValue::optional_text(self.location.as_deref())),
        ]);
        fields
    }

    fn label(&self) -> String {
        format!("Schedule {}", self.meta.id)
    }
}
