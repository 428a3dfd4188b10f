use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{Draft, optional, parse_number};

use super::{Draftable, Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(flatten)]
    pub meta: Meta,
    pub course_id: String,
    pub instructor_id: String,
    pub room_number: Option<String>,
    pub max_students: u32,
    pub semester: String,
    pub year: i32,
    pub section_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDraft {
    pub course_id: String,
    pub instructor_id: String,
    pub room_number: String,
    pub max_students: String,
    pub semester: String,
    pub year: String,
    pub section_number: String,
}

impl Draft for SectionDraft {
    const REQUIRED: &'static [&'static str] = &[
        "course_id",
        "instructor_id",
        "max_students",
        "semester",
        "year",
        "section_number",
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "course_id" => Some(&self.course_id),
            "instructor_id" => Some(&self.instructor_id),
            "room_number" => Some(&self.room_number),
            "max_students" => Some(&self.max_students),
            "semester" => Some(&self.semester),
            "year" => Some(&self.year),
            "section_number" => Some(&self.section_number),
            _ => None,
        }
    }
}

impl Entity for Section {
    const KIND: EntityKind = EntityKind::Section;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = self.meta.fields();
        fields.extend([
            ("course_id", FieldValue::text(&self.course_id)),
            ("instructor_id", FieldValue::text(&self.instructor_id)),
            ("room_number", FieldValue::optional_text(self.room_number.as_deref())),
            ("max_students", FieldValue::number(self.max_students)),
            ("semester", FieldValue::text(&self.semester)),
            ("year", FieldValue::number(self.year)),
            ("section_number", FieldValue::text(&self.section_number)),
        ]);
        fields
    }

    fn label(&self) -> String {
        format!("Section {}", self.section_number)
    }
}

impl Draftable for Section {
    type Draft = SectionDraft;

    fn to_draft(&self) -> SectionDraft {
        SectionDraft {
            course_id: self.course_id.clone(),
            instructor_id: self.instructor_id.clone(),
            room_number: self.room_number.clone().unwrap_or_default(),
            max_students: self.max_students.to_string(),
            semester: self.semester.clone(),
            year: self.year.to_string(),
            section_number: self.section_number.clone(),
        }
    }

    fn from_draft(meta: Meta, draft: &SectionDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            meta,
            course_id: draft.course_id.clone(),
            instructor_id: draft.instructor_id.clone(),
            room_number: optional(&draft.room_number),
            max_students: parse_number("max_students", &draft.max_students)?,
            semester: draft.semester.clone(),
            year: parse_number("year", &draft.year)?,
            section_number: draft.section_number.clone(),
        })
    }
}
