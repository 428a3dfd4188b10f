use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{Draft, optional, parse_number};

use super::{Draftable, Entity, EntityKind, FieldValue, Meta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    pub code: String,
    pub credits: u32,
    pub department_id: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseDraft {
    pub code: String,
    pub name: String,
    pub credits: String,
    pub department_id: String,
    pub description: String,
}

impl Draft for CourseDraft {
    const REQUIRED: &'static [&'static str] = &["code", "name", "credits", "department_id"];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "code" => Some(&self.code),
            "name" => Some(&self.name),
            "credits" => Some(&self.credits),
            "department_id" => Some(&self.department_id),
            "description" => Some(&self.description),
            _ => None,
        }
    }
}

impl Entity for Course {
    const KIND: EntityKind = EntityKind::Course;

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
            ("credits", FieldValue::number(self.credits)),
            ("department_id", FieldValue::text(&self.department_id)),
            ("description", FieldValue::optional_text(self.description.as_deref())),
        ]);
        fields
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Draftable for Course {
    type Draft = CourseDraft;

    fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            code: self.code.clone(),
            name: self.name.clone(),
            credits: self.credits.to_string(),
            department_id: self.department_id.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }

    fn from_draft(meta: Meta, draft: &CourseDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            meta,
            name: draft.name.clone(),
            code: draft.code.clone(),
            credits: parse_number("credits", &draft.credits)?,
            department_id: draft.department_id.clone(),
            description: optional(&draft.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn draft() -> CourseDraft {
        CourseDraft {
            code: "CS301".to_string(),
            name: "Operating Systems".to_string(),
            credits: "3".to_string(),
            department_id: "d1".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn credits_are_parsed_from_text() {
        let course = Course::from_draft(Meta::new("c9", DateTime::<Utc>::UNIX_EPOCH), &draft()).unwrap();
        assert_eq!(course.credits, 3);
        assert_eq!(course.description, None);
        assert_eq!(course.to_draft(), draft());
    }

    #[test]
    fn non_numeric_credits_fail() {
        let mut bad = draft();
        bad.credits = "three".to_string();
        let err = Course::from_draft(Meta::new("c9", DateTime::<Utc>::UNIX_EPOCH), &bad).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { field: "credits", .. }));
    }

    #[test]
    fn required_fields() {
        let mut incomplete = draft();
        incomplete.credits = "  ".to_string();
        incomplete.name = String::new();
        assert_eq!(incomplete.missing_required(), vec!["name", "credits"]);
        assert!(draft().check_required().is_ok());
    }
}
