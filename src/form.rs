// src/form.rs
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::catalog;
use crate::errors::{PartyError, Result};
use crate::models::{Attachment, Submission};

pub const FILL_ALL_FIELDS: &str = "Please fill in every field and attach a file.";
pub const IMAGE_ONLY: &str = "Only png, jpg or jpeg images can be attached.";

/// What the user has typed or selected so far. Values stay as raw strings
/// so the form can be re-rendered exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FormState {
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub class_value: String,
    #[serde(default)]
    pub num: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mission: String,
}

impl FormState {
    /// Sets a field by its form control name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "grade" => self.grade = value,
            "class_value" => self.class_value = value,
            "num" => self.num = value,
            "name" => self.name = value,
            "mission" => self.mission = value,
            _ => {}
        }
    }

    pub fn selected_grade(&self) -> Option<u8> {
        self.grade.trim().parse().ok().filter(|g| catalog::GRADES.contains(g))
    }

    /// Upper bound of the class selector, derived from the grade.
    pub fn max_class(&self) -> u8 {
        catalog::max_class(self.selected_grade())
    }

    /// Class numbers to offer. A selection left over from a previous grade
    /// is kept rather than cleared.
    pub fn class_options(&self) -> Vec<u8> {
        let mut options = catalog::class_options(self.selected_grade());
        if let Ok(current) = self.class_value.trim().parse::<u8>() {
            if current > self.max_class() && current <= catalog::MAX_CLASS_ANY_GRADE {
                options.push(current);
            }
        }
        options
    }

    fn is_complete(&self, attachment: Option<&Attachment>) -> bool {
        let scalars = [
            &self.grade,
            &self.class_value,
            &self.num,
            &self.name,
            &self.mission,
        ];
        scalars.iter().all(|v| !v.trim().is_empty())
            && attachment.is_some_and(|a| !a.bytes.is_empty())
    }

    /// Turns the form into a submission. Any missing value yields the one
    /// generic validation message.
    pub fn validate(&self, attachment: Option<Attachment>) -> Result<Submission> {
        if !self.is_complete(attachment.as_ref()) {
            return Err(PartyError::Validation(FILL_ALL_FIELDS.to_string()));
        }

        let invalid = || PartyError::Validation(FILL_ALL_FIELDS.to_string());
        let grade = self.selected_grade().ok_or_else(invalid)?;
        let class_value = parse_in_range(&self.class_value, catalog::MAX_CLASS_ANY_GRADE)
            .ok_or_else(invalid)?;
        let num = parse_in_range(&self.num, catalog::MAX_STUDENT_NUMBER).ok_or_else(invalid)?;
        let mission = self.mission.trim();
        if !catalog::is_mission(mission) {
            return Err(invalid());
        }

        let attachment = attachment.ok_or_else(invalid)?;
        if !is_supported_image(&attachment) {
            return Err(PartyError::Validation(IMAGE_ONLY.to_string()));
        }

        Ok(Submission {
            grade,
            class_value,
            num,
            name: self.name.trim().to_string(),
            mission: mission.to_string(),
            attachment: Some(attachment),
        })
    }
}

fn parse_in_range(raw: &str, max: u8) -> Option<u8> {
    raw.trim().parse::<u8>().ok().filter(|v| (1..=max).contains(v))
}

fn image_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\.(png|jpe?g)$").expect("static regex"))
}

fn is_supported_image(attachment: &Attachment) -> bool {
    let mime_ok = matches!(
        attachment.mime_type.as_str(),
        "image/png" | "image/jpeg" | "image/jpg"
    );
    let name_ok = attachment
        .file_name
        .as_deref()
        .is_none_or(|name| image_name_pattern().is_match(name));
    mime_ok && name_ok
}
