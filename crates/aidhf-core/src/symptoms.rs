//! Symptom record domain types
//!
//! The [`SymptomRecord`] is the payload submitted to the advice endpoint.
//! Grades travel as JSON integers, the syncope answer as a lowercase string
//! (`"yes"`/`"no"`), with an empty string standing in for "not answered".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordinal severity score for a graded symptom question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    #[default]
    Grade0,
    Grade1,
    Grade2,
    Grade3,
}

impl Grade {
    /// All grades in ascending order.
    pub const ALL: [Grade; 4] = [Grade::Grade0, Grade::Grade1, Grade::Grade2, Grade::Grade3];

    pub fn value(self) -> u8 {
        match self {
            Grade::Grade0 => 0,
            Grade::Grade1 => 1,
            Grade::Grade2 => 2,
            Grade::Grade3 => 3,
        }
    }

    /// Next grade up, saturating at the top of the scale.
    pub fn next(self) -> Self {
        Grade::try_from(self.value() + 1).unwrap_or(Grade::Grade3)
    }

    /// Next grade down, saturating at zero.
    pub fn previous(self) -> Self {
        self.value()
            .checked_sub(1)
            .and_then(|v| Grade::try_from(v).ok())
            .unwrap_or(Grade::Grade0)
    }
}

impl TryFrom<u8> for Grade {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Grade::Grade0),
            1 => Ok(Grade::Grade1),
            2 => Ok(Grade::Grade2),
            3 => Ok(Grade::Grade3),
            other => Err(Error::invalid_answer("grade", other.to_string())),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Binary answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            YesNo::Yes => YesNo::No,
            YesNo::No => YesNo::Yes,
        }
    }
}

impl FromStr for YesNo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "ja" | "j" => Ok(YesNo::Yes),
            "no" | "n" | "false" | "nee" => Ok(YesNo::No),
            _ => Err(Error::invalid_answer("yes/no", s)),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The questions that make up a symptom record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymptomField {
    Orthopnea,
    Cough,
    Edema,
    Dizziness,
    Syncope,
}

impl SymptomField {
    pub const ALL: [SymptomField; 5] = [
        SymptomField::Orthopnea,
        SymptomField::Cough,
        SymptomField::Edema,
        SymptomField::Dizziness,
        SymptomField::Syncope,
    ];

    /// Wire name, also the suffix of the field's translation keys.
    pub fn name(self) -> &'static str {
        match self {
            SymptomField::Orthopnea => "orthopnea",
            SymptomField::Cough => "cough",
            SymptomField::Edema => "edema",
            SymptomField::Dizziness => "dizziness",
            SymptomField::Syncope => "syncope",
        }
    }

    /// Position in [`SymptomField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_graded(self) -> bool {
        !matches!(self, SymptomField::Syncope)
    }
}

impl fmt::Display for SymptomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured payload submitted for advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub orthopnea: Grade,
    pub cough: Grade,
    pub edema: Grade,
    pub dizziness: Grade,
    #[serde(with = "answer_or_empty")]
    pub syncope: Option<YesNo>,
}

impl SymptomRecord {
    /// Whether every required answer is present.
    pub fn is_complete(&self) -> bool {
        self.syncope.is_some()
    }

    /// Returns the first required field without an answer.
    pub fn validate(&self) -> Result<()> {
        if self.syncope.is_none() {
            return Err(Error::IncompleteRecord {
                field: SymptomField::Syncope.name(),
            });
        }
        Ok(())
    }

    pub fn grade(&self, field: SymptomField) -> Option<Grade> {
        match field {
            SymptomField::Orthopnea => Some(self.orthopnea),
            SymptomField::Cough => Some(self.cough),
            SymptomField::Edema => Some(self.edema),
            SymptomField::Dizziness => Some(self.dizziness),
            SymptomField::Syncope => None,
        }
    }
}

mod answer_or_empty {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::YesNo;

    pub fn serialize<S: Serializer>(value: &Option<YesNo>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(answer) => answer.serialize(s),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<YesNo>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_all_zero_and_unanswered() {
        let record = SymptomRecord::default();
        assert_eq!(record.orthopnea, Grade::Grade0);
        assert_eq!(record.cough, Grade::Grade0);
        assert_eq!(record.edema, Grade::Grade0);
        assert_eq!(record.dizziness, Grade::Grade0);
        assert_eq!(record.syncope, None);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_default_record_wire_shape() {
        let json = serde_json::to_value(SymptomRecord::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "orthopnea": 0,
                "cough": 0,
                "edema": 0,
                "dizziness": 0,
                "syncope": ""
            })
        );
    }

    #[test]
    fn test_answered_record_wire_shape() {
        let record = SymptomRecord {
            orthopnea: Grade::Grade1,
            cough: Grade::Grade0,
            edema: Grade::Grade2,
            dizziness: Grade::Grade0,
            syncope: Some(YesNo::Yes),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"orthopnea":1,"cough":0,"edema":2,"dizziness":0,"syncope":"yes"}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_grade() {
        let json = r#"{"orthopnea":4,"cough":0,"edema":0,"dizziness":0,"syncope":"no"}"#;
        assert!(serde_json::from_str::<SymptomRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_empty_syncope_is_unanswered() {
        let json = r#"{"orthopnea":3,"cough":1,"edema":0,"dizziness":2,"syncope":""}"#;
        let record: SymptomRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.syncope, None);
        assert_eq!(record.orthopnea, Grade::Grade3);
    }

    #[test]
    fn test_validate_requires_syncope() {
        let mut record = SymptomRecord::default();
        assert!(matches!(
            record.validate(),
            Err(Error::IncompleteRecord { field: "syncope" })
        ));

        record.syncope = Some(YesNo::No);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_grade_stepping_saturates() {
        assert_eq!(Grade::Grade0.previous(), Grade::Grade0);
        assert_eq!(Grade::Grade0.next(), Grade::Grade1);
        assert_eq!(Grade::Grade3.next(), Grade::Grade3);
        assert_eq!(Grade::Grade2.previous(), Grade::Grade1);
    }

    #[test]
    fn test_grade_try_from() {
        assert_eq!(Grade::try_from(2).unwrap(), Grade::Grade2);
        assert!(Grade::try_from(9).is_err());
    }

    #[test]
    fn test_yes_no_parsing() {
        assert_eq!("yes".parse::<YesNo>().unwrap(), YesNo::Yes);
        assert_eq!("Ja".parse::<YesNo>().unwrap(), YesNo::Yes);
        assert_eq!("nee".parse::<YesNo>().unwrap(), YesNo::No);
        assert_eq!(" no ".parse::<YesNo>().unwrap(), YesNo::No);
        assert!("maybe".parse::<YesNo>().is_err());
    }

    #[test]
    fn test_field_order_and_kind() {
        assert_eq!(SymptomField::ALL[0], SymptomField::Orthopnea);
        assert_eq!(SymptomField::ALL[4], SymptomField::Syncope);
        assert!(SymptomField::Cough.is_graded());
        assert!(!SymptomField::Syncope.is_graded());
        for (i, field) in SymptomField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_record_grade_lookup() {
        let record = SymptomRecord {
            edema: Grade::Grade2,
            ..Default::default()
        };
        assert_eq!(record.grade(SymptomField::Edema), Some(Grade::Grade2));
        assert_eq!(record.grade(SymptomField::Syncope), None);
    }
}
