// Pattern 3: Factory - tag-keyed creation of related variants
// Imagine an online school that hires coding and music teachers. Callers ask
// the factory for a teacher by type and never name the concrete struct.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{DemoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherType {
    Coding,
    Music,
}

impl TeacherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeacherType::Coding => "CODING",
            TeacherType::Music => "MUSIC",
        }
    }
}

impl fmt::Display for TeacherType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeacherType {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CODING" => Ok(TeacherType::Coding),
            "MUSIC" => Ok(TeacherType::Music),
            other => Err(DemoError::UnsupportedVariant(other.to_string())),
        }
    }
}

/// Everything any teacher type may need. Each variant reads only its own
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherProperties {
    pub name: String,
    pub programming_language: Option<String>,
    pub instrument: Option<String>,
}

impl TeacherProperties {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn programming_language(mut self, language: impl Into<String>) -> Self {
        self.programming_language = Some(language.into());
        self
    }

    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodingTeacher {
    pub name: String,
    pub programming_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MusicTeacher {
    pub name: String,
    pub instrument: String,
}

/// A teacher of exactly one type. Serializes to the variant's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Teacher {
    Coding(CodingTeacher),
    Music(MusicTeacher),
}

impl Teacher {
    pub fn name(&self) -> &str {
        match self {
            Teacher::Coding(teacher) => &teacher.name,
            Teacher::Music(teacher) => &teacher.name,
        }
    }

    pub fn kind(&self) -> TeacherType {
        match self {
            Teacher::Coding(_) => TeacherType::Coding,
            Teacher::Music(_) => TeacherType::Music,
        }
    }
}

impl TryFrom<&Value> for Teacher {
    type Error = DemoError;

    /// Recovers a teacher from an untyped object by the variant field it
    /// carries.
    fn try_from(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .filter(|object| !object.is_empty())
            .ok_or(DemoError::EmptyOrUnrecognizedInput)?;

        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
        let name = text("name");

        match (text("programming_language"), text("instrument")) {
            (Some(_), Some(_)) => Err(DemoError::AmbiguousVariant),
            (Some(programming_language), None) => Ok(Teacher::Coding(CodingTeacher {
                name: name.ok_or(DemoError::missing_property("CODING", "name"))?,
                programming_language,
            })),
            (None, Some(instrument)) => Ok(Teacher::Music(MusicTeacher {
                name: name.ok_or(DemoError::missing_property("MUSIC", "name"))?,
                instrument,
            })),
            (None, None) => Err(DemoError::EmptyOrUnrecognizedInput),
        }
    }
}

pub struct TeacherFactory;

impl TeacherFactory {
    pub fn get_teacher(kind: TeacherType, props: TeacherProperties) -> Result<Teacher> {
        let TeacherProperties {
            name,
            programming_language,
            instrument,
        } = props;

        let teacher = match kind {
            TeacherType::Coding => Teacher::Coding(CodingTeacher {
                name,
                programming_language: programming_language
                    .ok_or(DemoError::missing_property("CODING", "programming_language"))?,
            }),
            TeacherType::Music => Teacher::Music(MusicTeacher {
                name,
                instrument: instrument.ok_or(DemoError::missing_property("MUSIC", "instrument"))?,
            }),
        };
        tracing::debug!(kind = %kind, name = teacher.name(), "teacher created");
        Ok(teacher)
    }

    /// Same as [`get_teacher`](Self::get_teacher) with the type given as a
    /// tag such as `"CODING"`; unknown tags are rejected.
    pub fn get_teacher_by_tag(tag: &str, props: TeacherProperties) -> Result<Teacher> {
        Self::get_teacher(tag.parse()?, props)
    }
}

pub fn describe(teacher: &Teacher) -> String {
    match teacher {
        Teacher::Coding(t) => format!(
            "Hi! I'm {}. I teach students how to code using {}",
            t.name, t.programming_language
        ),
        Teacher::Music(t) => format!(
            "Hi! I'm {}. I'm a music teacher and i teach students how to play the {}.",
            t.name, t.instrument
        ),
    }
}

/// Describes a teacher handed over as a plain JSON object.
pub fn log_teacher_info(teacher: &Value) -> Result<String> {
    let teacher = Teacher::try_from(teacher)?;
    Ok(describe(&teacher))
}

// ============================================================================
// Tests
// ============================================================================
