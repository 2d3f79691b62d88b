use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Raw submission — exactly what the form posts. Every field may be missing or null.
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeSubmission {
    pub personal_info: Option<PersonalInfoInput>,
    pub summary: Option<String>,
    pub work_experience: Option<Vec<WorkExperienceInput>>,
    pub education: Option<Vec<EducationInput>>,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<ProjectInput>>,
    pub certifications: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonalInfoInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub responsibilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationInput {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<YearInput>,
}

/// Graduation year as typed into the form (`"2023"`) or sent by scripts (`2023`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Text(String),
    Number(i64),
}

impl YearInput {
    pub fn into_text(self) -> String {
        match self {
            YearInput::Text(s) => s,
            YearInput::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub description: Option<String>,
    pub link: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized record — produced by validation, consumed by document assembly.
// Strings are trimmed and blank values are already removed.
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    /// Distinct skills in the order they were first entered.
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

impl PersonalInfo {
    /// Contact details in display order, skipping the ones not provided.
    pub fn contact_items(&self) -> Vec<&str> {
        [
            &self.email,
            &self.phone,
            &self.linkedin,
            &self.github,
            &self.portfolio,
        ]
        .into_iter()
        .filter_map(|item| item.as_deref())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub tech_stack: Vec<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl ResumeRecord {
    /// A record with only the mandatory name filled in.
    #[cfg(test)]
    pub fn named(name: impl Into<String>) -> Self {
        ResumeRecord {
            personal_info: PersonalInfo {
                name: name.into(),
                email: None,
                phone: None,
                linkedin: None,
                github: None,
                portfolio: None,
            },
            summary: None,
            work_experience: vec![],
            education: vec![],
            skills: vec![],
            projects: vec![],
            certifications: vec![],
            languages: vec![],
            interests: vec![],
        }
    }
}
