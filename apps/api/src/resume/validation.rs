//! Validation and normalization of a raw `ResumeSubmission` into a `ResumeRecord`.
//!
//! The only hard requirement is a non-blank `personal_info.name`. Everything else
//! is trimmed, blank values are dropped, and empty entries disappear so that the
//! document builders can treat "empty" and "absent" the same way.

use crate::errors::AppError;
use crate::models::resume::{
    Education, EducationInput, PersonalInfo, PersonalInfoInput, Project, ProjectInput,
    ResumeRecord, ResumeSubmission, WorkExperience, WorkExperienceInput,
};

/// Validates a submission and returns the normalized record.
///
/// Fails with `AppError::Validation` before any other work when the name is
/// missing, null, or whitespace.
pub fn validate_submission(submission: ResumeSubmission) -> Result<ResumeRecord, AppError> {
    let mut info = submission.personal_info.unwrap_or_default();
    let name = clean(info.name.take()).ok_or_else(|| {
        AppError::Validation("Personal information with name is required".to_string())
    })?;

    Ok(ResumeRecord {
        personal_info: normalize_personal_info(name, info),
        summary: clean(submission.summary),
        work_experience: submission
            .work_experience
            .unwrap_or_default()
            .into_iter()
            .filter_map(normalize_work_experience)
            .collect(),
        education: submission
            .education
            .unwrap_or_default()
            .into_iter()
            .filter_map(normalize_education)
            .collect(),
        skills: dedup_preserving_order(clean_list(submission.skills)),
        projects: submission
            .projects
            .unwrap_or_default()
            .into_iter()
            .filter_map(normalize_project)
            .collect(),
        certifications: clean_list(submission.certifications),
        languages: clean_list(submission.languages),
        interests: clean_list(submission.interests),
    })
}

fn normalize_personal_info(name: String, info: PersonalInfoInput) -> PersonalInfo {
    PersonalInfo {
        name,
        email: clean(info.email),
        phone: clean(info.phone),
        linkedin: clean(info.linkedin),
        github: clean(info.github),
        portfolio: clean(info.portfolio),
    }
}

fn normalize_work_experience(job: WorkExperienceInput) -> Option<WorkExperience> {
    let job = WorkExperience {
        title: clean(job.title).unwrap_or_default(),
        company: clean(job.company).unwrap_or_default(),
        duration: clean(job.duration).unwrap_or_default(),
        responsibilities: clean_list(job.responsibilities),
    };

    let is_blank = job.title.is_empty()
        && job.company.is_empty()
        && job.duration.is_empty()
        && job.responsibilities.is_empty();
    (!is_blank).then_some(job)
}

fn normalize_education(edu: EducationInput) -> Option<Education> {
    let edu = Education {
        degree: clean(edu.degree).unwrap_or_default(),
        institution: clean(edu.institution).unwrap_or_default(),
        year: clean(edu.year.map(|y| y.into_text())).unwrap_or_default(),
    };

    let is_blank = edu.degree.is_empty() && edu.institution.is_empty() && edu.year.is_empty();
    (!is_blank).then_some(edu)
}

fn normalize_project(project: ProjectInput) -> Option<Project> {
    let project = Project {
        name: clean(project.name).unwrap_or_default(),
        tech_stack: clean_list(project.tech_stack),
        description: clean(project.description),
        link: clean(project.link),
    };

    let is_blank = project.name.is_empty()
        && project.tech_stack.is_empty()
        && project.description.is_none()
        && project.link.is_none();
    (!is_blank).then_some(project)
}

/// Trims a value; blank strings become `None`.
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_list(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| clean(Some(v)))
        .collect()
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
