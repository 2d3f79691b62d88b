//! Section builders. Each maps one part of a `ResumeRecord` to zero or more blocks:
//! nothing when the field is empty, otherwise an uppercase heading followed by content.

use crate::document::blocks::{
    Alignment, Block, HeadingLevel, Run, Spacing, CONTACT_SIZE, DETAIL_INDENT, HEADLINE_SIZE,
    SEPARATOR,
};
use crate::models::resume::{Education, PersonalInfo, Project, WorkExperience};

pub const SUMMARY_TITLE: &str = "PROFESSIONAL SUMMARY";
pub const WORK_EXPERIENCE_TITLE: &str = "WORK EXPERIENCE";
pub const EDUCATION_TITLE: &str = "EDUCATION";
pub const SKILLS_TITLE: &str = "TECHNICAL SKILLS";
pub const PROJECTS_TITLE: &str = "PROJECTS";
pub const CERTIFICATIONS_TITLE: &str = "CERTIFICATIONS & ACHIEVEMENTS";
pub const LANGUAGES_TITLE: &str = "LANGUAGES";
pub const INTERESTS_TITLE: &str = "INTERESTS & HOBBIES";

const HEADING_SPACING: Spacing = Spacing::new(200, 200);
const SECTION_END: u32 = 400;
const ITEM_GAP: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Builders, in document order
// ────────────────────────────────────────────────────────────────────────────

/// Name as a centered title, then the contact line if any contact detail exists.
pub fn header(info: &PersonalInfo) -> Vec<Block> {
    let mut blocks = vec![Block::Heading {
        text: info.name.clone(),
        level: HeadingLevel::H1,
        alignment: Alignment::Center,
        spacing: Spacing::new(0, 200),
    }];

    let contacts = info.contact_items();
    if !contacts.is_empty() {
        let mut runs = Vec::with_capacity(contacts.len() * 2);
        for (i, item) in contacts.into_iter().enumerate() {
            if i > 0 {
                runs.push(Run::plain(SEPARATOR).sized(CONTACT_SIZE));
            }
            runs.push(Run::plain(item).sized(CONTACT_SIZE));
        }
        blocks.push(Block::Paragraph {
            runs,
            alignment: Alignment::Center,
            indent_left: None,
            spacing: Spacing::new(0, SECTION_END),
        });
    }

    blocks
}

pub fn summary(summary: Option<&str>) -> Vec<Block> {
    match summary {
        Some(text) if !text.is_empty() => vec![
            section_heading(SUMMARY_TITLE),
            Block::text(text, Spacing::new(0, SECTION_END)),
        ],
        _ => vec![],
    }
}

pub fn work_experience(jobs: &[WorkExperience]) -> Vec<Block> {
    if jobs.is_empty() {
        return vec![];
    }

    let mut blocks = vec![section_heading(WORK_EXPERIENCE_TITLE)];
    for (i, job) in jobs.iter().enumerate() {
        let mut lead = Vec::new();
        if !job.title.is_empty() {
            lead.push(Run::bold(&job.title).sized(HEADLINE_SIZE));
        }
        if !job.company.is_empty() {
            if !lead.is_empty() {
                lead.push(Run::plain(" at ").sized(HEADLINE_SIZE));
            }
            lead.push(Run::bold(&job.company).sized(HEADLINE_SIZE));
        }

        let before = if i == 0 { 0 } else { 200 };
        blocks.push(headline(
            lead,
            &[job.duration.as_str()],
            Spacing::new(before, ITEM_GAP),
        ));
        blocks.extend(
            job.responsibilities
                .iter()
                .map(|r| detail_bullet(r, Spacing::new(0, ITEM_GAP))),
        );
    }
    blocks.push(Block::spacer(SECTION_END));

    blocks
}

pub fn education(entries: &[Education]) -> Vec<Block> {
    if entries.is_empty() {
        return vec![];
    }

    let mut blocks = vec![section_heading(EDUCATION_TITLE)];
    for (i, edu) in entries.iter().enumerate() {
        let lead = bold_lead(&edu.degree);
        blocks.push(headline(
            lead,
            &[edu.institution.as_str(), edu.year.as_str()],
            list_item_spacing(i, entries.len()),
        ));
    }

    blocks
}

pub fn skills(skills: &[String]) -> Vec<Block> {
    joined_section(SKILLS_TITLE, skills)
}

pub fn projects(projects: &[Project]) -> Vec<Block> {
    if projects.is_empty() {
        return vec![];
    }

    let mut blocks = vec![section_heading(PROJECTS_TITLE)];
    for (i, project) in projects.iter().enumerate() {
        let stack = project.tech_stack.join(", ");
        let before = if i == 0 { 0 } else { 200 };
        blocks.push(headline(
            bold_lead(&project.name),
            &[stack.as_str()],
            Spacing::new(before, ITEM_GAP),
        ));

        if let Some(description) = &project.description {
            blocks.push(detail_paragraph(description.clone()));
        }
        if let Some(link) = &project.link {
            blocks.push(detail_paragraph(format!("Link: {link}")));
        }
    }
    blocks.push(Block::spacer(SECTION_END));

    blocks
}

pub fn certifications(certifications: &[String]) -> Vec<Block> {
    if certifications.is_empty() {
        return vec![];
    }

    let mut blocks = vec![section_heading(CERTIFICATIONS_TITLE)];
    blocks.extend(
        certifications
            .iter()
            .enumerate()
            .map(|(i, cert)| detail_bullet(cert, list_item_spacing(i, certifications.len()))),
    );

    blocks
}

pub fn languages(languages: &[String]) -> Vec<Block> {
    joined_section(LANGUAGES_TITLE, languages)
}

pub fn interests(interests: &[String]) -> Vec<Block> {
    joined_section(INTERESTS_TITLE, interests)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared block shapes
// ────────────────────────────────────────────────────────────────────────────

fn section_heading(title: &str) -> Block {
    Block::Heading {
        text: title.to_uppercase(),
        level: HeadingLevel::H2,
        alignment: Alignment::Left,
        spacing: HEADING_SPACING,
    }
}

fn bold_lead(text: &str) -> Vec<Run> {
    if text.is_empty() {
        vec![]
    } else {
        vec![Run::bold(text).sized(HEADLINE_SIZE)]
    }
}

/// Bold lead runs followed by " • "-separated plain facts. Empty facts are skipped.
fn headline(mut runs: Vec<Run>, facts: &[&str], spacing: Spacing) -> Block {
    for fact in facts.iter().filter(|f| !f.is_empty()) {
        if !runs.is_empty() {
            runs.push(Run::plain(SEPARATOR).sized(HEADLINE_SIZE));
        }
        runs.push(Run::plain(*fact).sized(HEADLINE_SIZE));
    }

    Block::Paragraph {
        runs,
        alignment: Alignment::Left,
        indent_left: None,
        spacing,
    }
}

fn detail_bullet(text: &str, spacing: Spacing) -> Block {
    Block::BulletItem {
        text: text.to_string(),
        indent_left: DETAIL_INDENT,
        spacing,
    }
}

fn detail_paragraph(text: String) -> Block {
    Block::Paragraph {
        runs: vec![Run::plain(text)],
        alignment: Alignment::Left,
        indent_left: Some(DETAIL_INDENT),
        spacing: Spacing::new(0, ITEM_GAP),
    }
}

/// Tight spacing between items, the section gap after the last one.
fn list_item_spacing(index: usize, len: usize) -> Spacing {
    let before = if index == 0 { 0 } else { ITEM_GAP };
    let after = if index + 1 == len { SECTION_END } else { ITEM_GAP };
    Spacing::new(before, after)
}

fn joined_section(title: &str, items: &[String]) -> Vec<Block> {
    if items.is_empty() {
        return vec![];
    }
    vec![
        section_heading(title),
        Block::text(items.join(SEPARATOR), Spacing::new(0, SECTION_END)),
    ]
}
