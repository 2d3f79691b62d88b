use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, LineSpacing, PageMargin, Paragraph, Run as DocxRun, Style, StyleType,
};

use crate::document::blocks::{Alignment, Block, HeadingLevel, Run, Spacing};
use crate::document::{sections, AssemblyError};
use crate::models::resume::ResumeRecord;

/// 1 inch in twips.
const PAGE_MARGIN: i32 = 1440;
const HEADING1_SIZE_PT: usize = 16;
const HEADING2_SIZE_PT: usize = 13;

/// Maps a record to its blocks: header, summary, work experience, education,
/// skills, projects, certifications, languages, interests. Pure and deterministic.
pub fn build_blocks(record: &ResumeRecord) -> Vec<Block> {
    let mut blocks = sections::header(&record.personal_info);
    blocks.extend(sections::summary(record.summary.as_deref()));
    blocks.extend(sections::work_experience(&record.work_experience));
    blocks.extend(sections::education(&record.education));
    blocks.extend(sections::skills(&record.skills));
    blocks.extend(sections::projects(&record.projects));
    blocks.extend(sections::certifications(&record.certifications));
    blocks.extend(sections::languages(&record.languages));
    blocks.extend(sections::interests(&record.interests));
    blocks
}

/// Encodes blocks into a DOCX package with 1" margins on every side.
pub fn encode_docx(blocks: &[Block]) -> Result<Vec<u8>, AssemblyError> {
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN)
                .right(PAGE_MARGIN)
                .bottom(PAGE_MARGIN)
                .left(PAGE_MARGIN),
        )
        .add_style(heading_style("Heading1", "heading 1", HEADING1_SIZE_PT))
        .add_style(heading_style("Heading2", "heading 2", HEADING2_SIZE_PT));

    for block in blocks {
        docx = docx.add_paragraph(to_paragraph(block));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| AssemblyError::Encode(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Full pipeline for one record.
pub fn generate_resume(record: &ResumeRecord) -> Result<Vec<u8>, AssemblyError> {
    encode_docx(&build_blocks(record))
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn to_paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Heading {
            text,
            level,
            alignment,
            spacing,
        } => {
            let style_id = match level {
                HeadingLevel::H1 => "Heading1",
                HeadingLevel::H2 => "Heading2",
            };
            Paragraph::new()
                .style(style_id)
                .align(to_alignment(*alignment))
                .line_spacing(to_line_spacing(*spacing))
                .add_run(DocxRun::new().add_text(text))
        }
        Block::Paragraph {
            runs,
            alignment,
            indent_left,
            spacing,
        } => {
            let mut para = Paragraph::new()
                .align(to_alignment(*alignment))
                .line_spacing(to_line_spacing(*spacing));
            if let Some(left) = indent_left {
                para = para.indent(Some(*left), None, None, None);
            }
            runs.iter().fold(para, |p, run| p.add_run(to_run(run)))
        }
        Block::BulletItem {
            text,
            indent_left,
            spacing,
        } => Paragraph::new()
            .align(AlignmentType::Left)
            .indent(Some(*indent_left), None, None, None)
            .line_spacing(to_line_spacing(*spacing))
            .add_run(DocxRun::new().add_text(format!("\u{2022} {text}"))),
    }
}

fn to_run(run: &Run) -> DocxRun {
    let mut out = DocxRun::new().add_text(&run.text);
    if run.bold {
        out = out.bold();
    }
    if let Some(size) = run.size {
        out = out.size(size);
    }
    out
}

fn to_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    }
}

fn to_line_spacing(spacing: Spacing) -> LineSpacing {
    LineSpacing::new().before(spacing.before).after(spacing.after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::sections::*;
    use crate::models::resume::{ResumeSubmission, WorkExperience};
    use crate::resume::validation::validate_submission;

    const SAMPLE: &str = include_str!("../../fixtures/sample_resume.json");

    fn sample_record() -> ResumeRecord {
        let submission: ResumeSubmission = serde_json::from_str(SAMPLE).unwrap();
        validate_submission(submission).unwrap()
    }

    fn section_headings(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter(|b| b.is_heading(HeadingLevel::H2))
            .map(Block::plain_text)
            .collect()
    }

    /// Blocks strictly between the named heading and the next section heading.
    fn section_body<'a>(blocks: &'a [Block], title: &str) -> &'a [Block] {
        let start = blocks
            .iter()
            .position(|b| b.is_heading(HeadingLevel::H2) && b.plain_text() == title)
            .expect("section heading present")
            + 1;
        let len = blocks[start..]
            .iter()
            .position(|b| b.is_heading(HeadingLevel::H2))
            .unwrap_or(blocks.len() - start);
        &blocks[start..start + len]
    }

    #[test]
    fn test_name_only_record_has_header_and_no_sections() {
        let blocks = build_blocks(&ResumeRecord::named("Ada Lovelace"));
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_heading(HeadingLevel::H1));
        assert!(section_headings(&blocks).is_empty());
    }

    #[test]
    fn test_sample_record_has_every_section_in_order() {
        let blocks = build_blocks(&sample_record());
        assert_eq!(blocks[0].plain_text(), "Bimal Chalise");
        assert_eq!(
            section_headings(&blocks),
            vec![
                SUMMARY_TITLE,
                WORK_EXPERIENCE_TITLE,
                EDUCATION_TITLE,
                SKILLS_TITLE,
                PROJECTS_TITLE,
                CERTIFICATIONS_TITLE,
                LANGUAGES_TITLE,
                INTERESTS_TITLE,
            ]
        );
    }

    #[test]
    fn test_sample_record_content_is_verbatim() {
        let blocks = build_blocks(&sample_record());
        let texts: Vec<String> = blocks.iter().map(Block::plain_text).collect();

        assert!(texts.contains(&"Full Stack Developer at TechLabs • Jan 2024 - Present".to_string()));
        assert!(texts.contains(&"BSc Computer Science • Pokhara University • 2023".to_string()));
        assert!(texts.contains(
            &"Next.js • React • Node.js • Solidity • Web3.js • Tailwind CSS".to_string()
        ));
        assert!(texts.contains(&"NFT Marketplace • Next.js, Solidity, Web3.js".to_string()));
        assert!(texts.contains(&"Link: github.com/BiMalxMe/nft-marketplace".to_string()));
        assert!(texts.contains(&"Blockchain Developer Nanodegree".to_string()));
        assert!(texts.contains(&"English • Nepali".to_string()));
        assert!(texts.contains(&"Open Source • Blockchain • Gaming".to_string()));
    }

    #[test]
    fn test_work_section_has_one_headline_per_job_in_order() {
        let mut record = ResumeRecord::named("Ada");
        record.work_experience = (1..=4)
            .map(|i| WorkExperience {
                title: format!("Role {i}"),
                company: format!("Company {i}"),
                duration: format!("{i} years"),
                responsibilities: vec![format!("Task {i}a"), format!("Task {i}b")],
            })
            .collect();

        let blocks = build_blocks(&record);
        let headlines: Vec<String> = section_body(&blocks, WORK_EXPERIENCE_TITLE)
            .iter()
            .filter(|b| matches!(b, Block::Paragraph { runs, .. } if !runs.is_empty()))
            .map(Block::plain_text)
            .collect();

        assert_eq!(
            headlines,
            vec![
                "Role 1 at Company 1 • 1 years",
                "Role 2 at Company 2 • 2 years",
                "Role 3 at Company 3 • 3 years",
                "Role 4 at Company 4 • 4 years",
            ]
        );
    }

    #[test]
    fn test_build_blocks_is_deterministic() {
        let record = sample_record();
        assert_eq!(build_blocks(&record), build_blocks(&record));
    }

    #[test]
    fn test_encode_produces_zip_package() {
        let bytes = generate_resume(&sample_record()).unwrap();
        assert!(bytes.len() > 1000);
        assert_eq!(&bytes[..2], b"PK");
    }

    fn read_back(bytes: &[u8]) -> serde_json::Value {
        let docx = docx_rs::read_docx(bytes).unwrap();
        serde_json::from_str(&docx.json()).unwrap()
    }

    fn collect<'a>(
        v: &'a serde_json::Value,
        pred: &dyn Fn(&serde_json::Value) -> bool,
        out: &mut Vec<&'a serde_json::Value>,
    ) {
        if pred(v) {
            out.push(v);
        }
        match v {
            serde_json::Value::Array(items) => items.iter().for_each(|i| collect(i, pred, out)),
            serde_json::Value::Object(map) => map.values().for_each(|i| collect(i, pred, out)),
            _ => {}
        }
    }

    fn find<'a>(
        v: &'a serde_json::Value,
        pred: &dyn Fn(&serde_json::Value) -> bool,
    ) -> Vec<&'a serde_json::Value> {
        let mut out = Vec::new();
        collect(v, pred, &mut out);
        out
    }

    fn values_under<'a>(v: &'a serde_json::Value, key: &str) -> Vec<&'a serde_json::Value> {
        find(v, &|x| x.get(key).is_some())
            .into_iter()
            .filter_map(|x| x.get(key))
            .collect()
    }

    fn text_of(v: &serde_json::Value) -> String {
        values_under(v, "text")
            .into_iter()
            .filter_map(|t| t.as_str())
            .collect()
    }

    fn nodes_of_type<'a>(v: &'a serde_json::Value, kind: &str) -> Vec<&'a serde_json::Value> {
        find(v, &|x| x.get("type").and_then(|t| t.as_str()) == Some(kind))
    }

    fn paragraph_with<'a>(doc: &'a serde_json::Value, prefix: &str) -> &'a serde_json::Value {
        nodes_of_type(doc, "paragraph")
            .into_iter()
            .find(|p| text_of(p).starts_with(prefix))
            .unwrap_or_else(|| panic!("no paragraph starting with {prefix:?}"))
    }

    #[test]
    fn test_encoded_document_has_one_inch_margins() {
        let doc = read_back(&generate_resume(&sample_record()).unwrap());
        let margins = find(&doc, &|x| {
            ["top", "right", "bottom", "left"]
                .iter()
                .all(|side| x.get(*side).and_then(|n| n.as_i64()) == Some(1440))
        });
        assert!(!margins.is_empty(), "no 1440 twip page margin found");
    }

    #[test]
    fn test_encoded_headings_use_heading_styles() {
        let doc = read_back(&generate_resume(&sample_record()).unwrap());
        let is_style = |style: &'static str| move |x: &serde_json::Value| x.as_str() == Some(style);

        let name = paragraph_with(&doc, "Bimal Chalise");
        assert!(!find(name, &is_style("Heading1")).is_empty());

        let work = paragraph_with(&doc, WORK_EXPERIENCE_TITLE);
        assert!(!find(work, &is_style("Heading2")).is_empty());
    }

    #[test]
    fn test_encoded_headline_runs_are_bold_and_sized() {
        let doc = read_back(&generate_resume(&sample_record()).unwrap());
        let headline = paragraph_with(&doc, "Full Stack Developer at TechLabs");

        let title_run = nodes_of_type(headline, "run")
            .into_iter()
            .find(|r| text_of(r) == "Full Stack Developer")
            .expect("title run present");
        assert!(values_under(title_run, "sz").iter().any(|v| v.as_i64() == Some(22)));
        assert!(values_under(title_run, "bold").iter().any(|v| v.as_bool() == Some(true)));

        let duration_run = nodes_of_type(headline, "run")
            .into_iter()
            .find(|r| text_of(r) == "Jan 2024 - Present")
            .expect("duration run present");
        assert!(!values_under(duration_run, "bold").iter().any(|v| v.as_bool() == Some(true)));
    }

    #[test]
    fn test_encoded_bullets_are_prefixed_and_indented() {
        let doc = read_back(&generate_resume(&sample_record()).unwrap());
        let bullet = paragraph_with(&doc, "\u{2022} Developed web3 dApps");

        assert_eq!(
            text_of(bullet),
            "\u{2022} Developed web3 dApps using Next.js and Solidity"
        );
        let indents = values_under(bullet, "indent");
        assert!(
            indents
                .iter()
                .any(|i| !find(i, &|x| x.as_i64() == Some(720)).is_empty()),
            "bullet is not indented by 720 twips"
        );
    }

    #[test]
    fn test_encode_empty_block_list() {
        let bytes = encode_docx(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
