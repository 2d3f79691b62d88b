/// Builds the stored artifact name: `resume_<name>_<unix-millis>.docx`.
///
/// Whitespace runs in the person's name become `_`; anything outside ASCII
/// alphanumerics, `_`, `-` and `.` is dropped so the result is a single safe path
/// segment.
pub fn artifact_filename(person_name: &str, timestamp_millis: i64) -> String {
    let joined = person_name.split_whitespace().collect::<Vec<_>>().join("_");
    let mut slug: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();
    while slug.contains("..") {
        slug = slug.replace("..", ".");
    }
    if slug.is_empty() {
        slug.push_str("candidate");
    }

    format!("resume_{slug}_{timestamp_millis}.docx")
}
