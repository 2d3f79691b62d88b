// Document assembly: resume record → ordered blocks → DOCX bytes.
// Section builders are pure; only `encode_docx` touches docx-rs.
// Encoding is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod assembly;
pub mod blocks;
pub mod sections;

use thiserror::Error;

pub use assembly::generate_resume;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("DOCX encoding failed: {0}")]
    Encode(String),

    #[error("document task failed: {0}")]
    Task(String),
}
