//! Fictional Power of Attorney documents for demos and tests. Names,
//! addresses and dates are fixed so every run writes identical files.
//! These are not legal documents.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

mod il;
mod pa;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jurisdiction {
    Pennsylvania,
    Illinois,
}

impl Jurisdiction {
    pub fn code(self) -> &'static str {
        match self {
            Jurisdiction::Pennsylvania => "PA",
            Jurisdiction::Illinois => "IL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: Vec<&'static str>,
}

impl Section {
    pub(crate) fn new(heading: &'static str, paragraphs: &[&'static str]) -> Self {
        Self { heading, paragraphs: paragraphs.to_vec() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDocument {
    pub file_name: &'static str,
    pub title: &'static str,
    pub jurisdiction: Jurisdiction,
    pub principal: &'static str,
    pub signed_on: &'static str,
    pub preamble: &'static str,
    pub sections: Vec<Section>,
}

/// The four samples: PA financial and health care, IL property and health care.
pub fn sample_documents() -> Vec<SampleDocument> {
    vec![
        pa::durable_power_of_attorney(),
        pa::healthcare_power_of_attorney(),
        il::statutory_property(),
        il::statutory_healthcare(),
    ]
}

pub fn render_markdown(doc: &SampleDocument) -> String {
    let mut out = format!("# {}\n\n{}\n\n", doc.title, doc.preamble);
    for section in &doc.sections {
        out.push_str(&format!("## {}\n\n", section.heading));
        for paragraph in &section.paragraphs {
            out.push_str(paragraph);
            out.push_str("\n\n");
        }
    }
    out.push_str(&format!(
        "Signed: {} (Principal), {}\n\nFictional sample for testing only. This is not a legal document.\n",
        doc.principal, doc.signed_on
    ));
    out
}

/// Write every sample into `dir` (created if needed), replacing existing files.
pub fn write_samples(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for doc in sample_documents() {
        let path = dir.join(doc.file_name);
        fs::write(&path, render_markdown(&doc))?;
        info!(jurisdiction = doc.jurisdiction.code(), "wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
