//! # Document Types and Placeholder Rendering
//!
//! Each [`DocumentType`] carries a plain-text body with `{{field}}`
//! placeholders (company name, tool names, contact email, ...). Rendering
//! substitutes the fields the caller supplied and reports the rest, leaving
//! them in the output verbatim so a reviewer can spot them.
//!
//! Layout and PDF generation belong to the presentation layer.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// A generatable compliance document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    /// Stable identifier, e.g. "nyc-aedt-notice".
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the document is for.
    pub description: String,
    /// Jurisdiction codes that require this document. Empty means all.
    #[serde(default)]
    pub jurisdictions: Vec<String>,
    /// Body with `{{placeholder}}` fields.
    pub template: String,
}

impl DocumentType {
    /// Whether the document applies to `code`.
    pub fn applies_to(&self, code: &str) -> bool {
        self.jurisdictions.is_empty() || self.jurisdictions.iter().any(|j| j == code)
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut seen = HashSet::new();
        scan(&self.template, |token| {
            if let Token::Field { name, .. } = token {
                if seen.insert(name.to_string()) {
                    names.push(name.to_string());
                }
            }
        });
        names
    }
}

/// Output of [`DocumentCatalog::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// The document type that was rendered.
    pub document_id: String,
    /// Rendered body.
    pub body: String,
    /// Placeholders with no supplied value, in order of first appearance.
    pub missing: Vec<String>,
}

impl RenderedDocument {
    /// Whether every placeholder was filled.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The set of document types the generator offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DocumentType>", into = "Vec<DocumentType>")]
pub struct DocumentCatalog {
    documents: Vec<DocumentType>,
}

impl DocumentCatalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(documents: Vec<DocumentType>) -> Result<Self, PackError> {
        let mut seen = HashSet::new();
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(PackError::DuplicateDocument(doc.id.clone()));
            }
        }
        Ok(Self { documents })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        let doc = |id: &str, name: &str, description: &str, jurisdictions: &[&str], template: &str| {
            DocumentType {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                jurisdictions: jurisdictions.iter().map(|s| s.to_string()).collect(),
                template: template.to_string(),
            }
        };
        Self {
            documents: vec![
                doc(
                    "nyc-aedt-notice",
                    "NYC AEDT Candidate Notice",
                    "Notice to candidates that an automated employment decision tool will be used.",
                    &["NYC"],
                    "Notice of Automated Employment Decision Tool Use\n\n\
                     {{company_name}} uses {{tool_name}} to assist in evaluating candidates for \
                     {{job_title}}. The tool assesses the following qualifications: {{qualifications}}.\n\n\
                     You may request an alternative selection process or accommodation by contacting \
                     {{contact_email}}. Our most recent bias audit summary is available at {{audit_url}}.\n",
                ),
                doc(
                    "co-impact-assessment",
                    "Colorado Impact Assessment",
                    "Annual impact assessment for a high-risk AI system used in employment decisions.",
                    &["CO"],
                    "Impact Assessment: {{tool_name}}\n\n\
                     Deployer: {{company_name}}\n\
                     Purpose and intended use: {{purpose}}\n\
                     Categories of data processed: {{data_categories}}\n\
                     Known risks of algorithmic discrimination: {{known_risks}}\n\
                     Mitigation measures: {{mitigations}}\n\
                     Assessment date: {{assessment_date}}\n",
                ),
                doc(
                    "il-ai-notice",
                    "Illinois AI Use Notice",
                    "Notice to employees and applicants of AI use in employment decisions.",
                    &["IL"],
                    "{{company_name}} uses artificial intelligence, including {{tool_name}}, when \
                     making decisions about {{decision_types}}. Questions may be directed to \
                     {{contact_email}}.\n",
                ),
                doc(
                    "ca-admt-notice",
                    "California Pre-Use Notice",
                    "Pre-use notice for automated decision-making technology.",
                    &["CA"],
                    "Pre-Use Notice\n\n\
                     {{company_name}} uses {{tool_name}} for {{purpose}}. You may opt out or appeal \
                     a decision by contacting {{contact_email}}.\n",
                ),
                doc(
                    "ai-use-policy",
                    "AI Hiring Use Policy",
                    "Internal policy describing approved AI hiring tools and oversight.",
                    &[],
                    "AI Hiring Use Policy for {{company_name}}\n\n\
                     Approved tools: {{tool_names}}\n\
                     Policy owner: {{owner_name}}\n\
                     Effective date: {{effective_date}}\n",
                ),
            ],
        }
    }

    /// Look up a document type.
    pub fn get(&self, id: &str) -> Option<&DocumentType> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// All document types in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentType> {
        self.documents.iter()
    }

    /// Document types that apply to a jurisdiction.
    pub fn for_jurisdiction<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a DocumentType> {
        self.documents.iter().filter(move |d| d.applies_to(code))
    }

    /// Render a document with the given field values.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::UnknownDocument`] if `id` is not in the catalog.
    /// Unfilled placeholders are not an error; they are reported in
    /// [`RenderedDocument::missing`].
    pub fn render(
        &self,
        id: &str,
        vars: &BTreeMap<String, String>,
    ) -> Result<RenderedDocument, PackError> {
        let doc = self
            .get(id)
            .ok_or_else(|| PackError::UnknownDocument(id.to_string()))?;
        let (body, missing) = substitute(&doc.template, vars);
        Ok(RenderedDocument {
            document_id: doc.id.clone(),
            body,
            missing,
        })
    }
}

impl Default for DocumentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<DocumentType>> for DocumentCatalog {
    type Error = PackError;

    fn try_from(documents: Vec<DocumentType>) -> Result<Self, Self::Error> {
        Self::new(documents)
    }
}

impl From<DocumentCatalog> for Vec<DocumentType> {
    fn from(c: DocumentCatalog) -> Self {
        c.documents
    }
}

enum Token<'a> {
    Text(&'a str),
    /// `raw` is the placeholder as written, braces included.
    Field { name: &'a str, raw: &'a str },
}

/// Split a template into literal text and `{{field}}` tokens. An unclosed
/// `{{` is literal text.
fn scan<'a>(template: &'a str, mut emit: impl FnMut(Token<'a>)) {
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            break;
        };
        if open > 0 {
            emit(Token::Text(&rest[..open]));
        }
        emit(Token::Field {
            name: after[..close].trim(),
            raw: &rest[open..open + 2 + close + 2],
        });
        rest = &after[close + 2..];
    }
    if !rest.is_empty() {
        emit(Token::Text(rest));
    }
}

fn substitute(template: &str, vars: &BTreeMap<String, String>) -> (String, Vec<String>) {
    let mut body = String::with_capacity(template.len());
    let mut missing = Vec::new();
    let mut seen = HashSet::new();
    scan(template, |token| match token {
        Token::Text(t) => body.push_str(t),
        Token::Field { name, raw } => match vars.get(name) {
            Some(value) => body.push_str(value),
            None => {
                body.push_str(raw);
                if seen.insert(name.to_string()) {
                    missing.push(name.to_string());
                }
            }
        },
    });
    (body, missing)
}
