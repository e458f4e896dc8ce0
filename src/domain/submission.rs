use std::fmt::{self, Display};

use crate::domain::AppError;
use crate::domain::escape::escape;
use crate::domain::outcome::{Outcome, ScheduleHeader};

/// Target namespace of the CWA bulk-load schema.
const SCHEMA_NAMESPACE: &str = "http://www.legalservices.gov.uk/sms/ActivityManagement/XMLSchema/";

/// Schema document referenced from the submission root element.
const SCHEMA_LOCATION: &str =
    "http://www.legalservices.gov.uk/sms/ActivityManagement/XMLSchema/ LSCSMSBulkLoadSchemaV2.xsd";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Position of a submission document in its append lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Declaration and root element seeded; the header has not been appended.
    Open,
    /// Office and schedule opening tags written; outcomes may be appended.
    HeaderSet,
    /// Footer written; the document only awaits serialization.
    Closed,
}

impl Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentState::Open => "open without a header",
            DocumentState::HeaderSet => "accepting outcomes",
            DocumentState::Closed => "closed",
        };
        write!(f, "{}", label)
    }
}

/// Append-only builder for one CWA bulk-load submission document.
///
/// Lines accumulate in output order: the XML declaration and root element are
/// seeded at construction, the header opens the office/schedule envelope,
/// each outcome adds one block plus a blank separator line, and the footer
/// closes the envelope. Calls outside the `Open → HeaderSet → Closed` order
/// fail with [`AppError::DocumentOrder`] instead of emitting invalid nesting.
#[derive(Debug)]
pub struct SubmissionDocument {
    lines: Vec<String>,
    state: DocumentState,
    outcomes: usize,
}

impl SubmissionDocument {
    /// Start a new document seeded with the XML declaration and the opening
    /// submission element carrying the fixed schema attributes.
    pub fn new() -> Self {
        let lines = vec![
            r#"<?xml version="1.0"?>"#.to_string(),
            format!(
                r#"<submission xsi:schemaLocation="{}" xmlns="{}" xmlns:xsi="{}">"#,
                SCHEMA_LOCATION, SCHEMA_NAMESPACE, XSI_NAMESPACE
            ),
        ];
        Self { lines, state: DocumentState::Open, outcomes: 0 }
    }

    fn expect_state(
        &self,
        wanted: DocumentState,
        operation: &'static str,
    ) -> Result<(), AppError> {
        if self.state == wanted {
            Ok(())
        } else {
            Err(AppError::DocumentOrder { operation, state: self.state })
        }
    }

    /// Append the office and schedule opening tags.
    ///
    /// Valid exactly once, before any outcome; the matching closing tags are
    /// deferred to [`SubmissionDocument::append_footer`].
    pub fn append_header(&mut self, header: &ScheduleHeader) -> Result<(), AppError> {
        self.expect_state(DocumentState::Open, "append a header")?;
        self.lines.push(format!(r#"<office account="{}">"#, escape(&header.account)));
        self.lines.push(format!(
            r#"<schedule submissionPeriod="{}" areaOfLaw="{}" scheduleNum="{}">"#,
            escape(&header.submission_period),
            escape(&header.area_of_law),
            escape(&header.schedule_number),
        ));
        self.state = DocumentState::HeaderSet;
        Ok(())
    }

    /// Append one outcome block followed by its blank separator line.
    pub fn append_outcome(&mut self, outcome: &Outcome) -> Result<(), AppError> {
        self.expect_state(DocumentState::HeaderSet, "append an outcome")?;
        self.lines.push(format!(r#"<outcome matterType="{}">"#, escape(outcome.matter_type())));
        for (name, value) in outcome.items() {
            self.lines.push(format!(
                r#"<outcomeItem name="{}">{}</outcomeItem>"#,
                escape(name),
                escape(value),
            ));
        }
        self.lines.push("</outcome>".to_string());
        self.lines.push(String::new());
        self.outcomes += 1;
        Ok(())
    }

    /// Append the closing schedule, office, and submission tags, in that
    /// fixed nesting order, and close the document.
    pub fn append_footer(&mut self) -> Result<(), AppError> {
        self.expect_state(DocumentState::HeaderSet, "append the footer")?;
        self.lines.push("</schedule>".to_string());
        self.lines.push("</office>".to_string());
        self.lines.push("</submission>".to_string());
        self.state = DocumentState::Closed;
        Ok(())
    }

    /// Number of outcome blocks appended so far.
    pub fn outcome_count(&self) -> usize {
        self.outcomes
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DocumentState {
        self.state
    }

    /// Consume the closed document, yielding its lines in output order.
    pub fn into_lines(self) -> Result<Vec<String>, AppError> {
        self.expect_state(DocumentState::Closed, "serialize the document")?;
        Ok(self.lines)
    }
}

impl Default for SubmissionDocument {
    fn default() -> Self {
        Self::new()
    }
}
