//! Data models for extracted course records.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Value written in place of any field that could not be located.
pub const PLACEHOLDER: &str = "no info";

/// Output column names, in output order.
pub const COLUMNS: [&str; 10] = [
    "course_id",
    "course_title",
    "description",
    "terms_available",
    "course_lead",
    "course_lead_info",
    "pillar",
    "type",
    "prerequisites",
    "prerequisites_links",
];

/// Metadata extracted from a single course catalog page.
///
/// Every field is independently optional. `None` means the field could not be
/// located and is rendered as [`PLACEHOLDER`] on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRecord {
    /// Short course code, e.g. "02.121DH"
    pub course_id: Option<String>,
    /// Course title without the code
    pub course_title: Option<String>,
    /// First paragraph of the course description
    pub description: Option<String>,
    /// Term numbers the course is offered in (never empty when `Some`)
    pub terms_available: Option<Vec<i64>>,
    /// Display name of the course lead
    pub course_lead: Option<String>,
    /// Absolute URL of the course lead's profile
    pub course_lead_info: Option<String>,
    /// Pillar or cluster the course belongs to
    pub pillar: Option<String>,
    /// Course type label
    pub course_type: Option<String>,
    /// Prerequisite courses (never empty when `Some`)
    pub prerequisites: Option<Vec<Prerequisite>>,
}

/// A prerequisite course link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerequisite {
    /// Anchor text
    pub title: String,
    /// Absolute link target
    pub url: String,
}

impl Prerequisite {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), url: url.into() }
    }
}

impl CourseRecord {
    /// Prerequisite titles, or the placeholder list.
    pub fn prerequisite_titles(&self) -> Vec<&str> {
        match &self.prerequisites {
            Some(list) => list.iter().map(|p| p.title.as_str()).collect(),
            None => vec![PLACEHOLDER],
        }
    }

    /// Prerequisite links, or the placeholder list.
    ///
    /// Always the same length as [`CourseRecord::prerequisite_titles`].
    pub fn prerequisite_links(&self) -> Vec<&str> {
        match &self.prerequisites {
            Some(list) => list.iter().map(|p| p.url.as_str()).collect(),
            None => vec![PLACEHOLDER],
        }
    }

    /// Returns the value of every column as display text, in [`COLUMNS`] order.
    ///
    /// List-typed columns are rendered like `[1, 2]` and `['no info']`.
    pub fn cells(&self) -> [String; 10] {
        let terms = match &self.terms_available {
            Some(terms) => {
                let items: Vec<String> = terms.iter().map(i64::to_string).collect();
                format!("[{}]", items.join(", "))
            }
            None => quoted_list(&[PLACEHOLDER]),
        };

        [
            or_placeholder(&self.course_id).to_string(),
            or_placeholder(&self.course_title).to_string(),
            or_placeholder(&self.description).to_string(),
            terms,
            or_placeholder(&self.course_lead).to_string(),
            or_placeholder(&self.course_lead_info).to_string(),
            or_placeholder(&self.pillar).to_string(),
            or_placeholder(&self.course_type).to_string(),
            quoted_list(&self.prerequisite_titles()),
            quoted_list(&self.prerequisite_links()),
        ]
    }
}

/// Returns the field value or the placeholder.
pub fn or_placeholder(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

/// Renders a list of strings as `['a', 'b']`.
///
/// Items containing a single quote but no double quote are wrapped in double
/// quotes instead; otherwise quotes and backslashes are escaped.
pub fn quoted_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| {
            if item.contains('\'') && !item.contains('"') {
                format!("\"{}\"", item.replace('\\', "\\\\"))
            } else {
                format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

impl Serialize for CourseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CourseRecord", COLUMNS.len())?;
        s.serialize_field("course_id", or_placeholder(&self.course_id))?;
        s.serialize_field("course_title", or_placeholder(&self.course_title))?;
        s.serialize_field("description", or_placeholder(&self.description))?;
        match &self.terms_available {
            Some(terms) => s.serialize_field("terms_available", terms)?,
            None => s.serialize_field("terms_available", &[PLACEHOLDER])?,
        }
        s.serialize_field("course_lead", or_placeholder(&self.course_lead))?;
        s.serialize_field("course_lead_info", or_placeholder(&self.course_lead_info))?;
        s.serialize_field("pillar", or_placeholder(&self.pillar))?;
        s.serialize_field("type", or_placeholder(&self.course_type))?;
        s.serialize_field("prerequisites", &self.prerequisite_titles())?;
        s.serialize_field("prerequisites_links", &self.prerequisite_links())?;
        s.end()
    }
}
