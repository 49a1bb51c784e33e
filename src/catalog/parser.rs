//! HTML parser for course catalog pages.
//!
//! Each field is extracted independently and returns `None` when any node on
//! its path is missing, so a page with an unexpected layout still yields a
//! record with whatever fields could be found.

use crate::catalog::models::{CourseRecord, Prerequisite};
use crate::catalog::selectors;
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

/// Origin prepended to relative catalog links.
pub const DEFAULT_ORIGIN: &str = "https://www.sutd.edu.sg";

/// Parser for course catalog pages.
#[derive(Debug, Clone)]
pub struct Parser {
    origin: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

impl Parser {
    /// Creates a parser that absolutizes relative links against `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self { origin: origin.into().trim_end_matches('/').to_string() }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Parses a course page into a record. Never fails.
    pub fn parse(&self, html: &str) -> CourseRecord {
        let document = Html::parse_document(html);

        let (course_id, course_title) = match self.parse_title(&document) {
            Some((id, title)) => (Some(id), title),
            None => {
                trace!("course_id: no title metadata");
                (None, None)
            }
        };

        let description = self.parse_description(&document);
        if description.is_none() {
            trace!("description: not found");
        }

        let terms_available = self.parse_terms(&document);
        if terms_available.is_none() {
            trace!("terms_available: not found");
        }

        let (course_lead, course_lead_info) = match self.parse_course_lead(&document) {
            Some((lead, info)) => (lead, Some(info)),
            None => {
                trace!("course_lead: no profile link");
                (None, None)
            }
        };

        let pillar = first_link_text(&document, &selectors::PILLAR_LINK);
        let course_type = first_link_text(&document, &selectors::COURSE_TYPE_LINK);

        let prerequisites = self.parse_prerequisites(&document);
        if prerequisites.is_none() {
            trace!("prerequisites: not found");
        }

        let record = CourseRecord {
            course_id,
            course_title,
            description,
            terms_available,
            course_lead,
            course_lead_info,
            pillar,
            course_type,
            prerequisites,
        };

        debug!(
            "Parsed course {} ({} terms, {} prerequisites)",
            record.course_id.as_deref().unwrap_or("?"),
            record.terms_available.as_ref().map_or(0, Vec::len),
            record.prerequisites.as_ref().map_or(0, Vec::len)
        );

        record
    }

    /// Splits `og:title` like "02.121DH The Question of Being - SUTD" into
    /// ("02.121DH", Some("The Question of Being")).
    fn parse_title(&self, document: &Html) -> Option<(String, Option<String>)> {
        let content = document.select(&selectors::TITLE_META).next()?.value().attr("content")?;

        let prefix = match content.split_once(" - ") {
            Some((prefix, _)) => prefix,
            None => content,
        };
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return None;
        }

        match prefix.split_once(char::is_whitespace) {
            Some((id, title)) => Some((id.to_string(), non_empty(title.trim()))),
            None => Some((prefix.to_string(), None)),
        }
    }

    fn parse_description(&self, document: &Html) -> Option<String> {
        let block = document.select(&selectors::DESCRIPTION_BLOCK).next()?;
        let paragraph = block.select(&selectors::PARAGRAPH).next()?;
        element_text(paragraph)
    }

    /// Collects term numbers from "Term N" links, dropping labels that are not
    /// integers.
    fn parse_terms(&self, document: &Html) -> Option<Vec<i64>> {
        let container = document.select(&selectors::TERM_CONTAINER).next()?;

        let terms: Vec<i64> = container
            .select(&selectors::LINK)
            .filter_map(element_text)
            .filter_map(|text| parse_term_label(&text))
            .collect();

        if terms.is_empty() {
            None
        } else {
            Some(terms)
        }
    }

    /// Returns (lead name, absolute profile URL) for the first profile link.
    fn parse_course_lead(&self, document: &Html) -> Option<(Option<String>, String)> {
        let link = document.select(&selectors::PROFILE_LINK).next()?;
        let href = link.value().attr("href")?;
        Some((element_text(link), format!("{}{}", self.origin, href)))
    }

    /// Collects the links of the list directly following a "Prerequisites"
    /// heading.
    fn parse_prerequisites(&self, document: &Html) -> Option<Vec<Prerequisite>> {
        let heading = document.select(&selectors::HEADING).find(|h| is_prerequisites_heading(*h))?;

        let list = heading.next_siblings().find_map(ElementRef::wrap)?;
        if !matches!(list.value().name(), "ul" | "ol") {
            return None;
        }

        let prerequisites: Vec<Prerequisite> = list
            .select(&selectors::LINK_WITH_HREF)
            .filter_map(|a| {
                let href = a.value().attr("href")?;
                let title = element_text(a).unwrap_or_default();
                Some(Prerequisite::new(title, self.absolutize(href)))
            })
            .collect();

        if prerequisites.is_empty() {
            None
        } else {
            Some(prerequisites)
        }
    }

    /// Makes a link target absolute against the configured origin.
    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", self.origin, href)
        }
    }
}

/// Text of the first element matching `selector`.
fn first_link_text(document: &Html, selector: &scraper::Selector) -> Option<String> {
    document.select(selector).next().and_then(element_text)
}

/// Element text with whitespace runs collapsed; `None` when empty.
fn element_text(element: ElementRef) -> Option<String> {
    let text = element.text().collect::<String>();
    non_empty(&text.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Parses "Term 5" into 5.
fn parse_term_label(text: &str) -> Option<i64> {
    text.strip_prefix(selectors::TERM_PREFIX)?.trim().parse().ok()
}

fn is_prerequisites_heading(heading: ElementRef) -> bool {
    element_text(heading).is_some_and(|text| {
        text.trim_end_matches(':').trim_end().eq_ignore_ascii_case(selectors::PREREQUISITES_HEADING)
    })
}
