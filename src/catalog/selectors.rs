//! CSS selectors for course catalog page parsing.
//!
//! Update this file when the catalog changes its HTML structure.

use scraper::Selector;
use std::sync::LazyLock;

/// Page title metadata, e.g. `02.121DH The Question of Being - SUTD`.
pub static TITLE_META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property='og:title']").unwrap());

/// Rich-text block holding the course description.
pub static DESCRIPTION_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#rich-text-generator").unwrap());

pub static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Container of the "Term N" links.
pub static TERM_CONTAINER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div[class~='flex-wrap'][class~='gap-[0.5rem]'][class~='pl-[1.6rem]']")
        .unwrap()
});

pub static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

pub static LINK_WITH_HREF: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Course lead profile link.
pub static PROFILE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href^='/profile/']").unwrap());

/// Pillar / cluster filter link.
pub static PILLAR_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href*='pillar-cluster=']").unwrap());

/// Course type filter link.
pub static COURSE_TYPE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href*='course-type=']").unwrap());

pub static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());

/// Prefix of term link labels.
pub const TERM_PREFIX: &str = "Term ";

/// Heading text that introduces the prerequisite list.
pub const PREREQUISITES_HEADING: &str = "prerequisites";

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        // Force evaluation of all lazy selectors to ensure they compile
        let _ = &*TITLE_META;
        let _ = &*DESCRIPTION_BLOCK;
        let _ = &*PARAGRAPH;
        let _ = &*TERM_CONTAINER;
        let _ = &*LINK;
        let _ = &*LINK_WITH_HREF;
        let _ = &*PROFILE_LINK;
        let _ = &*PILLAR_LINK;
        let _ = &*COURSE_TYPE_LINK;
        let _ = &*HEADING;
    }

    #[test]
    fn test_term_container_matches_class_words() {
        let html = Html::parse_document(
            r#"<div class="flex flex-row flex-wrap gap-[0.5rem] pl-[1.6rem]"><a>Term 1</a></div>
               <div class="flex flex-row flex-wrap"><a>Term 2</a></div>"#,
        );

        let containers: Vec<_> = html.select(&TERM_CONTAINER).collect();
        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].text().collect::<String>(), "Term 1");
    }

    #[test]
    fn test_profile_link_prefix_only() {
        let html = Html::parse_document(
            r#"<a href="/people/x">X</a><a href="https://x.com/profile/y">Y</a><a href="/profile/z">Z</a>"#,
        );

        let links: Vec<_> = html.select(&PROFILE_LINK).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value().attr("href"), Some("/profile/z"));
    }
}
