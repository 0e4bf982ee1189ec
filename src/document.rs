use std::path::Path;

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// Immutable parsed HTML tree.
///
/// Queries return matches in document order; nothing here mutates the tree,
/// so a `Document` can be handed to any number of extractors.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Reads a saved page fully into memory and parses it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ScrapeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// First element matching `selector` anywhere in the document.
    pub fn required<'a>(
        &'a self,
        selector: &Selector,
        context: &'static str,
        what: &str,
    ) -> Result<ElementRef<'a>> {
        self.html
            .select(selector)
            .next()
            .ok_or_else(|| ScrapeError::parse(context, what))
    }
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| ScrapeError::Selector {
        css: css.to_owned(),
        message: err.to_string(),
    })
}

/// First descendant of `scope` matching `selector`.
pub fn required_within<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    context: &'static str,
    what: &str,
) -> Result<ElementRef<'a>> {
    scope
        .select(selector)
        .next()
        .ok_or_else(|| ScrapeError::parse(context, what))
}

pub fn required_attr(
    element: ElementRef<'_>,
    name: &str,
    context: &'static str,
) -> Result<String> {
    element
        .value()
        .attr(name)
        .map(|value| value.trim().to_owned())
        .ok_or_else(|| {
            ScrapeError::parse(
                context,
                format!("`{name}` attribute on <{}>", element.value().name()),
            )
        })
}

/// All descendant text joined, surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_text_joins_nested_nodes() -> anyhow::Result<()> {
        let doc = Document::parse(
            "<p><a class=\"t\">\n  <span>Dune</span> <em>Messiah</em>\n</a></p>",
        );
        let link = doc.required(&selector("a.t")?, "test", "link")?;
        assert_eq!(trimmed_text(link), "Dune Messiah");
        Ok(())
    }

    #[test]
    fn required_reports_missing_element_as_parse_error() -> anyhow::Result<()> {
        let doc = Document::parse("<p>nothing</p>");
        let err = doc
            .required(&selector("h1#bookTitle")?, "book page", "title heading")
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Parse);
        assert_eq!(err.to_string(), "book page: missing title heading");
        Ok(())
    }

    #[test]
    fn required_attr_trims_value() -> anyhow::Result<()> {
        let doc = Document::parse("<img class=\"w\" alt=\"  Rebecca \n\">");
        let img = doc.required(&selector("img.w")?, "test", "image")?;
        assert_eq!(required_attr(img, "alt", "test")?, "Rebecca");
        assert!(required_attr(img, "title", "test").is_err());
        Ok(())
    }

    #[test]
    fn selector_rejects_invalid_css() {
        let err = selector("a[").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Input);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = Document::from_path(Path::new("does/not/exist.htm")).unwrap_err();
        assert!(matches!(err, ScrapeError::Io { .. }));
    }
}
