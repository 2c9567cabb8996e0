//! SVG sanitation and extraction.
//!
//! Provider responses are free-form text: prose, truncated markup, or
//! nothing resembling SVG at all. This module extracts the `<svg>...</svg>`
//! span, forces responsive sizing on the root element, and strips script
//! blocks. It deliberately performs no XML well-formedness check -
//! malformed-but-unscripted markup passes through and may simply fail to
//! render downstream.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Sanitation failure: nothing extractable from the response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("response contained no extractable <svg> markup")]
    MalformedOutput,
}

/// `<script>...</script>` blocks, case-insensitive, arbitrary inner content.
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

/// `width="..."` on the root tag. The leading boundary keeps
/// `stroke-width` untouched.
static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(^|\s)width\s*=\s*("[^"]*"|'[^']*')"#).unwrap());

/// `height="..."` on the root tag.
static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(^|\s)height\s*=\s*("[^"]*"|'[^']*')"#).unwrap());

/// `viewBox=` presence check on the root tag.
static VIEWBOX_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)viewBox\s*=").unwrap());

const CLOSE_TAG: &str = "</svg>";

/// Extract and harden SVG markup from a raw provider response.
///
/// 1. Greedy span match from the first `<svg` to the last `</svg>`,
///    tolerant of surrounding commentary.
/// 2. Root `width`/`height` forced to `100%` so embedding is responsive
///    regardless of provider-specified pixel dimensions.
/// 3. Missing `viewBox` synthesized as `0 0 100 100` (the generation
///    protocol requests a 100x100 coordinate space; best-effort, not a
///    guarantee).
/// 4. Every script block removed.
pub fn sanitize(raw: &str) -> Result<String, SanitizeError> {
    let start = raw.find("<svg").ok_or(SanitizeError::MalformedOutput)?;
    let close = raw.rfind(CLOSE_TAG).ok_or(SanitizeError::MalformedOutput)?;
    if close < start {
        return Err(SanitizeError::MalformedOutput);
    }

    let span = &raw[start..close + CLOSE_TAG.len()];
    let hardened = harden_root(span);
    Ok(SCRIPT_BLOCK.replace_all(&hardened, "").into_owned())
}

/// Rewrite the root element's sizing attributes. Only the root tag
/// (up to the first `>`) is touched; nested elements keep their own
/// width/height.
fn harden_root(svg: &str) -> String {
    let Some(tag_end) = svg.find('>') else {
        return svg.to_string();
    };
    let (root, rest) = svg.split_at(tag_end + 1);

    let mut root = force_attr(root, &WIDTH_ATTR, "width=\"100%\"");
    root = force_attr(&root, &HEIGHT_ATTR, "height=\"100%\"");
    if !VIEWBOX_ATTR.is_match(&root) {
        root = insert_after_svg(&root, "viewBox=\"0 0 100 100\"");
    }

    format!("{root}{rest}")
}

/// Replace an existing attribute assignment, or insert one right after
/// the `<svg` token when absent.
fn force_attr(root: &str, attr: &Regex, replacement: &str) -> String {
    if attr.is_match(root) {
        attr.replace(root, format!("${{1}}{replacement}")).into_owned()
    } else {
        insert_after_svg(root, replacement)
    }
}

fn insert_after_svg(root: &str, attr: &str) -> String {
    // Root always starts with "<svg" here
    format!("<svg {attr}{}", &root["<svg".len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_prose() {
        assert_eq!(
            sanitize("Sure, here is your logo!"),
            Err(SanitizeError::MalformedOutput)
        );
    }

    #[test]
    fn test_rejects_missing_close_tag() {
        assert_eq!(
            sanitize("<svg viewBox=\"0 0 100 100\"><rect/>"),
            Err(SanitizeError::MalformedOutput)
        );
    }

    #[test]
    fn test_rejects_close_before_open() {
        assert_eq!(sanitize("</svg> then <svg"), Err(SanitizeError::MalformedOutput));
    }

    #[test]
    fn test_extracts_span_and_forces_dimensions() {
        let out = sanitize("blah <svg width=\"1\" height=\"1\">x</svg> trailing").unwrap();
        assert!(out.starts_with("<svg"));
        assert!(out.ends_with("</svg>"));
        assert!(out.contains("width=\"100%\""));
        assert!(out.contains("height=\"100%\""));
        assert!(!out.contains("blah"));
        assert!(!out.contains("trailing"));
    }

    #[test]
    fn test_inserts_missing_dimensions() {
        let out = sanitize("<svg viewBox=\"0 0 50 50\"><rect/></svg>").unwrap();
        assert!(out.contains("width=\"100%\""));
        assert!(out.contains("height=\"100%\""));
        // Existing viewBox is preserved, not overwritten
        assert!(out.contains("viewBox=\"0 0 50 50\""));
        assert!(!out.contains("0 0 100 100"));
    }

    #[test]
    fn test_synthesizes_viewbox() {
        let out = sanitize("<svg><circle r=\"40\"/></svg>").unwrap();
        assert!(out.contains("viewBox=\"0 0 100 100\""));
    }

    #[test]
    fn test_strips_script_blocks() {
        let raw = "<svg><script>alert(1)</script><rect/><SCRIPT type=\"a\">\nmore\n</SCRIPT></svg>";
        let out = sanitize(raw).unwrap();
        assert!(!out.contains("<script"));
        assert!(!out.contains("<SCRIPT"));
        assert!(out.contains("<rect/>"));
    }

    #[test]
    fn test_nested_width_untouched() {
        let out = sanitize("<svg width=\"5\"><rect width=\"10\"/></svg>").unwrap();
        assert!(out.contains("<rect width=\"10\"/>"));
        assert!(out.contains("width=\"100%\""));
    }

    #[test]
    fn test_stroke_width_untouched() {
        let out = sanitize("<svg stroke-width=\"2\"><rect/></svg>").unwrap();
        assert!(out.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_greedy_span_keeps_inner_close_tags() {
        // Two svg blocks: span runs from first open to LAST close
        let out = sanitize("a<svg>1</svg>b<svg>2</svg>c").unwrap();
        assert!(out.contains("1</svg>"));
        assert!(out.ends_with("2</svg>"));
    }
}
