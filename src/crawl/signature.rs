// src/crawl/signature.rs
// =============================================================================
// Response fingerprinting.
//
// The first listing page we fetch tells us what a listing page looks like:
// its document-type declaration (e.g. `<!DOCTYPE HTML PUBLIC "-//W3C//DTD
// HTML 3.2 Final//EN">`) becomes the signature. Every later page must start
// with exactly those bytes, otherwise it is some other kind of page (an
// error page, a login form, content reached through a symlink) and its links
// are not mined.
//
// Rust concepts:
// - Option<String>: "not established yet" vs "established"
// - Byte slices: comparisons are done on bytes, not chars
// =============================================================================

const DOCTYPE_OPENER: &[u8] = b"<!doctype";

// Result of checking one response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// This body set the signature (first page); it is valid by definition
    Established,
    /// Body starts with the established signature
    Valid,
    /// Body does not start with the signature, or is shorter than it
    Mismatch,
    /// No signature yet and this body has no document-type declaration
    Missing,
}

#[derive(Debug, Default)]
pub struct SignatureValidator {
    signature: Option<String>,
}

impl SignatureValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    // Once a signature is set it is never replaced; later bodies are only
    // compared against it.
    pub fn validate(&mut self, body: &str) -> Verdict {
        match &self.signature {
            Some(signature) => {
                // starts_with also covers a body shorter than the signature
                if body.as_bytes().starts_with(signature.as_bytes()) {
                    Verdict::Valid
                } else {
                    Verdict::Mismatch
                }
            }
            None => match find_doctype(body) {
                Some(doctype) => {
                    tracing::info!(signature = doctype, "file signature established");
                    self.signature = Some(doctype.to_string());
                    Verdict::Established
                }
                None => Verdict::Missing,
            },
        }
    }
}

// Finds the first `<!doctype` (any case) and returns it through the next
// '>' inclusive. A declaration that is never closed counts as absent.
fn find_doctype(body: &str) -> Option<&str> {
    let bytes = body.as_bytes();
    let begin = bytes
        .windows(DOCTYPE_OPENER.len())
        .position(|window| window.eq_ignore_ascii_case(DOCTYPE_OPENER))?;
    let end = bytes[begin..].iter().position(|&b| b == b'>')?;

    // Both bounds sit on ASCII bytes, so they are char boundaries.
    Some(&body[begin..=begin + end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const APACHE_DOCTYPE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">"#;

    #[test]
    fn test_first_page_sets_signature() {
        let mut validator = SignatureValidator::new();
        let body = format!("{}\n<html><body>Index of /</body></html>", APACHE_DOCTYPE);

        assert_eq!(validator.validate(&body), Verdict::Established);
        assert_eq!(validator.signature(), Some(APACHE_DOCTYPE));
    }

    #[test]
    fn test_opener_is_case_insensitive() {
        let mut validator = SignatureValidator::new();
        assert_eq!(validator.validate("<!doctype html><html></html>"), Verdict::Established);
        assert_eq!(validator.signature(), Some("<!doctype html>"));
    }

    #[test]
    fn test_missing_doctype() {
        let mut validator = SignatureValidator::new();
        assert_eq!(validator.validate("<html><body>hi</body></html>"), Verdict::Missing);
        assert_eq!(validator.signature(), None);
    }

    #[test]
    fn test_unclosed_doctype_is_missing() {
        let mut validator = SignatureValidator::new();
        assert_eq!(validator.validate("<!DOCTYPE html"), Verdict::Missing);
    }

    #[test]
    fn test_later_pages_are_compared_by_prefix() {
        let mut validator = SignatureValidator::new();
        validator.validate("<!DOCTYPE html><html>root</html>");

        assert_eq!(validator.validate("<!DOCTYPE html><html>sub</html>"), Verdict::Valid);
        assert_eq!(validator.validate("<html>login</html>"), Verdict::Mismatch);
        // shorter than the signature
        assert_eq!(validator.validate("<!DOC"), Verdict::Mismatch);
    }

    #[test]
    fn test_signature_never_changes() {
        let mut validator = SignatureValidator::new();
        validator.validate("<!DOCTYPE html><html></html>");

        assert_eq!(
            validator.validate(&format!("{}<html></html>", APACHE_DOCTYPE)),
            Verdict::Mismatch
        );
        assert_eq!(validator.signature(), Some("<!DOCTYPE html>"));
    }

    #[test]
    fn test_prefix_comparison_is_case_sensitive() {
        let mut validator = SignatureValidator::new();
        validator.validate("<!DOCTYPE html>");
        assert_eq!(validator.validate("<!doctype html>"), Verdict::Mismatch);
    }
}
