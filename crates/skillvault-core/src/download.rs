//! Download filename derivation and the download trigger seam
//!
//! Delivering the file is the environment's job; this module only names the
//! file and describes the request.

use crate::errors::Result;
use crate::model::Certificate;

/// Suffix appended to every suggested filename
pub const FILENAME_SUFFIX: &str = "_Certificate.pdf";

/// Whitespace as matched by the `\s` class of browser regular expressions
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
fn is_title_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Replace each maximal run of whitespace with a single `_`
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_run = false;
    for ch in title.chars() {
        if is_title_whitespace(ch) {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// `sanitize_title(title) + "_Certificate.pdf"`
pub fn suggested_filename(title: &str) -> String {
    format!("{}{}", sanitize_title(title), FILENAME_SUFFIX)
}

/// A request to deliver one certificate file under a suggested name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub certificate_id: String,
    pub url: String,
    pub filename: String,
}

impl DownloadRequest {
    pub fn for_certificate(cert: &Certificate) -> Self {
        Self {
            certificate_id: cert.id.clone(),
            url: cert.download_url.clone(),
            filename: suggested_filename(&cert.title),
        }
    }
}

/// The environment's capability to download a URL without navigating away
pub trait DownloadTrigger {
    /// Deliver the file behind `request.url` as `request.filename`
    ///
    /// # Errors
    ///
    /// Returns `SkillVaultError::Download` when the file cannot be delivered.
    fn trigger(&self, request: &DownloadRequest) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_filename() {
        assert_eq!(
            suggested_filename("MERN Stack with Gen AI"),
            "MERN_Stack_with_Gen_AI_Certificate.pdf"
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(sanitize_title("Go \t\n Fundamentals"), "Go_Fundamentals");
        assert_eq!(sanitize_title("  padded  "), "_padded_");
    }

    #[test]
    fn test_whitespace_class_matches_browser_regex() {
        assert_eq!(sanitize_title("A\u{FEFF}B"), "A_B");
        assert_eq!(sanitize_title("A\u{00A0}\u{3000}B"), "A_B");
        assert_eq!(sanitize_title("A\u{0085}B"), "A\u{0085}B");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(suggested_filename(""), "_Certificate.pdf");
    }

    #[test]
    fn test_request_for_certificate() {
        let mut cert = Certificate::new("7", "Data Science 101", "edX", "Data", vec![]);
        cert.download_url = "/certificates/ds101.pdf".to_string();

        let request = DownloadRequest::for_certificate(&cert);
        assert_eq!(request.certificate_id, "7");
        assert_eq!(request.url, "/certificates/ds101.pdf");
        assert_eq!(request.filename, "Data_Science_101_Certificate.pdf");
    }
}
