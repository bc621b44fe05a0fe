// src/output/format.rs
// =============================================================================
// Rendering the discovered URLs.
//
// - text: one URL per line, each followed by '\n'
// - json: a compact JSON array of strings, in discovery order
//
// The format is parsed before the crawl starts, so a typo like `-f xml`
// fails without sending a single request.
// =============================================================================

use crate::error::Error;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    // Case-insensitive: "JSON" and "json" are the same format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnsupportedOutputFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn render(self, urls: &[String]) -> Result<String, Error> {
        match self {
            OutputFormat::Text => Ok(urls.iter().map(|url| format!("{}\n", url)).collect()),
            OutputFormat::Json => Ok(serde_json::to_string(urls)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<String> {
        vec![
            "http://x.test/a/sub/".to_string(),
            "http://x.test/a/file.txt".to_string(),
        ]
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedOutputFormat(ref f) if f == "xml"));

        let err = "".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedOutputFormat(_)));
    }

    #[test]
    fn test_render_text() {
        let text = OutputFormat::Text.render(&sample()).unwrap();
        assert_eq!(text, "http://x.test/a/sub/\nhttp://x.test/a/file.txt\n");
    }

    #[test]
    fn test_render_json_keeps_order() {
        let json = OutputFormat::Json.render(&sample()).unwrap();
        assert_eq!(json, r#"["http://x.test/a/sub/","http://x.test/a/file.txt"]"#);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(OutputFormat::Text.render(&[]).unwrap(), "");
        assert_eq!(OutputFormat::Json.render(&[]).unwrap(), "[]");
    }
}
