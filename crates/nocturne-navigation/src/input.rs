//! Input resolution for the address bar

use url::Url;

use crate::search::SearchEngine;

const ACCEPTED_SCHEMES: [&str; 3] = ["http://", "https://", "file://"];

/// Result of resolving address bar input. Both variants carry the final URL
/// to hand to the engine; the distinction lets shells render feedback
/// differently (e.g. a search glyph in the address bar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Navigate to a URL.
    Navigate(String),
    /// Perform a search with the resolved search URL.
    Search(String),
}

impl InputResolution {
    pub fn url(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputResolver {
    search_engine: SearchEngine,
}

impl InputResolver {
    pub fn new(search_engine: SearchEngine) -> Self {
        Self { search_engine }
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.search_engine
    }

    pub fn set_search_engine(&mut self, engine: SearchEngine) {
        self.search_engine = engine;
    }

    /// Resolve user input. Returns `None` for empty input, which the caller
    /// treats as a no-op.
    pub fn resolve(&self, input: &str) -> Option<InputResolution> {
        let input = input.trim();

        if input.is_empty() {
            return None;
        }

        // Accepted scheme prefix: used verbatim.
        if ACCEPTED_SCHEMES
            .iter()
            .any(|scheme| input.starts_with(scheme))
        {
            return Some(InputResolution::Navigate(input.to_string()));
        }

        // Bare domain: a dot and no spaces. Guarded with a real parse so
        // inputs like "foo..bar" fall through to search instead of producing
        // a load the engine immediately rejects.
        if input.contains('.') && !input.contains(' ') {
            let with_scheme = format!("https://{input}");
            if Url::parse(&with_scheme).is_ok() {
                return Some(InputResolution::Navigate(with_scheme));
            }
        }

        let search_url = self
            .search_engine
            .template()
            .replace("%s", &urlencoding::encode(input));

        tracing::debug!(engine = %self.search_engine, "resolved input to search");

        Some(InputResolution::Search(search_url))
    }
}

mod urlencoding {
    pub fn encode(input: &str) -> String {
        let mut result = String::with_capacity(input.len() * 3);
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    result.push(byte as char);
                }
                _ => {
                    result.push_str(&format!("%{byte:02X}"));
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_noop() {
        let resolver = InputResolver::default();
        assert_eq!(resolver.resolve(""), None);
        assert_eq!(resolver.resolve("   "), None);
    }

    #[test]
    fn test_scheme_prefix_used_verbatim() {
        let resolver = InputResolver::default();

        match resolver.resolve("https://foo.com") {
            Some(InputResolution::Navigate(url)) => assert_eq!(url, "https://foo.com"),
            other => panic!("Expected Navigate, got {other:?}"),
        }

        match resolver.resolve("file:///home/user/page.html") {
            Some(InputResolution::Navigate(url)) => {
                assert_eq!(url, "file:///home/user/page.html")
            }
            other => panic!("Expected Navigate, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_domain_gets_https() {
        let resolver = InputResolver::default();

        match resolver.resolve("example.com") {
            Some(InputResolution::Navigate(url)) => assert_eq!(url, "https://example.com"),
            other => panic!("Expected Navigate, got {other:?}"),
        }

        match resolver.resolve("example.com/path?x=1") {
            Some(InputResolution::Navigate(url)) => {
                assert_eq!(url, "https://example.com/path?x=1")
            }
            other => panic!("Expected Navigate, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_words_become_search() {
        let resolver = InputResolver::default();

        match resolver.resolve("hello world") {
            Some(InputResolution::Search(url)) => {
                assert_eq!(url, "https://search.brave.com/search?q=hello%20world");
            }
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_dotted_phrase_with_space_is_search() {
        let resolver = InputResolver::default();

        match resolver.resolve("rust 1.80 release notes") {
            Some(InputResolution::Search(url)) => {
                assert!(url.starts_with("https://search.brave.com/search?q="));
                assert!(url.contains("1.80"));
            }
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_configured_engine_is_used() {
        let resolver = InputResolver::new(SearchEngine::DuckDuckGo);

        match resolver.resolve("rust programming") {
            Some(InputResolution::Search(url)) => {
                assert_eq!(url, "https://duckduckgo.com/?q=rust%20programming");
            }
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let resolver = InputResolver::default();

        match resolver.resolve("a&b=c") {
            Some(InputResolution::Search(url)) => {
                assert_eq!(url, "https://search.brave.com/search?q=a%26b%3Dc");
            }
            other => panic!("Expected Search, got {other:?}"),
        }
    }
}
