//! Search engine catalog
//!
//! Each engine is a URL template with a `%s` query placeholder. Brave is the
//! default.

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Brave,
    DuckDuckGo,
    Bing,
    Yahoo,
    Startpage,
    Ecosia,
    Google,
}

impl SearchEngine {
    /// URL template with a `%s` query placeholder.
    pub fn template(&self) -> &'static str {
        match self {
            SearchEngine::Brave => "https://search.brave.com/search?q=%s",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=%s",
            SearchEngine::Bing => "https://www.bing.com/search?q=%s",
            SearchEngine::Yahoo => "https://search.yahoo.com/search?p=%s",
            SearchEngine::Startpage => "https://www.startpage.com/sp/search?query=%s",
            SearchEngine::Ecosia => "https://www.ecosia.org/search?q=%s",
            SearchEngine::Google => "https://www.google.com/search?q=%s",
        }
    }

    /// Human-readable name for settings UIs.
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchEngine::Brave => "Brave Search",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
            SearchEngine::Bing => "Bing",
            SearchEngine::Yahoo => "Yahoo",
            SearchEngine::Startpage => "Startpage",
            SearchEngine::Ecosia => "Ecosia",
            SearchEngine::Google => "Google",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Brave => "brave",
            SearchEngine::DuckDuckGo => "duckduckgo",
            SearchEngine::Bing => "bing",
            SearchEngine::Yahoo => "yahoo",
            SearchEngine::Startpage => "startpage",
            SearchEngine::Ecosia => "ecosia",
            SearchEngine::Google => "google",
        }
    }

    /// The selectable set, in presentation order.
    pub fn all() -> &'static [SearchEngine] {
        &[
            SearchEngine::Brave,
            SearchEngine::DuckDuckGo,
            SearchEngine::Bing,
            SearchEngine::Yahoo,
            SearchEngine::Startpage,
            SearchEngine::Ecosia,
            SearchEngine::Google,
        ]
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchEngine {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brave" => Ok(SearchEngine::Brave),
            "duckduckgo" => Ok(SearchEngine::DuckDuckGo),
            "bing" => Ok(SearchEngine::Bing),
            "yahoo" => Ok(SearchEngine::Yahoo),
            "startpage" => Ok(SearchEngine::Startpage),
            "ecosia" => Ok(SearchEngine::Ecosia),
            "google" => Ok(SearchEngine::Google),
            other => Err(NavigationError::UnknownSearchEngine(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_brave() {
        assert_eq!(SearchEngine::default(), SearchEngine::Brave);
    }

    #[test]
    fn test_parse_round_trip() {
        for engine in SearchEngine::all() {
            let parsed: SearchEngine = engine.as_str().parse().unwrap();
            assert_eq!(parsed, *engine);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: SearchEngine = "DuckDuckGo".parse().unwrap();
        assert_eq!(parsed, SearchEngine::DuckDuckGo);
    }

    #[test]
    fn test_unknown_engine_rejected() {
        let result = "altavista".parse::<SearchEngine>();
        assert!(matches!(
            result,
            Err(NavigationError::UnknownSearchEngine(name)) if name == "altavista"
        ));
    }

    #[test]
    fn test_templates_have_placeholder() {
        for engine in SearchEngine::all() {
            assert!(engine.template().contains("%s"), "{engine} lacks %s");
        }
    }
}
