//! Static home document
//!
//! Rendered once per shell and loaded verbatim into a tab with base
//! `about:blank`. The embedded search box performs a client-side redirect to
//! the configured search engine; the session never inspects this document.

use crate::config::Config;

const HOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>%NAME% - Home</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body {
    font-family: 'Helvetica Neue', Arial, sans-serif;
    background: #141414;
    color: #f0f0f0;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
  }
  .hero { max-width: 720px; width: 100%; padding: 0 24px; text-align: center; }
  .logo {
    font-size: 3em;
    font-weight: bold;
    letter-spacing: 0.04em;
    color: #7b68ee;
    margin-bottom: 12px;
  }
  .tagline { color: #808080; margin-bottom: 32px; }
  .search-box {
    background: rgba(255, 255, 255, 0.06);
    border: 1px solid #2d2d2d;
    border-radius: 8px;
    padding: 28px;
  }
  .search-input {
    width: 100%;
    padding: 14px 18px;
    font-size: 1.1em;
    background: #1e1e1e;
    border: 2px solid #333;
    border-radius: 6px;
    color: #f0f0f0;
    outline: none;
  }
  .search-input:focus { border-color: #7b68ee; }
  .search-input::placeholder { color: #666; }
  .quick-links {
    display: flex;
    justify-content: center;
    gap: 12px;
    flex-wrap: wrap;
    margin-top: 24px;
  }
  .quick-links a {
    color: #ccc;
    text-decoration: none;
    border: 1px solid #333;
    border-radius: 6px;
    padding: 10px 18px;
    transition: border-color 0.2s ease, color 0.2s ease;
  }
  .quick-links a:hover { border-color: #7b68ee; color: #7b68ee; }
  .footer { color: #555; margin-top: 40px; font-size: 0.85em; }
</style>
</head>
<body>
  <div class="hero">
    <div class="logo">%NAME%</div>
    <p class="tagline">Searching with %ENGINE_NAME%</p>
    <div class="search-box">
      <input type="text" class="search-input" id="searchInput"
             placeholder="Search with %ENGINE_NAME%... (Press Enter)"
             onkeypress="handleSearch(event)">
      <div class="quick-links">
        <a href="https://en.wikipedia.org">Wikipedia</a>
        <a href="https://www.youtube.com">YouTube</a>
        <a href="https://github.com">GitHub</a>
      </div>
    </div>
    <p class="footer">%NAME% &mdash; searches stay between you and %ENGINE_NAME%.</p>
  </div>
  <script>
    function handleSearch(event) {
      if (event.key === 'Enter') {
        const query = document.getElementById('searchInput').value;
        if (query) {
          window.location.href = '%SEARCH_PREFIX%' + encodeURIComponent(query);
        }
      }
    }
    document.getElementById('searchInput').focus();
  </script>
</body>
</html>
"#;

/// Render the home document for the given configuration.
pub fn home_document(config: &Config) -> String {
    let template = config.search_engine.template();
    // Every catalog template carries the query placeholder last, so the
    // prefix is everything before it.
    let search_prefix = template.split("%s").next().unwrap_or(template);

    HOME_TEMPLATE
        .replace("%NAME%", &config.browser_name)
        .replace("%ENGINE_NAME%", config.search_engine.display_name())
        .replace("%SEARCH_PREFIX%", search_prefix)
}
