//! Test fixtures - reusable icon content for tests.

/// 16px home icon with a prolog, a comment and pretty-printed markup
pub const HOME_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- home -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" fill="currentColor">
  <path d="M8.543 2.232a.75.75 0 0 0-1.085 0l-5.25 5.5A.75.75 0 0 0 2.75 9H4v4a1 1 0 0 0 1 1h1v-3h4v3h1a1 1 0 0 0 1-1V9h1.25a.75.75 0 0 0 .543-1.268l-5.25-5.5Z"/>
</svg>
"#;

/// 24px bell icon
pub const BELL_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
  <path d="M12 2.25A6.75 6.75 0 0 0 5.25 9v.75a8.217 8.217 0 0 1-2.119 5.52.75.75 0 0 0 .298 1.206Z"/>
</svg>
"#;

/// Markup whose comment is never closed
pub const BROKEN_SVG: &str = "<svg><!-- unterminated</svg>";
