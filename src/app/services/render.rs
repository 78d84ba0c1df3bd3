//! Markdown to HTML for the preview panel.
//!
//! GFM tables, strikethrough, task lists and bare-URL autolinks are
//! supported. Raw HTML in the source is passed through untouched. Fenced
//! code is colored with syntect using `<font color>` runs, which is the
//! only inline coloring FLTK's HelpView understands.

use pulldown_cmark::{
    CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html,
};
use regex_lite::Regex;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color as SyntectColor, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::app::domain::settings::SyntaxTheme;

const PREVIEW_BACKGROUND: &str = "#0d0d0d";
const PREVIEW_TEXT: &str = "#e6e6e6";
const PREVIEW_LINK: &str = "#6cb6ff";

const URL_PATTERN: &str = r"(?:https?://|www\.)[^\s<>]+";

pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    url_regex: Regex,
}

impl MarkdownRenderer {
    pub fn new(theme: SyntaxTheme) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.theme_key().to_string(),
            url_regex: Regex::new(URL_PATTERN).expect("URL pattern is valid"),
        }
    }

    /// Render markdown to an HTML fragment.
    pub fn render(&self, text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = TextMergeStream::new(Parser::new_ext(text, options));

        let mut events: Vec<Event<'_>> = Vec::new();
        let mut code_block: Option<(String, String)> = None;
        // Text inside links (markdown or raw <a>) and image alt text is
        // never autolinked
        let mut link_depth = 0usize;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        events.push(Event::Html(self.highlight_code(&code, &lang).into()));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::Start(tag @ (Tag::Link { .. } | Tag::Image { .. })) => {
                    link_depth += 1;
                    events.push(Event::Start(tag));
                }
                Event::End(end @ (TagEnd::Link | TagEnd::Image)) => {
                    link_depth = link_depth.saturating_sub(1);
                    events.push(Event::End(end));
                }
                Event::InlineHtml(raw) => {
                    match anchor_tag(&raw) {
                        Some(AnchorTag::Open) => link_depth += 1,
                        Some(AnchorTag::Close) => link_depth = link_depth.saturating_sub(1),
                        None => {}
                    }
                    events.push(Event::InlineHtml(raw));
                }
                Event::Text(text) if link_depth == 0 => self.push_autolinked(text, &mut events),
                Event::TaskListMarker(checked) => {
                    let marker = if checked { "[x] " } else { "[ ] " };
                    events.push(Event::Html(marker.into()));
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Render and wrap for HelpView.
    pub fn render_page(&self, text: &str, font_size: u32) -> String {
        wrap_html_for_helpview(&self.render(text), font_size)
    }

    fn push_autolinked<'a>(&self, text: CowStr<'a>, events: &mut Vec<Event<'a>>) {
        let mut last = 0;
        let mut found = false;

        for m in self.url_regex.find_iter(&text) {
            let url = trim_url(m.as_str());
            if url.is_empty() || !at_link_boundary(&text[..m.start()]) {
                continue;
            }
            found = true;
            if m.start() > last {
                events.push(Event::Text(text[last..m.start()].to_string().into()));
            }
            let dest = if url.starts_with("www.") {
                format!("http://{}", url)
            } else {
                url.to_string()
            };
            events.push(Event::Start(Tag::Link {
                link_type: LinkType::Autolink,
                dest_url: dest.into(),
                title: CowStr::Borrowed(""),
                id: CowStr::Borrowed(""),
            }));
            events.push(Event::Text(url.to_string().into()));
            events.push(Event::End(TagEnd::Link));
            last = m.start() + url.len();
        }

        if !found {
            events.push(Event::Text(text));
        } else if last < text.len() {
            events.push(Event::Text(text[last..].to_string().into()));
        }
    }

    fn theme(&self) -> &Theme {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
            .expect("syntect ships default themes")
    }

    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let token = lang.split([' ', ',', '{']).next().unwrap_or_default();
        let syntax = self
            .syntax_set
            .find_syntax_by_token(token)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme();
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut out = String::with_capacity(code.len() * 2);
        out.push_str("<pre>");

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    for (style, piece) in ranges {
                        out.push_str(&format!(
                            "<font color=\"{}\">{}</font>",
                            hex_color(style.foreground),
                            escape_html(piece)
                        ));
                    }
                }
                Err(e) => {
                    tracing::debug!("Highlighting failed for {:?}: {}", token, e);
                    out.push_str(&escape_html(line));
                }
            }
        }

        out.push_str("</pre>\n");
        out
    }
}

/// Wrap HTML in a HelpView body with the preview palette.
pub fn wrap_html_for_helpview(html: &str, font_size: u32) -> String {
    format!(
        "<body bgcolor=\"{}\" text=\"{}\" link=\"{}\"><font face=\"Helvetica\" size=\"{}\">{}</font></body>",
        PREVIEW_BACKGROUND, PREVIEW_TEXT, PREVIEW_LINK, font_size, html
    )
}

enum AnchorTag {
    Open,
    Close,
}

/// Classify a raw inline HTML tag as an `<a>` opener or closer.
fn anchor_tag(raw: &str) -> Option<AnchorTag> {
    let tag = raw.trim_start();
    let (rest, kind) = match tag.strip_prefix("</") {
        Some(rest) => (rest, AnchorTag::Close),
        None => (tag.strip_prefix('<')?, AnchorTag::Open),
    };
    let mut chars = rest.chars();
    if !matches!(chars.next(), Some('a' | 'A')) {
        return None;
    }
    match chars.next() {
        Some(c) if c.is_whitespace() || c == '>' || c == '/' => Some(kind),
        _ => None,
    }
}

/// GFM only starts an autolink at the beginning of a text run or after
/// whitespace or one of `*`, `_`, `~`, `(`.
fn at_link_boundary(before: &str) -> bool {
    match before.chars().last() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '*' | '_' | '~' | '('),
    }
}

/// Drop trailing punctuation and unbalanced closing parens, as GFM does.
fn trim_url(url: &str) -> &str {
    let mut end = url.len();
    loop {
        let candidate = &url[..end];
        let Some(last) = candidate.chars().last() else {
            return candidate;
        };
        let trim = match last {
            '.' | ',' | ':' | ';' | '!' | '?' | '*' | '_' | '~' | '"' | '\'' => true,
            ')' => candidate.matches(')').count() > candidate.matches('(').count(),
            _ => false,
        };
        if !trim {
            return candidate;
        }
        end -= last.len_utf8();
    }
}

fn hex_color(color: SyntectColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        MarkdownRenderer::new(SyntaxTheme::default()).render(text)
    }

    #[test]
    fn test_basic_markdown() {
        let html = render("# Title\n\nSome **bold** text");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_tables() {
        let html = render("| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_strikethrough() {
        assert!(render("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn test_task_list_markers() {
        let html = render("- [x] done\n- [ ] todo\n");
        assert!(html.contains("[x] done"));
        assert!(html.contains("[ ] todo"));
        assert!(!html.contains("<input"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render("<div class=\"note\">raw <b>markup</b></div>\n\ninline <kbd>Ctrl</kbd>");
        assert!(html.contains("<div class=\"note\">raw <b>markup</b></div>"));
        assert!(html.contains("<kbd>Ctrl</kbd>"));
    }

    #[test]
    fn test_bare_urls_become_links() {
        let html = render("See https://example.com/docs. Or www.rust-lang.org!");
        assert!(
            html.contains("<a href=\"https://example.com/docs\">https://example.com/docs</a>.")
        );
        assert!(html.contains("<a href=\"http://www.rust-lang.org\">www.rust-lang.org</a>!"));
    }

    #[test]
    fn test_existing_links_not_double_linked() {
        let html = render("[site](https://example.com) and <https://a.org>");
        assert_eq!(html.matches("<a ").count(), 2);
    }

    #[test]
    fn test_urls_inside_raw_anchor_are_left_alone() {
        let html = render("see <a href=\"https://x.org\">https://x.org</a> now https://y.org");
        assert!(html.contains("<a href=\"https://x.org\">https://x.org</a> now"));
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains("<a href=\"https://y.org\">https://y.org</a>"));
    }

    #[test]
    fn test_autolink_needs_left_boundary() {
        assert!(!render("awww.example.com").contains("<a "));
        assert!(!render("xhttps://example.com").contains("<a "));

        let html = render("(see www.a.org) and _www.b.org_");
        assert!(html.contains("<a href=\"http://www.a.org\">www.a.org</a>)"));
        assert!(html.contains("<a href=\"http://www.b.org\">www.b.org</a>"));
    }

    #[test]
    fn test_anchor_tag_detection() {
        assert!(matches!(anchor_tag("<a href=\"x\">"), Some(AnchorTag::Open)));
        assert!(matches!(anchor_tag("<A>"), Some(AnchorTag::Open)));
        assert!(matches!(anchor_tag("</a>"), Some(AnchorTag::Close)));
        assert!(anchor_tag("<abbr>").is_none());
        assert!(anchor_tag("<b>").is_none());
    }

    #[test]
    fn test_urls_in_inline_code_are_left_alone() {
        let html = render("`https://example.com`");
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_trim_url() {
        assert_eq!(trim_url("https://a.org/x)."), "https://a.org/x");
        assert_eq!(
            trim_url("https://en.wikipedia.org/wiki/Rust_(language)"),
            "https://en.wikipedia.org/wiki/Rust_(language)"
        );
        assert_eq!(trim_url("www.a.org?!"), "www.a.org");
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre>"));
        assert!(html.contains("<font color=\"#"));
        assert!(html.contains("main"));
        assert!(!html.contains("<code class"));
    }

    #[test]
    fn test_code_is_escaped() {
        let html = render("```html\n<script>alert(1)</script>\n```\n");
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = render("```nosuchlang\nplain & simple\n```\n");
        assert!(html.contains("plain &amp; simple"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_theme_changes_colors() {
        let code = "```rust\nlet x = 1;\n```\n";
        let dark = MarkdownRenderer::new(SyntaxTheme::SolarizedDark).render(code);
        let light = MarkdownRenderer::new(SyntaxTheme::InspiredGitHub).render(code);
        assert_ne!(dark, light);
    }

    #[test]
    fn test_wrap_html_for_helpview() {
        let html = wrap_html_for_helpview("<p>Hello</p>", 4);
        assert!(html.starts_with("<body bgcolor="));
        assert!(html.contains("<font face=\"Helvetica\" size=\"4\"><p>Hello</p></font>"));
    }
}
