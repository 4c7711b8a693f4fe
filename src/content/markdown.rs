//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::config::HighlightConfig;
use crate::dom::html_escape;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with highlight settings from the site config
    pub fn with_options(config: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: config.theme.clone(),
            highlight: config.enable,
            line_numbers: config.line_number,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Front-matter is stripped before we get here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<Option<String>> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            // Info strings like "rust,ignore" carry the language first
                            lang.split([',', ' ']).next().map(str::to_string)
                        }
                        _ => None,
                    };
                    code_block = Some(lang);
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().flatten();
                    let rendered = self.render_code(&code_block_content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(rendered)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Render a code block, highlighted when enabled
    fn render_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        if !self.highlight {
            return plain_code_block(code, lang);
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        else {
            return plain_code_block(code, lang);
        };

        let lines = match self.highlight_lines(code, syntax, theme) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", lang, e);
                return plain_code_block(code, lang);
            }
        };

        let pre_style = theme
            .settings
            .background
            .map(|c| format!(r#" style="background-color:#{:02x}{:02x}{:02x};""#, c.r, c.g, c.b))
            .unwrap_or_default();
        let lang = html_escape(lang);

        if self.line_numbers {
            add_line_numbers(&lines, &lang, &pre_style)
        } else {
            format!(
                r#"<figure class="highlight {}"><pre{}><code>{}</code></pre></figure>"#,
                lang,
                pre_style,
                lines.join("\n")
            )
        }
    }

    /// Highlighted markup for each source line, without line endings
    fn highlight_lines(
        &self,
        code: &str,
        syntax: &SyntaxReference,
        theme: &Theme,
    ) -> Result<Vec<String>, syntect::Error> {
        let mut highlighter = HighlightLines::new(syntax, theme);

        LinesWithEndings::from(code)
            .map(|line| {
                let regions = highlighter.highlight_line(line, &self.syntax_set)?;
                let html = styled_line_to_highlighted_html(&regions, IncludeBackground::No)?;
                Ok(html.replace('\n', ""))
            })
            .collect()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_code_block(code: &str, lang: &str) -> String {
    format!(
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        html_escape(lang),
        html_escape(code)
    )
}

/// Highlighted lines in a table with one gutter number per line
fn add_line_numbers(lines: &[String], lang: &str, pre_style: &str) -> String {
    let gutter = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre{}><code>{}</code></pre></td></tr></table></figure>"#,
        lang,
        gutter,
        pre_style,
        lines.join("\n")
    )
}
