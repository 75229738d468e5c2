use std::sync::OnceLock;

use crossterm::style::{StyledContent, Stylize};
use crossterm::tty::IsTty;
use regex::Regex;

use crate::domain::NewsItem;

fn markup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[(/?)(yellow|green|bold|dim)\]").expect("markup pattern is valid")
    })
}

/// Styles understood by `[style]...[/style]` markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Yellow,
    Green,
    Bold,
    Dim,
}

impl Style {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "yellow" => Some(Style::Yellow),
            "green" => Some(Style::Green),
            "bold" => Some(Style::Bold),
            "dim" => Some(Style::Dim),
            _ => None,
        }
    }

    fn apply<D: std::fmt::Display>(self, content: StyledContent<D>) -> StyledContent<D> {
        match self {
            Style::Yellow => content.yellow(),
            Style::Green => content.green(),
            Style::Bold => content.bold(),
            Style::Dim => content.dim(),
        }
    }
}

/// Turns news items and `[style]...[/style]` marked status lines into
/// terminal text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color when stdout is a terminal and `NO_COLOR` is unset
    pub fn detect() -> Self {
        let color = std::io::stdout().is_tty() && std::env::var_os("NO_COLOR").is_none();
        Self::new(color)
    }

    /// `text` with every style in `styles` applied; unchanged without color
    pub fn span(&self, text: &str, styles: &[Style]) -> String {
        if !self.color || styles.is_empty() {
            return text.to_string();
        }

        styles
            .iter()
            .fold(text.stylize(), |content, style| style.apply(content))
            .to_string()
    }

    /// Render a template with markup tags. Only use this on fixed strings:
    /// text from news files goes through `span`.
    pub fn markup(&self, template: &str) -> String {
        let mut out = String::new();
        let mut active: Vec<Style> = Vec::new();
        let mut last = 0;

        for caps in markup_regex().captures_iter(template) {
            let (Some(tag), Some(name)) = (caps.get(0), caps.get(2)) else {
                continue;
            };

            out.push_str(&self.span(&template[last..tag.start()], &active));
            last = tag.end();

            if let Some(style) = Style::from_tag(name.as_str()) {
                if &caps[1] == "/" {
                    if let Some(pos) = active.iter().rposition(|s| *s == style) {
                        active.remove(pos);
                    }
                } else {
                    active.push(style);
                }
            }
        }

        out.push_str(&self.span(&template[last..], &active));
        out
    }

    /// One line per item: unread marker, ordinal, title
    pub fn title_list(&self, items: &[NewsItem]) -> String {
        let width = items
            .iter()
            .map(|i| i.ordinal().to_string().len())
            .max()
            .unwrap_or(1);

        items
            .iter()
            .map(|item| {
                let line = format!(
                    "{} {:>width$}  {}",
                    if item.is_read() { " " } else { "*" },
                    item.ordinal(),
                    item.display_title(),
                    width = width
                );
                if item.is_read() {
                    self.span(&line, &[Style::Dim])
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full text of one item with a header
    pub fn article(&self, item: &NewsItem) -> String {
        let lang = item
            .lang()
            .map(|lang| format!(", {}", lang))
            .unwrap_or_default();

        let mut text = format!(
            "{}\n{}",
            self.span(item.display_title(), &[Style::Bold]),
            self.span(
                &format!("#{} {}{}", item.ordinal(), item.id(), lang),
                &[Style::Dim]
            )
        );

        if !item.content().is_empty() {
            text.push_str("\n\n");
            text.push_str(item.content());
        }

        text
    }
}
