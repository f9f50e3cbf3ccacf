//! Caption Markdown Conversion
//!
//! キャプション（`**bold**` 形式の Markdown）を Bot API の MarkdownV2 に変換する

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::domain::repositories::ParseMode;

pub const MARKDOWN_V2: &str = "MarkdownV2";

/// 送信用に変換済みのキャプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCaption {
    pub text: String,
    pub parse_mode: &'static str,
}

impl TelegramCaption {
    /// ドメインのキャプションを Bot API 形式に変換
    pub fn prepare(caption: &str, parse_mode: ParseMode) -> Self {
        match parse_mode {
            ParseMode::Markdown => Self {
                text: markdown_to_markdown_v2(caption),
                parse_mode: MARKDOWN_V2,
            },
        }
    }
}

/// Markdown を MarkdownV2 に変換する
///
/// 強調・コードブロック以外の記号はすべてエスケープする。
/// フェンスの info 文字列（```` ```Kernel Info ```` の `Kernel Info`）は
/// 言語指定ではなくコードブロックの1行目として表示する。
pub fn markdown_to_markdown_v2(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut rendered = String::with_capacity(markdown.len() + 16);
    let mut in_code_block = false;
    let mut heading_gap = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Strong => rendered.push('*'),
                Tag::Emphasis => rendered.push('_'),
                Tag::Strikethrough => rendered.push('~'),
                Tag::CodeBlock(kind) => {
                    in_code_block = true;
                    ensure_line_start(&mut rendered);
                    rendered.push_str("```\n");
                    if let CodeBlockKind::Fenced(info) = kind {
                        let info = info.trim();
                        if !info.is_empty() {
                            rendered.push_str(&escape_code(info));
                            rendered.push('\n');
                        }
                    }
                }
                // `#tag` は見出しではないが、`#` だけの行は見出しとして解釈されるのでそのまま戻す
                Tag::Heading { level, .. } => {
                    rendered.push_str(&"\\#".repeat(level as usize));
                    heading_gap = true;
                }
                Tag::Item => {
                    ensure_line_start(&mut rendered);
                    rendered.push_str("\\- ");
                }
                Tag::BlockQuote(_) => rendered.push_str("\\> "),
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Strong => rendered.push('*'),
                TagEnd::Emphasis => rendered.push('_'),
                TagEnd::Strikethrough => rendered.push('~'),
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    ensure_line_start(&mut rendered);
                    rendered.push_str("```\n");
                }
                TagEnd::Heading(_) => {
                    heading_gap = false;
                    rendered.push('\n');
                }
                TagEnd::Paragraph => rendered.push('\n'),
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    rendered.push_str(&escape_code(&text));
                } else {
                    if heading_gap {
                        rendered.push(' ');
                        heading_gap = false;
                    }
                    rendered.push_str(&escape_text(&text));
                }
            }
            Event::Code(text) => {
                rendered.push('`');
                rendered.push_str(&escape_code(&text));
                rendered.push('`');
            }
            Event::SoftBreak | Event::HardBreak => rendered.push('\n'),
            Event::Rule => rendered.push_str("\\-\\-\\-\n"),
            Event::Html(text) | Event::InlineHtml(text) => {
                rendered.push_str(&escape_text(&text));
            }
            _ => {}
        }
    }

    while rendered.ends_with('\n') {
        rendered.pop();
    }
    rendered
}

fn ensure_line_start(rendered: &mut String) {
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
}

/// 通常テキストのエスケープ
pub fn escape_text(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            match ch {
                '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
                | '|' | '{' | '}' | '.' | '!' | '\\' => {
                    escaped.push('\\');
                    escaped.push(ch);
                }
                _ => escaped.push(ch),
            }
            escaped
        })
}

/// コード内のエスケープ（`` ` `` と `\` のみ）
pub fn escape_code(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            if ch == '\\' || ch == '`' {
                escaped.push('\\');
            }
            escaped.push(ch);
            escaped
        })
}
