//! Markdown描画
//!
//! 記事本文（Markdown）を表示用に変換する純粋関数。
//! Webは HTML、CLI/デスクトップはブロック列を使う。

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// 表示用ブロック
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    ListItem(String),
    Quote(String),
    Code(String),
    Rule,
}

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// HTMLに変換
///
/// 本文中の生HTMLはテキストとしてエスケープし、許可外スキームの
/// リンク先・画像URLは空にする。
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed(""), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id })
        }
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// 相対URL、または http / https / mailto のみ許可
fn is_safe_url(url: &str) -> bool {
    let end = url.find(['/', '?', '#']).unwrap_or(url.len());
    match url[..end].find(':') {
        None => true,
        Some(colon) => {
            let scheme = &url[..colon];
            SAFE_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme))
        }
    }
}

/// ブロック列に変換
pub fn to_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut buf = String::new();
    let mut item_depth = 0usize;
    let mut in_quote = false;
    let mut in_code = false;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::Item) => {
                // 入れ子リストの親項目の本文を先に確定
                if item_depth > 0 {
                    flush(&mut blocks, &mut buf, Block::ListItem);
                }
                item_depth += 1;
            }
            Event::End(TagEnd::Item) => {
                flush(&mut blocks, &mut buf, Block::ListItem);
                item_depth = item_depth.saturating_sub(1);
            }
            Event::Start(Tag::BlockQuote) => in_quote = true,
            Event::End(TagEnd::BlockQuote) => {
                flush(&mut blocks, &mut buf, Block::Quote);
                in_quote = false;
            }
            Event::Start(Tag::CodeBlock(_)) => in_code = true,
            Event::End(TagEnd::CodeBlock) => {
                let code = buf.trim_end_matches('\n').to_string();
                buf.clear();
                if !code.is_empty() {
                    blocks.push(Block::Code(code));
                }
                in_code = false;
            }
            Event::End(TagEnd::Heading(level)) => {
                let level = level as u8;
                flush(&mut blocks, &mut buf, |text| Block::Heading { level, text });
            }
            Event::End(TagEnd::Paragraph) => {
                if item_depth > 0 || in_quote {
                    buf.push('\n');
                } else {
                    flush(&mut blocks, &mut buf, Block::Paragraph);
                }
            }
            Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text) => {
                buf.push_str(&text)
            }
            Event::SoftBreak => buf.push(if in_code { '\n' } else { ' ' }),
            Event::HardBreak => buf.push('\n'),
            Event::Rule => blocks.push(Block::Rule),
            _ => {}
        }
    }
    flush(&mut blocks, &mut buf, Block::Paragraph);

    blocks
}

fn flush(blocks: &mut Vec<Block>, buf: &mut String, make: impl FnOnce(String) -> Block) {
    let text = buf.trim().to_string();
    buf.clear();
    if !text.is_empty() {
        blocks.push(make(text));
    }
}
