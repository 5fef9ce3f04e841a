//! Bracket-tag markup to Markdown.
//!
//! Supported tags, applied in this order:
//! ```text
//! [code]...[/code]    fenced code block (may span lines)
//! [b] [/b]            ** (each tag replaced on its own, not paired)
//! [cmimg]URL[/cmimg]  ![Image](URL)
//! ```

use regex::Regex;
use std::sync::LazyLock;

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("hardcoded markup regex must compile: {err}"),
    }
}

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?s)\[code\](.*?)\[/code\]"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?s)\[cmimg\](.*?)\[/cmimg\]"));

/// Translate bracket markup in `text` into Markdown.
pub fn translate(text: &str) -> String {
    let text = CODE_BLOCK.replace_all(text, "\n```\n${1}\n```\n");
    let text = text.replace("[b]", "**").replace("[/b]", "**");
    IMAGE.replace_all(&text, "![Image](${1})").into_owned()
}
