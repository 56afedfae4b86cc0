//! Markdown stripping stage.
//!
//! Runs the compiled markdown rules in configuration order. Malformed markup
//! (unbalanced delimiters, unterminated fences) is left as is: a rule that
//! does not match changes nothing.

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use crate::config::RuleConfig;
use crate::engine::{StageKind, TextStage};
use crate::sanitizers::compiler::{get_or_compile_rules, CompiledRules};

#[derive(Debug, Clone)]
pub struct MarkdownStripper {
    rules: Arc<CompiledRules>,
}

impl MarkdownStripper {
    pub fn new(config: &RuleConfig) -> Result<Self> {
        let rules = get_or_compile_rules(config).context("Failed to compile markdown rules")?;
        debug!("Markdown stage ready with rules: {:?}", rules.names());
        Ok(Self { rules })
    }

    pub fn compiled_rules(&self) -> &CompiledRules {
        &self.rules
    }
}

impl TextStage for MarkdownStripper {
    fn kind(&self) -> StageKind {
        StageKind::Markdown
    }

    fn apply(&self, text: &str) -> String {
        self.rules.apply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(text: &str) -> String {
        let stripper = MarkdownStripper::new(&RuleConfig::load_default_rules().unwrap()).unwrap();
        stripper.apply(text)
    }

    /// Compares with whitespace runs collapsed, as the pipeline does later.
    fn collapsed(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn headings() {
        assert_eq!(collapsed(&strip("# 标题")), "标题");
        assert_eq!(collapsed(&strip("## 二级标题")), "二级标题");
        assert_eq!(strip("###### h6\n####### h7"), "h6\n####### h7");
    }

    #[test]
    fn emphasis() {
        assert_eq!(strip("**粗体文本**"), "粗体文本");
        assert_eq!(strip("*斜体文本*"), "斜体文本");
        assert_eq!(strip("__下划线文本__"), "下划线文本");
        assert_eq!(strip("__bold__ and _it_"), "bold and it");
    }

    #[test]
    fn inline_code_and_links() {
        assert_eq!(strip("`行内代码`"), "行内代码");
        assert_eq!(strip("[链接文本](https://example.com)"), "链接文本");
        assert_eq!(strip("![图片](image.jpg)"), "图片");
        assert_eq!(strip("see ![img](a.png) and [x](y)"), "see img and x");
    }

    #[test]
    fn block_markers() {
        assert_eq!(collapsed(&strip("- 列表项1\n- 列表项2")), "列表项1 列表项2");
        assert_eq!(collapsed(&strip("1. 第一项\n2. 第二项")), "第一项 第二项");
        assert_eq!(collapsed(&strip("> 引用文本")), "引用文本");
        assert_eq!(strip("  - nested\n***\n> q"), "nested\nq");
    }

    #[test]
    fn horizontal_rule_leaves_nothing() {
        assert_eq!(strip("---"), "");
        assert_eq!(strip("___"), "");
    }

    #[test]
    fn unbalanced_delimiters_survive() {
        assert_eq!(strip("2 * 3"), "2 * 3");
        assert_eq!(strip("[not a link]"), "[not a link]");
        assert_eq!(strip("`open"), "`open");
    }

    #[test]
    fn inline_code_runs_before_fences() {
        // Backtick pairs on one line are eaten by the inline rule first, so
        // only one backtick of each fence is left and the block content stays.
        assert_eq!(strip("```rust\nlet x = 1;\n```\nafter"), "`rust\nlet x = 1;\n`\nafter");
    }
}
