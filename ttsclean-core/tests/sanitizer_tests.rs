// ttsclean-core/tests/sanitizer_tests.rs
use anyhow::Result;
use test_log::test;

use ttsclean_core::{normalize_whitespace, sanitize_for_tts, TtsSanitizer};

fn sanitizer() -> TtsSanitizer {
    TtsSanitizer::new().unwrap()
}

#[test]
fn test_remove_markdown_cases() {
    let s = sanitizer();
    let cases = [
        ("# 标题", "标题"),
        ("## 二级标题", "二级标题"),
        ("**粗体文本**", "粗体文本"),
        ("*斜体文本*", "斜体文本"),
        ("__下划线文本__", "下划线文本"),
        ("`行内代码`", "行内代码"),
        ("[链接文本](https://example.com)", "链接文本"),
        ("![图片](image.jpg)", "图片"),
        ("- 列表项1\n- 列表项2", "列表项1 列表项2"),
        ("1. 第一项\n2. 第二项", "第一项 第二项"),
        ("> 引用文本", "引用文本"),
        ("---", ""),
    ];

    for (input, expected) in cases {
        let result = normalize_whitespace(&s.remove_markdown(input));
        assert_eq!(result, expected, "input: {input:?}");
    }
}

#[test]
fn test_clean_emoticons_cases() {
    let s = sanitizer();
    let cases = [
        ("你好(๑•\u{300}ㅂ•\u{301})و✧世界", "你好世界"),
        ("测试~(≧▽≦)/~表情", "测试表情"),
        ("简单符号!@#$%", "简单符号"),
        ("单个符号: 这里有一个冒号", "单个符号 这里有一个冒号"),
    ];

    for (input, expected) in cases {
        let result = normalize_whitespace(&s.clean_emoticons(input));
        assert_eq!(result, expected, "input: {input:?}");
    }
}

#[test]
fn test_math_symbols_preserved() {
    let s = sanitizer();
    let inputs = [
        "a² + b² = c²",
        "√2 ≈ 1.414",
        "∑(i=1到n)i = n(n+1)/2",
        "x ∈ R",
        "α + β = γ",
        "f(x) = ∫ₐᵇ g(t)dt",
        "P(A ∩ B) = P(A) × P(B|A)",
    ];

    for input in inputs {
        let result = s.sanitize(input);
        for c in input.chars() {
            if s.is_math_symbol(c) && (c == '|' || !s.is_emoji_or_emoticon(c)) {
                assert!(result.contains(c), "{c:?} lost from {input:?}: {result:?}");
            }
        }
    }
}

#[test]
fn test_combined_functionality() {
    let cases = [
        (
            "# 数学公式说明\n这是一个**重要**的公式：a² + b² = c²，也称为勾股定理。(๑•\u{300}ㅂ•\u{301})و✧",
            "数学公式说明 这是一个重要的公式：a² + b² = c²，也称为勾股定理。",
        ),
        (
            "## 物理公式\n爱因斯坦的质能方程：E = mc²，其中c是光速。~(≧▽≦)/~",
            "物理公式 爱因斯坦的质能方程：E = mc²，其中c是光速。",
        ),
        (
            "### 化学方程式\n水的电解：2H₂O → 2H₂ + O₂。反应条件是通电。٩(๑>◡<๑)۶",
            "化学方程式 水的电解：2H₂O → 2H₂ + O₂。反应条件是通电。",
        ),
        (
            "你好呀😊，这是一个**粗体**和*斜体*的测试。",
            "你好呀，这是一个粗体和斜体的测试。",
        ),
        (
            "# 标题内容\n这是正文，包含[链接](https://example.com)。",
            "标题内容 这是正文，包含链接。",
        ),
        ("> 引用\n- 列表\n---\n结束", "引用 列表 结束"),
    ];

    for (input, expected) in cases {
        assert_eq!(sanitize_for_tts(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_empty_and_special_cases() {
    let cases = [
        ("", ""),
        ("   ", ""),
        ("!@#$%^&*()", ""),
        ("*", ""),
        ("纯文本测试", "纯文本测试"),
    ];

    for (input, expected) in cases {
        assert_eq!(sanitize_for_tts(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_pipe_preserved() {
    assert_eq!(sanitize_for_tts("|x| ≥ 0"), "|x| ≥ 0");
    assert_eq!(sanitize_for_tts("P(B|A)"), "PB|A");
}

#[test]
fn test_punctuation_inside_numbers_is_dropped() {
    // `.` and `,` are emoticon parts; decimal points do not survive.
    assert_eq!(sanitize_for_tts("√2 ≈ 1.414"), "√2 ≈ 1414");
}

#[test]
fn test_colons_become_pauses() {
    assert_eq!(sanitize_for_tts("时间: 12:30"), "时间 12 30");
}

#[test]
fn test_idempotent_on_single_line_output() {
    let inputs = [
        "a² + b² = c²",
        "|x| ≥ 0",
        "你好呀😊，这是一个**粗体**和*斜体*的测试。",
        "P(A ∩ B) = P(A) × P(B|A)",
        "√2 ≈ 1.414",
        "纯文本测试",
    ];

    for input in inputs {
        let once = sanitize_for_tts(input);
        assert_eq!(sanitize_for_tts(&once), once, "input: {input:?}");
    }
}

#[test]
fn test_whitespace_normalization_is_idempotent() {
    let input = "  数学 \n\n 公式\t  说明  ";
    let once = normalize_whitespace(input);
    assert_eq!(once, "数学 公式 说明");
    assert_eq!(normalize_whitespace(&once), once);
}

#[test]
fn test_sanitizer_is_shareable_across_threads() -> Result<()> {
    let s = std::sync::Arc::new(TtsSanitizer::new()?);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = std::sync::Arc::clone(&s);
            std::thread::spawn(move || s.sanitize("**x**+1=2"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "x + 1 = 2");
    }
    Ok(())
}

#[test]
fn test_report_serializes_stage_names() -> Result<()> {
    let report = sanitizer().sanitize_with_report("**x**+1=2");
    let json = serde_json::to_value(&report)?;
    assert_eq!(json["output"], "x + 1 = 2");
    let stages: Vec<&str> = json["stages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|stage| stage["stage"].as_str().unwrap())
        .collect();
    assert_eq!(stages, vec!["markdown", "emoticons", "operators", "whitespace"]);
    Ok(())
}

#[test]
fn test_char_class_serializes() -> Result<()> {
    let json = serde_json::to_value(ttsclean_core::classify('√'))?;
    assert_eq!(json["code_point"], "U+221A");
    assert_eq!(json["category"], "MathSymbol");
    assert_eq!(json["kept"], true);
    Ok(())
}
