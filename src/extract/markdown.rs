//! 行结构提取器
//!
//! 处理 Markdown 缩进列表形式的导出文档：
//! 题目行带 - / * 前缀，选项行靠缩进区分，
//! 标记行紧跟在选项行物理位置的下一行

use crate::error::Result;
use crate::models::QuestionRecord;
use crate::utils::clean_text;
use regex::Regex;

use super::Extractor;

/// 题目行模式：- 或 * 前缀 + 7 位ID + 题干 + 【题型】
const QUESTION_PATTERN: &str = r"^[-*] (\d{7}) [*\s]*([^【\n]+)【([^】]+)】";
/// 选项行模式：缩进（空白或短横）+ 7 位ID + 内容
const OPTION_PATTERN: &str = r"^[ \t-]+(\d{7})[ \t]+(.+)";
/// 标记行模式：- 或 * 前缀 + ✔/❌ + 选中。 + 解析内容
const FLAG_PATTERN: &str = r"^[-*] ([✔❌]) 选中。(.+)";

/// 行结构提取器
pub struct MarkdownExtractor;

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for MarkdownExtractor {
    fn extract(&self, content: &str) -> Result<Vec<QuestionRecord>> {
        let question_re = Regex::new(QUESTION_PATTERN)?;
        let option_re = Regex::new(OPTION_PATTERN)?;
        let flag_re = Regex::new(FLAG_PATTERN)?;

        let lines: Vec<&str> = content.lines().collect();
        let mut records = Vec::new();
        // 当前累积中的题目，仅在本次解析内存在
        let mut current: Option<QuestionRecord> = None;

        for (idx, raw_line) in lines.iter().enumerate() {
            // 只去右侧空白，保留缩进供选项行识别
            let line = raw_line.trim_end();

            // 题目行：结束上一题，开启新题
            if let Some(caps) = question_re.captures(line) {
                if let Some(finished) = current.take() {
                    records.push(finished);
                }
                current = Some(QuestionRecord::new(
                    caps[1].to_string(),
                    clean_text(&caps[2]),
                    clean_text(&caps[3]),
                ));
                continue;
            }

            // 选项行：只在有活动题目时识别，其余行忽略
            let Some(record) = current.as_mut() else {
                continue;
            };
            if let Some(caps) = option_re.captures(line) {
                let mut is_correct = false;
                let mut explanation = String::new();

                // 标记行按物理位置取本行的下一行，与行内容是否重复无关
                if let Some(next_line) = lines.get(idx + 1) {
                    if let Some(fcaps) = flag_re.captures(next_line.trim()) {
                        is_correct = &fcaps[1] == "✔";
                        explanation = clean_text(&fcaps[2]);
                    }
                }

                record.push_option(
                    caps[1].to_string(),
                    clean_text(&caps[2]),
                    is_correct,
                    explanation,
                );
            }
        }

        if let Some(finished) = current.take() {
            records.push(finished);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<QuestionRecord> {
        MarkdownExtractor::new().extract(content).unwrap()
    }

    #[test]
    fn test_single_question_with_flagged_option() {
        let content = "- 1234567 What is 2+2?【单选题】\n\
                       \x20\x20- 2345679 4\n\
                       - ✔ 选中。Correct.";

        let records = extract(content);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.question_id, "1234567");
        assert_eq!(record.question_text, "What is 2+2?");
        assert_eq!(record.question_type, "单选题");
        assert_eq!(record.options.len(), 1);
        assert_eq!(record.options[0].letter, 'A');
        assert_eq!(record.options[0].option_id, "2345679");
        assert_eq!(record.options[0].option_text, "4");
        assert!(record.options[0].is_correct);
        assert_eq!(record.options[0].explanation_text, "Correct.");
        assert_eq!(record.answer_letters, vec!['A']);
        assert_eq!(record.explanations, vec!["选项A: Correct.".to_string()]);
    }

    #[test]
    fn test_question_finalized_at_eof() {
        let content = "- 1234567 最后一题【单选题】\n  - 2345678 选项";
        let records = extract(content);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].options.len(), 1);
    }

    #[test]
    fn test_multiple_questions_in_order() {
        let content = "- 1111111 第一题【单选题】\n\
                       \x20\x20- 2222221 选项一\n\
                       \x20\x20- 2222222 选项二\n\
                       - 1111112 第二题【多选题】\n\
                       \x20\x20- 3333331 选项一";

        let records = extract(content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question_id, "1111111");
        assert_eq!(records[0].options.len(), 2);
        assert_eq!(records[1].question_id, "1111112");
        assert_eq!(records[1].question_type, "多选题");
        assert_eq!(records[1].options.len(), 1);
    }

    #[test]
    fn test_option_line_without_active_question_ignored() {
        let content = "  - 2345678 没有题目的选项\n普通文字行";
        let records = extract(content);
        assert!(records.is_empty());
    }

    #[test]
    fn test_flag_line_must_physically_follow_option() {
        // 标记行与选项行之间隔了一行，不应绑定
        let content = "- 1234567 题干【单选题】\n\
                       \x20\x20- 2345678 选项\n\
                       其它行\n\
                       - ✔ 选中。迟到的解析。";

        let records = extract(content);
        assert!(!records[0].options[0].is_correct);
        assert!(records[0].options[0].explanation_text.is_empty());
    }

    #[test]
    fn test_lookahead_is_positional_despite_duplicate_lines() {
        // 文档前部存在内容完全相同的选项行时，
        // 标记仍绑定到物理上紧随其后的那一行
        let content = "- 1111111 第一题【单选题】\n\
                       \x20\x20- 2222222 重复选项\n\
                       - 1111112 第二题【单选题】\n\
                       \x20\x20- 2222222 重复选项\n\
                       - ✔ 选中。只属于第二题。";

        let records = extract(content);
        assert_eq!(records.len(), 2);
        assert!(!records[0].options[0].is_correct);
        assert!(records[1].options[0].is_correct);
        assert_eq!(records[1].options[0].explanation_text, "只属于第二题。");
    }

    #[test]
    fn test_emphasis_markers_after_id_skipped() {
        let content = "- 1234567 **加粗题干**【单选题】";
        let records = extract(content);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question_text, "加粗题干**");
    }

    #[test]
    fn test_trailing_whitespace_tolerated() {
        let content = "- 1234567 题干【单选题】   \n  - 2345678 选项   ";
        let records = extract(content);

        assert_eq!(records[0].options.len(), 1);
        assert_eq!(records[0].options[0].option_text, "选项");
    }

    #[test]
    fn test_cross_mark_not_counted_as_answer() {
        let content = "- 1234567 题干【单选题】\n\
                       \x20\x20- 2345678 选项\n\
                       - ❌ 选中。干扰项。";

        let records = extract(content);
        assert!(!records[0].options[0].is_correct);
        assert_eq!(records[0].options[0].explanation_text, "干扰项。");
        assert!(records[0].answer_letters.is_empty());
        assert_eq!(records[0].explanations, vec!["选项A: 干扰项。".to_string()]);
    }
}
