//! 题目记录格式化
//!
//! 将规范化记录渲染为易读文本块，与提取器来源无关。
//! 渲染是确定性的：相同输入永远得到逐字节相同的输出

use crate::models::QuestionRecord;

/// 块尾分隔线长度
const SEPARATOR_LEN: usize = 50;

/// 格式化单条记录为一个文本块
pub fn format_record(record: &QuestionRecord) -> String {
    let mut lines = Vec::new();

    lines.push(format!("【题目ID】{}", record.question_id));
    lines.push(format!("【题型】{}", record.question_type));
    lines.push(format!("【题目】\n{}", record.question_text));
    lines.push("【选项】".to_string());

    for option in &record.options {
        lines.push(format!(
            "{}. [ID: {}] {}",
            option.letter, option.option_id, option.option_text
        ));
    }

    let answers = if record.answer_letters.is_empty() {
        "无".to_string()
    } else {
        record
            .answer_letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join("/")
    };
    // 前导换行在【答案】之前留出空行
    lines.push(format!("\n【答案】{}", answers));

    if !record.explanations.is_empty() {
        lines.push(format!("【解析】\n{}", record.explanations.join("\n")));
    }

    lines.push("=".repeat(SEPARATOR_LEN));
    lines.join("\n")
}

/// 格式化记录序列，块与块之间以空行分隔
pub fn format_records(records: &[QuestionRecord]) -> String {
    records
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n\n")
}
