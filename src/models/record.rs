use serde::{Deserialize, Serialize};

/// 选项字母表，按位置依次分配
pub const OPTION_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 单个选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// 按位置分配的选项字母（A、B、C…），不取自文档
    pub letter: char,
    /// 文档中的 7 位选项ID
    pub option_id: String,
    /// 选项内容
    pub option_text: String,
    /// 是否带有"选中"标记
    pub is_correct: bool,
    /// 解析内容，没有则为空字符串
    pub explanation_text: String,
}

/// 一道题目的规范化记录
///
/// 两种提取器产出的记录形状完全一致；单次提取完成后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 7 位题目ID（保留前导零，排序时按数值比较）
    pub question_id: String,
    /// 题干
    pub question_text: String,
    /// 题型标签（如 单选题 / 多选题）
    pub question_type: String,
    /// 选项列表，按文档顺序
    pub options: Vec<QuestionOption>,
    /// 正确选项的字母，按选项顺序，可能为空
    pub answer_letters: Vec<char>,
    /// 渲染好的解析行，按选项顺序
    pub explanations: Vec<String>,
}

impl QuestionRecord {
    /// 创建一条尚无选项的记录
    pub fn new(question_id: String, question_text: String, question_type: String) -> Self {
        Self {
            question_id,
            question_text,
            question_type,
            options: Vec::new(),
            answer_letters: Vec::new(),
            explanations: Vec::new(),
        }
    }

    /// 追加一个选项，字母按当前选项数量分配
    ///
    /// 同时维护 `answer_letters` 与 `explanations` 两个序列，
    /// 保证三者始终按选项顺序对齐
    pub fn push_option(
        &mut self,
        option_id: String,
        option_text: String,
        is_correct: bool,
        explanation_text: String,
    ) {
        // 超过 26 个选项不在支持范围内
        let Some(letter) = OPTION_LETTERS.chars().nth(self.options.len()) else {
            return;
        };

        if is_correct {
            self.answer_letters.push(letter);
        }
        if !explanation_text.is_empty() {
            self.explanations.push(format!("选项{}: {}", letter, explanation_text));
        }

        self.options.push(QuestionOption {
            letter,
            option_id,
            option_text,
            is_correct,
            explanation_text,
        });
    }

    /// 题目ID的数值形式，用于最终排序
    pub fn numeric_id(&self) -> u32 {
        self.question_id.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> QuestionRecord {
        QuestionRecord::new(
            "1234567".to_string(),
            "题干".to_string(),
            "单选题".to_string(),
        )
    }

    #[test]
    fn test_letters_assigned_by_position() {
        let mut record = sample_record();
        record.push_option("1000001".to_string(), "一".to_string(), false, String::new());
        record.push_option("1000002".to_string(), "二".to_string(), false, String::new());
        record.push_option("1000003".to_string(), "三".to_string(), false, String::new());

        let letters: Vec<char> = record.options.iter().map(|o| o.letter).collect();
        assert_eq!(letters, vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_answer_letters_follow_option_order() {
        let mut record = sample_record();
        record.push_option("1000001".to_string(), "一".to_string(), true, String::new());
        record.push_option("1000002".to_string(), "二".to_string(), false, String::new());
        record.push_option("1000003".to_string(), "三".to_string(), true, String::new());

        assert_eq!(record.answer_letters, vec!['A', 'C']);
        // answer_letters 一定是选项字母的子序列
        for letter in &record.answer_letters {
            assert!(record.options.iter().any(|o| o.letter == *letter));
        }
    }

    #[test]
    fn test_explanations_rendered_with_letter() {
        let mut record = sample_record();
        record.push_option(
            "1000001".to_string(),
            "一".to_string(),
            true,
            "正确".to_string(),
        );
        record.push_option("1000002".to_string(), "二".to_string(), false, String::new());

        assert_eq!(record.explanations, vec!["选项A: 正确".to_string()]);
    }

    #[test]
    fn test_numeric_id_keeps_leading_zero_semantics() {
        let record = QuestionRecord::new(
            "0012345".to_string(),
            "题干".to_string(),
            "单选题".to_string(),
        );
        assert_eq!(record.question_id, "0012345");
        assert_eq!(record.numeric_id(), 12345);
    }
}
