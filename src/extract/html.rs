//! 树形结构提取器
//!
//! 处理 HTML 嵌套列表形式的导出文档：
//! 题目在任意深度的 li 上，选项在题目 li 的直接子 ul 下，
//! 标记行在选项 li 的直接子 ul 下

use crate::error::{ExtractError, Result};
use crate::models::QuestionRecord;
use crate::utils::clean_text;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::Extractor;

/// 题目节点模式：7 位ID + 题干 + 【题型】，在节点文本中任意位置匹配
const QUESTION_PATTERN: &str = r"(\d{7})\s+([^【]+)【([^】]+)】";
/// 选项节点模式：文本起始处 7 位ID + 空白 + 内容
const OPTION_PATTERN: &str = r"^(\d{7})\s+(.+)";
/// 标记节点模式：✔/❌ + 选中。 + 解析内容
const FLAG_PATTERN: &str = r"^([✔❌])\s*选中。(.+)";

/// 树形结构提取器
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HtmlExtractor {
    fn extract(&self, content: &str) -> Result<Vec<QuestionRecord>> {
        let question_re = Regex::new(QUESTION_PATTERN)?;
        let option_re = Regex::new(OPTION_PATTERN)?;
        let flag_re = Regex::new(FLAG_PATTERN)?;

        let document = Html::parse_document(content);
        let li_selector =
            Selector::parse("li").map_err(|e| ExtractError::Selector(e.to_string()))?;

        let mut records = Vec::new();

        // 扫描全部 li 节点；嵌套在其它题目子树中的题目同样单独成条，不去重
        for li in document.select(&li_selector) {
            let text = node_text(&li);
            let Some(caps) = question_re.captures(&text) else {
                continue;
            };

            let mut record = QuestionRecord::new(
                caps[1].to_string(),
                clean_text(&caps[2]),
                clean_text(&caps[3]),
            );

            // 选项在题目 li 的第一个直接子 ul 下；没有则记录零个选项
            if let Some(option_list) = direct_child_ul(&li) {
                for option_li in direct_child_lis(&option_list) {
                    let option_text = node_text(&option_li);
                    let Some(ocaps) = option_re.captures(&option_text) else {
                        // 不匹配的子节点跳过，不占用字母
                        continue;
                    };

                    let mut is_correct = false;
                    let mut explanation = String::new();

                    // 标记行在选项 li 的直接子 ul 下，多条时以最后一条为准
                    if let Some(flag_list) = direct_child_ul(&option_li) {
                        for flag_li in direct_child_lis(&flag_list) {
                            let flag_text = node_text(&flag_li);
                            if let Some(fcaps) = flag_re.captures(&flag_text) {
                                is_correct = &fcaps[1] == "✔";
                                explanation = clean_text(&fcaps[2]);
                            }
                        }
                    }

                    record.push_option(
                        ocaps[1].to_string(),
                        clean_text(&ocaps[2]),
                        is_correct,
                        explanation,
                    );
                }
            }

            records.push(record);
        }

        Ok(records)
    }
}

/// 节点可见文本：各文本片段去除首尾空白后以单个空格连接
///
/// 嵌套的 ul / ol 属于子结构（选项、标记行），不计入本节点文本
fn node_text(element: &ElementRef<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect_inline_text(element, &mut parts);
    parts.join(" ")
}

fn collect_inline_text(element: &ElementRef<'_>, parts: &mut Vec<String>) {
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if name == "ul" || name == "ol" {
                continue;
            }
            collect_inline_text(&child_el, parts);
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }
}

/// 第一个直接子 ul
fn direct_child_ul<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "ul")
}

/// 直接子 li 列表，按文档顺序
fn direct_child_lis<'a>(element: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "li")
        .collect()
}
