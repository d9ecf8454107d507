//! 双格式提取核心
//!
//! 职责：
//! - 判断文档是树形结构还是行结构
//! - 分发到对应的提取器
//! - 两种提取器产出相同的规范化记录序列

mod html;
mod markdown;

pub use html::HtmlExtractor;
pub use markdown::MarkdownExtractor;

use crate::error::Result;
use crate::models::QuestionRecord;
use tracing::info;

/// 文档格式判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// 嵌套标签树（HTML 列表）
    Tree,
    /// 行结构（Markdown 缩进列表）
    Line,
}

/// 提取能力：从原始文本产出规范化题目记录
pub trait Extractor {
    fn extract(&self, content: &str) -> Result<Vec<QuestionRecord>>;
}

/// 判断文档格式
///
/// 只要文本中出现列表标签子串即按树形处理，不做回退扫描；
/// 行结构文档中出现字面量标签会被误判，这是已接受的风险
pub fn detect_format(content: &str) -> DocumentFormat {
    if content.contains("<li>") || content.contains("<ul") || content.contains("<ol") {
        DocumentFormat::Tree
    } else {
        DocumentFormat::Line
    }
}

/// 提取单个文档的全部题目记录
pub fn extract_document(name: &str, content: &str) -> Result<Vec<QuestionRecord>> {
    info!("正在处理文件: {}", name);

    let records = match detect_format(content) {
        DocumentFormat::Tree => HtmlExtractor::new().extract(content)?,
        DocumentFormat::Line => MarkdownExtractor::new().extract(content)?,
    };

    info!("从 {} 中提取了 {} 道题目", name, records.len());
    Ok(records)
}
