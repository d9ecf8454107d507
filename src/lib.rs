//! # QA Extract
//!
//! 从测验导出文档中提取题目与答案，生成规范化题库文件
//!
//! ## 架构设计
//!
//! 本系统是线性组合的三段流水线，无共享状态：
//!
//! ### ① 格式判定（Detector）
//! - `extract::detect_format` - 依据列表标签子串区分树形 / 行结构
//!
//! ### ② 记录提取（Extractor）
//! - `extract::HtmlExtractor` - 树形结构提取器（HTML 嵌套列表）
//! - `extract::MarkdownExtractor` - 行结构提取器（缩进列表）
//! - 两者实现同一个 `Extractor` trait，产出相同的 `QuestionRecord` 序列
//!
//! ### ③ 格式化输出（Formatter）
//! - `format` - 渲染易读文本块，与提取器来源无关
//!
//! 外围的文档遍历、逐文档错误隔离与落盘由 `app::App` 负责

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod logger;
pub mod models;
pub mod utils;

// 重新导出常用类型
pub use app::{App, DocumentOutcome, ProcessingStats};
pub use config::Config;
pub use error::{ExtractError, Result};
pub use extract::{
    detect_format, extract_document, DocumentFormat, Extractor, HtmlExtractor, MarkdownExtractor,
};
pub use models::{QuestionOption, QuestionRecord};
