//! 应用主流程
//!
//! 负责文档遍历、逐文档错误隔离、合并排序与输出落盘。
//! 核心提取逻辑全部在 `extract` 模块，这里只是外围胶水

use crate::config::Config;
use crate::error::ExtractError;
use crate::extract;
use crate::format;
use crate::models::QuestionRecord;
use crate::utils::truncate_text;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 单个文档的处理结果
///
/// 逐文档的错误边界：失败只影响本文档，流水线继续
#[derive(Debug)]
pub enum DocumentOutcome {
    /// 解析成功，携带提取到的记录
    Extracted(Vec<QuestionRecord>),
    /// 文件不存在，跳过
    Missing,
    /// 读取或解析失败，携带诊断信息
    Failed(ExtractError),
}

/// 处理统计
#[derive(Debug, Default)]
pub struct ProcessingStats {
    /// 成功解析的文档数
    pub extracted: usize,
    /// 读取或解析失败的文档数
    pub failed: usize,
    /// 不存在而跳过的文档数
    pub missing: usize,
    /// 提取到的题目总数
    pub questions: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行完整流程
    ///
    /// # 返回
    /// 有产出时返回输出文件路径；没有提取到题目或写入失败时返回 None
    pub fn run(&self) -> Result<Option<PathBuf>> {
        log_startup(&self.config);

        let mut stats = ProcessingStats::default();
        let mut all_records = Vec::new();

        for input in &self.config.input_files {
            match self.process_document(input) {
                DocumentOutcome::Extracted(records) => {
                    stats.extracted += 1;
                    stats.questions += records.len();
                    all_records.extend(records);
                }
                DocumentOutcome::Missing => {
                    warn!("文件不存在: {}", input);
                    stats.missing += 1;
                }
                DocumentOutcome::Failed(e) => {
                    error!("处理文件 {} 时出错: {}", input, e);
                    stats.failed += 1;
                }
            }
        }

        if all_records.is_empty() {
            warn!("⚠️ 没有提取到任何题目");
            print_final_stats(&stats);
            return Ok(None);
        }

        // 按题目ID的数值升序排序（稳定排序）
        all_records.sort_by_key(QuestionRecord::numeric_id);

        if self.config.verbose_logging {
            log_records(&all_records);
        }

        let output_path = self.write_output(&all_records);
        print_final_stats(&stats);
        Ok(output_path)
    }

    /// 处理单个文档，所有失败都收敛为 DocumentOutcome
    fn process_document(&self, input: &str) -> DocumentOutcome {
        let path = Path::new(input);
        if !path.exists() {
            return DocumentOutcome::Missing;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return DocumentOutcome::Failed(ExtractError::ReadFailed {
                    path: input.to_string(),
                    source: e,
                })
            }
        };

        match extract::extract_document(input, &content) {
            Ok(records) => DocumentOutcome::Extracted(records),
            Err(e) => DocumentOutcome::Failed(e),
        }
    }

    /// 写出题库文件，文件名携带生成时间戳，重复运行不会覆盖历史产出
    fn write_output(&self, records: &[QuestionRecord]) -> Option<PathBuf> {
        let content = format::format_records(records);
        let file_name = format!(
            "qa_database_{}.txt",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let path = Path::new(&self.config.output_dir).join(file_name);

        match fs::write(&path, content) {
            Ok(()) => {
                info!("✓ 题库已保存到: {}", path.display());
                Some(path)
            }
            Err(e) => {
                let e = ExtractError::WriteFailed {
                    path: path.display().to_string(),
                    source: e,
                };
                error!("保存文件时出错: {}", e);
                None
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始提取题库");
    info!("📁 待处理文档: {} 个", config.input_files.len());
    info!("{}", "=".repeat(60));
}

fn log_records(records: &[QuestionRecord]) {
    for record in records {
        info!(
            "  {} [{}] {}",
            record.question_id,
            record.question_type,
            truncate_text(&record.question_text, 40)
        );
    }
}

fn print_final_stats(stats: &ProcessingStats) {
    info!("{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {} 个文档", stats.extracted);
    info!("❌ 失败: {} 个文档", stats.failed);
    info!("⚠️ 缺失: {} 个文档", stats.missing);
    info!("📝 题目总数: {}", stats.questions);
    info!("{}", "=".repeat(60));
}
