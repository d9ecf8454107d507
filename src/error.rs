use thiserror::Error;

/// 提取流程的错误类型
///
/// 所有错误都在逐文档边界处被捕获并转为诊断日志，不会向上终止进程
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 正则表达式构建失败
    #[error("正则表达式无效: {0}")]
    Pattern(#[from] regex::Error),

    /// CSS 选择器构建失败
    #[error("CSS 选择器无效: {0}")]
    Selector(String),

    /// 写入输出文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 提取流程结果类型
pub type Result<T> = std::result::Result<T, ExtractError>;
