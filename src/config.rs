use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// 默认配置文件名（工作目录下，存在则优先生效）
const CONFIG_FILE: &str = "qa_extract.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待处理的文档路径列表，按给定顺序处理
    pub input_files: Vec<String>,
    /// 输出目录
    pub output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_files: vec![
                "web.html".to_string(),
                "web1.html".to_string(),
                "web2.html".to_string(),
            ],
            output_dir: ".".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：先读配置文件，环境变量可逐项覆盖
    pub fn load() -> Self {
        Self::from_file(Path::new(CONFIG_FILE))
            .unwrap_or_default()
            .apply_env()
    }

    /// 从 TOML 文件读取配置
    ///
    /// 文件缺失或无法解析时返回 None，由调用方回退到默认值
    pub fn from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("无法解析配置文件 {}: {}", path.display(), e);
                None
            }
        }
    }

    /// 应用环境变量覆盖
    fn apply_env(mut self) -> Self {
        if let Ok(files) = std::env::var("INPUT_FILES") {
            self.input_files = files
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        self.output_dir = std::env::var("OUTPUT_DIR").unwrap_or(self.output_dir);
        self.verbose_logging = std::env::var("VERBOSE_LOGGING")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.verbose_logging);
        self
    }
}
