use qa_extract::{App, Config};
use tracing::error;

fn main() {
    // 初始化日志
    qa_extract::logger::init();

    // 加载配置
    let config = Config::load();

    // 顶层兜底：任何失败只记录诊断，进程始终正常退出
    if let Err(e) = App::new(config).run() {
        error!("程序执行出错: {:#}", e);
    }
}
