use std::path::{Path, PathBuf};

use shared::Credentials;

/// Kiosk 配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（`.env` 由 main 加载）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_DIR | . | 数据文件目录 |
/// | MENU_FILE | menu.txt | 菜单 |
/// | USERS_FILE | users.txt | 注册用户 |
/// | REGISTER_LOG_FILE | register.txt | 注册日志 |
/// | HISTORY_FILE | history.txt | 订单历史 |
/// | RECEIPT_FILE | receipt.txt | 最近一次小票 |
/// | ADMIN_USERNAME | ps | 管理员账号 |
/// | ADMIN_PASSWORD | 111 | 管理员密码 |
/// | LOADING_DELAY_MS | 500 | "Processing..." 每个点的停顿 |
/// | CLEAR_SCREEN | true | 切换页面时清屏 |
/// | LOG_LEVEL | warn | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录，设置后写入滚动日志文件 |
///
/// # 示例
///
/// ```ignore
/// DATA_DIR=/srv/kiosk LOADING_DELAY_MS=0 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for every data file
    pub data_dir: PathBuf,
    pub menu_file: String,
    pub users_file: String,
    pub register_log_file: String,
    pub history_file: String,
    pub receipt_file: String,
    pub admin: Credentials,
    /// Pause per printed dot after login/registration (0 disables)
    pub loading_delay_ms: u64,
    pub clear_screen: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            menu_file: std::env::var("MENU_FILE").unwrap_or_else(|_| "menu.txt".into()),
            users_file: std::env::var("USERS_FILE").unwrap_or_else(|_| "users.txt".into()),
            register_log_file: std::env::var("REGISTER_LOG_FILE")
                .unwrap_or_else(|_| "register.txt".into()),
            history_file: std::env::var("HISTORY_FILE").unwrap_or_else(|_| "history.txt".into()),
            receipt_file: std::env::var("RECEIPT_FILE").unwrap_or_else(|_| "receipt.txt".into()),
            admin: Credentials::new(
                std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "ps".into()),
                std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "111".into()),
            ),
            loading_delay_ms: std::env::var("LOADING_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            clear_screen: std::env::var("CLEAR_SCREEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Default file names under `data_dir`, no delay, no screen clearing
    ///
    /// 常用于测试场景
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            menu_file: "menu.txt".into(),
            users_file: "users.txt".into(),
            register_log_file: "register.txt".into(),
            history_file: "history.txt".into(),
            receipt_file: "receipt.txt".into(),
            admin: Credentials::new("ps", "111"),
            loading_delay_ms: 0,
            clear_screen: false,
            log_level: "warn".into(),
            log_dir: None,
        }
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    pub fn menu_path(&self) -> PathBuf {
        self.resolve(&self.menu_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.resolve(&self.users_file)
    }

    pub fn register_log_path(&self) -> PathBuf {
        self.resolve(&self.register_log_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.resolve(&self.history_file)
    }

    pub fn receipt_path(&self) -> PathBuf {
        self.resolve(&self.receipt_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
