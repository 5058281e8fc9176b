//! PS Fast Food 点餐终端
//!
//! # 架构概述
//!
//! - **订单历史** (`history`): 追加写入的历史文件、解析、按顾客索引、按时间排序
//! - **菜单** (`menu`): 菜单文件读写、搜索与排序
//! - **用户** (`auth`): 注册与登录
//! - **点餐** (`orders`): 购物车、饮料加购、结账
//! - **打印** (`printing`): 菜单表、小票、历史报表
//! - **终端** (`terminal`): 交互式会话
//!
//! # 模块结构
//!
//! ```text
//! kiosk/src/
//! ├── core/          # 配置、会话状态、错误
//! ├── history/       # 订单历史子系统
//! ├── menu/          # 菜单目录
//! ├── auth/          # 用户文件
//! ├── orders/        # 购物车与结账
//! ├── printing/      # 文本渲染
//! ├── terminal/      # 交互界面
//! └── utils/         # 日志、时间
//! ```

pub mod auth;
pub mod core;
pub mod history;
pub mod menu;
pub mod orders;
pub mod printing;
pub mod terminal;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, KioskError, KioskResult, Session};
pub use history::{CustomerIndex, HistoryError, RecordStore, sort_chronologically};
pub use menu::MenuCatalog;
pub use terminal::Terminal;

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____  _____    ______           __     ______                __
   / __ \/ ___/   / ____/___ ______/ /_   / ____/___  ____  ____/ /
  / /_/ /\__ \   / /_  / __ `/ ___/ __/  / /_  / __ \/ __ \/ __  /
 / ____/___/ /  / __/ / /_/ (__  ) /_   / __/ / /_/ / /_/ / /_/ /
/_/    /____/  /_/    \__,_/____/\__/  /_/    \____/\____/\__,_/
    "#
    );
}
