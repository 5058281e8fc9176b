use std::io;

use anyhow::Context;
use kiosk::{Config, Session, Terminal, init_logger_with_file, print_banner, terminal};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!(data_dir = %config.data_dir.display(), "Kiosk starting");

    // 2. 加载菜单 (缺失即退出)
    let menu_path = config.menu_path();
    let mut session = Session::open(config)
        .with_context(|| format!("Failed to open {}", menu_path.display()))?;

    // 3. 交互会话
    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout(), &session.config);
    terminal::run(&mut session, &mut term)?;

    tracing::info!("Kiosk stopped");
    Ok(())
}
