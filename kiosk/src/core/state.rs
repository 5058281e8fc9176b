use shared::{MenuItem, OrderRecord};

use crate::auth::UserStore;
use crate::core::{Config, KioskResult};
use crate::history::RecordStore;
use crate::menu::MenuCatalog;
use crate::orders::Cart;
use crate::utils::{Clock, SystemClock};

/// 会话状态 - 持有一次运行期间的全部数据
///
/// 顶层循环创建一个 Session，并把 `&mut Session` 传给每个流程函数。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 |
/// | menu | 菜单目录 (admin 修改后写回文件) |
/// | display | 顾客看到的菜单顺序 (排序只影响这里) |
/// | users | 注册用户 |
/// | history | 订单历史文件 |
/// | clock | 下单时间来源 |
/// | cart | 当前购物车 |
/// | session_orders | 本次运行中已结账的订单 |
pub struct Session {
    pub config: Config,
    pub menu: MenuCatalog,
    pub display: Vec<MenuItem>,
    pub users: UserStore,
    pub history: RecordStore,
    pub clock: Box<dyn Clock>,
    pub cart: Cart,
    pub session_orders: Vec<OrderRecord>,
}

impl Session {
    pub fn new(config: Config, menu: MenuCatalog, clock: Box<dyn Clock>) -> Self {
        let users = UserStore::new(config.users_path(), config.register_log_path());
        let history = RecordStore::new(config.history_path());
        let display = menu.items().to_vec();
        Self {
            config,
            menu,
            display,
            users,
            history,
            clock,
            cart: Cart::new(),
            session_orders: Vec::new(),
        }
    }

    /// Load the menu named by `config` and use the wall clock
    ///
    /// A missing menu file is an error; the binary treats it as fatal.
    pub fn open(config: Config) -> KioskResult<Self> {
        let menu = MenuCatalog::load(config.menu_path())?;
        Ok(Self::new(config, menu, Box::new(SystemClock)))
    }

    /// Restore the customer's view to catalog order
    pub fn reset_display(&mut self) {
        self.display = self.menu.items().to_vec();
    }
}
