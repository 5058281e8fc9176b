use shared::ValidationError;
use thiserror::Error;

use crate::auth::UserStoreError;
use crate::history::HistoryError;
use crate::menu::MenuError;

#[derive(Error, Debug)]
pub enum KioskError {
    /// 输入流结束 (EOF)，会话正常退出
    #[error("Input closed")]
    InputClosed,

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    UserStore(#[from] UserStoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// 会话层 Result 类型别名
pub type KioskResult<T> = std::result::Result<T, KioskError>;
