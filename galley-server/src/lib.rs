//! Galley POS Server - 餐厅点单后端
//!
//! # 架构概述
//!
//! 本模块是 Galley 后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储与仓储层
//! - **领域服务** (`services`): 商品/菜单/订单/桌台的业务规则校验
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! galley-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 领域服务 (校验 + 持久化编排)
//! ├── db/            # 数据库层 (模型 + 仓储)
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境：加载 .env 并初始化日志
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______      ____
  / ____/___ _/ / /__  __  __
 / / __/ __ `/ / / _ \/ / / /
/ /_/ / /_/ / / /  __/ /_/ /
\____/\__,_/_/_/\___/\__, /
                    /____/
    "#
    );
}
