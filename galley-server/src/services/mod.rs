//! Domain Services
//!
//! Each service is a thin orchestration of validation rules followed by
//! repository calls. Every invariant check runs before the first write, so a
//! rejected operation never leaves partial state behind.

mod menu;
mod menu_group;
mod order;
mod product;
mod table;
mod table_group;

pub use menu::MenuService;
pub use menu_group::MenuGroupService;
pub use order::OrderService;
pub use product::ProductService;
pub use table::TableService;
pub use table_group::TableGroupService;

use shared::error::{AppError, AppResult, ErrorCode};

/// Resolve an optional lookup result, failing with the entity's not-found code
pub(crate) fn require<T>(entity: Option<T>, code: ErrorCode) -> AppResult<T> {
    entity.ok_or_else(|| AppError::new(code))
}
