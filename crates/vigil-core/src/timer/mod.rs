//! 受护唤醒定时器模块：策略、预算快照与核心状态机。
//!
//! # 模块定位（Why）
//! - 将“多久算到期”（[`WakeupPolicy`]）与“到期后如何演化”（[`WakeupTimer`]）分离，
//!   策略在构造期一次性校验并固定，运行期状态机不再出现可失败路径。
//!
//! # 结构概览（What）
//! - [`policy::WakeupPolicy`]：唤醒超时 + 重复预算的不可变组合，附带规范默认值
//!   [`WAKEUP_TIMEOUT`] 与 [`MAX_WAKEUP_REPEATS`]；
//! - [`wakeup::WakeupTimer`]：互斥锁保护的定时器状态机，提供
//!   `start`/`stop`/`expired` 三项操作与只读快照；
//! - [`wakeup::WakeupBudget`]：重复预算的只读观测值。

pub mod policy;
pub mod wakeup;

pub use policy::{MAX_WAKEUP_REPEATS, WAKEUP_TIMEOUT, WakeupPolicy};
pub use wakeup::{WakeupBudget, WakeupTimer};
