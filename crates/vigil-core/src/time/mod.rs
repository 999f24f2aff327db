//! 时间抽象模块，提供可注入的时钟接口以支撑到期检测在测试中实现完全确定性。
//!
//! # 模块定位（Why）
//! - 定时器唯一的外部依赖就是“当前时间”。若直接调用系统时钟，涉及 30 秒量级阈值的
//!   测试将不得不真实等待或容忍抖动；统一经由 [`Clock`] 注入后，虚拟时钟可以在
//!   毫秒内推进任意时长。
//!
//! # 结构概览（What）
//! - [`clock::Clock`]：核心时钟 trait，暴露 `now`/`since` 两个只读原语；
//! - [`clock::SystemClock`]：基于 [`std::time::Instant`] 的生产实现；
//! - [`clock::MockClock`]：手动推进的虚拟时钟，供确定性测试使用。
//!
//! # 使用指引（How）
//! - 业务代码应依赖 `Arc<dyn Clock>` 注入时间源；
//! - 时钟被视为只读外部依赖：实现必须线程安全，且不得因查询产生副作用。

pub mod clock;

pub use clock::{Clock, MockClock, SystemClock};
