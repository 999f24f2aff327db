//! 定时器相关集成测试入口，确保唤醒到期序列在虚拟时钟下保持确定性。
//!
//! # 模块目的（Why）
//! - 汇集所有与唤醒定时器契约相关的集成测试，便于统一运行与过滤；
//! - 对齐验收命令 `cargo test -p vigil-core --test timer` 的过滤路径。
//!
//! # 结构概览（What）
//! - [`tests::timer::deterministic_wakeup`]：在 [`vigil_core::MockClock`] 控制下
//!   逐步推进时间，验证到期、重新武装、预算耗尽与休眠的完整序列。
//!
//! # 维护提示（How）
//! - 新增定时器集成测试时，请在此处增加相应的子模块；
//! - 测试不得依赖真实时间等待，所有推进必须经由虚拟时钟完成。

pub mod tests {
    //! 集成测试命名空间：将定时器测试归档在 `tests::timer` 之下，便于过滤。
    pub mod timer {
        //! 唤醒定时器契约相关的集成测试集合。
        include!("deterministic_wakeup.rs");
    }
}
