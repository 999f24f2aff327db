#![deny(unsafe_code)]
#![doc = "vigil-core: 受护唤醒定时器——可注入时钟、带重复预算的到期检测组件。"]
#![doc = ""]
#![doc = "== 组件定位 =="]
#![doc = "本 crate 只包含一个核心抽象：[`WakeupTimer`]。它度量自启动事件以来的活跃时长，"]
#![doc = "在固定的唤醒超时（默认 30 秒）到期时报告一次到期信号，并在重复预算（默认 4 次）"]
#![doc = "耗尽前自动重新武装；预算耗尽后定时器转入休眠，直到调用方再次启动。"]
#![doc = ""]
#![doc = "== 时间源注入 =="]
#![doc = "所有时间读取均通过 [`Clock`] 抽象完成：生产环境注入 [`SystemClock`]，"]
#![doc = "测试环境注入可手动推进的 [`MockClock`]，以保证到期序列在 CI 中完全可复现。"]

pub mod error;
pub mod prelude;
pub mod time;
pub mod timer;

pub use error::{CoreError, Result};
pub use time::clock::{Clock, MockClock, SystemClock};
pub use timer::{
    MAX_WAKEUP_REPEATS, WAKEUP_TIMEOUT, WakeupBudget, WakeupPolicy, WakeupTimer,
};
