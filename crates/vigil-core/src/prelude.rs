//! 常用导出集合：`use vigil_core::prelude::*;` 即可获得定时器、策略与时钟抽象。

pub use crate::error::{CoreError, Result};
pub use crate::time::clock::{Clock, MockClock, SystemClock};
pub use crate::timer::policy::{MAX_WAKEUP_REPEATS, WAKEUP_TIMEOUT, WakeupPolicy};
pub use crate::timer::wakeup::{WakeupBudget, WakeupTimer};
