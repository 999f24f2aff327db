use core::time::Duration;

use crate::error::{CoreError, Result, codes};

/// 规范唤醒超时：活跃定时器经过该时长后视为到期。
pub const WAKEUP_TIMEOUT: Duration = Duration::from_secs(30);

/// 规范重复预算：首次到期之后允许的自动重新武装次数，耗尽后定时器转入休眠。
pub const MAX_WAKEUP_REPEATS: u32 = 4;

/// 唤醒策略：超时阈值与重复预算的不可变组合。
///
/// # 设计背景（Why）
/// - 阈值与预算属于构造期决策，一经生效不应在运行期漂移；将两者收敛为一个
///   经过校验的值对象，状态机便无需在每次操作时重复防御非法参数。
///
/// # 契约定义（What）
/// - `timeout`：必须大于零，否则定时器一经启动立即到期，属于配置错误；
/// - `repeat_limit`：允许为零，表示首次到期后即休眠的一次性定时器；
/// - [`Default`] 返回规范常量组合（30 秒 / 4 次）。
///
/// # 逻辑解析（How）
/// 1. [`try_new`](Self::try_new) 校验阈值非零并封装为不可变结构；
/// 2. 访问器按值返回，结构体实现 `Copy`，跨线程传递无需同步。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WakeupPolicy {
    timeout: Duration,
    repeat_limit: u32,
}

impl WakeupPolicy {
    /// 构造唤醒策略；零超时将被拒绝。
    pub fn try_new(timeout: Duration, repeat_limit: u32) -> Result<Self> {
        if timeout.is_zero() {
            return Err(CoreError::new(
                codes::POLICY_ZERO_TIMEOUT,
                "唤醒超时必须大于 0",
            ));
        }
        Ok(Self {
            timeout,
            repeat_limit,
        })
    }

    /// 读取唤醒超时阈值。
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 读取重复预算上限。
    pub fn repeat_limit(&self) -> u32 {
        self.repeat_limit
    }
}

impl Default for WakeupPolicy {
    fn default() -> Self {
        Self {
            timeout: WAKEUP_TIMEOUT,
            repeat_limit: MAX_WAKEUP_REPEATS,
        }
    }
}
