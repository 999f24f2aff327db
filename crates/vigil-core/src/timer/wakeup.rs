use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::time::clock::{Clock, SystemClock};
use crate::timer::policy::WakeupPolicy;

/// 受护唤醒定时器：度量自启动以来的活跃时长，在阈值到期时给出一次性信号，
/// 并在重复预算耗尽前自动重新武装。
///
/// # 教案式说明
/// - **意图 (Why)**：周期性唤醒信号若无上限约束，异常路径上会永远触发；本结构
///   将“到期检测”与“重复预算”绑定在同一临界区内，确保信号总量有界，预算耗尽后
///   定时器自动休眠。
/// - **契约 (What)**：
///   - 构造后处于停止态：无启动参考点，预算充满；
///   - [`start`](Self::start)：停止态记录当前时刻为启动参考点并充满预算；
///     运行态为静默幂等空操作，既不重置参考点也不触碰预算——下游依赖该语义，
///     不得“修复”为重启；
///   - [`stop`](Self::stop)：无条件清除参考点并将预算重置为上限；
///   - [`expired`](Self::expired)：检测即消费，详见方法文档；
///   - 三项操作均在单一互斥锁下原子执行，可从任意线程并发调用。
/// - **实现 (How)**：时钟以 `Arc<dyn Clock>` 注入且仅作只读查询；可变状态集中在
///   `Mutex<WakeupState>`，每个公开操作在整个函数体内持锁，锁内仅有内存读写。
/// - **风险提示 (Trade-offs & Gotchas)**：预算耗尽触发的休眠与显式 `stop` 并不
///   对称——前者将预算留在 0，后者重置为上限；两者都清除参考点。该不对称为既有
///   对外行为，观测方如需区分应读取 [`budget`](Self::budget) 快照。
pub struct WakeupTimer {
    clock: Arc<dyn Clock>,
    policy: WakeupPolicy,
    state: Mutex<WakeupState>,
}

#[derive(Debug)]
struct WakeupState {
    started_at: Option<Instant>,
    repeats_left: u32,
}

/// 重复预算的只读快照，用于观测与断言，不构成任何回写通道。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WakeupBudget {
    /// 预算上限，即策略允许的自动重新武装次数。
    pub limit: u32,
    /// 当前剩余额度。
    pub remaining: u32,
}

impl WakeupTimer {
    /// 以系统时钟与默认策略（30 秒 / 4 次）构造定时器。无失败路径。
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// 注入自定义时钟，策略取默认值。
    ///
    /// # 参数
    /// - `clock`：实现 [`Clock`] 的时间源，生产环境为
    ///   [`SystemClock`]，测试环境为 [`MockClock`](crate::time::clock::MockClock)。
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_policy(clock, WakeupPolicy::default())
    }

    /// 同时注入时钟与已校验的策略。
    pub fn with_policy(clock: Arc<dyn Clock>, policy: WakeupPolicy) -> Self {
        Self {
            clock,
            policy,
            state: Mutex::new(WakeupState {
                started_at: None,
                repeats_left: policy.repeat_limit(),
            }),
        }
    }

    /// 启动定时器；若已在运行则为静默空操作。
    ///
    /// # 契约说明（What）
    /// - 停止态：记录 `clock.now()` 为启动参考点，并将预算充满至上限；
    /// - 运行态：不重置参考点、不重启计时窗口、不触碰预算；
    /// - 每个停止→启动周期恰好生效一次，可从多线程并发调用。
    pub fn start(&self) {
        let mut state = self.lock_state();
        if state.started_at.is_some() {
            trace!("唤醒定时器已在运行，忽略重复启动");
            return;
        }
        state.started_at = Some(self.clock.now());
        state.repeats_left = self.policy.repeat_limit();
        trace!(repeats_left = state.repeats_left, "唤醒定时器已启动");
    }

    /// 停止定时器：无条件清除启动参考点，并将重复预算重置为上限。
    pub fn stop(&self) {
        let mut state = self.lock_state();
        state.started_at = None;
        state.repeats_left = self.policy.repeat_limit();
        trace!("唤醒定时器已停止，预算重置");
    }

    /// 检测定时器是否到期；到期时在同一临界区内消费状态。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：“检测即消费”保证单次阈值穿越恰好产生一次 `true`——
    ///   多个并发调用方中只有第一个观测者拿到信号，其余看到的是重新武装后的
    ///   新计时窗口。该副作用是契约的一部分，并非待修复的缺陷。
    /// - **契约 (What)**：
    ///   - 停止态：返回 `false`，不产生任何变更；
    ///   - 运行态且活跃时长 **小于** 阈值：返回 `false`，不产生任何变更；
    ///   - 运行态且活跃时长 **不小于** 阈值：返回 `true`，并且
    ///     - 预算有余：预算减一，参考点重置为当前时刻（重新武装一个完整窗口）；
    ///     - 预算耗尽：清除参考点转入休眠，预算保持为 0；后续调用返回 `false`，
    ///       直到再次 [`start`](Self::start)（重新充满预算）或 [`stop`](Self::stop)。
    /// - **实现 (How)**：整个检测-消费路径持有状态锁，预算递减与参考点更新对
    ///   其他线程原子可见；不存在丢失更新或单次穿越被重复计数的交错。
    pub fn expired(&self) -> bool {
        let mut state = self.lock_state();
        let Some(started_at) = state.started_at else {
            return false;
        };
        if self.clock.since(started_at) < self.policy.timeout() {
            return false;
        }

        if state.repeats_left > 0 {
            state.repeats_left -= 1;
            state.started_at = Some(self.clock.now());
            trace!(repeats_left = state.repeats_left, "唤醒到期，重新武装");
        } else {
            state.started_at = None;
            trace!("唤醒到期且预算耗尽，转入休眠");
        }
        true
    }

    /// 定时器当前是否持有启动参考点。
    pub fn is_running(&self) -> bool {
        self.lock_state().started_at.is_some()
    }

    /// 读取重复预算快照。
    pub fn budget(&self) -> WakeupBudget {
        let state = self.lock_state();
        WakeupBudget {
            limit: self.policy.repeat_limit(),
            remaining: state.repeats_left,
        }
    }

    /// 距离下一次到期的剩余时长；停止态或已越过阈值时返回零。
    pub fn remaining_until_wakeup(&self) -> Duration {
        let state = self.lock_state();
        match state.started_at {
            Some(started_at) => self
                .policy
                .timeout()
                .saturating_sub(self.clock.since(started_at)),
            None => Duration::ZERO,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, WakeupState> {
        self.state.lock().expect("wakeup-timer state lock poisoned")
    }
}

impl Default for WakeupTimer {
    fn default() -> Self {
        Self::new()
    }
}
