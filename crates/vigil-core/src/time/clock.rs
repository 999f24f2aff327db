use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// 抽象可注入的时钟，统一“获取当前时间”与“计算自某一时刻以来的时长”两种能力。
///
/// # 设计背景（Why）
/// - 到期检测依赖可靠的时间来源；若直接调用系统时钟，将导致测试难以复现。
/// - 通过 trait 注入时钟，可在生产环境使用真实时间，在测试中使用可控的虚拟时间。
///
/// # 接口约束（What）
/// - `now`：返回当前的单调时间点；实现必须保证其单调不减；
/// - `since`：返回从 `earlier` 到当前时刻的时长；默认实现基于 `now` 推导，
///   并在 `earlier` 晚于当前时刻时饱和为零，实现者可按需覆写；
/// - 两个方法均为只读查询，不得产生副作用。
///
/// # 使用指引（How）
/// - 推荐通过 `Arc<dyn Clock>` 传递给需要时间能力的组件；
/// - 测试场景可注入 [`MockClock`] 并调用其 `advance` 方法推进时间；
/// - 生产环境使用 [`SystemClock`]。
pub trait Clock: Send + Sync + 'static {
    /// 返回当前的单调时间点。
    fn now(&self) -> Instant;

    /// 返回自 `earlier` 以来经过的时长，时钟回拨时饱和为零。
    fn since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// 直接委托给 [`Instant::now`] 的系统时钟。
///
/// # 契约说明（What）
/// - `now` 返回标准库的单调时钟读数；
/// - 零尺寸类型，构造与复制均无成本，可安全共享。
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// 虚拟时钟：通过手动推进时间以在测试中复现确定性的到期序列。
///
/// # 设计动机（Why）
/// - 唤醒超时与重复预算逻辑需要在 CI 中保证 100% 可重复；
/// - 虚拟时钟允许测试显式控制时间推进，避免真实时间的抖动与等待。
///
/// # 行为概览（How）
/// - 内部维护 `origin`（构造时的参考基准）与 `elapsed`（自基准起的虚拟偏移量）；
/// - `advance` 以饱和加法增加偏移量，偏移量单调不减；
/// - 克隆实例共享同一份内部状态，推进对所有持有者同时可见。
#[derive(Clone, Debug)]
pub struct MockClock {
    inner: Arc<MockClockInner>,
}

impl MockClock {
    /// 创建起始时间为当前系统时间的虚拟时钟。
    pub fn new() -> Self {
        Self::with_start(Instant::now())
    }

    /// 以指定起始时间构造虚拟时钟，便于在测试中固定初始基准。
    pub fn with_start(origin: Instant) -> Self {
        Self {
            inner: Arc::new(MockClockInner {
                state: Mutex::new(ClockState {
                    origin,
                    elapsed: Duration::ZERO,
                }),
            }),
        }
    }

    /// 手动推进虚拟时钟。
    ///
    /// # 契约说明（What）
    /// - `delta` 为非负持续时间，推进后所有克隆实例立即观测到新的读数；
    /// - 内部使用 `saturating_add`，极端推进不会回绕。
    pub fn advance(&self, delta: Duration) {
        let mut guard = self
            .inner
            .state
            .lock()
            .expect("mock-clock state lock poisoned");
        guard.elapsed = guard.elapsed.saturating_add(delta);
    }

    /// 返回自起始时间以来的虚拟时间偏移。
    pub fn elapsed(&self) -> Duration {
        self.inner
            .state
            .lock()
            .expect("mock-clock state lock poisoned")
            .elapsed
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        let guard = self
            .inner
            .state
            .lock()
            .expect("mock-clock state lock poisoned");
        guard.origin + guard.elapsed
    }
}

#[derive(Debug)]
struct MockClockInner {
    state: Mutex<ClockState>,
}

#[derive(Debug)]
struct ClockState {
    origin: Instant,
    elapsed: Duration,
}
