//! 稳定错误码域：以 `<领域>.<语义>` 字符串码承载本 crate 的全部可失败路径。
//!
//! # 设计背景（Why）
//! - 定时器的三项运行时操作（启动、停止、到期检测）均为全函数，永不失败；
//!   唯一的可失败面是策略构造时的参数校验。为了让日志与告警系统按码值精确分类，
//!   校验失败同样使用稳定字符串码，而非裸 `String` 或枚举变体的 `Debug` 输出。
//!
//! # 契约说明（What）
//! - [`CoreError`] 仅承载错误码与人类可读描述，不执行任何格式化或上报逻辑；
//! - 码值集中定义于 [`codes`]，新增错误码必须在该模块登记并保持向后兼容。

use core::fmt;
use std::borrow::Cow;

/// 本 crate 统一的 `Result` 别名，错误类型默认为 [`CoreError`]。
pub type Result<T, E = CoreError> = core::result::Result<T, E>;

/// 稳定错误码命名空间。
///
/// # 约定（What）
/// - 码值格式为 `<领域>.<语义>`，一经发布不得变更含义；
/// - 调用方应优先匹配码值而非解析 `message` 文本。
pub mod codes {
    /// 唤醒策略的超时阈值为零，定时器将立即到期，视为配置错误。
    pub const POLICY_ZERO_TIMEOUT: &str = "policy.zero_timeout";
}

/// 携带稳定错误码与描述的最小错误载体。
///
/// # 教案式说明
/// - **意图 (Why)**：统一本 crate 的错误出口，使策略校验失败能够以机读码值进入
///   观测链路，同时保留面向排障人员的自然语言描述。
/// - **契约 (What)**：
///   - `code`：`'static` 稳定字符串码，见 [`codes`]；
///   - `message`：可为字面量或运行期拼接的描述，不应包含敏感信息；
///   - 实例满足 `Send + Sync + 'static`，可跨线程传递。
/// - **风险提示 (Trade-offs)**：不携带底层 `source` 链——本 crate 没有更底层的
///   故障来源；若未来引入外部依赖，应在此补充原因链而非另起错误类型。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreError {
    code: &'static str,
    message: Cow<'static, str>,
}

impl CoreError {
    /// 构造一个携带稳定码值的错误。
    pub fn new(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 获取稳定错误码。
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// 获取人类可读描述。
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CoreError {}
