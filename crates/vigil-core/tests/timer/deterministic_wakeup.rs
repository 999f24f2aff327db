pub mod deterministic_wakeup {
    //! 时间契约测试：验证唤醒定时器在虚拟时钟下产生确定性的到期序列。
    //!
    //! # 测试目标（Why）
    //! - 唤醒阈值为 30 秒量级，真实等待不可接受；全部用例经由 `MockClock`
    //!   推进时间，保证在 CI 中毫秒级完成且 100% 可复现；
    //! - 覆盖契约的三条主线：阈值穿越的“恰好一次”语义、重复预算的精确耗尽、
    //!   休眠与重新启动的边界。
    //!
    //! # 执行方式（How）
    //! - 每个用例独享一对 `(MockClock, WakeupTimer)`，时间推进显式可见；
    //! - 断言同时检查返回值与预算快照，确保内部状态与外部信号一致。

    use std::sync::Arc;
    use std::time::Duration;

    use vigil_core::{MAX_WAKEUP_REPEATS, MockClock, WAKEUP_TIMEOUT, WakeupTimer};

    fn mock_timer() -> (Arc<MockClock>, WakeupTimer) {
        let clock = Arc::new(MockClock::new());
        let timer = WakeupTimer::with_clock(clock.clone());
        (clock, timer)
    }

    /// 验证规范场景：T0 启动，T0+30s 到期并重置参考点，T0+59s 未到期，
    /// T0+60s 再次到期，预算依次递减。
    #[test]
    pub fn threshold_crossings_follow_reference_reset() {
        let (clock, timer) = mock_timer();
        timer.start();

        clock.advance(Duration::from_secs(30));
        assert!(timer.expired(), "T0+30s 必须观测到首次到期");
        assert_eq!(timer.budget().remaining, 3, "首次到期消费一格预算");

        clock.advance(Duration::from_secs(29));
        assert!(
            !timer.expired(),
            "新参考点为 T0+30s，T0+59s 仅过去 29 秒，不得到期"
        );

        clock.advance(Duration::from_secs(1));
        assert!(timer.expired(), "T0+60s 距新参考点恰好 30 秒");
        assert_eq!(timer.budget().remaining, 2);
    }

    /// 验证：单次阈值穿越只产生一次 `true`，后续调用回到等待态。
    #[test]
    pub fn single_crossing_signals_exactly_once() {
        let (clock, timer) = mock_timer();
        timer.start();
        clock.advance(WAKEUP_TIMEOUT + Duration::from_secs(5));

        assert!(timer.expired());
        for _ in 0..8 {
            assert!(!timer.expired(), "时钟未再推进时不得重复到期");
        }

        clock.advance(WAKEUP_TIMEOUT);
        assert!(timer.expired(), "自新参考点再次满阈值后恢复到期");
    }

    /// 验证：首次到期之后恰好允许 `MAX_WAKEUP_REPEATS` 次重新武装，
    /// 最后一次穿越转入休眠，进一步推进不再触发。
    #[test]
    pub fn budget_exhaustion_sends_timer_dormant() {
        let (clock, timer) = mock_timer();
        timer.start();

        for round in 0..=MAX_WAKEUP_REPEATS {
            clock.advance(WAKEUP_TIMEOUT);
            assert!(timer.expired(), "第 {} 次阈值穿越必须到期", round + 1);
        }
        assert!(!timer.is_running(), "预算耗尽后定时器必须休眠");
        assert_eq!(timer.budget().remaining, 0, "耗尽触发的休眠不重置预算");

        clock.advance(WAKEUP_TIMEOUT * 3);
        assert!(!timer.expired(), "休眠态不受进一步推进影响");
    }

    /// 验证：预算耗尽休眠后再次启动会重新充满预算，完整周期可重演。
    #[test]
    pub fn restart_after_exhaustion_replenishes_budget() {
        let (clock, timer) = mock_timer();
        timer.start();
        for _ in 0..=MAX_WAKEUP_REPEATS {
            clock.advance(WAKEUP_TIMEOUT);
            assert!(timer.expired());
        }
        assert_eq!(timer.budget().remaining, 0);

        timer.start();
        assert!(timer.is_running());
        assert_eq!(
            timer.budget().remaining,
            MAX_WAKEUP_REPEATS,
            "停止态启动必须充满预算"
        );

        let mut signals = 0;
        for _ in 0..=MAX_WAKEUP_REPEATS {
            clock.advance(WAKEUP_TIMEOUT);
            if timer.expired() {
                signals += 1;
            }
        }
        assert_eq!(signals, 1 + MAX_WAKEUP_REPEATS, "重启后的周期与首个周期一致");
    }

    /// 验证：任意时刻 `stop` 都将定时器带回初始休眠态，预算重置为上限。
    #[test]
    pub fn stop_is_unconditional_reset() {
        let (clock, timer) = mock_timer();
        timer.start();
        clock.advance(WAKEUP_TIMEOUT);
        assert!(timer.expired());
        clock.advance(WAKEUP_TIMEOUT);

        timer.stop();
        assert!(!timer.expired(), "停止后即使已越过阈值也不得到期");
        assert_eq!(timer.budget().remaining, MAX_WAKEUP_REPEATS);

        timer.start();
        clock.advance(WAKEUP_TIMEOUT - Duration::from_secs(1));
        assert!(!timer.expired(), "重新启动后从零开始计时");
        clock.advance(Duration::from_secs(1));
        assert!(timer.expired());
    }

    /// 验证：运行态的重复启动不会重置计时窗口（幂等启动语义）。
    #[test]
    pub fn idempotent_start_preserves_elapsed_reference() {
        let (clock, timer) = mock_timer();
        timer.start();
        clock.advance(WAKEUP_TIMEOUT - Duration::from_secs(1));

        timer.start();
        assert_eq!(
            timer.remaining_until_wakeup(),
            Duration::from_secs(1),
            "重复启动不得延长剩余等待"
        );

        clock.advance(Duration::from_secs(1));
        assert!(timer.expired(), "参考点未被重置，此刻恰好满阈值");
    }
}
