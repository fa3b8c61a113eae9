//! Time-related utilities with clock abstraction for testability.

use chrono::{Local, NaiveDateTime};

/// Format used for every timestamp written to chat clients.
pub const CHAT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get the current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// System clock implementation (uses actual local time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: NaiveDateTime,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    pub fn new(fixed_time: NaiveDateTime) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.fixed_time
    }
}

/// Format a time as `YYYY-MM-DD HH:MM:SS`
pub fn format_chat_timestamp(time: &NaiveDateTime) -> String {
    time.format(CHAT_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn test_system_clock_returns_increasing_times() {
        // テスト項目: SystemClock が呼び出すたびに減少しない時刻を返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let time1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let time2 = clock.now();

        // then (期待する結果):
        assert!(time2 >= time1);
    }

    #[test]
    fn test_fixed_clock_returns_fixed_time() {
        // テスト項目: FixedClock が複数回呼び出しても同じ時刻を返す
        // given (前提条件):
        let clock = FixedClock::new(sample_time());

        // when (操作):
        let time1 = clock.now();
        let time2 = clock.now();

        // then (期待する結果):
        assert_eq!(time1, sample_time());
        assert_eq!(time2, sample_time());
    }

    #[test]
    fn test_format_chat_timestamp_pads_fields() {
        // テスト項目: 月・日・時・分・秒がゼロ埋めされた形式で出力される
        // given (前提条件):
        let time = sample_time();

        // when (操作):
        let result = format_chat_timestamp(&time);

        // then (期待する結果):
        assert_eq!(result, "2024-03-07 09:05:03");
    }
}
