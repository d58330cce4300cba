//! Wall-clock time.

use chrono::{Local, NaiveDateTime};

/// Current local wall-clock time, without a timezone attached.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_close_to_system_time() {
        let reference = Local::now().naive_local();
        let observed = now();
        let skew = (observed - reference).num_seconds().abs();
        assert!(skew <= 1, "skew = {skew}s");
    }

    #[test]
    fn test_now_does_not_go_backwards_between_calls() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
