use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Millisecond-epoch id as a decimal string, bumped past the previously
/// issued id so two calls within the same millisecond still differ.
pub fn next_employee_id() -> String {
    let now = Utc::now().timestamp_millis() as u64;
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate.to_string(),
            Err(observed) => prev = observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_increasing() {
        let ids: Vec<u64> = (0..1000)
            .map(|_| next_employee_id().parse().unwrap())
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
