use std::cell::Cell;

use qrpass::models::session::Session;
use qrpass::models::verdict::Verdict;
use qrpass::services::issuer::Issuer;
use qrpass::services::presenter::generate_series;

const T: i64 = 1_700_000_000;
const SECRET: [u8; 32] = [0x42; 32];
const SESSION_ID: &str = "00112233445566778899aabbccddeeff";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_timestamps() {
        let payloads: Vec<_> = generate_series(&SECRET, SESSION_ID, 10, || T).collect();

        assert_eq!(payloads.len(), 10);
        for (i, payload) in payloads.iter().enumerate() {
            assert_eq!(payload.session_id, SESSION_ID);
            assert_eq!(payload.timestamp, (T + i as i64).to_string());
            assert_eq!(payload.token.len(), 64);
        }
    }

    #[test]
    fn test_each_payload_valid_at_its_own_time() {
        for payload in generate_series(&SECRET, SESSION_ID, 10, || T) {
            let now: i64 = payload.timestamp.parse().unwrap();
            let mut issuer = Issuer::new(Session::new(SESSION_ID.to_string(), SECRET));
            assert_eq!(
                issuer.present(&payload.to_string(), now).unwrap(),
                Verdict::Valid
            );
        }
    }

    #[test]
    fn test_late_payloads_rejected_by_early_issuer() {
        let payloads: Vec<_> = generate_series(&SECRET, SESSION_ID, 12, || T).collect();

        let mut issuer = Issuer::new(Session::new(SESSION_ID.to_string(), SECRET));
        assert_eq!(
            issuer.present(&payloads[10].to_string(), T).unwrap(),
            Verdict::Valid
        );

        let mut issuer = Issuer::new(Session::new(SESSION_ID.to_string(), SECRET));
        assert_eq!(
            issuer.present(&payloads[11].to_string(), T).unwrap(),
            Verdict::WindowExceeded
        );
    }

    #[test]
    fn test_tokens_differ_per_timestamp() {
        let mut tokens: Vec<String> = generate_series(&SECRET, SESSION_ID, 10, || T)
            .map(|p| p.token)
            .collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_series_is_lazy_and_exact_size() {
        let reads = Cell::new(0);
        let clock = || {
            reads.set(reads.get() + 1);
            T
        };

        let mut series = generate_series(&SECRET, SESSION_ID, 3, clock);
        assert_eq!(series.len(), 3);
        assert_eq!(reads.get(), 0);

        series.next();
        assert_eq!(reads.get(), 1);
        assert_eq!(series.len(), 2);

        assert_eq!(series.by_ref().count(), 2);
        assert_eq!(reads.get(), 3);
        assert!(series.next().is_none());
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn test_clock_is_read_per_payload() {
        let now = Cell::new(T);
        let clock = || {
            let t = now.get();
            now.set(t + 1);
            t
        };

        let stamps: Vec<String> = generate_series(&SECRET, SESSION_ID, 3, clock)
            .map(|p| p.timestamp)
            .collect();

        // Clock advances by one per read and the offset adds i on top.
        assert_eq!(stamps, vec![
            T.to_string(),
            (T + 2).to_string(),
            (T + 4).to_string(),
        ]);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(generate_series(&SECRET, SESSION_ID, 0, || T).count(), 0);
    }

    #[test]
    fn test_clock_near_upper_bound_saturates() {
        let stamps: Vec<String> = generate_series(&SECRET, SESSION_ID, 3, || i64::MAX - 1)
            .map(|p| p.timestamp)
            .collect();

        assert_eq!(stamps, vec![
            (i64::MAX - 1).to_string(),
            i64::MAX.to_string(),
            i64::MAX.to_string(),
        ]);
    }
}
