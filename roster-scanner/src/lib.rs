//! # Roster Scanner
//!
//! Finds entries whose expiration date has passed and raises one
//! notification per expired entry.
//!
//! Expiration dates are fixed-width ISO strings, so the comparison is a
//! plain lexicographic one against today's date. Scanning keeps no dedup
//! state: re-scanning the same unchanged collection on the same day
//! re-sends the same notifications.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use chrono::NaiveDate;
use tracing::{debug, warn};

use roster_core::constants::DATE_FORMAT;
use roster_core::traits::Notifier;
use roster_core::types::Entry;

/// Outcome of one scan run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Entries inspected.
    pub scanned: usize,
    /// Entries past their expiration date.
    pub expired: usize,
    /// Notifications actually delivered (send failures are swallowed).
    pub notified: usize,
}

/// Expiration scanner over a record collection snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpiryScanner;

impl ExpiryScanner {
    /// Creates a scanner.
    pub fn new() -> Self {
        Self
    }

    /// Returns the entries expired as of `today`, in collection order.
    ///
    /// An entry expiring today is not yet expired; only strictly earlier
    /// dates count.
    pub fn expired<'a>(&self, entries: &'a [Entry], today: NaiveDate) -> Vec<&'a Entry> {
        let cutoff = today.format(DATE_FORMAT).to_string();
        entries
            .iter()
            .filter(|entry| entry.expiration.as_str() < cutoff.as_str())
            .collect()
    }

    /// Sends one notification per expired entry.
    ///
    /// Send failures are logged and swallowed so a broken side channel
    /// never aborts the scan.
    pub async fn notify_expired(
        &self,
        entries: &[Entry],
        today: NaiveDate,
        notifier: &dyn Notifier,
    ) -> ScanOutcome {
        let expired = self.expired(entries, today);
        let mut notified = 0;

        for entry in &expired {
            let text = format!("Expired entry detected: {}", entry.describe());
            match notifier.send(&text).await {
                Ok(()) => notified += 1,
                Err(e) => warn!(name = %entry.name, error = %e, "Expiration notification failed"),
            }
        }

        debug!(
            scanned = entries.len(),
            expired = expired.len(),
            notified,
            "Expiration scan complete"
        );

        ScanOutcome {
            scanned: entries.len(),
            expired: expired.len(),
            notified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use roster_core::error::{Result, RosterError};

    fn entry(name: &str, expiration: &str) -> Entry {
        Entry::new(name, expiration, "10.0.0.1")
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    /// Records sent texts; fails sends whose text contains "poison".
    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, text: &str) -> Result<()> {
            if text.contains("poison") {
                return Err(RosterError::NotificationFailed("rejected".into()));
            }
            self.sent.lock().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_exactly_one_notification_for_the_expired_entry() {
        let entries = vec![entry("old", "2024-12-01"), entry("fresh", "2025-02-01")];
        let notifier = RecordingNotifier::default();

        let outcome = ExpiryScanner::new()
            .notify_expired(&entries, date("2025-01-10"), &notifier)
            .await;

        assert_eq!(outcome, ScanOutcome { scanned: 2, expired: 1, notified: 1 });
        let sent = notifier.sent.lock();
        assert_eq!(
            sent.as_slice(),
            ["Expired entry detected: old, 2024-12-01, 10.0.0.1"]
        );
    }

    #[test]
    fn test_expiring_today_is_not_expired() {
        let scanner = ExpiryScanner::new();
        let entries = vec![entry("edge", "2025-01-10"), entry("gone", "2025-01-09")];

        let expired = scanner.expired(&entries, date("2025-01-10"));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name, "gone");
    }

    #[test]
    fn test_expired_preserves_collection_order() {
        let scanner = ExpiryScanner::new();
        let entries = vec![
            entry("c", "2020-03-01"),
            entry("a", "2020-01-01"),
            entry("b", "2020-02-01"),
        ];

        let names: Vec<_> = scanner
            .expired(&entries, date("2025-01-01"))
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_rescan_resends_without_dedup() {
        let entries = vec![entry("old", "2024-12-01")];
        let notifier = RecordingNotifier::default();
        let scanner = ExpiryScanner::new();

        scanner.notify_expired(&entries, date("2025-01-10"), &notifier).await;
        scanner.notify_expired(&entries, date("2025-01-10"), &notifier).await;

        assert_eq!(notifier.sent.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_send_failure_is_swallowed() {
        let entries = vec![entry("poison", "2020-01-01"), entry("old", "2020-01-01")];
        let notifier = RecordingNotifier::default();

        let outcome = ExpiryScanner::new()
            .notify_expired(&entries, date("2025-01-10"), &notifier)
            .await;

        // The failed send is counted as expired but not notified, and the
        // scan continues past it.
        assert_eq!(outcome, ScanOutcome { scanned: 2, expired: 2, notified: 1 });
        assert_eq!(notifier.sent.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let notifier = RecordingNotifier::default();
        let outcome = ExpiryScanner::new()
            .notify_expired(&[], date("2025-01-10"), &notifier)
            .await;
        assert_eq!(outcome, ScanOutcome::default());
    }
}
