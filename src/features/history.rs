//! Recent conversion history and its plain-text export.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;

use crate::core::scheme::Scheme;
use crate::encoders::algorithms::errors::ConversionError;

/// Number of conversions the ledger keeps.
pub const HISTORY_CAPACITY: usize = 10;

/// Medium date, short time; e.g. `Oct 16, 2026 at 3:04 PM`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

const SEPARATOR: &str = "----------------------";

/// Rejects `chrono` format strings with unknown or malformed specifiers,
/// which would otherwise fail while rendering.
pub fn validate_date_format(format: &str) -> Result<(), ConversionError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConversionError::InvalidDateFormat {
            format: format.to_string(),
        });
    }
    Ok(())
}

/// One completed conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub input: String,
    pub output: String,
    pub scheme: Scheme,
    pub reverse: bool,
    pub timestamp: DateTime<Local>,
}

impl ConversionResult {
    /// Stamps the conversion with the current local time.
    pub fn new(
        input: impl Into<String>,
        output: impl Into<String>,
        scheme: Scheme,
        reverse: bool,
    ) -> Self {
        Self::at(input, output, scheme, reverse, Local::now())
    }

    pub fn at(
        input: impl Into<String>,
        output: impl Into<String>,
        scheme: Scheme,
        reverse: bool,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            scheme,
            reverse,
            timestamp,
        }
    }

    fn render(&self, date_format: &str) -> String {
        format!(
            "Format: {}\nInput: {}\nOutput: {}\nDate: {}\n{}",
            self.scheme.display_name(),
            self.input,
            self.output,
            self.timestamp.format(date_format),
            SEPARATOR
        )
    }
}

/// Bounded, most-recent-first record of conversions.
///
/// All methods take `&self`; a single lock covers each read-modify-write,
/// so the ledger can be shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: Mutex<VecDeque<ConversionResult>>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY + 1)),
        }
    }

    /// Puts `result` first and evicts the oldest entry past capacity.
    pub fn record(&self, result: ConversionResult) {
        let mut entries = self.entries.lock();
        entries.push_front(result);
        entries.truncate(HISTORY_CAPACITY);
    }

    /// Snapshot, newest first.
    pub fn entries(&self) -> Vec<ConversionResult> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<ConversionResult> {
        self.entries.lock().front().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Plain-text report, newest first.
    pub fn export(&self) -> String {
        self.render_all(DEFAULT_DATE_FORMAT)
    }

    /// Plain-text report with a custom `chrono` date format.
    pub fn export_with(&self, date_format: &str) -> Result<String, ConversionError> {
        validate_date_format(date_format)?;
        Ok(self.render_all(date_format))
    }

    fn render_all(&self, date_format: &str) -> String {
        self.entries
            .lock()
            .iter()
            .map(|entry| entry.render(date_format))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 15, 4, 0).unwrap()
    }

    fn entry(n: usize) -> ConversionResult {
        ConversionResult::at(
            format!("in{}", n),
            format!("out{}", n),
            Scheme::Rot13,
            false,
            fixed_time(),
        )
    }

    #[test]
    fn test_most_recent_first() {
        let ledger = HistoryLedger::new();
        ledger.record(entry(1));
        ledger.record(entry(2));

        let entries = ledger.entries();
        assert_eq!(entries[0].input, "in2");
        assert_eq!(entries[1].input, "in1");
        assert_eq!(ledger.latest().unwrap().input, "in2");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let ledger = HistoryLedger::new();
        for n in 0..25 {
            ledger.record(entry(n));
            assert!(ledger.len() <= HISTORY_CAPACITY);
            assert_eq!(ledger.latest().unwrap().input, format!("in{}", n));
        }

        let entries = ledger.entries();
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert_eq!(entries.last().unwrap().input, "in15");
    }

    #[test]
    fn test_export_format() {
        let ledger = HistoryLedger::new();
        ledger.record(ConversionResult::at(
            "SOS",
            "... --- ...",
            Scheme::Morse,
            false,
            fixed_time(),
        ));
        ledger.record(ConversionResult::at("Hi", "SGk=", Scheme::Base64, false, fixed_time()));

        let expected = "Format: Base64\n\
                        Input: Hi\n\
                        Output: SGk=\n\
                        Date: Oct 16, 2026 at 3:04 PM\n\
                        ----------------------\n\
                        Format: Morse Code\n\
                        Input: SOS\n\
                        Output: ... --- ...\n\
                        Date: Oct 16, 2026 at 3:04 PM\n\
                        ----------------------";
        assert_eq!(ledger.export(), expected);
    }

    #[test]
    fn test_export_custom_date_format() {
        let ledger = HistoryLedger::new();
        ledger.record(entry(1));
        assert!(
            ledger
                .export_with("%Y-%m-%d")
                .unwrap()
                .contains("Date: 2026-10-16\n")
        );
    }

    #[test]
    fn test_export_rejects_bad_date_format() {
        let ledger = HistoryLedger::new();
        ledger.record(entry(1));

        for format in ["%Q", "%", "%Y-%m-%"] {
            assert_eq!(
                ledger.export_with(format),
                Err(ConversionError::InvalidDateFormat {
                    format: format.to_string()
                })
            );
        }
        assert!(validate_date_format(DEFAULT_DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_empty_export() {
        let ledger = HistoryLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.export(), "");
    }

    #[test]
    fn test_clear() {
        let ledger = HistoryLedger::new();
        ledger.record(entry(1));
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_export_json() {
        let ledger = HistoryLedger::new();
        ledger.record(entry(7));

        let json: serde_json::Value = serde_json::from_str(&ledger.export_json().unwrap()).unwrap();
        assert_eq!(json[0]["input"], "in7");
        assert_eq!(json[0]["scheme"], "rot13");
        assert_eq!(json[0]["reverse"], false);
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let ledger = Arc::new(HistoryLedger::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for n in 0..5 {
                        ledger.record(entry(t * 10 + n));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.len(), HISTORY_CAPACITY);
    }
}
