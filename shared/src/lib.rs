use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single income entry in the ledger.
///
/// Serialized field names follow the snapshot/wire format (camelCase);
/// `date` is a calendar date with no time component and round-trips as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    /// Creation-time identifier in epoch milliseconds (unique per ledger)
    pub id: u64,
    /// Calendar date the income is attributed to
    pub date: NaiveDate,
    /// Full English day name, derived from `date` at creation
    pub weekday: String,
    /// Paper money portion (non-negative)
    pub cash_amount: f64,
    /// Coin portion (non-negative)
    pub coin_amount: f64,
    /// Always `cash_amount + coin_amount`, never edited independently
    pub total: f64,
    /// Wall-clock "HH:MM" the entry was recorded at, display-only
    pub recorded_time: String,
}

impl IncomeEntry {
    /// Build an entry with `weekday` and `total` derived from the inputs,
    /// so both invariants hold by construction.
    pub fn new(
        id: u64,
        date: NaiveDate,
        cash_amount: f64,
        coin_amount: f64,
        recorded_time: String,
    ) -> Self {
        Self {
            id,
            date,
            weekday: weekday_name(date).to_string(),
            cash_amount,
            coin_amount,
            total: cash_amount + coin_amount,
            recorded_time,
        }
    }
}

/// Get the full English day name for a date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Request for adding an income entry to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    /// Calendar date the entry is attributed to
    pub date: NaiveDate,
    /// Paper money amount (non-negative)
    pub cash_amount: f64,
    /// Coin amount (non-negative)
    pub coin_amount: f64,
    /// Wall-clock "HH:MM" associated with the entry
    pub recorded_time: String,
}

/// Derived statistics over a ledger snapshot for a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStats {
    /// Sum of totals dated exactly on the reference date
    pub today_total: f64,
    /// Sum over the inclusive 7-day window ending on the reference date
    pub weekly_total: f64,
    /// Sum over the reference date's calendar month
    pub monthly_total: f64,
    /// Sum over the calendar month immediately before the reference month
    pub last_month_total: f64,
    /// Month-over-month growth in percent (100 when growing from zero)
    pub growth_percentage: f64,
    /// Whether the growth indicator points up (`growth_percentage >= 0`)
    pub growth_is_positive: bool,
    /// Per-month totals in first-seen order, for chart rendering
    pub monthly_series: Vec<MonthlyTotal>,
}

/// One month's summed income, labeled like "Mar 2024".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub label: String,
    pub total: f64,
}

/// The best comparable entry from the previous calendar month, with the
/// change derived against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMonthComparison {
    /// The matched entry (same weekday, nearest week of month)
    pub matched: IncomeEntry,
    /// `target.total - matched.total`
    pub difference: f64,
    /// `difference / matched.total * 100`; `None` when the matched total
    /// is zero (not computable)
    pub percent_change: Option<f64>,
}

/// Request body for storing a payload in the sync store.
///
/// `code` selects the caller-supplied-code variant; when absent the server
/// assigns a random code. A missing `data` field deserializes as JSON null
/// and is rejected by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSyncRequest {
    pub code: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Response after storing a payload: the code to hand to the other client
/// and the expiry instant in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSyncResponse {
    pub code: String,
    pub expires_at: i64,
}

/// Response when retrieving a stored payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieveSyncResponse {
    pub data: Value,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Error body returned by every failing sync endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
