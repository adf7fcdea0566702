#![forbid(unsafe_code)]

//! Financial presentation builders.
//!
//! Each builder maps a flat data record to a `Frame` wrapping a
//! `KeyValueList` of formatted fields. Deterministic given their input;
//! no business logic lives here. Currency amounts use the fixed
//! zero-fractional-digits policy from `vitrine_schema::format` and
//! timestamps the fixed human-readable patterns.

use serde::Deserialize;
use vitrine_schema::FrameProps;
use vitrine_schema::format::{format_currency, format_date, format_date_short};

use crate::patterns::{KeyValueField, key_value_list};
use crate::primitives::frame;

/// Batch payment summary fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryData {
    pub batch_reference: String,
    pub total_amount: f64,
    pub recipient_count: u32,
    pub currency: String,
    pub status: String,
    pub timestamp: String,
}

/// Invoice display fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: f64,
    pub currency: String,
    pub due_date: String,
    pub status: String,
}

/// Account and transfer limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitData {
    pub account_limit: f64,
    pub daily_limit: f64,
    pub monthly_limit: f64,
    pub beneficiary_limit: f64,
    pub currency: String,
}

/// Aggregated transaction analytics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAggregateData {
    pub total_transfer_value: f64,
    pub total_transfer_count: u32,
    pub top_category: String,
    pub period: String,
    pub currency: String,
}

/// Virtual card display fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCardData {
    pub card_label: String,
    pub card_number: String,
    pub spend_limit: f64,
    pub spend_period: String,
    pub expires_at: String,
    pub currency: String,
}

/// Account balances and identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshotData {
    pub account_balance: f64,
    pub available_balance: f64,
    pub currency: String,
    pub account_number: String,
    pub account_name: String,
}

/// A dateish field that may not parse; show it raw rather than fail the
/// whole card.
fn date_or_raw(input: &str) -> String {
    format_date(input).unwrap_or_else(|_| input.to_string())
}

fn date_short_or_raw(input: &str) -> String {
    format_date_short(input).unwrap_or_else(|_| input.to_string())
}

/// Batch payment summary card.
#[must_use]
pub fn payment_summary(data: &PaymentSummaryData) -> FrameProps {
    let fields = vec![
        KeyValueField::new("Batch Reference", data.batch_reference.as_str()),
        KeyValueField::new(
            "Total Amount",
            format_currency(data.total_amount, &data.currency),
        ),
        KeyValueField::new(
            "Recipients",
            format!("{} beneficiaries", data.recipient_count),
        ),
        KeyValueField::new("Status", data.status.as_str()),
        KeyValueField::new("Created", date_or_raw(&data.timestamp)),
    ];
    frame(vec![key_value_list(fields).into()]).class_name("payment-summary-widget")
}

/// Invoice card.
#[must_use]
pub fn invoice(data: &InvoiceData) -> FrameProps {
    let fields = vec![
        KeyValueField::new("Invoice Number", data.invoice_number.as_str()),
        KeyValueField::new("Customer", data.customer_name.as_str()),
        KeyValueField::new("Email", data.customer_email.as_str()),
        KeyValueField::new(
            "Total Amount",
            format_currency(data.total_amount, &data.currency),
        ),
        KeyValueField::new("Due Date", date_short_or_raw(&data.due_date)),
        KeyValueField::new("Status", data.status.as_str()),
    ];
    frame(vec![key_value_list(fields).into()]).class_name("invoice-widget")
}

/// Account limits card.
#[must_use]
pub fn limit(data: &LimitData) -> FrameProps {
    let fields = vec![
        KeyValueField::new(
            "Account Balance Limit",
            format_currency(data.account_limit, &data.currency),
        ),
        KeyValueField::new(
            "Daily Transfer Limit",
            format_currency(data.daily_limit, &data.currency),
        ),
        KeyValueField::new(
            "Monthly Transfer Limit",
            format_currency(data.monthly_limit, &data.currency),
        ),
        KeyValueField::new(
            "Per-Beneficiary Limit",
            format_currency(data.beneficiary_limit, &data.currency),
        ),
    ];
    frame(vec![key_value_list(fields).into()]).class_name("limit-widget")
}

/// Transaction analytics card.
#[must_use]
pub fn transaction_aggregate(data: &TransactionAggregateData) -> FrameProps {
    let fields = vec![
        KeyValueField::new("Period", data.period.as_str()),
        KeyValueField::new(
            "Total Transfer Value",
            format_currency(data.total_transfer_value, &data.currency),
        ),
        KeyValueField::new(
            "Total Transfers",
            format!("{} transactions", data.total_transfer_count),
        ),
        KeyValueField::new("Top Category", data.top_category.as_str()),
    ];
    frame(vec![key_value_list(fields).into()]).class_name("transaction-aggregate-widget")
}

/// Virtual card details card.
#[must_use]
pub fn virtual_card(data: &VirtualCardData) -> FrameProps {
    let fields = vec![
        KeyValueField::new("Card Label", data.card_label.as_str()),
        KeyValueField::new("Card Number", data.card_number.as_str()),
        KeyValueField::new(
            "Spend Limit",
            format_currency(data.spend_limit, &data.currency),
        ),
        KeyValueField::new("Spend Period", data.spend_period.as_str()),
        KeyValueField::new("Expires", date_short_or_raw(&data.expires_at)),
    ];
    frame(vec![key_value_list(fields).into()]).class_name("virtual-card-widget")
}

/// Account balance card. The account balance row is emphasized.
#[must_use]
pub fn account_snapshot(data: &AccountSnapshotData) -> FrameProps {
    let fields = vec![
        KeyValueField::new("Account Number", data.account_number.as_str()),
        KeyValueField::new("Account Name", data.account_name.as_str()),
        KeyValueField::new(
            "Account Balance",
            format_currency(data.account_balance, &data.currency),
        )
        .emphasis(true),
        KeyValueField::new(
            "Available Balance",
            format_currency(data.available_balance, &data.currency),
        ),
    ];
    frame(vec![key_value_list(fields).into()]).class_name("account-snapshot-widget")
}
