#![forbid(unsafe_code)]

//! Builders for Vitrine widget trees.
//!
//! Three layers, thinnest first:
//!
//! - [`primitives`] — one function per node type, applying the documented
//!   defaults (`row` gets `gap: md, align: start`, `button` gets
//!   `variant: outline, size: md`, and so on). Builders never validate.
//! - [`patterns`] — composition helpers: key/value rows that auto-wrap
//!   bare strings and numbers, list normalization, button groups.
//! - [`financial`] — presentation mappers from flat fintech records to
//!   ready-to-render frames.
//!
//! [`json`] holds the wire entry points (`from_json`, `to_json`,
//! `hydrate_template`) and [`validated`] the opt-in validation wrappers.

pub mod financial;
pub mod json;
pub mod patterns;
pub mod primitives;
pub mod validated;

pub use financial::{
    AccountSnapshotData, InvoiceData, LimitData, PaymentSummaryData, TransactionAggregateData,
    VirtualCardData, account_snapshot, invoice, limit, payment_summary, transaction_aggregate,
    virtual_card,
};
pub use json::{WidgetJsonError, from_json, from_value, hydrate_template, to_json, to_json_compact};
pub use patterns::{FieldValue, KeyValueField, button_group, key_value_list, key_value_row};
pub use primitives::{
    amount, avatar, button, col, divider, frame, frame_actions, frame_content, frame_header,
    frame_title, row, spacer, text, time,
};
pub use validated::{is_validation_enabled, maybe_validated, set_validation_enabled, validated};
