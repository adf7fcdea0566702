#![forbid(unsafe_code)]

//! Mock tool execution backend.
//!
//! Results mirror a real payment API's shapes but are computed locally
//! and deterministically — card numbers and document ids are digests of
//! the inputs, not random draws, so replays produce identical output.
//! A result optionally carries a pre-built widget under the wire field
//! `_widget` for the engine to render.

use serde::Serialize;
use serde_json::{Value, json};
use vitrine_build::{
    amount, col, divider, frame, frame_content, frame_header, frame_title, key_value_list,
    key_value_row, row, text,
};
use vitrine_schema::format::format_amount_plain;
use vitrine_schema::{Align, FontWeight, Gap, TextColor, TextSize, WidgetNode};

/// Why a tool call failed before producing a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tool name is not in the catalog.
    UnknownTool { name: String },
    /// The arguments are missing or mistyped for this tool.
    BadArguments {
        tool: &'static str,
        detail: String,
    },
}

impl core::fmt::Display for ToolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownTool { name } => write!(f, "unknown tool `{name}`"),
            Self::BadArguments { tool, detail } => {
                write!(f, "bad arguments for `{tool}`: {detail}")
            }
        }
    }
}

impl std::error::Error for ToolError {}

/// A tool's outcome: status, a speakable message, the raw data object,
/// and optionally a ready-to-render widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: Value,
    #[serde(rename = "_widget", skip_serializing_if = "Option::is_none")]
    pub widget: Option<WidgetNode>,
}

impl ToolResult {
    /// The flattened wire object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("tool results serialize to objects")
    }
}

fn req_str<'a>(args: &'a Value, field: &str, tool: &'static str) -> Result<&'a str, ToolError> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::BadArguments {
            tool,
            detail: format!("`{field}` must be a string"),
        })
}

fn req_f64(args: &Value, field: &str, tool: &'static str) -> Result<f64, ToolError> {
    args.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| ToolError::BadArguments {
            tool,
            detail: format!("`{field}` must be a number"),
        })
}

fn req_array<'a>(
    args: &'a Value,
    field: &str,
    tool: &'static str,
) -> Result<&'a Vec<Value>, ToolError> {
    args.get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| ToolError::BadArguments {
            tool,
            detail: format!("`{field}` must be an array"),
        })
}

fn opt_str<'a>(args: &'a Value, field: &str) -> Option<&'a str> {
    args.get(field).and_then(Value::as_str)
}

fn opt_f64(args: &Value, field: &str) -> Option<f64> {
    args.get(field).and_then(Value::as_f64)
}

/// FNV-1a over the input, for demo-stable pseudo identifiers.
fn digest(input: &str) -> u64 {
    input
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

fn labeled_stat(label: &str, value: WidgetNode) -> WidgetNode {
    col(vec![
        text(label).size(TextSize::Xs).color(TextColor::Muted).into(),
        value,
    ])
    .gap(Gap::Sm)
    .into()
}

/// Execute a tool call against the mock backend.
pub fn execute_tool_call(tool: &str, args: &Value) -> Result<ToolResult, ToolError> {
    match tool {
        "pay_contractors_bulk" => pay_contractors_bulk(args),
        "set_account_limits" => set_account_limits(args),
        "set_beneficiary_transfer_limit" => set_beneficiary_transfer_limit(args),
        "create_virtual_card" => create_virtual_card(args),
        "send_invoice" => send_invoice(args),
        "aggregate_transactions" => aggregate_transactions(args),
        "account_snapshot" => Ok(account_snapshot(args)),
        other => Err(ToolError::UnknownTool {
            name: other.to_string(),
        }),
    }
}

fn pay_contractors_bulk(args: &Value) -> Result<ToolResult, ToolError> {
    const TOOL: &str = "pay_contractors_bulk";
    let reference = req_str(args, "batch_reference", TOOL)?;
    let currency = req_str(args, "currency", TOOL)?;
    let items = req_array(args, "items", TOOL)?;
    let mut total = 0.0;
    for item in items {
        total += item
            .get("amount")
            .and_then(Value::as_f64)
            .ok_or_else(|| ToolError::BadArguments {
                tool: TOOL,
                detail: "every item needs a numeric `amount`".to_string(),
            })?;
    }
    let count = items.len();

    let widget = frame(vec![
        frame_header(vec![frame_title("Payment Batch").into()]).into(),
        frame_content(vec![
            row(vec![
                col(vec![
                    text(reference)
                        .size(TextSize::Lg)
                        .weight(FontWeight::Semibold)
                        .into(),
                ])
                .gap(Gap::Sm)
                .into(),
                text("Queued")
                    .color(TextColor::Warning)
                    .weight(FontWeight::Medium)
                    .size(TextSize::Sm)
                    .into(),
            ])
            .align(Align::Between)
            .into(),
            divider().into(),
            row(vec![
                labeled_stat(
                    "Total Amount",
                    amount(total)
                        .currency(currency)
                        .size(TextSize::Md)
                        .weight(FontWeight::Semibold)
                        .into(),
                ),
                labeled_stat(
                    "Recipients",
                    text(count.to_string())
                        .size(TextSize::Md)
                        .weight(FontWeight::Semibold)
                        .into(),
                ),
            ])
            .gap(Gap::Lg)
            .into(),
        ])
        .into(),
    ]);

    Ok(ToolResult {
        status: Some("queued".into()),
        message: Some(format!(
            "Successfully queued payment of {currency} {} to {count} contractor(s)",
            format_amount_plain(total),
        )),
        data: json!({
            "batch_reference": reference,
            "summary": {
                "total": count,
                "succeeded": count,
                "failed": 0,
                "currency": currency,
                "amount_total": total,
            }
        }),
        widget: Some(widget.into()),
    })
}

fn set_account_limits(args: &Value) -> Result<ToolResult, ToolError> {
    Ok(ToolResult {
        status: Some("ok".into()),
        message: Some("Account limits have been successfully updated".into()),
        data: json!({"applied": args}),
        widget: None,
    })
}

fn set_beneficiary_transfer_limit(args: &Value) -> Result<ToolResult, ToolError> {
    const TOOL: &str = "set_beneficiary_transfer_limit";
    let beneficiary = req_str(args, "beneficiary_id", TOOL)?;
    let period = req_str(args, "period", TOOL)?;
    let amount_limit = req_f64(args, "amount_limit", TOOL)?;
    let currency = opt_str(args, "currency").unwrap_or("NGN");
    let alerts_at = opt_f64(args, "alerts_at_percent").unwrap_or(80.0);

    Ok(ToolResult {
        status: Some("ok".into()),
        message: Some(format!(
            "Transfer limit set for {beneficiary}: {currency} {} per {period}",
            format_amount_plain(amount_limit),
        )),
        data: json!({
            "beneficiary_id": beneficiary,
            "policy": {
                "period": period,
                "amount_limit": amount_limit,
                "currency": currency,
                "alerts_at_percent": alerts_at,
            }
        }),
        widget: None,
    })
}

fn create_virtual_card(args: &Value) -> Result<ToolResult, ToolError> {
    const TOOL: &str = "create_virtual_card";
    let label = req_str(args, "label", TOOL)?;
    let currency = req_str(args, "currency", TOOL)?;
    let spend_limit = opt_f64(args, "spend_limit");
    let spend_period = opt_str(args, "spend_period").unwrap_or("lifetime");
    let expires_at = opt_str(args, "expires_at");

    let hash = digest(label);
    let card_id = format!("vc_{:09x}", hash & 0xf_ffff_ffff);
    let last4 = format!("{}", 1000 + hash % 9000);

    let mut card_rows = Vec::new();
    if let Some(limit) = spend_limit {
        card_rows.push(key_value_row(
            "Spend Limit",
            amount(limit).currency(currency).size(TextSize::Sm),
        ));
    }
    card_rows.push(key_value_row("Network", text("VISA").weight(FontWeight::Medium)));

    let masked = || -> WidgetNode {
        text("****").size(TextSize::Xl).weight(FontWeight::Bold).into()
    };
    let widget = frame(vec![
        frame_header(vec![frame_title("Virtual Card").into()]).into(),
        frame_content(vec![
            row(vec![
                text(label)
                    .size(TextSize::Lg)
                    .weight(FontWeight::Semibold)
                    .into(),
                text("Active")
                    .color(TextColor::Success)
                    .weight(FontWeight::Medium)
                    .size(TextSize::Sm)
                    .into(),
            ])
            .align(Align::Between)
            .into(),
            divider().into(),
            col(vec![
                row(vec![
                    masked(),
                    masked(),
                    masked(),
                    text(last4.as_str())
                        .size(TextSize::Xl)
                        .weight(FontWeight::Bold)
                        .into(),
                ])
                .into(),
                key_value_list(card_rows).into(),
            ])
            .into(),
        ])
        .into(),
    ]);

    Ok(ToolResult {
        status: Some("created".into()),
        message: Some(format!(
            "Virtual card \"{label}\" created successfully (ending in {last4})"
        )),
        data: json!({
            "card": {
                "card_id": card_id,
                "label": label,
                "currency": currency,
                "spend_limit": spend_limit,
                "spend_period": spend_period,
                "last4": last4,
                "network": "VISA",
                "state": "active",
                "expires_at": expires_at,
            }
        }),
        widget: Some(widget.into()),
    })
}

fn send_invoice(args: &Value) -> Result<ToolResult, ToolError> {
    const TOOL: &str = "send_invoice";
    let number = req_str(args, "invoice_number", TOOL)?;
    let currency = req_str(args, "currency", TOOL)?;
    let customer = args
        .get("customer")
        .and_then(Value::as_object)
        .ok_or_else(|| ToolError::BadArguments {
            tool: TOOL,
            detail: "`customer` must be an object".to_string(),
        })?;
    let customer_name = customer
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::BadArguments {
            tool: TOOL,
            detail: "`customer.name` must be a string".to_string(),
        })?;
    let line_items = req_array(args, "line_items", TOOL)?;
    let mut total = 0.0;
    for item in line_items {
        let amount = item
            .get("amount")
            .and_then(Value::as_f64)
            .ok_or_else(|| ToolError::BadArguments {
                tool: TOOL,
                detail: "every line item needs a numeric `amount`".to_string(),
            })?;
        let quantity = item.get("quantity").and_then(Value::as_f64).unwrap_or(1.0);
        total += amount * quantity;
    }
    let due_date = opt_str(args, "due_date");
    let invoice_id = format!("inv_{:09x}", digest(number) & 0xf_ffff_ffff);

    let mut rows = vec![
        key_value_row("Customer", text(customer_name).weight(FontWeight::Medium)),
        key_value_row(
            "Amount Due",
            amount(total)
                .currency(currency)
                .size(TextSize::Md)
                .weight(FontWeight::Semibold),
        )
        .emphasis(true),
    ];
    if let Some(due) = due_date {
        rows.push(key_value_row("Due Date", text(due).color(TextColor::Muted)));
    }

    let widget = frame(vec![
        frame_header(vec![frame_title("Invoice").into()]).into(),
        frame_content(vec![
            row(vec![
                text(number)
                    .size(TextSize::Lg)
                    .weight(FontWeight::Semibold)
                    .into(),
                text("Sent").weight(FontWeight::Medium).size(TextSize::Sm).into(),
            ])
            .align(Align::Between)
            .into(),
            divider().into(),
            key_value_list(rows).into(),
        ])
        .into(),
    ]);

    Ok(ToolResult {
        status: Some("sent".into()),
        message: Some(format!(
            "Invoice {number} for {currency} {} sent to {customer_name}",
            format_amount_plain(total),
        )),
        data: json!({
            "invoice_id": invoice_id,
            "invoice_number": number,
            "amount_due": total,
            "currency": currency,
            "hosted_invoice_url": format!("https://pay.moniewave.com/{invoice_id}"),
            "due_date": due_date,
            "customer_viewed": false,
        }),
        widget: Some(widget.into()),
    })
}

fn aggregate_transactions(args: &Value) -> Result<ToolResult, ToolError> {
    const TOOL: &str = "aggregate_transactions";
    let metric = req_str(args, "metric", TOOL)?;
    let from = req_str(args, "from", TOOL)?;
    let to = req_str(args, "to", TOOL)?;
    let currency = opt_str(args, "currency").unwrap_or("NGN");

    if metric == "top_categories" {
        let items = [
            ("Food", 18_000.0),
            ("Family Transfers", 42_500.0),
            ("Transport", 9_000.0),
        ];
        let total: f64 = items.iter().map(|(_, value)| value).sum();

        let category_rows: Vec<_> = items
            .iter()
            .map(|(category, value)| {
                key_value_row(
                    *category,
                    amount(*value)
                        .currency(currency)
                        .size(TextSize::Sm)
                        .weight(FontWeight::Medium),
                )
            })
            .collect();

        let widget = frame(vec![
            frame_header(vec![frame_title("Transaction Analytics").into()]).into(),
            frame_content(vec![
                col(vec![
                    row(vec![
                        text("Top Categories")
                            .size(TextSize::Lg)
                            .weight(FontWeight::Semibold)
                            .into(),
                    ])
                    .align(Align::Center)
                    .gap(Gap::Sm)
                    .into(),
                    divider().into(),
                    key_value_list(category_rows).into(),
                    divider().into(),
                    row(vec![
                        text("Total")
                            .size(TextSize::Sm)
                            .weight(FontWeight::Semibold)
                            .into(),
                        amount(total)
                            .currency(currency)
                            .size(TextSize::Md)
                            .weight(FontWeight::Bold)
                            .into(),
                    ])
                    .align(Align::Between)
                    .into(),
                ])
                .into(),
            ])
            .into(),
        ]);

        let items_json: Vec<Value> = items
            .iter()
            .map(|(category, value)| json!({"category": category, "value": value}))
            .collect();
        return Ok(ToolResult {
            status: None,
            message: None,
            data: json!({
                "metric": metric,
                "items": items_json,
                "currency": currency,
                "period": {"from": from, "to": to},
            }),
            widget: Some(widget.into()),
        });
    }

    // Deterministic stand-in for the metric value, in the same band a
    // live backend would return.
    let value = 100_000 + digest(&format!("{metric}|{from}|{to}")) % 500_000;
    Ok(ToolResult {
        status: None,
        message: None,
        data: json!({
            "metric": metric,
            "value": value,
            "currency": currency,
            "period": {"from": from, "to": to},
        }),
        widget: None,
    })
}

fn account_snapshot(args: &Value) -> ToolResult {
    let window = opt_str(args, "window").unwrap_or("this_month");
    let beneficiary = opt_str(args, "beneficiary_id");
    let currency = "NGN";
    let available = 720_000.0;
    let transfers_count = 14;
    let transfers_value = 155_000.0;
    let invoices_sent = 5;
    let invoices_paid = 3;
    let invoices_value_paid = 610_000.0;

    let top_beneficiaries: Vec<Value> = match beneficiary {
        Some(id) => vec![json!({"id": id, "value": 42_500.0})],
        None => vec![
            json!({"id": "sib-chioma", "value": 42_500.0}),
            json!({"id": "mom", "value": 38_000.0}),
        ],
    };

    let widget = frame(vec![
        frame_header(vec![frame_title("Account Overview").into()]).into(),
        frame_content(vec![
            col(vec![
                col(vec![
                    text("Available Balance")
                        .size(TextSize::Sm)
                        .color(TextColor::Muted)
                        .into(),
                    amount(available)
                        .currency(currency)
                        .size(TextSize::Xl)
                        .weight(FontWeight::Bold)
                        .into(),
                ])
                .gap(Gap::Sm)
                .align(Align::Center)
                .into(),
                divider().spacing(Gap::Lg).into(),
                row(vec![
                    col(vec![
                        text("Transfers")
                            .size(TextSize::Xs)
                            .color(TextColor::Muted)
                            .into(),
                        text(transfers_count.to_string())
                            .size(TextSize::Lg)
                            .weight(FontWeight::Semibold)
                            .into(),
                        amount(transfers_value)
                            .currency(currency)
                            .size(TextSize::Sm)
                            .show_currency(false)
                            .into(),
                    ])
                    .gap(Gap::Sm)
                    .into(),
                    col(vec![
                        text("Invoices Paid")
                            .size(TextSize::Xs)
                            .color(TextColor::Muted)
                            .into(),
                        text(format!("{invoices_paid}/{invoices_sent}"))
                            .size(TextSize::Lg)
                            .weight(FontWeight::Semibold)
                            .into(),
                        amount(invoices_value_paid)
                            .currency(currency)
                            .size(TextSize::Sm)
                            .show_currency(false)
                            .into(),
                    ])
                    .gap(Gap::Sm)
                    .into(),
                ])
                .gap(Gap::Lg)
                .into(),
            ])
            .gap(Gap::Lg)
            .into(),
        ])
        .into(),
    ]);

    ToolResult {
        status: None,
        message: None,
        data: json!({
            "balance": {"currency": currency, "available": available},
            "window": window,
            "transfers": {"count": transfers_count, "value": transfers_value},
            "invoices": {
                "sent": invoices_sent,
                "paid": invoices_paid,
                "value_paid": invoices_value_paid,
            },
            "top_beneficiaries": top_beneficiaries,
        }),
        widget: Some(widget.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_schema::validate_widget;

    fn widget_validates(result: &ToolResult) {
        if let Some(widget) = &result.widget {
            let value = serde_json::to_value(widget).unwrap();
            assert_eq!(&validate_widget(&value).unwrap(), widget);
        }
    }

    #[test]
    fn bulk_payment_totals_and_widget() {
        let args = json!({
            "batch_reference": "BATCH-2026-001",
            "currency": "NGN",
            "items": [{"amount": 50000.0}, {"amount": 60000.0}, {"amount": 40000.0}]
        });
        let result = execute_tool_call("pay_contractors_bulk", &args).unwrap();
        assert_eq!(result.status.as_deref(), Some("queued"));
        assert_eq!(
            result.message.as_deref(),
            Some("Successfully queued payment of NGN 150,000 to 3 contractor(s)")
        );
        assert_eq!(result.data["summary"]["amount_total"], json!(150000.0));
        widget_validates(&result);

        let wire = result.to_value();
        assert_eq!(wire["status"], "queued");
        assert_eq!(wire["batch_reference"], "BATCH-2026-001");
        assert_eq!(wire["_widget"]["type"], "Frame");
    }

    #[test]
    fn bad_arguments_are_structured_errors() {
        let err = execute_tool_call("pay_contractors_bulk", &json!({"currency": "NGN"}))
            .unwrap_err();
        assert!(matches!(err, ToolError::BadArguments { tool: "pay_contractors_bulk", .. }));

        let err = execute_tool_call("warp_core_eject", &json!({})).unwrap_err();
        assert_eq!(
            err,
            ToolError::UnknownTool {
                name: "warp_core_eject".into()
            }
        );
    }

    #[test]
    fn virtual_card_is_deterministic() {
        let args = json!({"label": "Ops Subscriptions", "currency": "NGN", "spend_limit": 200000.0});
        let a = execute_tool_call("create_virtual_card", &args).unwrap();
        let b = execute_tool_call("create_virtual_card", &args).unwrap();
        assert_eq!(a, b);
        let last4 = a.data["card"]["last4"].as_str().unwrap();
        assert_eq!(last4.len(), 4);
        assert!(a.message.as_deref().unwrap().contains(last4));
        widget_validates(&a);
    }

    #[test]
    fn invoice_multiplies_quantities() {
        let args = json!({
            "invoice_number": "INV-104",
            "currency": "NGN",
            "customer": {"name": "Ada Obi", "email": "ada@example.com"},
            "line_items": [
                {"description": "Design", "amount": 20000.0, "quantity": 3},
                {"description": "Hosting", "amount": 5000.0}
            ],
            "due_date": "2026-04-01"
        });
        let result = execute_tool_call("send_invoice", &args).unwrap();
        assert_eq!(result.data["amount_due"], json!(65000.0));
        assert!(
            result.data["hosted_invoice_url"]
                .as_str()
                .unwrap()
                .starts_with("https://pay.moniewave.com/inv_")
        );
        widget_validates(&result);
    }

    #[test]
    fn aggregates_have_two_shapes() {
        let top = execute_tool_call(
            "aggregate_transactions",
            &json!({"metric": "top_categories", "from": "2026-02-01", "to": "2026-03-01"}),
        )
        .unwrap();
        assert!(top.widget.is_some());
        assert_eq!(top.data["items"].as_array().unwrap().len(), 3);
        widget_validates(&top);

        let scalar = execute_tool_call(
            "aggregate_transactions",
            &json!({"metric": "total_transfers_value", "from": "2026-02-01", "to": "2026-03-01"}),
        )
        .unwrap();
        assert!(scalar.widget.is_none());
        let value = scalar.data["value"].as_u64().unwrap();
        assert!((100_000..600_000).contains(&value));
    }

    #[test]
    fn snapshot_scopes_beneficiaries() {
        let all = execute_tool_call("account_snapshot", &json!({})).unwrap();
        assert_eq!(all.data["top_beneficiaries"].as_array().unwrap().len(), 2);
        widget_validates(&all);

        let scoped =
            execute_tool_call("account_snapshot", &json!({"beneficiary_id": "mom"})).unwrap();
        assert_eq!(scoped.data["top_beneficiaries"][0]["id"], "mom");
    }
}
