#![forbid(unsafe_code)]

//! Approval preview cards, shown before a tool executes.
//!
//! Previews are total: they tolerate missing or odd argument fields and
//! fall back to a generic card for unknown tools, because the arguments
//! come straight off the wire and approval must never crash.

use serde_json::Value;
use vitrine_build::{
    amount, col, divider, frame, frame_content, frame_header, frame_title, key_value_list,
    key_value_row, row, text,
};
use vitrine_schema::{Align, FontWeight, Gap, TextColor, TextSize, WidgetNode};

fn str_arg<'a>(args: &'a Value, field: &str) -> Option<&'a str> {
    args.get(field).and_then(Value::as_str)
}

fn num_arg(args: &Value, field: &str) -> Option<f64> {
    args.get(field).and_then(Value::as_f64)
}

fn currency_of(args: &Value) -> String {
    str_arg(args, "currency").unwrap_or("NGN").to_string()
}

/// Status pill in the card's top right corner.
fn status_pill(label: &str) -> WidgetNode {
    text(label)
        .color(TextColor::Warning)
        .weight(FontWeight::Medium)
        .size(TextSize::Sm)
        .into()
}

fn labeled_stat(label: &str, value: WidgetNode) -> WidgetNode {
    col(vec![
        text(label).size(TextSize::Xs).color(TextColor::Muted).into(),
        value,
    ])
    .gap(Gap::Sm)
    .into()
}

/// Build the preview card for a pending tool call.
#[must_use]
pub fn preview_widget(tool: &str, args: &Value) -> WidgetNode {
    match tool {
        "pay_contractors_bulk" => pay_contractors_bulk(args),
        "set_account_limits" => set_account_limits(args),
        "set_beneficiary_transfer_limit" => set_beneficiary_transfer_limit(args),
        "create_virtual_card" => create_virtual_card(args),
        "send_invoice" => send_invoice(args),
        "aggregate_transactions" => aggregate_transactions(args),
        "account_snapshot" => account_snapshot(args),
        _ => generic(tool),
    }
}

fn pay_contractors_bulk(args: &Value) -> WidgetNode {
    let items = args
        .get("items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let total: f64 = items
        .iter()
        .filter_map(|item| item.get("amount").and_then(Value::as_f64))
        .sum();
    let currency = currency_of(args);
    let reference = str_arg(args, "batch_reference").unwrap_or("(no reference)");

    let mut content: Vec<WidgetNode> = vec![
        row(vec![
            col(vec![
                text(reference)
                    .size(TextSize::Lg)
                    .weight(FontWeight::Semibold)
                    .into(),
            ])
            .gap(Gap::Sm)
            .into(),
            status_pill("Pending Approval"),
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
                text(items.len().to_string())
                    .size(TextSize::Md)
                    .weight(FontWeight::Semibold)
                    .into(),
            ),
        ])
        .gap(Gap::Lg)
        .into(),
    ];
    if let Some(narration) = str_arg(args, "narration") {
        content.push(divider().into());
        content.push(labeled_stat("Narration", text(narration).size(TextSize::Sm).into()));
    }

    frame(vec![
        frame_header(vec![frame_title("Payment Preview").into()]).into(),
        frame_content(content).into(),
    ])
    .into()
}

fn set_account_limits(args: &Value) -> WidgetNode {
    let currency = currency_of(args);
    let mut rows = Vec::new();
    for (field, label) in [
        ("balance_limit", "Balance Alert Threshold"),
        ("daily_transfer_limit", "Daily Transfer Limit"),
        ("monthly_transfer_limit", "Monthly Transfer Limit"),
    ] {
        if let Some(value) = num_arg(args, field) {
            rows.push(key_value_row(
                label,
                amount(value).currency(currency.clone()).size(TextSize::Sm),
            ));
        }
    }
    frame(vec![
        frame_header(vec![frame_title("Account Limits Preview").into()]).into(),
        frame_content(vec![key_value_list(rows).into()]).into(),
    ])
    .into()
}

fn set_beneficiary_transfer_limit(args: &Value) -> WidgetNode {
    let currency = currency_of(args);
    let alerts = num_arg(args, "alerts_at_percent").unwrap_or(80.0);
    let rows = vec![
        key_value_row(
            "Beneficiary",
            text(str_arg(args, "beneficiary_id").unwrap_or("(unknown)"))
                .weight(FontWeight::Medium),
        ),
        key_value_row(
            "Period",
            text(str_arg(args, "period").unwrap_or("(unset)"))
                .weight(FontWeight::Medium)
                .size(TextSize::Sm),
        ),
        key_value_row(
            "Limit",
            amount(num_arg(args, "amount_limit").unwrap_or(0.0))
                .currency(currency)
                .size(TextSize::Sm)
                .weight(FontWeight::Semibold),
        )
        .emphasis(true),
        key_value_row(
            "Alert Threshold",
            text(format!("{}%", alerts as i64)).color(TextColor::Muted),
        ),
    ];
    frame(vec![
        frame_header(vec![frame_title("Beneficiary Limit Preview").into()]).into(),
        frame_content(vec![key_value_list(rows).into()]).into(),
    ])
    .into()
}

fn create_virtual_card(args: &Value) -> WidgetNode {
    let currency = currency_of(args);
    let mut rows = vec![key_value_row(
        "Currency",
        text(currency.as_str()).weight(FontWeight::Medium),
    )];
    if let Some(limit) = num_arg(args, "spend_limit") {
        rows.push(key_value_row(
            "Spend Limit",
            amount(limit).currency(currency.clone()).size(TextSize::Sm),
        ));
    }
    if let Some(period) = str_arg(args, "spend_period") {
        rows.push(key_value_row(
            "Limit Period",
            text(period.replace('_', " "))
                .weight(FontWeight::Medium)
                .size(TextSize::Sm),
        ));
    }
    if let Some(expires) = str_arg(args, "expires_at") {
        rows.push(key_value_row(
            "Expires",
            text(expires).size(TextSize::Sm).color(TextColor::Muted),
        ));
    }

    frame(vec![
        frame_header(vec![frame_title("Virtual Card Preview").into()]).into(),
        frame_content(vec![
            row(vec![
                text(str_arg(args, "label").unwrap_or("(unnamed card)"))
                    .size(TextSize::Lg)
                    .weight(FontWeight::Semibold)
                    .into(),
                status_pill("Pending"),
            ])
            .align(Align::Between)
            .into(),
            divider().into(),
            key_value_list(rows).into(),
        ])
        .into(),
    ])
    .into()
}

fn send_invoice(args: &Value) -> WidgetNode {
    let line_items = args
        .get("line_items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let total: f64 = line_items
        .iter()
        .filter_map(|item| {
            let amount = item.get("amount").and_then(Value::as_f64)?;
            let quantity = item.get("quantity").and_then(Value::as_f64).unwrap_or(1.0);
            Some(amount * quantity)
        })
        .sum();
    let customer = args.get("customer").cloned().unwrap_or(Value::Null);
    let customer_line = format!(
        "{} ({})",
        customer.get("name").and_then(Value::as_str).unwrap_or("(unknown)"),
        customer.get("email").and_then(Value::as_str).unwrap_or("no email"),
    );

    let mut rows = vec![
        key_value_row("Customer", text(customer_line).weight(FontWeight::Medium)),
        key_value_row(
            "Items",
            text(format!("{} line item(s)", line_items.len())).color(TextColor::Muted),
        ),
        key_value_row(
            "Total Amount",
            amount(total)
                .currency(currency_of(args))
                .size(TextSize::Md)
                .weight(FontWeight::Semibold),
        )
        .emphasis(true),
    ];
    if let Some(due) = str_arg(args, "due_date") {
        rows.push(key_value_row("Due Date", text(due).color(TextColor::Muted)));
    }

    frame(vec![
        frame_header(vec![frame_title("Invoice Preview").into()]).into(),
        frame_content(vec![
            row(vec![
                text(str_arg(args, "invoice_number").unwrap_or("(draft)"))
                    .size(TextSize::Lg)
                    .weight(FontWeight::Semibold)
                    .into(),
                text("Draft").weight(FontWeight::Medium).size(TextSize::Sm).into(),
            ])
            .align(Align::Between)
            .into(),
            divider().into(),
            key_value_list(rows).into(),
        ])
        .into(),
    ])
    .into()
}

fn aggregate_transactions(args: &Value) -> WidgetNode {
    let metric = str_arg(args, "metric").unwrap_or("(unset)").replace('_', " ");
    let period = format!(
        "{} to {}",
        str_arg(args, "from").unwrap_or("?"),
        str_arg(args, "to").unwrap_or("?"),
    );
    let mut rows = vec![
        key_value_row("Metric", text(metric).weight(FontWeight::Medium).size(TextSize::Sm)),
        key_value_row("Period", text(period).size(TextSize::Sm).color(TextColor::Muted)),
    ];
    if let Some(beneficiary) = args
        .get("filters")
        .and_then(|f| f.get("beneficiary_id"))
        .and_then(Value::as_str)
    {
        rows.push(key_value_row(
            "Beneficiary Filter",
            text(beneficiary).weight(FontWeight::Medium),
        ));
    }
    if let Some(category) = args
        .get("filters")
        .and_then(|f| f.get("category"))
        .and_then(Value::as_str)
    {
        rows.push(key_value_row(
            "Category Filter",
            text(category).weight(FontWeight::Medium),
        ));
    }
    frame(vec![
        frame_header(vec![frame_title("Analytics Query Preview").into()]).into(),
        frame_content(vec![key_value_list(rows).into()]).into(),
    ])
    .into()
}

fn account_snapshot(args: &Value) -> WidgetNode {
    let mut rows = vec![
        key_value_row(
            "Scope",
            text(str_arg(args, "scope").unwrap_or("all"))
                .weight(FontWeight::Medium)
                .size(TextSize::Sm),
        ),
        key_value_row(
            "Time Window",
            text(str_arg(args, "window").unwrap_or("this_month").replace('_', " "))
                .weight(FontWeight::Medium)
                .size(TextSize::Sm),
        ),
    ];
    if let Some(beneficiary) = str_arg(args, "beneficiary_id") {
        rows.push(key_value_row(
            "Beneficiary",
            text(beneficiary).weight(FontWeight::Medium),
        ));
    }
    if let Some(group) = str_arg(args, "group") {
        rows.push(key_value_row("Group", text(group).weight(FontWeight::Medium)));
    }
    frame(vec![
        frame_header(vec![frame_title("Snapshot Query Preview").into()]).into(),
        frame_content(vec![key_value_list(rows).into()]).into(),
    ])
    .into()
}

fn generic(tool: &str) -> WidgetNode {
    frame(vec![
        frame_header(vec![frame_title("Tool Preview").into()]).into(),
        frame_content(vec![
            col(vec![
                text(format!("Tool: {tool}"))
                    .size(TextSize::Lg)
                    .weight(FontWeight::Semibold)
                    .into(),
                text("Arguments provided")
                    .size(TextSize::Sm)
                    .color(TextColor::Muted)
                    .into(),
            ])
            .into(),
        ])
        .into(),
    ])
    .into()
}
