#![forbid(unsafe_code)]

//! The tool catalog: names, descriptions, and JSON-schema parameters for
//! the seven fintech tools the assistant can call.

use serde_json::{Value, json};

/// One callable tool, in the realtime API's function format.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

impl ToolDef {
    /// The wire object sent in a session update.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        json!({
            "type": "function",
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters,
        })
    }
}

/// Progress line shown while a tool runs.
#[must_use]
pub fn status_label(tool: &str) -> &'static str {
    match tool {
        "pay_contractors_bulk" => "Processing payments...",
        "set_account_limits" => "Setting account limits...",
        "set_beneficiary_transfer_limit" => "Updating transfer limits...",
        "create_virtual_card" => "Creating virtual card...",
        "send_invoice" => "Sending invoice...",
        "aggregate_transactions" => "Analyzing transactions...",
        "account_snapshot" => "Getting account snapshot...",
        _ => "Processing request...",
    }
}

/// The full catalog.
#[must_use]
pub fn tools_config() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "pay_contractors_bulk",
            description: "Bulk pay multiple contractors in one batch transaction. \
                          Tell the user you are processing the payment.",
            parameters: json!({
                "type": "object",
                "required": ["batch_reference", "currency", "items"],
                "properties": {
                    "batch_reference": {"type": "string", "description": "Unique batch reference ID"},
                    "currency": {"type": "string", "enum": ["NGN", "GHS", "KES", "USD", "ZAR"]},
                    "narration": {"type": "string"},
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "required": ["amount", "bank_code", "account_number", "beneficiary_name"],
                            "properties": {
                                "amount": {"type": "number"},
                                "bank_code": {"type": "string"},
                                "account_number": {"type": "string"},
                                "beneficiary_name": {"type": "string"},
                                "reference": {"type": "string"},
                                "narration": {"type": "string"}
                            }
                        }
                    }
                }
            }),
        },
        ToolDef {
            name: "set_account_limits",
            description: "Set global balance and transfer limits for the user account",
            parameters: json!({
                "type": "object",
                "properties": {
                    "balance_limit": {"type": "number", "description": "Maximum wallet balance alert threshold"},
                    "daily_transfer_limit": {"type": "number"},
                    "monthly_transfer_limit": {"type": "number"},
                    "currency": {"type": "string", "enum": ["NGN", "GHS", "KES", "USD", "ZAR"], "default": "NGN"}
                }
            }),
        },
        ToolDef {
            name: "set_beneficiary_transfer_limit",
            description: "Set per-beneficiary transfer limit policy with optional alerts",
            parameters: json!({
                "type": "object",
                "required": ["beneficiary_id", "period", "amount_limit"],
                "properties": {
                    "beneficiary_id": {"type": "string", "description": "Beneficiary identifier or name"},
                    "period": {"type": "string", "enum": ["daily", "weekly", "monthly"]},
                    "amount_limit": {"type": "number"},
                    "currency": {"type": "string", "enum": ["NGN", "GHS", "KES", "USD", "ZAR"], "default": "NGN"},
                    "alerts_at_percent": {"type": "number", "description": "Alert when this percentage of limit is reached", "default": 80}
                }
            }),
        },
        ToolDef {
            name: "create_virtual_card",
            description: "Create a scoped virtual debit card with spending controls and optional expiration",
            parameters: json!({
                "type": "object",
                "required": ["label", "currency"],
                "properties": {
                    "label": {"type": "string", "description": "Card label/name for identification"},
                    "currency": {"type": "string", "enum": ["NGN", "USD", "EUR", "GBP"]},
                    "spend_limit": {"type": "number", "description": "Maximum spending limit"},
                    "spend_period": {"type": "string", "enum": ["per_transaction", "daily", "monthly", "lifetime"], "default": "lifetime"},
                    "expires_at": {"type": "string", "description": "Card expiration date (ISO datetime)"}
                }
            }),
        },
        ToolDef {
            name: "send_invoice",
            description: "Create and send an invoice to a customer via email or other channels",
            parameters: json!({
                "type": "object",
                "required": ["invoice_number", "customer", "line_items", "currency"],
                "properties": {
                    "invoice_number": {"type": "string"},
                    "customer": {
                        "type": "object",
                        "required": ["name", "email"],
                        "properties": {
                            "name": {"type": "string"},
                            "email": {"type": "string"},
                            "phone": {"type": "string"}
                        }
                    },
                    "line_items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "required": ["description", "amount"],
                            "properties": {
                                "description": {"type": "string"},
                                "amount": {"type": "number"},
                                "quantity": {"type": "number", "default": 1}
                            }
                        }
                    },
                    "currency": {"type": "string", "enum": ["NGN", "GHS", "KES", "USD"]},
                    "due_date": {"type": "string", "description": "Due date in YYYY-MM-DD format"},
                    "notes": {"type": "string"}
                }
            }),
        },
        ToolDef {
            name: "aggregate_transactions",
            description: "Compute transaction and invoice aggregates over a time period with optional filters",
            parameters: json!({
                "type": "object",
                "required": ["metric", "from", "to"],
                "properties": {
                    "metric": {
                        "type": "string",
                        "enum": [
                            "total_transfers_value", "total_transfers_count",
                            "total_transactions_value", "total_transactions_count",
                            "total_invoices_value", "total_invoices_count",
                            "top_categories"
                        ]
                    },
                    "from": {"type": "string", "description": "Start date/time (ISO datetime)"},
                    "to": {"type": "string", "description": "End date/time (ISO datetime)"},
                    "currency": {"type": "string", "enum": ["NGN", "GHS", "KES", "USD", "ZAR"], "default": "NGN"},
                    "filters": {
                        "type": "object",
                        "properties": {
                            "beneficiary_id": {"type": "string"},
                            "category": {"type": "string"}
                        }
                    }
                }
            }),
        },
        ToolDef {
            name: "account_snapshot",
            description: "Get a summary of account balances and key KPIs for a time window",
            parameters: json!({
                "type": "object",
                "properties": {
                    "scope": {"type": "string", "enum": ["all", "beneficiary", "group"], "default": "all"},
                    "beneficiary_id": {"type": "string"},
                    "group": {"type": "string"},
                    "window": {"type": "string", "enum": ["this_week", "this_month", "last_month", "this_year"], "default": "this_month"}
                }
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_tools_with_unique_names() {
        let tools = tools_config();
        assert_eq!(tools.len(), 7);
        let mut names: Vec<_> = tools.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn wire_shape() {
        let wire = tools_config()[0].to_wire();
        assert_eq!(wire["type"], "function");
        assert_eq!(wire["name"], "pay_contractors_bulk");
        assert_eq!(wire["parameters"]["type"], "object");
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label("send_invoice"), "Sending invoice...");
        assert_eq!(status_label("anything_else"), "Processing request...");
    }
}
