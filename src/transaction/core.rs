//! Defines the core data models for transactions.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::db::DocumentId;

/// The ID of a transaction, assigned by the store when the transaction is created.
pub type TransactionId = DocumentId;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only ever created by the store, see [NewTransaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: Decimal,
    /// Whether the transaction is income or an expense, e.g. "INCOME".
    ///
    /// See [TransactionType] for the documented values. Other values are
    /// stored as given.
    #[serde(rename = "type")]
    pub kind: String,
    /// How the transaction is treated for tax purposes, e.g. "VAT".
    ///
    /// See [TaxCategory] for the documented values. Other values are stored
    /// as given.
    pub tax_category: String,
    /// When the transaction happened.
    pub date: Date,
}

/// The fields of a transaction that has not been stored yet.
///
/// This is also the shape of the stored document: the ID is kept by the store
/// and any `id` in an incoming payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: Decimal,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: String,
    /// How the transaction is treated for tax purposes.
    pub tax_category: String,
    /// When the transaction happened.
    pub date: Date,
}

impl NewTransaction {
    /// Attach the store-assigned `id`.
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            tax_category: self.tax_category,
            date: self.date,
        }
    }
}

/// The documented values for [Transaction::kind].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    #[default]
    Expense,
}

impl TransactionType {
    /// All documented transaction types.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The text stored for this transaction type.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The documented values for [Transaction::tax_category].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaxCategory {
    /// No special tax treatment.
    #[default]
    None,
    /// The transaction can be deducted from taxable income.
    TaxDeductible,
    /// The transaction includes value added tax.
    Vat,
}

impl TaxCategory {
    /// All documented tax categories.
    pub const ALL: [TaxCategory; 3] = [
        TaxCategory::None,
        TaxCategory::TaxDeductible,
        TaxCategory::Vat,
    ];

    /// The text stored for this tax category.
    pub fn as_str(self) -> &'static str {
        match self {
            TaxCategory::None => "NONE",
            TaxCategory::TaxDeductible => "TAX_DEDUCTIBLE",
            TaxCategory::Vat => "VAT",
        }
    }
}

impl Display for TaxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use time::macros::date;

    use crate::transaction::{NewTransaction, TaxCategory, Transaction, TransactionType};

    fn office_supplies() -> NewTransaction {
        NewTransaction {
            description: "Office Supplies".to_owned(),
            amount: dec!(150.00),
            kind: TransactionType::Expense.to_string(),
            tax_category: TaxCategory::TaxDeductible.to_string(),
            date: date!(2026 - 02 - 08),
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let transaction = office_supplies().with_id("507f1f77bcf86cd799439011".to_owned());

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "507f1f77bcf86cd799439011",
                "description": "Office Supplies",
                "amount": "150.00",
                "type": "EXPENSE",
                "taxCategory": "TAX_DEDUCTIBLE",
                "date": "2026-02-08",
            })
        );
    }

    #[test]
    fn amount_accepts_number_or_string() {
        let from_number: NewTransaction = serde_json::from_value(json!({
            "description": "Client Payment",
            "amount": 2500.25,
            "type": "INCOME",
            "taxCategory": "NONE",
            "date": "2026-02-08",
        }))
        .unwrap();
        let from_string: NewTransaction = serde_json::from_value(json!({
            "description": "Client Payment",
            "amount": "2500.25",
            "type": "INCOME",
            "taxCategory": "NONE",
            "date": "2026-02-08",
        }))
        .unwrap();

        assert_eq!(from_number.amount, dec!(2500.25));
        assert_eq!(from_string.amount, dec!(2500.25));
    }

    #[test]
    fn number_amount_is_parsed_exactly() {
        let parse_amount = |amount: &str| {
            serde_json::from_str::<NewTransaction>(&format!(
                r#"{{"description":"","amount":{amount},"type":"INCOME","taxCategory":"NONE","date":"2026-02-08"}}"#
            ))
            .unwrap()
            .amount
            .to_string()
        };

        assert_eq!(parse_amount("150.00"), "150.00");
        assert_eq!(parse_amount("2500.00"), "2500.00");
        assert_eq!(parse_amount("12345678901234567.89"), "12345678901234567.89");
        assert_eq!(parse_amount("9007199254740993.01"), "9007199254740993.01");
    }

    #[test]
    fn string_amount_keeps_its_scale() {
        let transaction: NewTransaction = serde_json::from_value(json!({
            "description": "",
            "amount": "150.00",
            "type": "EXPENSE",
            "taxCategory": "NONE",
            "date": "2026-02-08",
        }))
        .unwrap();

        assert_eq!(transaction.amount.to_string(), "150.00");
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let result = serde_json::from_value::<NewTransaction>(json!({
            "description": "Coffee",
            "amount": "a lot",
            "type": "EXPENSE",
            "taxCategory": "NONE",
            "date": "2026-02-08",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_date() {
        let result = serde_json::from_value::<NewTransaction>(json!({
            "description": "Coffee",
            "amount": "4.50",
            "type": "EXPENSE",
            "taxCategory": "NONE",
            "date": "08/02/2026",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn ignores_id_in_new_transaction_payload() {
        let transaction: NewTransaction = serde_json::from_value(json!({
            "id": "not-yours-to-choose",
            "description": "Coffee",
            "amount": "4.50",
            "type": "EXPENSE",
            "taxCategory": "NONE",
            "date": "2026-02-08",
        }))
        .unwrap();

        assert_eq!(transaction.description, "Coffee");
    }

    #[test]
    fn accepts_undocumented_type_and_tax_category() {
        let transaction: NewTransaction = serde_json::from_value(json!({
            "description": "Birthday money",
            "amount": "20",
            "type": "GIFT",
            "taxCategory": "EXEMPT",
            "date": "2026-02-08",
        }))
        .unwrap();

        assert_eq!(transaction.kind, "GIFT");
        assert_eq!(transaction.tax_category, "EXEMPT");
    }

    #[test]
    fn with_id_keeps_fields() {
        let new_transaction = office_supplies();

        let transaction = new_transaction.clone().with_id("abc".to_owned());

        assert_eq!(
            transaction,
            Transaction {
                id: "abc".to_owned(),
                description: new_transaction.description,
                amount: new_transaction.amount,
                kind: new_transaction.kind,
                tax_category: new_transaction.tax_category,
                date: new_transaction.date,
            }
        );
    }

    #[test]
    fn documented_values() {
        let types: Vec<_> = TransactionType::ALL.iter().map(|t| t.as_str()).collect();
        let categories: Vec<_> = TaxCategory::ALL.iter().map(|c| c.as_str()).collect();

        assert_eq!(types, ["INCOME", "EXPENSE"]);
        assert_eq!(categories, ["NONE", "TAX_DEDUCTIBLE", "VAT"]);
        assert_eq!(TransactionType::default(), TransactionType::Expense);
        assert_eq!(TaxCategory::default(), TaxCategory::None);
    }
}
