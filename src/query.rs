//! Aggregation queries over loaded transactions.
//!
//! Both queries are a single left-to-right pass, so the floating-point result
//! is deterministic for a given input order. A transaction whose date is the
//! invalid sentinel fails every date comparison and is skipped; a NaN amount
//! on a qualifying transaction makes the result NaN.

use crate::account::Account;
use crate::transaction::Transaction;
use chrono::NaiveDate;

/// Balance of `account` as of `date`.
///
/// Starts from the stated balance and adds every transaction booked to the
/// account (matched by name) on or before `date`.
pub fn account_balance_by_date(
    transactions: &[Transaction],
    account: &Account,
    date: NaiveDate,
) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.account == account.name)
        .filter(|tx| tx.date.is_some_and(|d| d <= date))
        .fold(account.balance, |balance, tx| balance + tx.amount)
}

/// Sum of amounts in `category` dated within `[start, end]`.
///
/// No sign handling is applied: if debits are stored as negative amounts the
/// result is negative.
pub fn spending_by_category(
    transactions: &[Transaction],
    category: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.date.is_some_and(|d| start <= d && d <= end))
        .filter(|tx| tx.category.as_deref() == Some(category))
        .fold(0.0, |spent, tx| spent + tx.amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(amount: f64, account: &str, date: Option<NaiveDate>, category: &str) -> Transaction {
        Transaction {
            amount,
            account: Some(account.to_string()),
            date,
            description: None,
            kind: None,
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn test_balance_only_counts_up_to_cutoff() {
        let txs = vec![
            tx(50.0, "A", Some(ymd(2024, 6, 1)), "misc"),
            tx(20.0, "A", Some(ymd(2024, 7, 1)), "misc"),
        ];
        let account = Account::new("A", 100.0);

        assert_eq!(account_balance_by_date(&txs, &account, ymd(2024, 6, 15)), 150.0);
    }

    #[test]
    fn test_balance_cutoff_is_inclusive() {
        let txs = vec![tx(50.0, "A", Some(ymd(2024, 6, 1)), "misc")];
        let account = Account::new("A", 100.0);

        assert_eq!(account_balance_by_date(&txs, &account, ymd(2024, 6, 1)), 150.0);
        assert_eq!(account_balance_by_date(&txs, &account, ymd(2024, 5, 31)), 100.0);
    }

    #[test]
    fn test_balance_ignores_other_accounts() {
        let txs = vec![
            tx(-30.0, "A", Some(ymd(2024, 1, 1)), "misc"),
            tx(1000.0, "B", Some(ymd(2024, 1, 1)), "misc"),
        ];
        let account = Account::new("A", 100.0);

        assert_eq!(account_balance_by_date(&txs, &account, ymd(2024, 12, 31)), 70.0);
    }

    #[test]
    fn test_balance_skips_invalid_dates() {
        let txs = vec![
            tx(50.0, "A", None, "misc"),
            tx(5.0, "A", Some(ymd(2024, 1, 1)), "misc"),
        ];
        let account = Account::new("A", 0.0);

        assert_eq!(account_balance_by_date(&txs, &account, ymd(2030, 1, 1)), 5.0);
    }

    #[test]
    fn test_balance_nan_amount_propagates() {
        let txs = vec![tx(f64::NAN, "A", Some(ymd(2024, 1, 1)), "misc")];
        let account = Account::new("A", 10.0);

        assert!(account_balance_by_date(&txs, &account, ymd(2024, 1, 1)).is_nan());
    }

    #[test]
    fn test_spending_in_range() {
        let txs = vec![
            tx(-12.0, "A", Some(ymd(2024, 1, 1)), "food"),
            tx(-8.5, "B", Some(ymd(2024, 1, 31)), "food"),
            tx(-100.0, "A", Some(ymd(2024, 2, 1)), "food"),
            tx(-40.0, "A", Some(ymd(2023, 12, 31)), "food"),
            tx(-7.0, "A", Some(ymd(2024, 1, 15)), "transport"),
            tx(-99.0, "A", None, "food"),
        ];

        let spent = spending_by_category(&txs, "food", ymd(2024, 1, 1), ymd(2024, 1, 31));
        assert_eq!(spent, -20.5);
    }

    #[test]
    fn test_spending_inverted_range_is_zero() {
        let txs = vec![tx(-12.0, "A", Some(ymd(2024, 1, 10)), "food")];

        assert_eq!(spending_by_category(&txs, "food", ymd(2024, 1, 31), ymd(2024, 1, 1)), 0.0);
    }

    #[test]
    fn test_spending_category_is_case_sensitive() {
        let txs = vec![tx(-12.0, "A", Some(ymd(2024, 1, 10)), "Food")];

        assert_eq!(spending_by_category(&txs, "food", ymd(2024, 1, 1), ymd(2024, 1, 31)), 0.0);
    }
}
