use rust_decimal::Decimal;

/// Currency prefix shown in front of every amount
pub const CURRENCY: &str = "RM";

/// 两位小数金额显示 (e.g. `12.50`)
pub fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// 金额 + 货币前缀 (e.g. `RM 12.50`)
pub fn money_with_currency(amount: Decimal) -> String {
    format!("{} {}", CURRENCY, money(amount))
}

/// Shortest decimal text for persisted prices: `5`, `12.5`, `2.75`
pub fn plain_decimal(amount: Decimal) -> String {
    amount.normalize().to_string()
}
