/// Rounds a monetary value to cents, nudging past binary-representation noise
/// first so values like `19.999999999` land on `20.00`.
///
/// Idempotent: `normalize_price(normalize_price(x)) == normalize_price(x)`.
pub fn normalize_price(price: f64) -> f64 {
    ((price + f64::EPSILON) * 100.0).round() / 100.0
}
