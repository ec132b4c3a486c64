//! Labor-adjusted pricing.

/// Scale a material cost by the labor multiplier.
pub fn calculate_total_cost(total_material_cost: u64, labor_factor: f64) -> f64 {
    total_material_cost as f64 * labor_factor
}

/// Price of one box. A zero quantity has no per-box price and yields `0.0`.
pub fn cost_per_unit(total_cost: f64, quantity: u32) -> f64 {
    if quantity == 0 {
        return 0.0;
    }
    total_cost / f64::from(quantity)
}

/// Round a currency amount to whole units for display.
pub fn round_currency(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    amount.round() as u64
}

/// Format a whole-unit amount with thousands separators (`1,234,500`).
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cost_is_product() {
        assert_eq!(calculate_total_cost(50_000, 1.0), 50_000.0);
        assert_eq!(calculate_total_cost(50_000, 1.5), 75_000.0);
        assert_eq!(calculate_total_cost(83_400, 2.3), 83_400.0 * 2.3);
        assert_eq!(calculate_total_cost(0, 3.0), 0.0);
    }

    #[test]
    fn test_cost_per_unit() {
        assert_eq!(cost_per_unit(90_000.0, 3), 30_000.0);
        assert_eq!(cost_per_unit(90_000.0, 0), 0.0);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(1234.5), 1235);
        assert_eq!(round_currency(1234.4), 1234);
        assert_eq!(round_currency(f64::INFINITY), 0);
        assert_eq!(round_currency(-3.0), 0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(999), "999");
        assert_eq!(format_currency(1000), "1,000");
        assert_eq!(format_currency(1_234_500), "1,234,500");
    }
}
