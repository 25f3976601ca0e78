//! Number formatting shared by the panels.

/// "12.34 %" — shares are stored as fractions, displayed as percentages.
pub fn pct(share: f64) -> String {
    format!("{:.2} %", share * 100.0)
}

/// Prices and costs: three decimals.
pub fn eur3(value: f64) -> String {
    format!("{value:.3} €")
}

/// Allocated values: four decimals.
pub fn eur4(value: f64) -> String {
    format!("{value:.4} €")
}

pub fn kg(value: f64) -> String {
    format!("{value:.1} kg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_match_the_dashboard() {
        assert_eq!(pct(0.6), "60.00 %");
        assert_eq!(eur3(5.0), "5.000 €");
        assert_eq!(eur4(2.82), "2.8200 €");
        assert_eq!(kg(60.0), "60.0 kg");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(eur4(-0.5), "-0.5000 €");
    }
}
