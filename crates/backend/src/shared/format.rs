/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Денежное значение в формате pt-BR: `R$ 1.234,56`
pub fn format_money(value: f64, symbol: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = group_thousands(&(cents / 100).to_string());
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol} {integer},{:02}", cents % 100)
}

/// Процент с фиксированным числом знаков: `23.3%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "R$"), "R$ 0,00");
        assert_eq!(format_money(600.0, "R$"), "R$ 600,00");
        assert_eq!(format_money(1234.5, "R$"), "R$ 1.234,50");
        assert_eq!(format_money(1234567.891, "R$"), "R$ 1.234.567,89");
        assert_eq!(format_money(-15.2, "R$"), "-R$ 15,20");
        assert_eq!(format_money(-0.001, "R$"), "R$ 0,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(23.3333, 1), "23.3%");
        assert_eq!(format_percent(0.0, 1), "0.0%");
        assert_eq!(format_percent(25.0, 0), "25%");
    }
}
