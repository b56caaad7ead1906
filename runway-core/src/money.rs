/// Group the integer part with commas: 1234567.5 -> "1,234,567.50".
/// Whole amounts drop the decimals: 2500000.0 -> "2,500,000".
pub fn grouped(val: f64) -> String {
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();
    let sign = if val < 0.0 && cents != "0.00" { "-" } else { "" };

    if dec_part == "00" {
        format!("{sign}{with_commas}")
    } else {
        format!("{sign}{with_commas}.{dec_part}")
    }
}

/// Currency amount with the sign before the symbol: "-₹5,000".
pub fn money(symbol: &str, val: f64) -> String {
    let digits = grouped(val.abs());
    if val < 0.0 && digits != "0" {
        format!("-{symbol}{digits}")
    } else {
        format!("{symbol}{digits}")
    }
}
