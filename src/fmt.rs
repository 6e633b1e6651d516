/// Shortest decimal rendering of an amount: 50.0 -> "50", 12.5 -> "12.5".
pub fn plain_amount(val: f64) -> String {
    format!("{val}")
}

/// Format an amount with thousands separators and two decimals: 1,234.56
pub fn grouped(val: f64) -> String {
    let fixed = format!("{:.2}", val.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = whole.chars().collect();
    let lead = digits.len() % 3;
    let mut groups: Vec<String> = Vec::new();
    if lead > 0 {
        groups.push(digits[..lead].iter().collect());
    }
    groups.extend(digits[lead..].chunks(3).map(|g| g.iter().collect::<String>()));

    let sign = if val < 0.0 { "-" } else { "" };
    format!("{sign}{}.{cents}", groups.join(","))
}
