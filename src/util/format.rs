//! Display formatting for units, money and durations.

/// Thousands-grouped number with at most two decimals, trailing zeros dropped.
pub fn format_amount(value: f64) -> String {
    let fixed = format_fixed(value, 2);
    match fixed.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => fixed,
    }
}

/// `$1,234.56` style total.
pub fn format_money(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2} Hrs")
}

/// Chart axis values: whole numbers stay whole, averages keep two decimals.
pub fn format_average(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rendered = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match rendered.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), Some(fraction.to_string())),
        None => (rendered, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && rendered_is_nonzero(&grouped, fraction.as_deref()) {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

fn rendered_is_nonzero(whole: &str, fraction: Option<&str>) -> bool {
    let digits = whole.chars().chain(fraction.unwrap_or_default().chars());
    digits.filter(char::is_ascii_digit).any(|ch| ch != '0')
}
