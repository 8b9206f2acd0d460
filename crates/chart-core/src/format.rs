// File: crates/chart-core/src/format.rs
// Summary: Tick label formatting (plain integers, grouped decimals, abbreviated dollars).

/// How an axis renders its tick values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickFormat {
    /// Rounded integer without separators: `2010`.
    Integer,
    /// Thousands separators; decimals follow the tick step: `200,000,000`, `0.5`.
    #[default]
    Grouped,
    /// Dollars with a K/M/B/T suffix: `$1.5B`.
    Abbreviated,
}

impl TickFormat {
    /// Format `v`; `step` is the spacing between neighbouring ticks.
    pub fn format(&self, v: f64, step: f64) -> String {
        match self {
            TickFormat::Integer => format_integer(v),
            TickFormat::Grouped => group_thousands(&format!("{:.*}", precision_for_step(step), v)),
            TickFormat::Abbreviated => format_abbreviated(v),
        }
    }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

fn format_integer(v: f64) -> String {
    let r = v.round();
    // avoid "-0"
    if r == 0.0 { "0".to_string() } else { format!("{}", r as i64) }
}

fn group_thousands(s: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.map_or(true, |f| f.chars().all(|c| c == '0'));
    let sign = if is_zero { "" } else { sign };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn format_abbreviated(v: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    let sign = if v < 0.0 { "-" } else { "" };
    let a = v.abs();
    for (unit, suffix) in UNITS {
        if a >= unit {
            return format!("{sign}${}{suffix}", trim_decimal(a / unit));
        }
    }
    if a == 0.0 { "$0".to_string() } else { format!("{sign}${}", trim_decimal(a)) }
}

/// One decimal place, dropping a trailing `.0`.
fn trim_decimal(v: f64) -> String {
    let s = format!("{v:.1}");
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}
