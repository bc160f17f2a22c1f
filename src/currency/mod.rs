//! Brazilian Portuguese display formatting for amounts and dates.

use chrono::{Datelike, NaiveDate};

use crate::ledger::MonthRef;

/// Separator and symbol preferences for number rendering.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub currency_symbol: &'static str,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$",
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

/// Formats an amount as BRL currency, e.g. `R$ 1.234,56`. Negative amounts
/// carry the sign before the symbol: `-R$ 60,00`.
pub fn format_brl(amount: f64) -> String {
    format_currency_value(amount, &LocaleConfig::default())
}

pub fn format_currency_value(amount: f64, locale: &LocaleConfig) -> String {
    let body = format_number(amount.abs(), 2, locale);
    if amount < 0.0 {
        format!("-{} {}", locale.currency_symbol, body)
    } else {
        format!("{} {}", locale.currency_symbol, body)
    }
}

pub fn format_number(value: f64, precision: u8, locale: &LocaleConfig) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, locale.grouping_separator)),
        None => group_digits(int_part, locale.grouping_separator),
    };
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        12 => "dezembro",
        _ => "",
    }
}

/// `10 de janeiro` — the highlight-card style, day unpadded.
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{} de {}", date.day(), month_name(date.month()))
}

/// `05/01/23` — the listing style.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

/// `janeiro, 2023` — the resume header style.
pub fn format_month_year(month: MonthRef) -> String {
    format!("{}, {}", month_name(month.month), month.year)
}
