//! Presentation formatting for the dashboards: `es-ES` numbers, EUR
//! currency, percentages to one decimal, Spanish month labels.

use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences. Defaults match `es-ES`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "es-ES".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
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

/// EUR amount the way the dashboards render it: `1.234,50 €`.
pub fn format_currency(locale: &LocaleConfig, amount: f64) -> String {
    format!("{} €", format_number(locale, amount, 2))
}

/// Ratio rendered as a percentage with one decimal: `0.404` → `40,4 %`.
pub fn format_percentage(locale: &LocaleConfig, ratio: f64) -> String {
    format!("{} %", format_number(locale, ratio * 100.0, 1))
}

/// Short Spanish label for a `yyyy-MM` bucket key.
pub fn month_label(key: &str) -> &'static str {
    let month = key
        .rsplit('-')
        .next()
        .and_then(|part| part.parse::<u32>().ok())
        .unwrap_or(0);
    match month {
        1 => "ene",
        2 => "feb",
        3 => "mar",
        4 => "abr",
        5 => "may",
        6 => "jun",
        7 => "jul",
        8 => "ago",
        9 => "sep",
        10 => "oct",
        11 => "nov",
        12 => "dic",
        _ => "",
    }
}
