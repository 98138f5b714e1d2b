//! Display helpers for money amounts and the localized date header.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("BRL")
    }
}

/// Number formatting preferences.
#[derive(Debug, Clone, Copy)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Language used for the long date header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    #[default]
    PtBr,
    EnUs,
}

impl DateLocale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Some(DateLocale::PtBr),
            "en-us" | "en" => Some(DateLocale::EnUs),
            _ => None,
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateLocale::PtBr => "pt-BR",
            DateLocale::EnUs => "en-US",
        };
        f.write_str(label)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(format: &NumberFormat, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_digits(int_part, format.grouping_separator);
    if let Some(frac) = frac_part {
        rendered.push(format.decimal_separator);
        rendered.push_str(frac);
    }
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        rendered.insert(0, '-');
    }
    rendered
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// `R$ 1,234.56` style rendering; negative amounts keep a leading sign.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, format: &NumberFormat) -> String {
    let precision = minor_units_for(code.as_str());
    format!(
        "{} {}",
        symbol_for(code.as_str()),
        format_number(format, amount, precision)
    )
}

/// Long date header naming weekday, day, month and year.
pub fn format_long_date(locale: DateLocale, date: NaiveDate) -> String {
    match locale {
        DateLocale::PtBr => format!(
            "{}, {} de {} de {}",
            weekday_pt(date.weekday()),
            date.day(),
            month_pt(date.month()),
            date.year()
        ),
        DateLocale::EnUs => format!(
            "{}, {} {}, {}",
            weekday_en(date.weekday()),
            month_en(date.month()),
            date.day(),
            date.year()
        ),
    }
}

fn weekday_pt(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

fn month_pt(month: u32) -> &'static str {
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

fn weekday_en(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn month_en(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
