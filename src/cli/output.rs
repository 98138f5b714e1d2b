use colored::Colorize;
use std::fmt;

use crate::{
    core::services::DashboardView,
    currency::{format_currency_value, CurrencyCode, DateLocale, NumberFormat},
};

const BAR_WIDTH: usize = 30;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Section,
}

/// How amounts, dates and colour are rendered for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub currency: CurrencyCode,
    pub numbers: NumberFormat,
    pub locale: DateLocale,
    pub color: bool,
}

impl Presentation {
    pub fn money(&self, amount: f64) -> String {
        format_currency_value(amount, &self.currency, &self.numbers)
    }
}

struct Labels {
    title: &'static str,
    date: &'static str,
    accumulated: &'static str,
    daily_target: &'static str,
    progress: &'static str,
    achieved: &'static str,
    remaining: &'static str,
    window: &'static str,
    pace: &'static str,
    sales: &'static str,
}

fn labels(locale: DateLocale) -> Labels {
    match locale {
        DateLocale::PtBr => Labels {
            title: "Dashboard de Vendas",
            date: "Data",
            accumulated: "Valor Acumulado",
            daily_target: "Meta Diária Atual",
            progress: "Progresso Anual",
            achieved: "Progresso",
            remaining: "Restante",
            window: "Meta Diária de Vendas (Últimos 7 Dias)",
            pace: "meta",
            sales: "vendas",
        },
        DateLocale::EnUs => Labels {
            title: "Sales Dashboard",
            date: "Date",
            accumulated: "Accumulated",
            daily_target: "Current Daily Target",
            progress: "Annual Progress",
            achieved: "Progress",
            remaining: "Remaining",
            window: "Daily Sales Target (Last 7 Days)",
            pace: "target",
            sales: "sales",
        },
    }
}

pub fn style(kind: MessageKind, message: impl fmt::Display, color: bool) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Error => format!("Error: {}", text),
        MessageKind::Success => text,
    };
    if !color {
        return formatted;
    }
    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
    }
}

/// Renders the dashboard as plain lines, optionally coloured.
pub fn render_dashboard(view: &DashboardView, presentation: &Presentation) -> String {
    let labels = labels(presentation.locale);
    let color = presentation.color;
    let mut lines = Vec::new();

    lines.push(style(
        MessageKind::Section,
        format!("{} {}", labels.title, view.today.format("%Y")),
        color,
    ));
    lines.push(format!("{}: {}", labels.date, view.date_label));
    lines.push(format!(
        "{}: {}",
        labels.accumulated,
        presentation.money(view.metrics.cumulative_total)
    ));
    lines.push(style(
        MessageKind::Success,
        format!(
            "{}: {}",
            labels.daily_target,
            presentation.money(view.metrics.remaining_daily_pace)
        ),
        color,
    ));
    lines.push(String::new());
    lines.push(format!(
        "{} ({}): [{}] {}: {:.2}% | {}: {:.2}%",
        labels.progress,
        presentation.money(view.annual_target),
        progress_bar(view.progress.achieved),
        labels.achieved,
        view.progress.achieved,
        labels.remaining,
        view.progress.remaining
    ));
    lines.push(String::new());
    lines.push(style(MessageKind::Section, labels.window, color));
    for bar in &view.pace_bars {
        lines.push(format!(
            "{}  {} {:>14}  {} {:>14}",
            bar.date.format("%Y-%m-%d"),
            labels.pace,
            presentation.money(bar.pace),
            labels.sales,
            presentation.money(bar.actual)
        ));
    }
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

fn progress_bar(percent: f64) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
