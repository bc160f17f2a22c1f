//! Terminal renderings of the two screens: highlight cards plus the
//! listing, and the per-category monthly resume.

use colored::Colorize;

use crate::currency::format_month_year;
use crate::ledger::{category_by_key, MonthRef, TransactionKind};
use crate::summary::{CategoryTotal, DashboardSummary, Highlight};

use super::output;

const SWATCH: &str = "██";
const BAR_WIDTH: usize = 40;
const FALLBACK_RGB: (u8, u8, u8) = (128, 128, 128);

pub fn render_dashboard(summary: &DashboardSummary) {
    render_highlight("Entradas", &summary.highlights.entries);
    render_highlight("Saídas", &summary.highlights.expenses);
    render_highlight("Total", &summary.highlights.total);

    output::section("Listagem");
    if summary.listing.is_empty() {
        println!("{}", "Nenhuma transação registrada.".dimmed());
        return;
    }
    for item in &summary.listing {
        let amount = match item.kind {
            TransactionKind::Entry => item.amount.as_str().bright_green(),
            TransactionKind::Expense => format!("- {}", item.amount).bright_red(),
        };
        let category = item
            .category
            .as_deref()
            .and_then(category_by_key)
            .map(|category| format!("  ({})", category.name))
            .unwrap_or_default();
        println!("{}  {:<24} {}{}", item.date, item.name, amount, category);
    }
}

fn render_highlight(title: &str, highlight: &Highlight) {
    output::section(title);
    println!("{}", highlight.amount_formatted.as_str().bold());
    println!("{}", highlight.last_transaction.as_str().dimmed());
}

pub fn render_resume(month: MonthRef, totals: &[CategoryTotal]) {
    output::section("Resumo por categoria");
    println!("{}", format_month_year(month).bold());
    output::blank_line();

    if totals.is_empty() {
        println!("{}", "Sem despesas neste mês.".dimmed());
        return;
    }

    for row in totals {
        let (red, green, blue) = category_by_key(row.key)
            .and_then(|category| category.rgb())
            .unwrap_or(FALLBACK_RGB);
        println!(
            "{} {:<14} {:>14}  {:>4}",
            SWATCH.truecolor(red, green, blue),
            row.name,
            row.total_formatted,
            row.percent_formatted,
        );
        let filled = row.percent as usize * BAR_WIDTH / 100;
        if filled > 0 {
            println!("   {}", "█".repeat(filled).truecolor(red, green, blue));
        }
    }
}
