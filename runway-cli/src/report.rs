//! Plain-text rendering for the terminal.

use runway_core::money::money;
use runway_core::time::short_date;
use runway_core::{Region, Transaction};
use runway_engine::{action_link, crunch_alert_link, CashFlowAction, ForecastResult, Runway};

pub fn print_transactions(txns: &[Transaction], region: Region) {
    let symbol = region.profile().currency_symbol;
    if txns.is_empty() {
        println!("(no transactions)");
        return;
    }
    for (i, t) in txns.iter().enumerate() {
        println!(
            "{:>3}  {}  {:<7}  {:<3}  {:>14}  {:<24}  {}  [{}]",
            i,
            t.date,
            format!("{:?}", t.status).to_uppercase(),
            if t.is_inflow() { "IN" } else { "OUT" },
            money(symbol, t.amount),
            t.payee,
            t.category,
            t.id.as_deref().unwrap_or("-"),
        );
    }
}

pub fn print_forecast(f: &ForecastResult, region: Region) {
    let symbol = region.profile().currency_symbol;
    println!("Monthly burn:    {}", money(symbol, f.monthly_burn));
    println!("Monthly inflow:  {}", money(symbol, f.monthly_inflow));
    println!("Net burn:        {}", money(symbol, f.net_burn));
    match f.runway_months {
        Runway::Months(m) => println!(
            "Runway:          {m:.1} months (until {})",
            f.runway_end_date.as_deref().unwrap_or("?")
        ),
        Runway::Unbounded => println!("Runway:          unlimited"),
    }
    match f.crunch_date {
        Some(d) => {
            println!("Cash crunch:     {}", short_date(d));
            println!("                 {}", crunch_alert_link(&short_date(d)));
        }
        None => println!("Cash crunch:     none projected"),
    }
    if !f.recurring_items.is_empty() {
        println!("Recurring:       {}", f.recurring_items.join(", "));
    }

    println!("\nProjected balance:");
    for p in &f.chart_data {
        let marker = if p.balance < 0.0 { "  <-- negative" } else { "" };
        println!("  {}  {:>16}{marker}", p.date, money(symbol, p.balance));
    }
}

pub fn print_actions(actions: &[CashFlowAction], region: Region, with_links: bool) {
    let symbol = region.profile().currency_symbol;
    if actions.is_empty() {
        println!("No actions needed. Cash position looks healthy.");
        return;
    }
    for a in actions {
        println!(
            "[{:?}] {} | {} | {} | contact: {}",
            a.priority,
            a.title,
            a.description,
            money(symbol, a.amount),
            a.contact_name
        );
        if with_links {
            println!("    {}", action_link(a));
        }
    }
}
