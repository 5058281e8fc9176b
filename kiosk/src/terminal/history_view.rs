//! Admin order-history view
//!
//! The store is read once per visit; the customer index and the sorted view
//! are built from that read on demand and thrown away afterwards.

use std::io::{BufRead, Write};

use super::Terminal;
use crate::core::{KioskResult, Session};
use crate::history::{CustomerIndex, sort_chronologically};
use crate::printing::{
    render_customer_report, render_full_report, render_known_customers, render_sorted_report,
};

pub fn run<R: BufRead, W: Write>(session: &Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let load = match session.history.load() {
        Ok(load) => load,
        Err(e) => {
            tracing::warn!(error = %e, "Order history unavailable");
            term.writeln(&e.to_string())?;
            return term.writeln("No order history.");
        }
    };

    if load.skipped > 0 {
        term.writeln(&format!("Skipped {} malformed record(s).", load.skipped))?;
    }
    term.write(&render_full_report(&load.records))?;
    if load.is_empty() {
        term.writeln("No order history.")?;
    }

    loop {
        term.writeln("Choose an option:")?;
        term.writeln("1. Search order by customer name")?;
        term.writeln("2. Sort orders by latest order time")?;
        term.writeln("3. Back")?;

        match term.read_choice("Enter your choice: ")? {
            Some(1) => {
                let name = term.read_line("Enter customer name to search: ")?;
                let index = CustomerIndex::build(&load.records);
                let found = index.lookup(&name);
                term.write(&render_customer_report(&name, found))?;
                if found.is_none() && !index.is_empty() {
                    term.write(&render_known_customers(index.len(), index.customers()))?;
                }
            }
            Some(2) => {
                let sorted = sort_chronologically(load.records.clone());
                term.write(&render_sorted_report(&sorted))?;
            }
            Some(3) => return Ok(()),
            _ => term.writeln("Invalid choice! Please try again.")?,
        }
    }
}
