//! Interactive session
//!
//! # Screens
//!
//! ```text
//! main menu ─┬─ 1 customer login ──▶ name, dine option ──▶ sort / search / order
//!            ├─ 2 registration
//!            ├─ 3 admin ──▶ add / edit / remove / view menu / order history
//!            └─ 4 exit
//! ```

pub mod admin;
pub mod customer;
pub mod history_view;
pub mod io;

use std::io::{BufRead, Write};

pub use io::Terminal;

use crate::core::{KioskError, KioskResult, Session};
use crate::printing::TextBuilder;

/// Run the main menu until the user exits or input ends
pub fn run<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    match main_menu(session, term) {
        Err(KioskError::InputClosed) => {
            tracing::info!("Input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn main_menu<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    loop {
        term.clear()?;
        let mut b = TextBuilder::new(43);
        b.banner("  Welcome to Fast Food Ordering system  ");
        b.write_line("1. Customer login");
        b.write_line("2. Customer Registration");
        b.write_line("3. Admin Mode");
        b.write_line("4. Exit");
        b.star_sep();
        term.write(&b.build())?;

        match term.read_choice("Please enter your choice: ")? {
            Some(1) => customer::login(session, term)?,
            Some(2) => customer::register(session, term)?,
            Some(3) => admin::run(session, term)?,
            Some(4) => return Ok(()),
            _ => term.writeln("Invalid choice! Please try again.")?,
        }
    }
}
