//! Customer screens: registration, login, menu browsing and ordering

use std::io::{BufRead, Write};

use shared::{Credentials, DineOption, LineItem, MenuItem, Role, ValidationError};

use super::Terminal;
use crate::auth::{self, UserStoreError};
use crate::core::{KioskResult, Session};
use crate::menu::search;
use crate::orders::{self, BEVERAGES, find_beverage};
use crate::printing::{
    TextBuilder, render_beverages, render_item_banner, render_menu, render_session_orders,
};

fn banner<R: BufRead, W: Write>(term: &mut Terminal<R, W>, width: usize, title: &str) -> KioskResult<()> {
    let mut b = TextBuilder::new(width);
    b.banner(title);
    term.write(&b.build())
}

pub fn register<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    term.clear()?;
    banner(term, 42, "                Register page              ")?;

    let username = term.read_token("Enter your username: ")?;
    let password = term.read_token("Enter your password: ")?;
    let confirm = term.read_token("Confirm your password: ")?;

    match session
        .users
        .register(&username, &password, &confirm, session.clock.now())
    {
        Ok(()) => {
            term.loading()?;
            term.clear()?;
            term.writeln("Register successful")
        }
        Err(e @ UserStoreError::PasswordMismatch) => term.writeln(&e.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Registration failed");
            term.writeln(&format!("Registration failed: {}", e))
        }
    }
}

/// Customer login; on success runs the ordering session
pub fn login<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    term.clear()?;
    banner(term, 42, "                Login page                ")?;

    let username = term.read_token("Enter your username: ")?;
    let password = term.read_token("Enter your password: ")?;
    let role = Role::Customer(Credentials::new(username, password));

    let success = match auth::login(&role, &session.users, &session.config.admin) {
        Ok(success) => success,
        Err(e) => {
            tracing::warn!(error = %e, "Customer login unavailable");
            return term.writeln(&e.to_string());
        }
    };

    term.loading()?;
    if !success {
        tracing::warn!(username = role.username(), "Customer login failed");
        return term.writeln("Login failed. Please check your username and password.");
    }
    term.clear()?;
    term.writeln(role.login_message(true))?;

    if role.can_place_orders() {
        order_session(session, term)?;
    }
    Ok(())
}

fn order_session<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let customer_name = loop {
        let name = term.read_line("Enter your name: ")?;
        match ValidationError::check_field("customer name", &name) {
            Ok(()) => break name,
            Err(e) => term.writeln(&format!("Invalid name: {}", e))?,
        }
    };

    let mut answer = term.read_token("Do you want to (D = Dine in  T = Take away): ")?;
    let dine_option = loop {
        match DineOption::from_input(&answer) {
            Some(option) => break option,
            None => answer = term.read_token("Invalid choice! Please type again: ")?,
        }
    };
    tracing::debug!(customer = %customer_name, dine = %dine_option, "Ordering session started");

    term.clear()?;
    banner(
        term,
        76,
        "                           Welcome to PS Fast Food!                         ",
    )?;

    let orders_before = session.session_orders.len();
    loop {
        term.write(&render_menu(&session.display))?;
        term.writeln("Choose an option:")?;
        term.writeln("1. Sort by menu")?;
        term.writeln("2. Search by menu")?;
        term.writeln("3. Place order")?;
        term.writeln("4. Exit")?;
        term.writeln(&"-".repeat(73))?;

        match term.read_choice("Enter your choice: ")? {
            Some(1) => sort_menu(session, term)?,
            Some(2) => search_menu(session, term)?,
            Some(3) => place_order(session, term, &customer_name, dine_option)?,
            Some(4) => break,
            _ => term.writeln("Invalid choice! Please try again.")?,
        }
    }

    let placed = &session.session_orders[orders_before..];
    if !placed.is_empty() {
        term.writeln("Orders this session:")?;
        term.write(&render_session_orders(placed))?;
    }
    Ok(())
}

fn sort_menu<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    term.clear()?;
    term.writeln(&"*".repeat(33))?;
    term.writeln("1. Sort menu by name")?;
    term.writeln("2. Sort menu by price")?;
    term.writeln(&"*".repeat(33))?;

    match term.read_choice("Enter your choice: ")? {
        Some(1) => search::sort_by_name(&mut session.display),
        Some(2) => search::sort_by_price(&mut session.display),
        _ => term.writeln("Invalid choice! Please try again.")?,
    }
    Ok(())
}

fn search_menu<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    term.clear()?;
    term.writeln(&"*".repeat(33))?;
    term.writeln("1. Search food by price range")?;
    term.writeln("2. Search food by food type")?;
    term.writeln(&"*".repeat(33))?;

    match term.read_choice("Enter your choice: ")? {
        Some(1) => repeat_search(session, term, search_by_price),
        Some(2) => repeat_search(session, term, search_by_category),
        _ => term.writeln("Invalid choice! Please try again."),
    }
}

/// Run `run` once, then offer "continue searching" until the customer goes back
fn repeat_search<R: BufRead, W: Write>(
    session: &Session,
    term: &mut Terminal<R, W>,
    run: fn(&Session, &mut Terminal<R, W>) -> KioskResult<()>,
) -> KioskResult<()> {
    run(session, term)?;
    loop {
        term.writeln("1. Continue searching")?;
        term.writeln("2. Back to menu")?;
        match term.read_choice("Enter your choice: ")? {
            Some(1) => run(session, term)?,
            Some(2) => return term.clear(),
            _ => term.writeln("Invalid choice! Please try again.")?,
        }
    }
}

fn search_by_price<R: BufRead, W: Write>(session: &Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let min = term.read_decimal("Enter minimum price: ")?;
    let max = term.read_decimal("Enter maximum price: ")?;
    let (Some(min), Some(max)) = (min, max) else {
        return term.writeln("Invalid price!");
    };
    term.write(&render_menu(&search::by_price_range(&session.display, min, max)))
}

fn search_by_category<R: BufRead, W: Write>(session: &Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let category = term.read_token("Enter food type (burger/pizza/cake/snack): ")?;
    term.write(&render_menu(&search::by_category(&session.display, &category)))
}

fn place_order<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
    customer_name: &str,
    dine_option: DineOption,
) -> KioskResult<()> {
    loop {
        term.clear()?;
        session.reset_display();
        term.write(&render_menu(&session.display))?;

        let code = term.read_token("Enter the food code you wish to order: ")?;
        match session.menu.find(&code).cloned() {
            Some(item) => add_food(session, term, &item)?,
            None => term.writeln("Invalid item code!")?,
        }

        let more = term.read_token("Would you like to order another item? (yes/no): ")?;
        if more.eq_ignore_ascii_case("no") {
            break;
        }
    }

    term.clear()?;
    let done = orders::checkout(session, customer_name, dine_option);
    term.write(&done.receipt)?;
    if let Some(e) = &done.receipt_error {
        term.writeln(&format!("Failed to save receipt: {}", e))?;
    }
    if let Some(e) = &done.history_error {
        term.writeln(&format!("Order was not saved to history: {}", e))?;
    }
    Ok(())
}

fn add_food<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
    item: &MenuItem,
) -> KioskResult<()> {
    term.write(&render_item_banner(item))?;
    let quantity = term.read_choice("Enter the quantity: ")?;
    let line = quantity.and_then(|q| LineItem::new(item.name.clone(), q, item.price).ok());
    if !add_to_cart(session, line) {
        term.writeln("Invalid quantity!")?;
    }

    let add_beverage = term.read_token("Would you like to add a beverage? (yes/no): ")?;
    if add_beverage != "yes" && add_beverage != "YES" {
        return Ok(());
    }

    term.write(&render_beverages(&BEVERAGES))?;
    let code = term.read_token("Enter the beverage code: ")?;
    let quantity = term.read_choice("Enter the quantity: ")?;
    let Some(beverage) = find_beverage(&code) else {
        return term.writeln("Invalid beverage code!");
    };
    let line = quantity.and_then(|q| LineItem::new(beverage.name, q, beverage.price()).ok());
    if !add_to_cart(session, line) {
        term.writeln("Invalid quantity!")?;
    }
    Ok(())
}

fn add_to_cart(session: &mut Session, line: Option<LineItem>) -> bool {
    let Some(line) = line else {
        return false;
    };
    match session.cart.add(line) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Line-item refused");
            false
        }
    }
}
