//! Admin screens: menu maintenance and order history

use std::io::{BufRead, Write};

use shared::{Credentials, MenuItem, MenuItemUpdate, Role};

use super::{Terminal, history_view};
use crate::auth;
use crate::core::{KioskResult, Session};
use crate::printing::{TextBuilder, render_item_details, render_menu};

pub fn run<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let username = term.read_token("Enter admin username: ")?;
    let password = term.read_token("Enter admin password: ")?;
    let role = Role::Admin(Credentials::new(username, password));

    let success = auth::login(&role, &session.users, &session.config.admin).unwrap_or(false);
    term.writeln(role.login_message(success))?;
    if !success {
        tracing::warn!(username = role.username(), "Admin login failed");
        return Ok(());
    }

    term.clear()?;
    loop {
        let mut b = TextBuilder::new(32);
        b.banner("          Admin Menu            ");
        term.write(&b.build())?;
        term.writeln("1. Add Menu Item")?;
        term.writeln("2. Edit Item")?;
        term.writeln("3. Remove Menu Item")?;
        term.writeln("4. View Menu")?;
        term.writeln("5. View Order History")?;
        term.writeln("6. Logout")?;

        match term.read_choice("Enter your choice: ")? {
            Some(1) if role.can_manage_menu() => add_item(session, term)?,
            Some(2) if role.can_manage_menu() => edit_item(session, term)?,
            Some(3) if role.can_manage_menu() => remove_item(session, term)?,
            Some(4) => {
                term.clear()?;
                term.write(&render_menu(session.menu.items()))?;
            }
            Some(5) if role.can_view_history() => {
                term.clear()?;
                history_view::run(session, term)?;
            }
            Some(6) => return Ok(()),
            _ => term.writeln("Invalid choice! Please try again.")?,
        }
    }
}

fn add_item<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let code = term.read_token("Enter food code: ")?;
    let name = term.read_line("Enter food name: ")?;
    let category = term.read_line("Enter food category: ")?;
    let Some(price) = term.read_decimal("Enter food price: ")? else {
        return term.writeln("Invalid price!");
    };

    match session.menu.add(MenuItem::new(code, name, category, price)) {
        Ok(()) => save_menu(session, term),
        Err(e) => term.writeln(&e.to_string()),
    }
}

fn edit_item<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let code = term.read_token("Enter the code of the item to edit: ")?;
    let Some(item) = session.menu.find(&code) else {
        return term.writeln(&format!("Item with code {} not found.", code));
    };
    term.write(&render_item_details(item))?;

    term.writeln(&format!("Editing item with code: {}", code))?;
    let name = term.read_line("Enter new name (or press enter to keep current): ")?;
    let category = term.read_line("Enter new category (or press enter to keep current): ")?;
    let price = term.read_line("Enter new price (or press enter to keep current): ")?;

    let price = match price.trim() {
        "" => None,
        text => match text.parse() {
            Ok(price) => Some(price),
            Err(_) => {
                term.writeln("Invalid price! Keeping current price.")?;
                None
            }
        },
    };
    let update = MenuItemUpdate {
        name: Some(name).filter(|s| !s.is_empty()),
        category: Some(category).filter(|s| !s.is_empty()),
        price,
    };

    if let Err(e) = session.menu.update(&code, update) {
        return term.writeln(&e.to_string());
    }
    term.writeln("Item updated successfully.")?;
    save_menu(session, term)?;
    term.writeln(&format!("Item {} has been updated.", code))
}

fn remove_item<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    let code = term.read_token("Enter the code of the item to remove: ")?;
    if !session.menu.remove(&code) {
        return term.writeln(&format!("Item with code {} not found.", code));
    }
    save_menu(session, term)
}

/// Persist the catalog and refresh the customer view
fn save_menu<R: BufRead, W: Write>(session: &mut Session, term: &mut Terminal<R, W>) -> KioskResult<()> {
    session.reset_display();
    match session.menu.save() {
        Ok(()) => term.writeln(&format!("Menu saved to {}", session.menu.path().display())),
        Err(e) => {
            tracing::error!(error = %e, "Failed to save menu");
            term.writeln(&e.to_string())
        }
    }
}
