//! Interactive text menu
//!
//! The operator-facing console loop: login gate, main menu, record input
//! menus, and report display. All validation here is input plumbing; the
//! stores re-check anything that matters.

use std::io::{self, BufRead, Write};

use crate::display::{format_expenses, format_rent, format_tenants, system_message};
use crate::error::RentbookResult;
use crate::models::Money;
use crate::reports::AnnualReport;
use crate::storage::{login, FileGateway};
use crate::store::Store;

const MAIN_MENU_PROMPT: &str = "\
Main Menu
Please select an option:
i) Input Data
d) Display Reports
q) Quit";

const INPUT_PROMPT: &str = "\
Input Menu
Please select an option:
t) Record Tenant Information
r) Record Rent Payment
e) Record Expense
q) Return to Main Menu";

const REPORTS_PROMPT: &str = "\
Display Reports Menu
Please select an option:
t) Tenant Records
e) Expense Records
r) Rent Records
a) Annual Report
q) Return to Main Menu";

const INPUT_TENANT_NOTICE: &str = "\
Inputting Tenant
NOTE: This operation assumes the most recent
      tenant input will be the current resident.
Input \"q\" to return to the previous menu.
Press [ENTER] to continue";

const INPUT_RENT_NOTICE: &str = "\
Rent Notice
NOTE: Rent will require you to have the Tenant's name
      and apartment number.

The Rent input assumes the most recent entry to Tenants
that matches the apartment number is the current one.

Input \"q\" to return to the previous menu.
Press [ENTER] to continue.";

const INPUT_EXPENSE_NOTICE: &str = "\
Expense Notice
The expense requires you to have the month, day, year of payment,
the payment amount, payee name, and category of expense.
Most information is for reporting.

Input \"q\" to return to the previous menu.
Press [ENTER] to continue.";

/// Run the full interactive session: login, load, menu loop, save.
pub fn run(store: &mut Store, gateway: &FileGateway) -> RentbookResult<()> {
    if !prompt_login(gateway) {
        system_message("Exiting program...");
        return Ok(());
    }

    if let Err(err) = gateway.load_all(store) {
        system_message(&format!("Failed to load save files: {}", err));
    }

    main_menu(store, gateway);

    gateway.save_all(store)
}

/// Prompt for credentials until a pair in the login table matches.
///
/// Returns false only when stdin closes before a successful login.
fn prompt_login(gateway: &FileGateway) -> bool {
    loop {
        let table = match login::load_or_create(gateway.paths()) {
            Ok(table) => table,
            Err(err) => {
                system_message(&format!("Login system unavailable: {}", err));
                system_message("Press [ENTER] to retry.");
                if read_raw("").is_none() {
                    return false;
                }
                continue;
            }
        };

        println!("Please login with your username and password.");
        let Some(username) = read_raw("Username: ") else {
            return false;
        };
        let password = rpassword::prompt_password("Password: ").unwrap_or_default();

        if login::verify(&table, &username, &password) {
            return true;
        }
        system_message("Incorrect username or password. Please try again.");
    }
}

fn main_menu(store: &mut Store, gateway: &FileGateway) {
    loop {
        println!("{}\n", MAIN_MENU_PROMPT);
        match read_line("Your Choice: ").to_lowercase().as_str() {
            "i" => input_menu(store, gateway),
            "d" => report_menu(store),
            "q" => break,
            _ => system_message("Your input is invalid, please try again..."),
        }
    }
    system_message("Exiting program...");
}

fn input_menu(store: &mut Store, gateway: &FileGateway) {
    loop {
        println!("{}\n", INPUT_PROMPT);
        let choice = read_line("Your Choice: ").to_lowercase();
        match choice.as_str() {
            "t" => input_tenant(store),
            "r" => input_rent(store),
            "e" => input_expense(store),
            "q" => {}
            _ => system_message("Your input is invalid, please try again..."),
        }

        // Persist after every input-menu iteration
        if let Err(err) = gateway.save_all(store) {
            system_message(&format!("Failed to save: {}", err));
        }

        if choice == "q" {
            break;
        }
    }
    system_message("Returning to main menu...");
}

fn report_menu(store: &Store) {
    loop {
        println!("{}\n", REPORTS_PROMPT);
        match read_line("Your Choice: ").to_lowercase().as_str() {
            "t" => match store.tenants.tenants() {
                Some(tenants) if !tenants.is_empty() => println!("{}", format_tenants(tenants)),
                _ => system_message("There are no Tenants to display..."),
            },
            "e" => match store.expenses.expenses() {
                Some(expenses) if !expenses.is_empty() => {
                    println!("{}", format_expenses(expenses))
                }
                _ => system_message("There are no Expenses to display..."),
            },
            "r" => match store.rent.rent() {
                Some(rent) if !rent.is_empty() => {
                    println!("{}", format_rent(rent, &store.tenants))
                }
                _ => system_message("There are no Rent Payments to display..."),
            },
            "a" => {
                let year = read_u32("Enter the year for the report: ");
                println!("{}", AnnualReport::generate(store, year as i32));
            }
            "q" => break,
            _ => system_message("Your input is invalid, please try again..."),
        }
    }
    system_message("Returning to main menu...");
}

fn input_tenant(store: &mut Store) {
    println!("{}", INPUT_TENANT_NOTICE);
    if read_line("").eq_ignore_ascii_case("q") {
        return;
    }

    let name = read_line("Enter tenant's name: ");
    let apt = read_u32("Enter tenant's apartment number: ");

    // Warn when the apartment already has a current resident
    if let Some(current) = store.tenants.current_for_apartment(apt) {
        println!(
            "Tenant Warning\n\
             There is currently a tenant assigned to this apartment number:\n  {}\n\n\
             By inputting this new tenant, all new rent payments for this apartment\n\
             number will be associated to this tenant.\n\n\
             Input \"q\" to return to the previous menu.\n\
             Press [ENTER] to continue and override this tenant.",
            current
        );
        if read_line("").eq_ignore_ascii_case("q") {
            return;
        }
    }

    let tenant = store.tenants.add_tenant(name, apt);
    system_message(&format!("Added Tenant: {}", tenant));
}

fn input_rent(store: &mut Store) {
    let has_tenants = store
        .tenants
        .tenants()
        .is_some_and(|tenants| !tenants.is_empty());
    if !has_tenants {
        system_message("There are no tenants to add rent to.");
        return;
    }

    println!("{}", INPUT_RENT_NOTICE);
    if read_line("").eq_ignore_ascii_case("q") {
        return;
    }

    let apt = read_u32("Enter tenant's apartment number: ");
    let year = read_u32("Enter year: ") as i32;
    let month = read_u32_range("Enter month: ", 1, 12);
    let payment = read_money("Enter payment: ");

    let Some(tenant) = store.tenants.current_for_apartment(apt).cloned() else {
        system_message("There is no tenant to associate to.");
        return;
    };

    // Advisory only: warn and keep going
    if let Some(date) = chrono::NaiveDate::from_ymd_opt(year, month, 1) {
        if store.rent.is_duplicate(&tenant, date, payment) {
            system_message("This is a duplicate entry, ignoring...");
        }
    }

    println!(
        "Rent Confirmation\n\
         There is currently a tenant assigned to this apartment number:\n  {}\n\
         Input \"q\" to return to the previous menu.\n\
         Press [ENTER] to continue and create the new rent entry.",
        tenant
    );
    if read_line("").eq_ignore_ascii_case("q") {
        return;
    }

    match store.rent.add_rent(&tenant, year, month, payment) {
        Ok(rent) => system_message(&format!(
            "Added Rent: {} - {} ({})",
            tenant,
            rent.payment,
            rent.date.format("%B %Y")
        )),
        Err(err) => system_message(&err.to_string()),
    }
}

fn input_expense(store: &mut Store) {
    println!("{}", INPUT_EXPENSE_NOTICE);
    if read_line("").eq_ignore_ascii_case("q") {
        return;
    }

    let month = read_u32_range("Enter month (1-12): ", 1, 12);
    let day = read_u32_range("Enter day (1-31): ", 1, 31);
    let year = read_u32("Enter year: ") as i32;
    let category = read_line("Enter expense category (Repairing, Utilities): ");
    let payee = read_line("Enter payee (Bob's Hardware, Big Electric Co): ");
    let payment = read_money("Enter amount: ");

    match store
        .expenses
        .add_expense(year, month, day, category, payee, payment)
    {
        Ok(expense) => system_message(&format!("Added Expense: {}", expense)),
        Err(err) => system_message(&err.to_string()),
    }
}

/// Prompt and read one trimmed line. `None` signals EOF.
fn read_raw(prompt: &str) -> Option<String> {
    if !prompt.is_empty() {
        print!("{}", prompt);
        let _ = io::stdout().flush();
    }
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Read one line; EOF reads as "q" so every menu loop terminates.
fn read_line(prompt: &str) -> String {
    read_raw(prompt).unwrap_or_else(|| "q".to_string())
}

fn read_u32_range(prompt: &str, low: u32, high: u32) -> u32 {
    loop {
        let Some(line) = read_raw(prompt) else {
            return low;
        };
        match line.parse::<u32>() {
            Ok(value) if (low..=high).contains(&value) => return value,
            Ok(_) => println!("Invalid number! Reenter your input: "),
            Err(_) => println!("Invalid Input. Reenter a positive integer: "),
        }
    }
}

fn read_u32(prompt: &str) -> u32 {
    read_u32_range(prompt, 0, u32::MAX)
}

fn read_money(prompt: &str) -> Money {
    loop {
        let Some(line) = read_raw(prompt) else {
            return Money::zero();
        };
        match Money::parse(&line) {
            Ok(value) if !value.is_negative() => return value,
            _ => println!("Invalid Input. Reenter a positive number: "),
        }
    }
}
