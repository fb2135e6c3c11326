//! Teller CLI
//!
//! Interactive text-menu shell over the in-memory [`Bank`]. The shell owns
//! all console I/O: it prompts, parses, and prints, while the core only
//! sees already-typed values. All state is lost when the session ends.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;
use teller::{Bank, Money, Result};

const MENU: &str = "\n[0] Deposit\n[1] Withdraw\n[2] Statement\n[3] New client\n[4] New account\n[5] List accounts\n[6] Exit\n--> ";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut bank = Bank::new();

    loop {
        let Some(choice) = prompt(MENU, &mut input)? else {
            break;
        };

        match choice.as_str() {
            "0" => deposit(&mut bank, &mut input)?,
            "1" => withdraw(&mut bank, &mut input)?,
            "2" => statement(&bank, &mut input)?,
            "3" => new_client(&mut bank, &mut input)?,
            "4" => new_account(&mut bank, &mut input)?,
            "5" => list_accounts(&bank),
            "6" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid option, please pick one from the menu."),
        }
    }

    Ok(())
}

/// Prints a prompt and reads one trimmed line. `None` means EOF, which the
/// caller treats like Exit.
fn prompt(label: &str, input: &mut impl BufRead) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for an amount; reports a parse failure and returns `None` so
/// the menu resumes.
fn prompt_amount(label: &str, input: &mut impl BufRead) -> io::Result<Option<Money>> {
    let Some(raw) = prompt(label, input)? else {
        return Ok(None);
    };
    match Money::from_str(&raw) {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            println!("Invalid amount entered.");
            Ok(None)
        }
    }
}

fn deposit(bank: &mut Bank, input: &mut impl BufRead) -> Result<()> {
    let Some(tax_id) = prompt("Tax ID: ", input)? else {
        return Ok(());
    };
    if bank.find_client(&tax_id).is_none() {
        println!("Client not found!");
        return Ok(());
    }

    let Some(amount) = prompt_amount("Amount to deposit: ", input)? else {
        return Ok(());
    };

    match bank.deposit(&tax_id, amount) {
        Ok(()) => println!("Deposit completed!"),
        Err(e) => println!("Operation failed: {e}."),
    }
    Ok(())
}

fn withdraw(bank: &mut Bank, input: &mut impl BufRead) -> Result<()> {
    let Some(tax_id) = prompt("Tax ID: ", input)? else {
        return Ok(());
    };
    if bank.find_client(&tax_id).is_none() {
        println!("Client not found!");
        return Ok(());
    }

    let Some(amount) = prompt_amount("Amount to withdraw: ", input)? else {
        return Ok(());
    };

    match bank.withdraw(&tax_id, amount) {
        Ok(()) => println!("Withdrawal completed!"),
        Err(e) => println!("Operation failed: {e}."),
    }
    Ok(())
}

fn statement(bank: &Bank, input: &mut impl BufRead) -> Result<()> {
    let Some(tax_id) = prompt("Tax ID: ", input)? else {
        return Ok(());
    };
    if bank.find_client(&tax_id).is_none() {
        println!("Client not found!");
        return Ok(());
    }

    match bank.statement(&tax_id) {
        Ok(text) => println!("{text}"),
        Err(e) => println!("Operation failed: {e}."),
    }
    Ok(())
}

fn new_client(bank: &mut Bank, input: &mut impl BufRead) -> Result<()> {
    let Some(tax_id) = prompt("Tax ID: ", input)? else {
        return Ok(());
    };
    if bank.find_client(&tax_id).is_some() {
        println!("A client with this tax ID already exists!");
        return Ok(());
    }

    let Some(name) = prompt("Full name: ", input)? else {
        return Ok(());
    };
    let Some(birth_date) = prompt("Birth date (dd-mm-yyyy): ", input)? else {
        return Ok(());
    };
    let Some(address) = prompt("Address (street, number - district - city/state): ", input)?
    else {
        return Ok(());
    };

    match bank.register_client(name, birth_date, tax_id, address) {
        Ok(()) => println!("Client created!"),
        Err(e) => println!("Operation failed: {e}."),
    }
    Ok(())
}

fn new_account(bank: &mut Bank, input: &mut impl BufRead) -> Result<()> {
    let Some(tax_id) = prompt("Tax ID: ", input)? else {
        return Ok(());
    };

    match bank.open_account(&tax_id) {
        Ok(number) => println!("Account {number} created!"),
        Err(e) => println!("Operation failed: {e}."),
    }
    Ok(())
}

fn list_accounts(bank: &Bank) {
    if bank.accounts().is_empty() {
        println!("No accounts registered.");
        return;
    }
    for summary in bank.account_summaries() {
        println!("{}", "=".repeat(40));
        println!("{summary}");
    }
}
