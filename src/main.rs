mod args;
mod config;
mod reader;
mod writer;

use tbe::input::{Command, InputEvent};
use tbe::{Bank, BankError, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut bank = Bank::new();

    process_commands(&mut bank)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&bank)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the command file and apply each command against the bank. A bad row
/// or a rejected command is reported and skipped; the run carries on.
fn process_commands(bank: &mut Bank) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputEvent>() {
        log::debug!("Parsing record into InputEvent: {record:?}");
        let input_event = match record {
            Ok(input_event) => input_event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_event into Command: {input_event:?}");
        let command = match input_event.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Applying command: {command:?}");
        if let Err(e) = apply_command(bank, command) {
            log::warn!("{e}");
        }
    }

    Ok(())
}

fn apply_command(bank: &mut Bank, command: Command) -> Result {
    match command {
        Command::Register { name, pin } => {
            let id = bank.register_customer(&name, "", "", "", pin)?;
            log::debug!("Registered customer {id}: {name}");
        }

        Command::Open {
            customer,
            kind,
            opening,
        } => {
            let number = bank.open_account(customer, opening, kind)?;
            log::debug!("Opened account {number} with {opening}");
        }

        Command::Deposit { account, amount } => {
            bank.account_mut(account)
                .ok_or(BankError::UnknownAccount(account))?
                .deposit(amount)?;
        }

        Command::Withdraw { account, amount } => {
            bank.account_mut(account)
                .ok_or(BankError::UnknownAccount(account))?
                .withdraw(amount)?;
        }

        Command::Transfer {
            account,
            target,
            amount,
        } => {
            bank.transfer(account, target, amount)?;
        }

        Command::Interest { account, months } => {
            let interest = bank
                .account(account)
                .ok_or(BankError::UnknownAccount(account))?
                .calculate_interest(months)?;

            // Interest is reported, never credited.
            log::info!("Interest accrued on account {account} over {months} months: {interest}");
        }

        Command::Buy {
            account,
            symbol,
            shares,
            price,
        } => {
            bank.account_mut(account)
                .ok_or(BankError::UnknownAccount(account))?
                .buy_stocks(&symbol, shares, price)?;
        }

        Command::Sell {
            account,
            symbol,
            shares,
            price,
        } => {
            bank.account_mut(account)
                .ok_or(BankError::UnknownAccount(account))?
                .sell_stocks(&symbol, shares, price)?;
        }
    }

    Ok(())
}

/// Build the per-account report, and write it to stdout
fn report_to_std_out(bank: &Bank) -> Result {
    let report = bank.build_report();
    log::debug!("Successfully built reports for {} accounts", report.len());

    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing reports...");
    for account_report in report.iter() {
        log::debug!("Serializing report: {account_report:?}");
        wtr.serialize(account_report)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    println!("{}", output);

    Ok(())
}
