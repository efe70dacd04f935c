//! Transaction CLI commands
//!
//! Implements CLI commands for recording, editing, listing and deleting
//! income and expenses.

use clap::Subcommand;

use super::{parse_date_or_today, parse_money};
use crate::config::settings::Settings;
use crate::display::format_transaction_list;
use crate::error::FinanceResult;
use crate::models::{TransactionFilter, TransactionKind, YearMonth};
use crate::services::{TransactionService, UpdateTransactionInput};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "1500" or "1,500.50")
        amount: String,
        /// Category label (e.g., "Food")
        category: String,
        /// Short description
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Only "income" or "expense"
        #[arg(short, long)]
        kind: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Change fields of an existing transaction
    Edit {
        /// Transaction ID, ID prefix or description
        id: String,
        /// "income" or "expense"
        #[arg(short, long)]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New notes (empty string clears them)
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID or ID prefix
        id: String,
        /// Skip the confirmation step
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
            notes,
        } => {
            let kind: TransactionKind = kind.parse()?;
            let amount = parse_money(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;

            let txn = service.create(kind, amount, &category, date, &description, notes.as_deref())?;

            println!("Recorded {}:", txn.kind);
            println!("  ID:          {}", txn.id);
            println!("  Date:        {}", txn.date.format(&settings.date_format));
            println!("  Amount:      {}", txn.amount.format_with_symbol(symbol));
            println!("  Category:    {}", txn.category);
            println!("  Description: {}", txn.description);
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let filter = TransactionFilter {
                kind: kind.as_deref().map(str::parse::<TransactionKind>).transpose()?,
                category,
                month: month.as_deref().map(str::parse::<YearMonth>).transpose()?,
            };

            let mut transactions = service.list(&filter)?;
            let total = transactions.len();
            transactions.truncate(limit);

            println!(
                "{}",
                format_transaction_list(&transactions, symbol, &settings.date_format)
            );
            if total > transactions.len() {
                println!("\nShowing {} of {} transactions", transactions.len(), total);
            }
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
            description,
            notes,
        } => {
            let input = UpdateTransactionInput {
                kind: kind.as_deref().map(str::parse::<TransactionKind>).transpose()?,
                amount: amount.as_deref().map(parse_money).transpose()?,
                category,
                date: match date {
                    Some(d) => Some(parse_date_or_today(Some(&d))?),
                    None => None,
                },
                description,
                notes,
            };

            let txn = service.update(&id, input)?;

            println!("Updated transaction: {}", txn.id);
            println!("  Date:        {}", txn.date.format(&settings.date_format));
            println!("  Kind:        {}", txn.kind);
            println!("  Amount:      {}", txn.amount.format_with_symbol(symbol));
            println!("  Category:    {}", txn.category);
            println!("  Description: {}", txn.description);
        }

        TransactionCommands::Delete { id, force } => {
            if !force {
                let txn = storage.transactions.resolve(&id)?;
                println!("About to delete transaction:");
                println!("  Date:        {}", txn.date.format(&settings.date_format));
                println!("  Amount:      {}", txn.amount.format_with_symbol(symbol));
                println!("  Description: {}", txn.description);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let txn = service.delete(&id)?;
            println!("Deleted transaction: {} ({})", txn.description, txn.id);
        }
    }

    Ok(())
}
