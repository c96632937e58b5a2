use anyhow::Context;
use colored::Colorize;

use sbl_protocol::InterpreterOutput;
use sbl_server::{SblServer, ServerConfig};
use sbl_session::BillSession;
use sbl_types::{ItemId, Operation, PersonSummary, Receipt, RecognizedReceipt};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Split(args) => cmd_split(args, &cli.format),
        Command::Normalize(args) => cmd_normalize(args, &cli.format),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_split(args: SplitArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let raw = read_recognized(&args.receipt)?;
    let mut session = BillSession::new();
    session.load_receipt(&raw);

    let mut operations = Vec::new();
    if let Some(path) = &args.operations {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading operations file {path}"))?;
        let output: InterpreterOutput = serde_json::from_str(&text)
            .with_context(|| format!("parsing interpreter output in {path}"))?;
        operations.extend(output.decode_operations());
    }
    for entry in &args.assign {
        operations.push(parse_assign(entry)?);
    }
    for item in &args.clear {
        operations.push(Operation::clear(item.as_str()));
    }

    session.apply_operations(&operations);
    let summaries = session.summaries();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => print_summaries(session.receipt.as_ref(), &summaries),
    }
    Ok(())
}

fn cmd_normalize(args: NormalizeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let receipt = sbl_engine::normalize(&read_recognized(&args.receipt)?);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&receipt)?),
        OutputFormat::Text => {
            for item in &receipt.items {
                println!(
                    "{}  {}  {}",
                    item.id.to_string().cyan(),
                    item.name,
                    money(item.price).bold()
                );
            }
            println!(
                "subtotal {}  tax {}  tip {}  total {}",
                money(receipt.subtotal),
                money(receipt.tax),
                money(receipt.tip),
                money(receipt.total).bold()
            );
        }
    }
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let bind_addr = args
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", args.bind))?;
    let max_sessions = (args.max_sessions > 0).then_some(args.max_sessions);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(
        SblServer::new(ServerConfig {
            bind_addr,
            max_sessions,
        })
        .serve(),
    )?;
    Ok(())
}

fn read_recognized(path: &str) -> anyhow::Result<RecognizedReceipt> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading receipt file {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing recognizer output in {path}"))
}

/// Parse `item-0=Tom,Sam` into an assign operation.
fn parse_assign(entry: &str) -> anyhow::Result<Operation> {
    let (item, people) = entry
        .split_once('=')
        .with_context(|| format!("expected ITEM=PEOPLE, got {entry}"))?;
    let item = item.trim();
    anyhow::ensure!(!item.is_empty(), "missing item id in {entry}");

    let people: Vec<String> = people
        .split(',')
        .map(str::trim)
        .filter(|person| !person.is_empty())
        .map(str::to_string)
        .collect();
    anyhow::ensure!(!people.is_empty(), "no people listed in {entry}");

    Ok(Operation::Assign {
        item_id: ItemId::new(item),
        people,
    })
}

fn print_summaries(receipt: Option<&Receipt>, summaries: &[PersonSummary]) {
    if let Some(receipt) = receipt {
        println!(
            "{} items  subtotal {}  tax {}  tip {}",
            receipt.items.len().to_string().bold(),
            money(receipt.subtotal),
            money(receipt.tax),
            money(receipt.tip)
        );
    }
    if summaries.is_empty() {
        println!("Nothing assigned yet.");
        return;
    }
    for summary in summaries {
        println!(
            "{}  items {}  tax {}  tip {}  owes {}",
            summary.name.yellow().bold(),
            money(summary.items_total),
            money(summary.tax_share),
            money(summary.tip_share),
            money(summary.total).green().bold()
        );
    }
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}
