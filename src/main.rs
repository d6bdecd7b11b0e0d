use chrono::Local;
use dotenvy::dotenv;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wedbudget::config::{Config, RemoteConfig};
use wedbudget::core::{filter, summary};
use wedbudget::errors::Result;
use wedbudget::export::ExportDocument;
use wedbudget::state::{AppState, Tracker};
use wedbudget::store::{LocalCache, RemoteStore, SyncEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load configuration and open the local cache
    let config = Config::load("config.toml")?;
    let cache = LocalCache::new(&config.data_dir)?;
    info!("Cache directory: {}", cache.dir().display());

    // 4. Connect the remote store when credentials are present
    let remote = match RemoteConfig::from_env() {
        Some(remote_config) => Some(RemoteStore::new(&remote_config)?),
        None => {
            info!("No remote credentials set; running cache-only");
            None
        }
    };

    // 5. Load state through the remote-then-cache fallback chain
    let tracker = Tracker::load(cache, remote.as_ref()).await;
    let state = tracker.snapshot().await;

    // 6. Dispatch: `export [path]` writes a backup, otherwise print the report
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("export") => {
            let path = args.get(1).map_or("wedbudget-export.json", String::as_str);
            ExportDocument::from_state(&state).write_to(path)?;
            println!("Exported to {path}");
        }
        Some(other) => {
            warn!("Unknown command {other:?}; expected `export [path]`");
            print_report(&state);
        }
        None => print_report(&state),
    }

    // 7. Push anything still unsynced before exiting
    if let Some(remote) = remote {
        let engine = SyncEngine::new(
            remote,
            tracker.state_handle(),
            tracker.changes_handle(),
            config.debounce(),
        );
        let status = engine.flush().await;
        info!("Final sync status: {status:?}");
    }

    Ok(())
}

fn print_report(state: &AppState) {
    let today = Local::now().date_naive();

    let budget = summary::budget_summary(&state.vendors);
    println!("Wedding Budget");
    println!(
        "  total ${:.2}  paid ${:.2} ({:.0}%)  remaining ${:.2}",
        budget.total,
        budget.paid,
        summary::percent_paid(budget.paid, budget.total),
        budget.remaining
    );
    println!(
        "  remaining owed by us ${:.2}, by parents ${:.2}",
        budget.our_remaining, budget.parent_remaining
    );

    let ours = summary::our_payments_summary(&state.vendors);
    println!("Our Payments");
    println!(
        "  total ${:.2}  paid ${:.2}  remaining ${:.2}",
        ours.total, ours.paid, ours.remaining
    );

    let funds = summary::funds_summary(&state.funds);
    println!("Incoming Funds");
    println!(
        "  expected ${:.2}  received ${:.2}  pending ${:.2}",
        funds.total_expected, funds.received, funds.pending
    );
    println!(
        "  shortfall after funds ${:.2}",
        summary::shortfall(&state.vendors, &state.funds)
    );

    println!("Savings");
    println!(
        "  total ${:.2}  coverage gap ${:.2}",
        state.finances.total_savings(),
        summary::savings_gap(&state.finances, &state.vendors)
    );

    let upcoming = summary::upcoming_payments(&state.vendors, 5);
    if !upcoming.is_empty() {
        println!("Next Payments");
        for vendor in &upcoming {
            if let Some(due) = vendor.due_date {
                println!("  {due}  {}  ${:.2}", vendor.name, vendor.remaining);
            }
        }
    }

    let timeline = filter::group_vendors_by_date(&state.vendors, today);
    if !timeline.groups.is_empty() {
        println!("Timeline");
        for group in &timeline.groups {
            let marker = if group.is_overdue { " (overdue)" } else { "" };
            println!("  {} [{}]{marker}", group.date, group.month_year);
            for vendor in &group.vendors {
                println!("    {}  ${:.2} remaining", vendor.name, vendor.remaining);
            }
        }
        if !timeline.no_date.is_empty() {
            println!("  no due date: {} vendor(s)", timeline.no_date.len());
        }
    }

    let open_todos = state.todos.iter().filter(|t| !t.completed).count();
    println!(
        "Checklist: {open_todos} open of {} task(s); {} vendor(s) completed",
        state.todos.len(),
        state.completed_vendors.len()
    );
}
