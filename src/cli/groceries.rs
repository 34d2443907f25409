use clap::Subcommand;
use saborbr_shared::GroceryList;
use saborbr_shopping::{AddItemInput, Command, Period, ShoppingError, filter_by_period, progress};
use time::{Date, OffsetDateTime};

#[derive(Subcommand)]
pub enum GroceriesCommand {
    /// Build the grocery list from a week's meal plan
    Generate {
        /// Any day of the week, defaults to the current week
        #[arg(long, value_parser = super::parse_date)]
        week: Option<Date>,
    },
    /// List grocery lists, newest first
    List {
        /// all, daily, weekly or monthly
        #[arg(long, default_value_t = Period::All)]
        period: Period,
    },
    /// Print a grocery list
    Show { id: String },
    /// Check or uncheck an item
    Toggle { id: String, item: String },
    /// Uncheck every item
    Reset { id: String },
    /// Add an item by hand
    Add {
        id: String,
        name: String,
        #[arg(long)]
        quantity: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove an item
    Remove { id: String, item: String },
    /// Create an empty list
    New,
    /// Mark a list as completed
    Complete {
        id: String,
        /// Mark as not completed instead
        #[arg(long)]
        undo: bool,
    },
    /// Delete a list
    Delete { id: String },
}

pub async fn run(config: saborbr::Config, command: GroceriesCommand) -> anyhow::Result<()> {
    let command_store = Command(super::open_store(&config).await?);

    match command {
        GroceriesCommand::Generate { week } => {
            let week = week.unwrap_or_else(super::today);
            match command_store.generate(week).await {
                Ok(list) if list.is_empty() => {
                    println!("nothing to buy this week ({})", list.id);
                }
                Ok(list) => print_list(&list),
                Err(err @ ShoppingError::MissingPlan) => {
                    tracing::warn!(%week, "grocery list not generated");
                    println!("{err}");
                }
                Err(err) => return Err(err.into()),
            }
        }
        GroceriesCommand::List { period } => {
            let lists = command_store.all().await?;
            for list in filter_by_period(&lists, period, OffsetDateTime::now_utc()) {
                let p = progress(list);
                println!(
                    "{}\t{}\t{}/{} ({:.0}%){}",
                    list.id,
                    list.name,
                    p.checked,
                    p.total,
                    p.percent,
                    if list.completed { "\tcompleted" } else { "" }
                );
            }
        }
        GroceriesCommand::Show { id } => match command_store.load(&id).await? {
            Some(list) => print_list(&list),
            None => anyhow::bail!("grocery list {id} not found"),
        },
        GroceriesCommand::Toggle { id, item } => {
            let item = command_store.toggle(&id, &item).await?;
            println!(
                "{} {}",
                if item.checked { "[x]" } else { "[ ]" },
                item.name
            );
        }
        GroceriesCommand::Reset { id } => {
            command_store.reset(&id).await?;
            println!("all items unchecked");
        }
        GroceriesCommand::Add {
            id,
            name,
            quantity,
            unit,
            category,
        } => {
            let item = command_store
                .add_item(
                    &id,
                    AddItemInput {
                        name,
                        quantity,
                        unit,
                        category,
                    },
                )
                .await?;
            println!("{}\t{} {} {}", item.id, item.name, item.quantity, item.unit);
        }
        GroceriesCommand::Remove { id, item } => {
            command_store.remove_item(&id, &item).await?;
            println!("item removed");
        }
        GroceriesCommand::New => {
            let list = command_store.create_blank(OffsetDateTime::now_utc()).await?;
            println!("{}\t{}", list.id, list.name);
        }
        GroceriesCommand::Complete { id, undo } => {
            command_store.set_completed(&id, !undo).await?;
        }
        GroceriesCommand::Delete { id } => {
            command_store.delete(&id).await?;
            println!("grocery list deleted");
        }
    }

    Ok(())
}

fn print_list(list: &GroceryList) {
    let p = progress(list);
    println!("{} ({})", list.name, list.id);
    println!("{}/{} items checked ({:.0}%)", p.checked, p.total, p.percent);

    let mut categories = list
        .items
        .iter()
        .map(|i| i.category.as_str())
        .collect::<Vec<_>>();
    categories.sort_unstable();
    categories.dedup();

    for category in categories {
        println!("{category}");
        for item in list.items.iter().filter(|i| i.category == category) {
            println!(
                "  {} {} {} {}\t{}",
                if item.checked { "[x]" } else { "[ ]" },
                item.quantity,
                item.unit,
                item.name,
                item.id
            );
        }
    }
}
