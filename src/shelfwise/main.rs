use clap::Parser;
use shelfwise::api::{CmdResult, ConfigAction, InventoryApi, ListFilter};
use shelfwise::config::{ShelfwiseConfig, ShelfwisePaths};
use shelfwise::error::Result;
use shelfwise::model::Kind;
use shelfwise::store::fs::FileStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{print_config, print_details, print_listing, print_messages};
use cli::prompt::TerminalPrompt;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

struct AppContext {
    api: InventoryApi<FileStore>,
    ui: TerminalPrompt,
}

fn init_context() -> Result<AppContext> {
    let paths = ShelfwisePaths::resolve()?;
    let config = ShelfwiseConfig::load(&paths.home)?;
    let store = FileStore::new(paths.data_file(&config));
    let ui = TerminalPrompt::new(config.name_width);
    tracing::debug!(home = %paths.home.display(), "resolved home directory");
    let api = InventoryApi::open(store, paths, config)?;
    Ok(AppContext { api, ui })
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context()?;
    let AppContext { api, ui } = &mut ctx;

    let result = match cli.command {
        Commands::AddWarehouse { name } => api.add_warehouse(&name)?,
        Commands::AddCategory { name } => api.add_category(&name)?,
        Commands::Switch { name } => api.switch_warehouse(&name)?,
        Commands::AddRoom { name } => api.add_room(&name)?,
        Commands::AddShelf { name, room } => api.add_shelf(ui, &name, &room)?,
        Commands::AddBox { name, shelf } => api.add_box(ui, &name, &shelf)?,
        Commands::AddItems { bin } => api.add_items(ui, &bin)?,
        Commands::MoveItem { item, bin } => api.move_item(ui, &item, &bin)?,
        Commands::MoveBox { bin, shelf } => api.move_box(ui, &bin, &shelf)?,
        Commands::List {
            kind,
            sort,
            tag,
            bin,
            category,
        } => {
            let filter = ListFilter { tag, bin, category };
            api.list(ui, kind.into(), &filter, sort)?
        }
        Commands::Find { term, sort } => api.find(&term, sort)?,
        Commands::Show { target, kind } => api.show(&target, kind.map(Kind::from))?,
        Commands::Edit { target, kind } => api.edit(ui, &target, kind.map(Kind::from))?,
        Commands::Delete { target, kind, yes } => {
            api.delete(ui, &target, kind.map(Kind::from), yes)?
        }
        Commands::Tag { tag, id } => api.tag(&tag, &id)?,
        Commands::Untag { tag, id } => api.untag(&tag, &id)?,
        Commands::Path => api.path()?,
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            api.config_action(action)?
        }
    };

    render(&result, api.config().name_width);
    Ok(())
}

fn render(result: &CmdResult, name_width: usize) {
    if let Some(listing) = &result.listing {
        print_listing(listing, name_width);
    }
    print_details(&result.details);
    if let Some(path) = &result.path {
        println!("{}", path);
    }
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
}
