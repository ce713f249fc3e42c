use clap::{Parser, Subcommand, ValueEnum};
use shelfwise::model::Kind;

#[derive(Parser, Debug)]
#[command(name = "shelfwise", version)]
#[command(about = "Keep track of what is stored where", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    #[value(alias = "w")]
    Warehouse,
    #[value(alias = "r")]
    Room,
    #[value(alias = "s")]
    Shelf,
    #[value(alias = "b")]
    Box,
    #[value(alias = "i")]
    Item,
    #[value(alias = "c")]
    Category,
    #[value(alias = "t")]
    Tag,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Warehouse => Kind::Warehouse,
            KindArg::Room => Kind::Room,
            KindArg::Shelf => Kind::Shelf,
            KindArg::Box => Kind::Box,
            KindArg::Item => Kind::Item,
            KindArg::Category => Kind::Category,
            KindArg::Tag => Kind::Tag,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a warehouse
    #[command(alias = "aw")]
    AddWarehouse { name: String },

    /// Add an item category
    #[command(alias = "ac")]
    AddCategory { name: String },

    /// Make a warehouse the active one
    #[command(alias = "sww")]
    Switch { name: String },

    /// Add a room to the active warehouse
    #[command(alias = "ar")]
    AddRoom { name: String },

    /// Add a shelf to a room
    #[command(alias = "as")]
    AddShelf {
        name: String,
        /// Room name or ID
        room: String,
    },

    /// Add a box to a shelf
    #[command(alias = "ab")]
    AddBox {
        name: String,
        /// Shelf name or ID
        shelf: String,
    },

    /// Add items to a box, one editor session per item
    #[command(alias = "ai")]
    AddItems {
        /// Box name or ID
        #[arg(value_name = "BOX")]
        bin: String,
    },

    /// Move an item to another box
    #[command(alias = "mi")]
    MoveItem {
        /// Item ID
        item: String,
        /// Target box name or ID
        #[arg(value_name = "BOX")]
        bin: String,
    },

    /// Move a box to another shelf
    #[command(alias = "mb")]
    MoveBox {
        /// Box ID
        #[arg(value_name = "BOX")]
        bin: String,
        /// Target shelf name or ID
        shelf: String,
    },

    /// List records of one kind
    #[command(alias = "l")]
    List {
        #[arg(value_enum)]
        kind: KindArg,

        /// Sort by name
        #[arg(short, long)]
        sort: bool,

        /// Only records with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only items in this box (name or ID)
        #[arg(short = 'b', long = "box", value_name = "BOX")]
        bin: Option<String>,

        /// Only items of this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Find items by name, description or location
    #[command(alias = "f")]
    Find {
        term: String,

        /// Sort by name
        #[arg(short, long)]
        sort: bool,
    },

    /// Show a record by ID, or all records of a kind with a name
    #[command(alias = "s")]
    Show {
        /// Record ID, or a name when --kind is given
        target: String,

        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Edit a record in $EDITOR
    #[command(alias = "e")]
    Edit {
        /// Record ID, or a name when --kind is given
        target: String,

        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Delete a record
    #[command(visible_alias = "rm", alias = "d")]
    Delete {
        /// Record ID, or a name when --kind is given
        target: String,

        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Attach a tag to a record
    #[command(alias = "at")]
    Tag {
        tag: String,
        /// Record ID
        id: String,
    },

    /// Remove a tag from a record
    #[command(alias = "rt")]
    Untag {
        tag: String,
        /// Record ID
        id: String,
    },

    /// Print the data file location
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, sort-by-name, name-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn aliases_map_to_commands() {
        let cli = Cli::try_parse_from(["shelfwise", "ab", "Crate", "S1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::AddBox { ref name, ref shelf } if name == "Crate" && shelf == "S1"
        ));

        let cli = Cli::try_parse_from(["shelfwise", "rm", "12", "--yes"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { yes: true, .. }));
    }

    #[test]
    fn list_takes_kind_and_filters() {
        let cli =
            Cli::try_parse_from(["shelfwise", "l", "i", "--box", "B1", "-s", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::List {
                kind, sort, bin, ..
            } => {
                assert_eq!(Kind::from(kind), Kind::Item);
                assert!(sort);
                assert_eq!(bin.as_deref(), Some("B1"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn show_accepts_kind_option() {
        let cli = Cli::try_parse_from(["shelfwise", "show", "Tools", "--kind", "category"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                kind: Some(KindArg::Category),
                ..
            }
        ));
    }
}
