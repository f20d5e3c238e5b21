use crate::core::attendance::RangeFilter;
use crate::core::tasks::TaskFilter;
use crate::export::ExportFormat;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for fieldops
#[derive(Parser, Debug)]
#[command(
    name = "fieldops",
    version = env!("CARGO_PKG_VERSION"),
    about = "Field operations client: assigned tasks and projects, attendance, inventory usage",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (e.g. http://10.0.0.5:3000/api)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Override the session file path (useful for tests or multiple accounts)
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG wins when set
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Device position given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct PositionArgs {
    /// Latitude of the current position
    #[arg(long = "lat", requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the current position
    #[arg(long = "lon", requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

/// Output file for the currently visible rows.
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Write the listed rows to FILE instead of only printing them
    #[arg(long, value_name = "FILE")]
    pub export: Option<String>,

    #[arg(long, value_enum, default_value = "csv", requires = "export")]
    pub format: ExportFormat,

    /// Overwrite the output file without confirmation
    #[arg(long, short = 'f', requires = "export")]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Sign in and store the session identifier
    Login {
        /// Username or email
        #[arg(long, short = 'u')]
        identifier: String,

        /// Password (read from stdin when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Forget the stored session identifier
    Logout,

    /// Show the stored session identifier
    Whoami,

    /// List assigned tasks
    Tasks {
        #[arg(long, value_enum, default_value = "all", help = "Date bucket to show")]
        filter: TaskFilter,

        #[arg(long, help = "Show full descriptions and feedback")]
        details: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Update the status of an assigned task (records the current location)
    TaskStatus {
        /// Task id
        task_id: i64,

        /// New status: Pending, "In Progress", Completed, Delayed
        status: String,

        #[command(flatten)]
        position: PositionArgs,
    },

    /// Assigned projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Attendance check-in/check-out and history
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Inventory catalogue and usage reports
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// List assigned projects
    List,

    /// Change a project's status
    Status {
        project_id: i64,

        /// planning, in_progress, completed, delayed
        status: String,
    },

    /// Upload images to a project
    Upload {
        project_id: i64,

        /// Image files (JPEG or PNG)
        #[arg(required = true)]
        files: Vec<String>,

        /// Status sent along with the images (defaults to the current one)
        #[arg(long)]
        status: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AttendanceAction {
    /// Start the working day
    CheckIn {
        #[command(flatten)]
        position: PositionArgs,
    },

    /// End the working day
    CheckOut {
        #[command(flatten)]
        position: PositionArgs,
    },

    /// Show attendance history
    History {
        #[arg(long, value_enum, default_value = "all")]
        range: RangeFilter,

        /// Case-insensitive search on the date (e.g. "monday", "march") and times
        #[arg(long, short = 's')]
        search: Option<String>,

        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryAction {
    /// List items in stock
    Items {
        #[arg(long, default_value = "all")]
        category: String,

        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// List item categories
    Categories,

    /// List tasks a usage report can be filed against
    Tasks,

    /// Build and submit a usage report
    Report {
        /// Task the materials were used for
        #[arg(long)]
        task: Option<i64>,

        /// ITEM_ID:QTY, repeatable; repeated items are summed
        #[arg(long = "add", value_name = "ITEM:QTY")]
        add: Vec<String>,

        /// ITEM_ID:QTY, replaces the quantity of an added item
        #[arg(long = "set", value_name = "ITEM:QTY")]
        set: Vec<String>,

        /// ITEM_ID to drop from the report
        #[arg(long = "remove", value_name = "ITEM")]
        remove: Vec<i64>,

        /// Print the report without submitting it
        #[arg(long)]
        dry_run: bool,
    },
}
