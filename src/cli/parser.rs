use clap::{Parser, Subcommand};

/// Command-line interface definition for officelog
#[derive(Parser)]
#[command(
    name = "officelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mark your daily office entry/exit, hand the day off to a form and keep a small to-do list",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Mark today's entry
    Entry {
        /// Entry time instead of now: HH:MM, "YYYY-MM-DD HH:MM" or RFC 3339
        #[arg(long = "at", value_name = "TIME")]
        at: Option<String>,
    },

    /// Mark today's exit and prepare the form submission
    Exit {
        #[arg(long = "company", help = "Company name sent with the form")]
        company: Option<String>,

        #[arg(long = "comment", help = "Comment sent with the form")]
        comment: Option<String>,
    },

    /// Build the pre-filled form link, then report whether it was sent
    Submit {
        #[arg(
            long = "done",
            conflicts_with_all = ["abandon", "cancel"],
            help = "The form was submitted: close the day"
        )]
        done: bool,

        #[arg(
            long = "abandon",
            conflicts_with = "cancel",
            help = "The form was closed without submitting: undo the exit"
        )]
        abandon: bool,

        #[arg(long = "cancel", help = "Drop the pending exit before building the link")]
        cancel: bool,
    },

    /// Show today's entry/exit status and durations
    Status {
        #[arg(long = "watch", help = "Refresh the time since entry every second")]
        watch: bool,
    },

    /// Forget today's entry/exit record
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Manage the to-do list (lists it when no option is given)
    Todo {
        #[arg(long = "list", help = "List all to-do items")]
        list: bool,

        #[arg(
            long = "add",
            value_name = "DESCRIPTION",
            group = "timed",
            help = "Add a to-do item"
        )]
        add: Option<String>,

        #[arg(
            long = "time",
            value_name = "HH:MM",
            requires = "timed",
            help = "Time for --add (default 09:00) or the new time for --set"
        )]
        time: Option<String>,

        #[arg(long = "toggle", value_name = "ID|#", help = "Toggle an item's completed flag")]
        toggle: Option<String>,

        #[arg(long = "del", value_name = "ID|#", help = "Delete an item")]
        del: Option<String>,

        #[arg(
            long = "set",
            value_name = "ID|#",
            group = "timed",
            requires = "time",
            help = "Change an item's time (with --time)"
        )]
        set: Option<String>,

        #[arg(long = "clear", help = "Replace all items with the default list")]
        clear: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation (with --clear)")]
        yes: bool,
    },

    /// Show or change the work settings
    Settings {
        #[arg(long = "work-hours", value_name = "HOURS", help = "Hours to add to the entry time for the expected exit")]
        work_hours: Option<f64>,

        #[arg(long = "exit-time", value_name = "HH:MM", help = "Usual exit time")]
        exit_time: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
