use automatex::filter::Facet;
use automatex::model::{Category, Difficulty, OrderStatus, ProjectStatus, Role};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "automatex", version)]
#[command(about = "Browse, buy and manage projects on the AutomateX marketplace", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter the catalog in one go (nothing is saved)
    #[command(alias = "ls")]
    Projects {
        /// Category to include (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<Category>,

        /// Difficulty to include (repeatable)
        #[arg(short, long = "difficulty")]
        difficulties: Vec<Difficulty>,

        /// Status to include (repeatable)
        #[arg(short, long = "status")]
        statuses: Vec<ProjectStatus>,

        /// Text to find in titles and categories
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Edit the saved filters of the browse view
    #[command(alias = "f")]
    Filter {
        #[command(subcommand)]
        action: Option<FilterCommand>,
    },

    /// Show a project's listing page
    #[command(alias = "v")]
    Project { id: u32 },

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartCommand>,
    },

    /// Place orders for everything in the cart
    Checkout,

    /// Sign in (no password check is performed)
    Signin {
        #[arg(long, default_value = "customer")]
        role: Role,

        #[arg(long, required_unless_present = "demo")]
        email: Option<String>,

        #[arg(long, required_unless_present = "demo")]
        password: Option<String>,

        /// Use the role's demo account
        #[arg(long, conflicts_with_all = ["email", "password"])]
        demo: bool,
    },

    /// Create an account and sign in
    Signup {
        #[arg(long, default_value = "customer")]
        role: Role,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        confirm: String,

        /// Agree to the terms and conditions
        #[arg(long)]
        agree: bool,

        /// Company name (creators)
        #[arg(long)]
        company: Option<String>,

        /// Portfolio URL (creators)
        #[arg(long)]
        portfolio: Option<String>,

        /// Institution (educators)
        #[arg(long)]
        institution: Option<String>,

        /// Subject taught (educators)
        #[arg(long)]
        subject: Option<String>,

        /// Phone number (customers)
        #[arg(long)]
        phone: Option<String>,
    },

    /// Sign out
    #[command(alias = "logout")]
    Signout,

    /// Show who is signed in
    Whoami,

    /// Admin dashboard (admin accounts only)
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilterCommand {
    /// Show active filters
    Show,

    /// Add a facet value, or remove it if already active
    #[command(alias = "t")]
    Toggle {
        /// category, difficulty or status
        facet: Facet,

        /// Value, e.g. "Data Science" or data-science
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },

    /// Set the search text (no text clears it)
    #[command(alias = "q")]
    Query {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// Show the projects matching the saved filters
    Apply,

    /// Clear all filters and the search text
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Add a project to the cart
    Add { id: u32 },

    /// Show the cart
    Show,

    /// Empty the cart
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Order counts and revenue
    Stats,

    /// List all orders
    Orders,

    /// Show one order, or change its status
    Order {
        /// Order id or number (e.g. 2 or ORD-2024-002)
        id: String,

        #[arg(long)]
        status: Option<OrderStatus>,
    },

    /// List user accounts
    Users,

    /// List catalog projects with their creators
    Listings,

    /// Get or set platform settings
    Settings {
        /// platform-name, support-email or commission
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
