use automatex::api::{
    CmdMessage, CmdResult, ConfigAction, MarketApi, MarketPaths, SignInForm, SignUpForm,
};
use automatex::error::{MarketError, Result};
use automatex::filter::SelectionState;
use automatex::model::{Category, Difficulty, OrderStatus, ProjectStatus, Role};
use automatex::session::RoleProfile;
use automatex::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

mod args;
mod logging;
mod render;

use args::{AdminCommand, CartCommand, Cli, Commands, FilterCommand};

const HOME_ENV: &str = "AUTOMATEX_HOME";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MarketApi<FileStore>,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Projects {
            categories,
            difficulties,
            statuses,
            search,
        }) => handle_projects(&ctx, categories, difficulties, statuses, search),
        Some(Commands::Filter { action }) => handle_filter(&mut ctx, action),
        Some(Commands::Project { id }) => handle_project(&ctx, id),
        Some(Commands::Cart { action }) => handle_cart(&mut ctx, action),
        Some(Commands::Checkout) => handle_checkout(&mut ctx),
        Some(Commands::Signin {
            role,
            email,
            password,
            demo,
        }) => handle_signin(&mut ctx, role, email, password, demo),
        Some(Commands::Signup {
            role,
            name,
            email,
            password,
            confirm,
            agree,
            company,
            portfolio,
            institution,
            subject,
            phone,
        }) => {
            let flags = ProfileFlags {
                company,
                portfolio,
                institution,
                subject,
                phone,
            };
            let profile = signup_profile(role, flags);
            let form = SignUpForm {
                full_name: name,
                email,
                password,
                confirm_password: confirm,
                agreed_to_terms: agree,
                profile,
            };
            handle_signup(&mut ctx, form)
        }
        Some(Commands::Signout) => handle_signout(&mut ctx),
        Some(Commands::Whoami) => handle_whoami(&ctx),
        Some(Commands::Admin { action }) => handle_admin(&mut ctx, action),
        None => handle_filter(&mut ctx, Some(FilterCommand::Apply)),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "automatex", "automatex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            MarketError::Store(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    debug!(data_dir = %dir.display(), "using data directory");

    let store = FileStore::new(dir.clone());
    let api = MarketApi::new(store, MarketPaths::new(dir));
    Ok(AppContext { api })
}

fn print_result(result: &CmdResult) {
    render::print_messages(&result.messages);
}

fn handle_projects(
    ctx: &AppContext,
    categories: Vec<Category>,
    difficulties: Vec<Difficulty>,
    statuses: Vec<ProjectStatus>,
    search: Option<String>,
) -> Result<()> {
    let mut selection = SelectionState::new();
    selection.categories.extend(categories);
    selection.difficulties.extend(difficulties);
    selection.statuses.extend(statuses);
    if let Some(query) = search {
        selection.set_query(query);
    }

    let result = ctx.api.search_projects(&selection);
    print!("{}", render::render_projects(&result.listed_projects));
    print_result(&result);
    Ok(())
}

fn handle_filter(ctx: &mut AppContext, action: Option<FilterCommand>) -> Result<()> {
    let result = match action.unwrap_or(FilterCommand::Show) {
        FilterCommand::Show => {
            let result = ctx.api.selection()?;
            if let Some(selection) = &result.selection {
                print!("{}", render::render_selection(selection));
            }
            result
        }
        FilterCommand::Toggle { facet, value } => {
            let value = facet.value(&value.join(" "))?;
            ctx.api.toggle_filter(value)?
        }
        FilterCommand::Query { text } => ctx.api.set_query(&text.join(" "))?,
        FilterCommand::Apply => {
            let result = ctx.api.apply_filters()?;
            if let Some(selection) = result.selection.as_ref().filter(|s| !s.is_empty()) {
                print!("{}", render::render_selection(selection));
                println!();
            }
            print!("{}", render::render_projects(&result.listed_projects));
            result
        }
        FilterCommand::Reset => {
            let result = ctx.api.reset_filters()?;
            print!("{}", render::render_projects(&result.listed_projects));
            result
        }
    };
    print_result(&result);
    Ok(())
}

fn handle_project(ctx: &AppContext, id: u32) -> Result<()> {
    let result = ctx.api.project_detail(id)?;
    if let Some(detail) = &result.detail {
        print!("{}", render::render_detail(detail, result.cart.as_ref()));
    }
    print_result(&result);
    Ok(())
}

fn handle_cart(ctx: &mut AppContext, action: Option<CartCommand>) -> Result<()> {
    let result = match action.unwrap_or(CartCommand::Show) {
        CartCommand::Add { id } => ctx.api.add_to_cart(id)?,
        CartCommand::Show => {
            let result = ctx.api.show_cart()?;
            if let Some(cart) = &result.cart {
                print!("{}", render::render_cart(cart));
            }
            result
        }
        CartCommand::Clear => ctx.api.clear_cart()?,
    };
    print_result(&result);
    Ok(())
}

fn handle_checkout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.checkout()?;
    print_result(&result);
    Ok(())
}

fn handle_signin(
    ctx: &mut AppContext,
    role: Role,
    email: Option<String>,
    password: Option<String>,
    demo: bool,
) -> Result<()> {
    let form = if demo {
        SignInForm::demo(role)
    } else {
        SignInForm {
            role,
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    };
    let result = ctx.api.sign_in(form)?;
    print_result(&result);
    Ok(())
}

struct ProfileFlags {
    company: Option<String>,
    portfolio: Option<String>,
    institution: Option<String>,
    subject: Option<String>,
    phone: Option<String>,
}

/// Builds the role's profile, warning about flags that belong to other roles.
fn signup_profile(role: Role, flags: ProfileFlags) -> RoleProfile {
    let ProfileFlags {
        company,
        portfolio,
        institution,
        subject,
        phone,
    } = flags;
    let all = [
        ("--company", company.is_some()),
        ("--portfolio", portfolio.is_some()),
        ("--institution", institution.is_some()),
        ("--subject", subject.is_some()),
        ("--phone", phone.is_some()),
    ];
    let (profile, used): (RoleProfile, &[&str]) = match role {
        Role::Admin => (RoleProfile::Admin, &[]),
        Role::Creator => (
            RoleProfile::Creator {
                company_name: company,
                portfolio_url: portfolio,
            },
            &["--company", "--portfolio"],
        ),
        Role::Customer => (
            RoleProfile::Customer {
                phone_number: phone,
            },
            &["--phone"],
        ),
        Role::Educator => (
            RoleProfile::Educator {
                institution,
                subject,
            },
            &["--institution", "--subject"],
        ),
    };

    let ignored: Vec<&str> = all
        .iter()
        .filter(|(flag, given)| *given && !used.contains(flag))
        .map(|(flag, _)| *flag)
        .collect();
    if !ignored.is_empty() {
        render::print_messages(&[CmdMessage::warning(format!(
            "Ignoring {} (not used for {} accounts)",
            ignored.join(", "),
            role.label()
        ))]);
    }
    profile
}

fn handle_signup(ctx: &mut AppContext, form: SignUpForm) -> Result<()> {
    let result = ctx.api.sign_up(form)?;
    print_result(&result);
    Ok(())
}

fn handle_signout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sign_out()?;
    print_result(&result);
    Ok(())
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    print!("{}", render::render_session(result.session.as_ref()));
    print_result(&result);
    Ok(())
}

fn handle_admin(ctx: &mut AppContext, action: AdminCommand) -> Result<()> {
    let result = match action {
        AdminCommand::Stats => {
            let result = ctx.api.admin_stats()?;
            if let Some(stats) = &result.stats {
                print!("{}", render::render_stats(stats));
            }
            result
        }
        AdminCommand::Orders => {
            let result = ctx.api.admin_orders()?;
            print!("{}", render::render_orders(&result.orders));
            result
        }
        AdminCommand::Order { id, status } => handle_order(ctx, &id, status)?,
        AdminCommand::Users => {
            let result = ctx.api.admin_users()?;
            print!("{}", render::render_users(&result.users));
            result
        }
        AdminCommand::Listings => {
            let result = ctx.api.admin_listings()?;
            print!("{}", render::render_listings(&result.listings));
            result
        }
        AdminCommand::Settings { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            let show_all = matches!(action, ConfigAction::ShowAll);
            let result = ctx.api.settings(action)?;
            if let Some(config) = result.config.as_ref().filter(|_| show_all) {
                print!("{}", render::render_config(config));
            }
            result
        }
    };
    print_result(&result);
    Ok(())
}

fn handle_order(
    ctx: &mut AppContext,
    id: &str,
    status: Option<OrderStatus>,
) -> Result<CmdResult> {
    let result = match status {
        Some(status) => ctx.api.set_order_status(id, status)?,
        None => ctx.api.admin_order(id)?,
    };
    for order in &result.orders {
        print!("{}", render::render_order(order));
    }
    Ok(result)
}
