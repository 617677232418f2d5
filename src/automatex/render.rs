//! Terminal rendering of command results.
//!
//! Every `render_*` function returns the text to print, so layout can be tested
//! without a terminal. Colors come from `colored` and switch off automatically
//! when stdout is not a TTY.

use automatex::api::{CmdMessage, DashboardStats, Listing, MessageLevel};
use automatex::config::MarketConfig;
use automatex::filter::SelectionState;
use automatex::model::{Cart, Order, OrderStatus, ProjectDetail, ProjectRecord, UserAccount};
use automatex::session::Session;
use chrono::Utc;
use colored::*;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const TITLE_WIDTH: usize = 16;
const CATEGORY_WIDTH: usize = 16;
const DIFFICULTY_WIDTH: usize = 13;
const STATUS_WIDTH: usize = 12;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let padding = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(padding))
}

/// Five stars, the first `floor(rating)` filled.
pub fn stars(rating: f32) -> String {
    let filled = (rating.floor().max(0.0) as usize).min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Whole dollars with thousands separators: `$5,999`.
pub fn money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

fn status_colored(status: OrderStatus) -> ColoredString {
    match status {
        OrderStatus::Completed => status.label().green(),
        OrderStatus::Pending => status.label().yellow(),
        OrderStatus::Cancelled => status.label().red(),
    }
}

pub fn render_projects(projects: &[ProjectRecord]) -> String {
    let mut out = String::new();
    if projects.is_empty() {
        let _ = writeln!(out, "{}", "No Projects Found".bold());
        let _ = writeln!(
            out,
            "{}",
            "Try resetting filters, searching by keyword, or exploring featured categories"
                .dimmed()
        );
        return out;
    }

    for project in projects {
        let _ = writeln!(
            out,
            "{:>3}. {} {} {} {} {} {:.1}",
            project.id.to_string().yellow(),
            pad(&project.title, TITLE_WIDTH).bold(),
            pad(project.category.label(), CATEGORY_WIDTH).cyan(),
            pad(project.difficulty.label(), DIFFICULTY_WIDTH),
            pad(project.status.label(), STATUS_WIDTH),
            stars(project.rating).yellow(),
            project.rating
        );
        let _ = writeln!(
            out,
            "     {}",
            truncate_to_width(&project.highlights, LINE_WIDTH - 5).dimmed()
        );
    }
    out
}

pub fn render_selection(selection: &SelectionState) -> String {
    let mut out = String::new();
    if selection.is_empty() {
        let _ = writeln!(out, "{}", "No filters active".dimmed());
        return out;
    }

    let join = |labels: Vec<&str>| {
        if labels.is_empty() {
            "any".dimmed().to_string()
        } else {
            labels.join(", ")
        }
    };
    let _ = writeln!(
        out,
        "Category:   {}",
        join(selection.categories.iter().map(|c| c.label()).collect())
    );
    let _ = writeln!(
        out,
        "Difficulty: {}",
        join(selection.difficulties.iter().map(|d| d.label()).collect())
    );
    let _ = writeln!(
        out,
        "Status:     {}",
        join(selection.statuses.iter().map(|s| s.label()).collect())
    );
    if !selection.query.is_empty() {
        let _ = writeln!(out, "Search:     \"{}\"", selection.query);
    }
    out
}

pub fn render_detail(detail: &ProjectDetail, cart: Option<&Cart>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}",
        detail.title.bold(),
        format!("[{}]", detail.tag).cyan()
    );
    let _ = writeln!(
        out,
        "{} {} ({} reviews) · {} downloads",
        stars(detail.rating).yellow(),
        detail.rating,
        detail.reviews,
        detail.downloads
    );
    let _ = writeln!(
        out,
        "{}  · bundle of {} projects",
        money(u64::from(detail.price)).green().bold(),
        detail.bundle_count
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", detail.description);

    let _ = writeln!(out, "\n{}", "What's Included".bold());
    for item in &detail.sub_projects {
        let _ = writeln!(out, "  • {}", item);
    }
    let _ = writeln!(out, "\n{}", "Features".bold());
    for feature in &detail.features {
        let _ = writeln!(out, "  ✓ {}", feature);
    }

    let creator = &detail.creator;
    let _ = writeln!(out, "\n{}", "Creator".bold());
    let _ = writeln!(out, "  {} · {}", creator.name, creator.title.dimmed());
    let _ = writeln!(
        out,
        "  {} followers · {} projects · {} rating",
        creator.followers, creator.projects, creator.rating
    );
    let _ = writeln!(out, "  {}", creator.bio.dimmed());
    if creator.projects > 1 {
        let _ = writeln!(
            out,
            "  Explore {} more projects by {}",
            creator.projects - 1,
            creator.first_name()
        );
    }

    if let Some(cart) = cart.filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "\n{} item(s) in cart", cart.item_count());
    }
    out
}

pub fn render_cart(cart: &Cart) -> String {
    let mut out = String::new();
    if cart.is_empty() {
        let _ = writeln!(out, "{}", "Your cart is empty".dimmed());
        return out;
    }
    for line in &cart.lines {
        let _ = writeln!(
            out,
            "{:>3}. {} {:>3} × {:>8} = {:>9}",
            line.project_id.to_string().yellow(),
            pad(&line.title, TITLE_WIDTH),
            line.quantity,
            money(u64::from(line.price)),
            money(line.subtotal())
        );
    }
    let _ = writeln!(
        out,
        "{:>48}",
        format!("Total: {}", money(cart.total())).bold()
    );
    out
}

pub fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

pub fn render_session(session: Option<&Session>) -> String {
    let mut out = String::new();
    let Some(session) = session else {
        return out;
    };
    let _ = writeln!(
        out,
        "{} {} ({})",
        session.role.icon(),
        session.display_name().bold(),
        session.role.label()
    );
    if session.name.is_some() {
        let _ = writeln!(out, "  Email: {}", session.email);
    }
    if let Some(profile) = &session.profile {
        for (label, value) in profile.fields() {
            let _ = writeln!(out, "  {}: {}", label, value);
        }
    }
    let _ = writeln!(
        out,
        "  {}",
        format!("Signed in {}", format_time_ago(session.started_at)).dimmed()
    );
    out
}

pub fn render_orders(orders: &[Order]) -> String {
    let mut out = String::new();
    if orders.is_empty() {
        let _ = writeln!(out, "{}", "No orders".dimmed());
        return out;
    }
    for order in orders {
        let _ = writeln!(
            out,
            "{} {} {} {:>8}  {}  {}",
            pad(&order.order_number, 13).yellow(),
            pad(&order.customer, 16),
            pad(&order.project, 14),
            money(order.amount),
            order.date,
            status_colored(order.status)
        );
    }
    out
}

pub fn render_order(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", order.order_number.bold());
    let _ = writeln!(out, "  Customer: {} <{}>", order.customer, order.email);
    let _ = writeln!(out, "  Project:  {}", order.project);
    let _ = writeln!(out, "  Amount:   {}", money(order.amount));
    let _ = writeln!(out, "  Date:     {}", order.date);
    let _ = writeln!(out, "  Status:   {}", status_colored(order.status));
    out
}

pub fn render_stats(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Orders  {}", stats.total_orders.to_string().bold());
    let _ = writeln!(out, "Completed     {}", stats.completed.to_string().green());
    let _ = writeln!(out, "Pending       {}", stats.pending.to_string().yellow());
    let _ = writeln!(out, "Cancelled     {}", stats.cancelled.to_string().red());
    let _ = writeln!(out, "Revenue       {}", money(stats.revenue).bold());
    let _ = writeln!(
        out,
        "Commission    {} ({}%)",
        money(stats.commission),
        stats.commission_percent
    );
    let _ = writeln!(out, "Active Users  {}", stats.active_users);
    let _ = writeln!(out, "Completion    {}%", stats.completion_rate);
    out
}

pub fn render_users(users: &[UserAccount]) -> String {
    let mut out = String::new();
    for user in users {
        let _ = writeln!(
            out,
            "{} {} {} {}  {}",
            pad(&user.name, 16).bold(),
            pad(&user.email, 20),
            pad(user.role.label(), 9).cyan(),
            user.join_date,
            user.status
        );
    }
    out
}

pub fn render_listings(listings: &[Listing]) -> String {
    let mut out = String::new();
    for listing in listings {
        let price = listing
            .price
            .map(|p| money(u64::from(p)))
            .unwrap_or_else(|| "-".to_string());
        let creator = listing.creator.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{:>3}. {} {} {:>8}  {}",
            listing.project.id.to_string().yellow(),
            pad(&listing.project.title, TITLE_WIDTH).bold(),
            pad(creator, 16),
            price,
            listing.project.status
        );
    }
    out
}

pub fn render_config(config: &MarketConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "platform-name = {}", config.platform_name);
    let _ = writeln!(out, "support-email = {}", config.support_email);
    let _ = writeln!(out, "commission = {}%", config.commission_percent);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use automatex::catalog::Catalog;
    use automatex::model::Category;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn stars_floor_the_rating() {
        assert_eq!(stars(4.9), "★★★★☆");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(0.5), "☆☆☆☆☆");
    }

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(999), "$999");
        assert_eq!(money(4999), "$4,999");
        assert_eq!(money(1234567), "$1,234,567");
    }

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate_to_width("EcoTrack", 20), "EcoTrack");
        let cut = truncate_to_width("Interactive learning platform", 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn empty_view_renders_empty_state() {
        plain();
        assert!(render_projects(&[]).starts_with("No Projects Found"));
    }

    #[test]
    fn projects_render_one_block_each() {
        plain();
        let catalog = Catalog::featured();
        let out = render_projects(catalog.records());
        assert_eq!(out.lines().count(), 12);
        assert!(out.contains("SmileCare AI"));
        assert!(out.contains("Healthcare AI"));
    }

    #[test]
    fn selection_lists_active_facets() {
        plain();
        let mut selection = SelectionState::new();
        selection.toggle_category(Category::EdTech);
        selection.set_query("edu");
        let out = render_selection(&selection);
        assert!(out.contains("Category:   EdTech"));
        assert!(out.contains("Difficulty: any"));
        assert!(out.contains("Search:     \"edu\""));
    }

    #[test]
    fn stats_show_users_and_completion() {
        plain();
        let stats = DashboardStats {
            total_orders: 4,
            completed: 2,
            pending: 2,
            revenue: 10998,
            commission: 1099,
            commission_percent: 10,
            active_users: 4,
            completion_rate: 50,
            ..Default::default()
        };
        let out = render_stats(&stats);
        assert!(out.contains("Revenue       $10,998"));
        assert!(out.contains("Active Users  4"));
        assert!(out.contains("Completion    50%"));
    }

    #[test]
    fn detail_mentions_creator_followups() {
        plain();
        let catalog = Catalog::featured();
        let out = render_detail(catalog.detail(3).unwrap(), None);
        assert!(out.contains("$5,999"));
        assert!(out.contains("Explore 14 more projects by Alex"));
    }
}
