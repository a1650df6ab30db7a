use colored::*;
use q3scout_common::network::addr::ServerAddr;
use q3scout_common::status::ServerStatus;

use crate::terminal::format;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

/// Prints one server's cvar block and player roster, the way the
/// status subcommand and the scan listing render a responding host.
pub fn server_block(addr: &ServerAddr, status: &ServerStatus) {
    let title: String = match status.hostname() {
        Some(hostname) => format!(
            "{}  {}",
            addr.to_string().bold().green(),
            format::strip_color_codes(hostname).cyan()
        ),
        None => format!("{}", addr.to_string().bold().green()),
    };
    println!("{}", title);
    println!("{}", "─".repeat(30).bright_black());

    let key_width: usize = status
        .fields
        .keys()
        .map(|key| key.chars().count())
        .max()
        .unwrap_or(0);

    for (key, value) in &status.fields {
        let padding: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
        println!(
            "{}{} {}",
            key.cyan(),
            format!("{}:", padding).bright_black(),
            format::strip_color_codes(value)
        );
    }

    if !status.players.is_empty() {
        let names: Vec<String> = status
            .players
            .iter()
            .filter_map(format::player_name)
            .collect();
        println!(
            "{} {}",
            "players:".bright_black(),
            names.join(", ").yellow()
        );
    }
    println!();
}

pub fn summary(responding: usize, total: usize, elapsed_secs: f64) {
    let counts: ColoredString = format!("{responding}/{total} servers responding").bold().green();
    let took: ColoredString = format!("{elapsed_secs:.2}s").bold().yellow();
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
    println!("Scan complete: {counts} in {took}");
}
