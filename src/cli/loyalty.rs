use std::io;

use maison::loyalty::{LoyaltyAccount, PointsSource, Reward, Tier};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use super::{CliError, Locale};

pub(crate) fn run(locale: Locale<'_>, out: impl io::Write) -> Result<(), CliError> {
    write_account(&LoyaltyAccount::demo(), locale, out)
}

fn write_account(
    account: &LoyaltyAccount,
    locale: Locale<'_>,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let catalog = locale.catalog;
    let strings = &catalog.loyalty;
    let tier = account.tier();

    writeln!(out, "{}", strings.title)?;
    writeln!(
        out,
        "{} · {} {} · {} x{}",
        tier.name(),
        account.points(),
        strings.points,
        strings.multiplier,
        tier.multiplier().normalize(),
    )?;

    if let (Some(next), Some(missing)) = (tier.next(), account.points_to_next_tier()) {
        writeln!(
            out,
            "{} {}: {missing} {} ({}%)",
            strings.until,
            next.name(),
            strings.points,
            account.progress_percent(),
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", strings.levels)?;

    let mut levels = Builder::default();

    for level in Tier::ALL {
        let marker = if level == tier { "●" } else { "" };

        levels.push_record([
            marker.to_string(),
            level.name().to_string(),
            level.threshold().to_string(),
            format!("x{}", level.multiplier().normalize()),
        ]);
    }

    write_table(&mut out, levels)?;

    writeln!(out, "{}", strings.rewards)?;

    let mut rewards = Builder::default();

    for reward in Reward::ALL {
        let claimable = if account.points() >= reward.cost() {
            strings.claim.as_str()
        } else {
            ""
        };

        rewards.push_record([
            reward.label(catalog).to_string(),
            format!("{} {}", reward.cost(), strings.points),
            claimable.to_string(),
        ]);
    }

    write_table(&mut out, rewards)?;

    writeln!(out, "{}", strings.recent)?;

    for entry in account.history() {
        let source = match entry.source {
            PointsSource::Order(number) => format!("{} #{number}", strings.order_entry),
            PointsSource::Reward(reward) => reward.label(catalog).to_string(),
        };

        writeln!(out, "  {source}  {:+}", entry.points)?;
    }

    Ok(())
}

fn write_table(out: &mut impl io::Write, builder: Builder) -> io::Result<()> {
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::one(2), Alignment::right());

    writeln!(out, "{table}")
}
