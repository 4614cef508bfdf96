//! Loyalty
//!
//! Point balance, tiers and rewards behind the loyalty screen. The account is demo data; no
//! backend ever credits real orders.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::i18n::Catalog;

/// Errors raised by loyalty operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoyaltyError {
    /// The reward costs more than the current balance
    #[error("reward costs {cost} points but only {balance} are available")]
    InsufficientPoints {
        /// Reward cost
        cost: u32,
        /// Current balance
        balance: u32,
    },
}

/// Loyalty level, reached by point balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Entry level
    Bronze,

    /// 500 points
    Silver,

    /// 1000 points
    Gold,

    /// 2000 points, the top
    Platinum,
}

impl Tier {
    /// Every tier, lowest first.
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Points needed to reach this tier.
    pub fn threshold(self) -> u32 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 500,
            Tier::Gold => 1_000,
            Tier::Platinum => 2_000,
        }
    }

    /// Highest tier whose threshold `points` meets.
    pub fn for_points(points: u32) -> Self {
        Tier::ALL
            .into_iter()
            .rev()
            .find(|tier| points >= tier.threshold())
            .unwrap_or(Tier::Bronze)
    }

    /// The tier above this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Tier::Bronze => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => Some(Tier::Platinum),
            Tier::Platinum => None,
        }
    }

    /// Points multiplier applied at this tier.
    pub fn multiplier(self) -> Decimal {
        match self {
            Tier::Bronze => Decimal::ONE,
            Tier::Silver => Decimal::new(125, 2),
            Tier::Gold => Decimal::new(15, 1),
            Tier::Platinum => Decimal::TWO,
        }
    }

    /// Display name. Tier names are not translated.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }
}

/// Something points can be spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reward {
    /// A dessert on the house
    FreeDessert,

    /// 10% off the next order
    TenPercentOff,
}

impl Reward {
    /// Every reward, cheapest first.
    pub const ALL: [Reward; 2] = [Reward::FreeDessert, Reward::TenPercentOff];

    /// Price in points.
    pub fn cost(self) -> u32 {
        match self {
            Reward::FreeDessert => 500,
            Reward::TenPercentOff => 800,
        }
    }

    /// Localized name.
    pub fn label(self, catalog: &Catalog) -> &str {
        match self {
            Reward::FreeDessert => &catalog.loyalty.free_dessert,
            Reward::TenPercentOff => &catalog.loyalty.discount_10,
        }
    }
}

/// Why points moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsSource {
    /// Earned on an order
    Order(u32),

    /// Spent on a reward
    Reward(Reward),
}

/// One balance change, newest first in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsEntry {
    /// Signed change in points
    pub points: i64,

    /// Why the balance changed
    pub source: PointsSource,
}

/// A guest's loyalty balance and history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoyaltyAccount {
    points: u32,
    history: Vec<PointsEntry>,
}

impl LoyaltyAccount {
    /// Create an account with the given balance and no history.
    pub fn new(points: u32) -> Self {
        Self {
            points,
            history: Vec::new(),
        }
    }

    /// The fixed account shown on the loyalty screen.
    pub fn demo() -> Self {
        Self {
            points: 1_250,
            history: vec![
                PointsEntry {
                    points: 50,
                    source: PointsSource::Order(1247),
                },
                PointsEntry {
                    points: 35,
                    source: PointsSource::Order(1230),
                },
                PointsEntry {
                    points: 120,
                    source: PointsSource::Order(1215),
                },
            ],
        }
    }

    /// Current balance.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Balance changes, newest first.
    pub fn history(&self) -> &[PointsEntry] {
        &self.history
    }

    /// Tier for the current balance.
    pub fn tier(&self) -> Tier {
        Tier::for_points(self.points)
    }

    /// Points still missing for the next tier, `None` at the top tier.
    pub fn points_to_next_tier(&self) -> Option<u32> {
        self.tier()
            .next()
            .map(|next| next.threshold().saturating_sub(self.points))
    }

    /// How far the balance is between the current tier and the next one.
    pub fn progress(&self) -> Percentage {
        let tier = self.tier();

        let Some(next) = tier.next() else {
            return Percentage::from(Decimal::ONE);
        };

        let earned = Decimal::from(self.points.saturating_sub(tier.threshold()));
        let span = Decimal::from(next.threshold() - tier.threshold());

        Percentage::from(earned / span)
    }

    /// [`Self::progress`] in whole percent points (0.25 becomes 25).
    pub fn progress_percent(&self) -> Decimal {
        (self.progress() * Decimal::ONE_HUNDRED).round_dp(0)
    }

    /// Credit points earned on an order.
    pub fn credit(&mut self, order_number: u32, points: u32) {
        self.points = self.points.saturating_add(points);
        self.history.insert(
            0,
            PointsEntry {
                points: i64::from(points),
                source: PointsSource::Order(order_number),
            },
        );
    }

    /// Spend points on a reward.
    ///
    /// # Errors
    ///
    /// Returns [`LoyaltyError::InsufficientPoints`] if the balance does not cover the cost;
    /// the account is left unchanged.
    pub fn claim(&mut self, reward: Reward) -> Result<(), LoyaltyError> {
        let cost = reward.cost();

        let Some(remaining) = self.points.checked_sub(cost) else {
            return Err(LoyaltyError::InsufficientPoints {
                cost,
                balance: self.points,
            });
        };

        self.points = remaining;
        self.history.insert(
            0,
            PointsEntry {
                points: -i64::from(cost),
                source: PointsSource::Reward(reward),
            },
        );

        info!(?reward, remaining, "loyalty reward claimed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn tiers_by_threshold() {
        assert_eq!(Tier::for_points(0), Tier::Bronze);
        assert_eq!(Tier::for_points(499), Tier::Bronze);
        assert_eq!(Tier::for_points(500), Tier::Silver);
        assert_eq!(Tier::for_points(1_250), Tier::Gold);
        assert_eq!(Tier::for_points(2_000), Tier::Platinum);
        assert_eq!(Tier::for_points(u32::MAX), Tier::Platinum);
    }

    #[test]
    fn demo_account_is_gold_quarter_way() {
        let account = LoyaltyAccount::demo();

        assert_eq!(account.tier(), Tier::Gold);
        assert_eq!(account.tier().multiplier(), Decimal::new(15, 1));
        assert_eq!(account.points_to_next_tier(), Some(750));
        assert_eq!(account.progress(), Percentage::from(Decimal::new(25, 2)));
        assert_eq!(account.progress_percent(), Decimal::from(25));
    }

    #[test]
    fn platinum_is_complete() {
        let account = LoyaltyAccount::new(2_400);

        assert_eq!(account.points_to_next_tier(), None);
        assert_eq!(account.progress(), Percentage::from(Decimal::ONE));
        assert_eq!(account.progress_percent(), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn claim_deducts_and_records() -> TestResult {
        let mut account = LoyaltyAccount::demo();

        account.claim(Reward::TenPercentOff)?;

        assert_eq!(account.points(), 450);
        assert_eq!(account.tier(), Tier::Bronze);
        assert_eq!(
            account.history().first(),
            Some(&PointsEntry {
                points: -800,
                source: PointsSource::Reward(Reward::TenPercentOff),
            })
        );

        Ok(())
    }

    #[test]
    fn claim_without_enough_points_fails() {
        let mut account = LoyaltyAccount::new(499);

        let result = account.claim(Reward::FreeDessert);

        assert_eq!(
            result,
            Err(LoyaltyError::InsufficientPoints {
                cost: 500,
                balance: 499
            })
        );
        assert_eq!(account, LoyaltyAccount::new(499));
    }

    #[test]
    fn credit_adds_newest_first() {
        let mut account = LoyaltyAccount::demo();

        account.credit(1250, 60);

        assert_eq!(account.points(), 1_310);
        assert_eq!(
            account.history().first().map(|entry| entry.source),
            Some(PointsSource::Order(1250))
        );
    }
}
