//! Urgency classification for reward rows.
//!
//! Maps the days left before a reward expires, together with its used flag, onto the
//! colors a row is drawn with. The mapping is pure: the only time-dependent input is
//! the `today` passed to [`remaining_days`] at render time.

use chrono::NaiveDate;

/// Row background, from calm to expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    /// Plain white: used rewards and anything more than five days out
    Neutral,
    /// Light blue: five days left
    LightInfo,
    /// Vivid green: four days left
    StrongPositive,
    /// Yellow: three days left
    Caution,
    /// Orange: two days left
    Warning,
    /// Light red: one day left
    DangerLight,
    /// Light grey: last day
    NeutralDim,
    /// Dark grey: expired
    Expired,
}

impl Background {
    /// Stable class name for renderers.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::LightInfo => "light-info",
            Self::StrongPositive => "strong-positive",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::DangerLight => "danger-light",
            Self::NeutralDim => "neutral-dim",
            Self::Expired => "dark-expired",
        }
    }
}

/// Row text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// Default text
    Black,
    /// Greyed out text for used rewards
    MutedGray,
    /// Red text on the last day
    Red,
    /// White text on the dark expired background
    White,
}

impl TextColor {
    /// Stable class name for renderers.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::MutedGray => "muted-gray",
            Self::Red => "red",
            Self::White => "white",
        }
    }
}

/// Row text weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    /// Regular weight
    Normal,
    /// Bold, used only on the last day
    Bold,
}

impl Weight {
    /// Stable class name for renderers.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Complete styling for one reward row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrgencyTier {
    /// Row background
    pub background: Background,
    /// Text color
    pub text: TextColor,
    /// Text weight
    pub weight: Weight,
}

impl UrgencyTier {
    const fn new(background: Background, text: TextColor, weight: Weight) -> Self {
        Self {
            background,
            text,
            weight,
        }
    }

    /// Tier for a redeemed reward, whatever its expiry.
    pub const USED: Self = Self::new(Background::Neutral, TextColor::MutedGray, Weight::Normal);

    /// Tier for an unused reward with more than five days left.
    pub const FRESH: Self = Self::new(Background::Neutral, TextColor::Black, Weight::Normal);

    /// `background/text/weight`, e.g. `neutral-dim/red/bold`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}/{}/{}",
            self.background.class(),
            self.text.class(),
            self.weight.class()
        )
    }
}

/// Days from `today` until `expires_on`; zero on the expiry day, negative afterwards.
#[must_use]
pub fn remaining_days(today: NaiveDate, expires_on: NaiveDate) -> i64 {
    expires_on.signed_duration_since(today).num_days()
}

/// Picks the tier for a reward. A used reward is always [`UrgencyTier::USED`].
///
/// Every day count maps to exactly one tier. The buckets are absolute day counts
/// matching a five-day window.
#[must_use]
pub const fn classify(remaining_days: i64, used: bool) -> UrgencyTier {
    use Background as B;

    if used {
        return UrgencyTier::USED;
    }

    let background = match remaining_days {
        5 => B::LightInfo,
        4 => B::StrongPositive,
        3 => B::Caution,
        2 => B::Warning,
        1 => B::DangerLight,
        0 => return UrgencyTier::new(B::NeutralDim, TextColor::Red, Weight::Bold),
        i64::MIN..=-1 => return UrgencyTier::new(B::Expired, TextColor::White, Weight::Normal),
        _ => return UrgencyTier::FRESH,
    };
    UrgencyTier::new(background, TextColor::Black, Weight::Normal)
}
