///
/// Number of days without a login after which a user becomes eligible
/// for a reminder notification. Each threshold is gated by its own
/// notified flag so a user is reminded at most once per crossing.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InactivityThreshold {
    FiveDays,
    TwentyDays,
}

impl InactivityThreshold {
    pub fn days(self) -> i64 {
        match self {
            InactivityThreshold::FiveDays => 5,
            InactivityThreshold::TwentyDays => 20,
        }
    }

    ///
    /// Name of the users collection field holding the idempotency flag
    /// for this threshold. The flag is set here and cleared by the
    /// login tracking path when the user comes back.
    ///
    pub fn flag_field(self) -> &'static str {
        match self {
            InactivityThreshold::FiveDays => "notified_5_days",
            InactivityThreshold::TwentyDays => "notified_20_days",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn thresholds_map_to_distinct_flags() {
        assert_eq!(InactivityThreshold::FiveDays.days(), 5);
        assert_eq!(InactivityThreshold::TwentyDays.days(), 20);
        assert_ne!(
            InactivityThreshold::FiveDays.flag_field(),
            InactivityThreshold::TwentyDays.flag_field()
        );
    }
}
