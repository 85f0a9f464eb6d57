use time::Duration;

pub struct EngagementServiceConfig {
    ///
    /// How far back the new story sweep looks. Must be longer than the
    /// sweep interval itself, otherwise stories created right before
    /// a tick could fall between two windows and never be announced.
    ///
    pub new_story_freshness_window: Duration,
}
