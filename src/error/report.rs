use thiserror::Error;

/// User-visible terminations of the report submission flow.
///
/// Each variant ends the flow at the step where it occurred. The interaction
/// handler converts the variant into a short user-facing message via
/// [`ReportError::user_message`]; the internal `Display` form is only logged.
/// Permission denials are delivered as a fresh ephemeral reply, everything
/// else replaces the in-flight prompt (see the flow service).
#[derive(Error, Debug)]
pub enum ReportError {
    /// The guild has no game result reporting configured.
    #[error("game result reporting is not configured for this guild")]
    NotConfigured,

    /// The member holds none of the configured submitter roles.
    #[error("member holds no submitter role")]
    NotPermitted,

    /// No guild member holds any of the configured participant roles.
    #[error("no eligible participants found for the configured roles")]
    NoEligibleParticipants,

    /// The player selection arrived empty.
    #[error("no players were selected")]
    NoPlayersSelected,

    /// The configured report channel could not be resolved at send time.
    #[error("report channel {0} could not be resolved")]
    ChannelUnavailable(String),
}

impl ReportError {
    /// Short message shown to the interacting user when the flow ends.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotConfigured => {
                "❌ Game result reporting is not set up for this server. \
                 An administrator must run `/report_setup` first."
            }
            Self::NotPermitted => {
                "❌ You are not permitted to submit game results. Contact an administrator."
            }
            Self::NoEligibleParticipants => {
                "❌ No members with the configured participant roles were found. \
                 Contact an administrator to adjust the role setup."
            }
            Self::NoPlayersSelected => "❌ No players were selected.",
            Self::ChannelUnavailable(_) => {
                "❌ The report channel could not be found. Contact an administrator."
            }
        }
    }
}
