use thiserror::Error;

/// Which of the two role lists a setup validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleListKind {
    Submitter,
    Participant,
}

impl RoleListKind {
    fn label(self) -> &'static str {
        match self {
            Self::Submitter => "submitter",
            Self::Participant => "participant",
        }
    }
}

/// Validation failures of the `/report_setup` command.
///
/// Setup is aborted without any partial write when one of these occurs.
#[derive(Error, Debug)]
pub enum SetupError {
    /// One of the image URLs does not start with `http`.
    #[error("photo URL does not start with http")]
    InvalidPhotoUrl,

    /// A role list contained no pure-digit tokens.
    #[error("{} role list contains no usable role ids", .0.label())]
    NoUsableRoleIds(RoleListKind),

    /// None of the candidate role ids exist on the guild.
    #[error("no {} role id resolved against the guild", .0.label())]
    NoValidRoles(RoleListKind),
}

impl SetupError {
    /// Short message shown to the administrator when setup is rejected.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPhotoUrl => {
                "❌ Photo links must start with http:// or https://".to_string()
            }
            Self::NoUsableRoleIds(_) => {
                "❌ Provide valid role IDs for both submitters and participants \
                 (comma-separated)."
                    .to_string()
            }
            Self::NoValidRoles(kind) => format!(
                "❌ None of the given {} role IDs exist on this server. Check the IDs.",
                kind.label()
            ),
        }
    }
}
