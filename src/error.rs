use thiserror::Error;

/// Rejections for signup/unregister requests. The `Display` text is what the
/// client sees as `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Activity is full")]
    CapacityExceeded,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
    #[error("Email is required")]
    MissingEmail,
    #[error("{0}")]
    InvalidRequest(String),
}

/// Problems with the compiled-in activity catalog, caught when the store is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("activity {0:?} is defined more than once")]
    DuplicateActivity(String),
    #[error("activity {0:?} has a capacity of zero")]
    ZeroCapacity(String),
    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },
    #[error("activity {activity:?} seeds {participants} participants but only holds {max_participants}")]
    OverCapacity {
        activity: String,
        participants: usize,
        max_participants: usize,
    },
}
