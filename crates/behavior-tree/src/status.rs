//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Multi-tick Semantics
///
/// Actions may take several control-loop iterations to complete. A node that
/// has not finished yet reports [`Status::Running`]; the caller ticks the
/// tree again on a later iteration and composites resume where they left off.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,

    /// The behavior has not finished and must be ticked again.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Flips the status: Success becomes Failure and vice versa.
    ///
    /// `Running` is a fixed point, so `flip` is an involution.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}
