//! Rejection types.
//!
//! Every anticipated rule violation is a silent rejection: the action is
//! refused with a short message and no state mutates. None of these are
//! fatal; the caller shows the message (or ignores it) and play continues.

use thiserror::Error;

/// Rejections for in-battle actions (firing, stratagems, radar, reload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("the battle is not in progress")]
    NotPlaying,
    #[error("target is outside the grid")]
    OutOfBounds,
    #[error("that cell is already resolved")]
    CellResolved,
    #[error("no charges remaining")]
    NoCharges,
    #[error("the strike pattern would leave the grid")]
    ShapeOutOfBounds,
    #[error("stratagems are reloading")]
    Reloading,
    #[error("reload is not available in this mission")]
    ReloadUnavailable,
    #[error("no radar charges remaining")]
    NoRadarCharges,
}

/// Rejections for the setup phase and the start-of-battle checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeployError {
    #[error("deployment is only possible during setup")]
    NotInSetup,
    #[error("no such ship left in reserve")]
    NotInReserve,
    #[error("that placement is blocked or out of bounds")]
    InvalidPlacement,
    #[error("deploy at least two ships before launching")]
    TooFewShips,
    #[error("deploy at least two different ship classes")]
    TooFewClasses,
}
