use crate::error::CareEscrowError;
use crate::types::{Campaign, CampaignState, CampaignWindows};

/// Resolves the state every guard and read observes.
///
/// Deadlines are measured from `created_at` and are exclusive: a campaign is
/// still inside its window at exactly `created_at + window`. Nothing here is
/// written back to storage.
pub fn effective_state(campaign: &Campaign, windows: &CampaignWindows, now: u64) -> CampaignState {
    let stored = campaign.state;
    if stored == CampaignState::Locked {
        return CampaignState::Locked;
    }

    let elapsed = now.saturating_sub(campaign.created_at);
    if elapsed > windows.lock {
        return CampaignState::Locked;
    }

    match stored {
        // No doctor ever proposed, so there is nothing to refund.
        CampaignState::Requested if elapsed > windows.requested => CampaignState::Locked,
        CampaignState::Active if elapsed > windows.active => CampaignState::AwaitingRefund,
        CampaignState::AwaitingApproval if elapsed > windows.approval => {
            CampaignState::AwaitingRefund
        }
        other => other,
    }
}

pub fn require_state(
    campaign: &Campaign,
    windows: &CampaignWindows,
    now: u64,
    expected: CampaignState,
) -> Result<(), CareEscrowError> {
    if effective_state(campaign, windows, now) != expected {
        return Err(CareEscrowError::InvalidState);
    }
    Ok(())
}

pub fn is_terminal(campaign: &Campaign, windows: &CampaignWindows, now: u64) -> bool {
    effective_state(campaign, windows, now) == CampaignState::Locked
}
