use crate::error::CareEscrowError;
use crate::events;
use crate::lifecycle::require_state;
use crate::types::{Asset, CampaignState, DonorLedger};
use crate::utils::*;
use soroban_sdk::{log, Address, Env};

/// Pays the doctor `price` minus the doctor fee and locks the campaign.
///
/// The fee and any overfunding stay in the campaign until swept.
pub fn withdraw(env: &Env, campaign_id: u64, doctor: Address) -> Result<i128, CareEscrowError> {
    doctor.require_auth();
    let config = get_config(env)?;
    let mut campaign = load_campaign(env, campaign_id)?;

    if campaign.doctor.as_ref() != Some(&doctor) {
        return Err(CareEscrowError::Unauthorized);
    }
    if campaign.withdrawn {
        return Err(CareEscrowError::AlreadyWithdrawn);
    }
    require_state(
        &campaign,
        &config.windows,
        env.ledger().timestamp(),
        CampaignState::AwaitingWithdraw,
    )?;

    let (payout, fee) = split_doctor_fee(campaign.price, config.doctor_fee_percent)?;
    if campaign.stable_balance < payout {
        return Err(CareEscrowError::InsufficientBalance);
    }

    pay_out(env, &config.stable_token, &doctor, payout);

    campaign.stable_balance -= payout;
    campaign.withdrawn = true;
    campaign.state = CampaignState::Locked;
    save_campaign(env, &campaign);
    shift_reserve(env, Asset::Stable, -payout)?;

    log!(env, "campaign {} released {} to doctor", campaign_id, payout);
    events::withdrawn(env, campaign_id, &doctor, payout, fee);
    Ok(payout)
}

/// Returns a donor's principal after clawing back the cashback they received.
///
/// The donor must have approved this contract on the reward token for the
/// full cashback amount. Both legs run in the same invocation.
pub fn request_refund(
    env: &Env,
    campaign_id: u64,
    donor: Address,
) -> Result<DonorLedger, CareEscrowError> {
    donor.require_auth();
    let config = get_config(env)?;
    let mut campaign = load_campaign(env, campaign_id)?;

    require_state(
        &campaign,
        &config.windows,
        env.ledger().timestamp(),
        CampaignState::AwaitingRefund,
    )?;

    let ledger = get_donor_ledger(env, campaign_id, &donor);
    if ledger.stable <= 0 {
        return Err(CareEscrowError::NotADonor);
    }
    if campaign.stable_balance < ledger.stable {
        return Err(CareEscrowError::InsufficientBalance);
    }

    pull_with_allowance(env, &config.reward_token, &donor, ledger.reward)?;
    pay_out(env, &config.stable_token, &donor, ledger.stable);

    campaign.reward_pool = checked_add(campaign.reward_pool, ledger.reward)?;
    campaign.stable_balance -= ledger.stable;
    campaign.total_refunded = checked_add(campaign.total_refunded, ledger.stable)?;
    save_campaign(env, &campaign);
    set_donor_ledger(env, campaign_id, &donor, &DonorLedger::default());

    shift_reserve(env, Asset::Reward, ledger.reward)?;
    shift_reserve(env, Asset::Stable, -ledger.stable)?;

    events::refunded(env, campaign_id, &donor, ledger.stable, ledger.reward);
    Ok(ledger)
}
