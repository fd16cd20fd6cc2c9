use crate::error::CareEscrowError;
use crate::events;
use crate::lifecycle::require_state;
use crate::types::{Asset, CampaignState, DonorLedger};
use crate::utils::*;
use soroban_sdk::{log, Address, Env};

pub fn propose_healthcare(
    env: &Env,
    campaign_id: u64,
    doctor: Address,
    price: i128,
) -> Result<(), CareEscrowError> {
    doctor.require_auth();
    let config = get_config(env)?;
    let mut campaign = load_campaign(env, campaign_id)?;
    let now = env.ledger().timestamp();

    if campaign.doctor.is_some() {
        return Err(CareEscrowError::AlreadyProposed);
    }
    require_state(&campaign, &config.windows, now, CampaignState::Requested)?;

    if doctor == campaign.needy {
        return Err(CareEscrowError::Unauthorized);
    }
    if price < config.minimum_price {
        return Err(CareEscrowError::PriceBelowMinimum);
    }

    campaign.doctor = Some(doctor.clone());
    campaign.price = price;
    campaign.proposed_at = Some(now);
    campaign.cashback_basis = campaign.reward_pool;
    campaign.state = CampaignState::Active;
    save_campaign(env, &campaign);

    events::healthcare_proposed(env, campaign_id, &doctor, price);
    Ok(())
}

/// Takes `amount` stable tokens from `donor` and pays the matching cashback.
///
/// The donor must have approved this contract for at least `amount` on the
/// stable token. Returns the cashback paid.
pub fn donate(
    env: &Env,
    campaign_id: u64,
    donor: Address,
    amount: i128,
) -> Result<i128, CareEscrowError> {
    donor.require_auth();
    if amount <= 0 {
        return Err(CareEscrowError::InvalidAmount);
    }

    let config = get_config(env)?;
    let mut campaign = load_campaign(env, campaign_id)?;
    require_state(
        &campaign,
        &config.windows,
        env.ledger().timestamp(),
        CampaignState::Active,
    )?;

    pull_with_allowance(env, &config.stable_token, &donor, amount)?;

    let cashback = calculate_cashback(
        amount,
        campaign.cashback_basis,
        campaign.price,
        campaign.reward_pool,
    )?;
    pay_out(env, &config.reward_token, &donor, cashback);

    if !has_donated(env, campaign_id, &donor) {
        record_donor(env, campaign_id, campaign.donor_count, &donor);
        campaign.donor_count = campaign
            .donor_count
            .checked_add(1)
            .ok_or(CareEscrowError::ArithmeticOverflow)?;
    }
    let mut ledger = get_donor_ledger(env, campaign_id, &donor);
    ledger.stable = checked_add(ledger.stable, amount)?;
    ledger.reward = checked_add(ledger.reward, cashback)?;
    set_donor_ledger(env, campaign_id, &donor, &ledger);

    campaign.reward_pool = checked_sub(campaign.reward_pool, cashback)?;
    campaign.stable_balance = checked_add(campaign.stable_balance, amount)?;
    campaign.total_raised = checked_add(campaign.total_raised, amount)?;
    if campaign.total_raised >= campaign.price {
        campaign.state = CampaignState::AwaitingApproval;
        log!(env, "campaign {} reached its goal", campaign_id);
    }
    save_campaign(env, &campaign);

    shift_reserve(env, Asset::Stable, amount)?;
    shift_reserve(env, Asset::Reward, -cashback)?;

    events::donated(env, campaign_id, &donor, amount, cashback);
    Ok(cashback)
}

pub fn approve(env: &Env, campaign_id: u64, needy: Address) -> Result<(), CareEscrowError> {
    needy.require_auth();
    let config = get_config(env)?;
    let mut campaign = load_campaign(env, campaign_id)?;

    if needy != campaign.needy {
        return Err(CareEscrowError::Unauthorized);
    }
    if campaign.approved_by_needy {
        return Err(CareEscrowError::AlreadyApproved);
    }
    require_state(
        &campaign,
        &config.windows,
        env.ledger().timestamp(),
        CampaignState::AwaitingApproval,
    )?;

    campaign.approved_by_needy = true;
    campaign.state = CampaignState::AwaitingWithdraw;
    save_campaign(env, &campaign);

    events::approved(env, campaign_id, &needy);
    Ok(())
}

/// Credits an unsolicited transfer to the campaign's residual balances.
pub fn deposit_windfall(
    env: &Env,
    campaign_id: u64,
    from: Address,
    asset: Asset,
    amount: i128,
) -> Result<(), CareEscrowError> {
    from.require_auth();
    if amount <= 0 {
        return Err(CareEscrowError::InvalidAmount);
    }

    let config = get_config(env)?;
    let mut campaign = load_campaign(env, campaign_id)?;

    pull_direct(env, &token_address(&config, asset), &from, amount);

    match asset {
        Asset::Stable => {
            campaign.stable_balance = checked_add(campaign.stable_balance, amount)?;
        }
        Asset::Reward => {
            campaign.reward_pool = checked_add(campaign.reward_pool, amount)?;
        }
        Asset::Native => {
            campaign.native_balance = checked_add(campaign.native_balance, amount)?;
        }
    }
    save_campaign(env, &campaign);
    shift_reserve(env, asset, amount)?;

    events::windfall(env, campaign_id, &from, asset, amount);
    Ok(())
}

pub fn get_donation(
    env: &Env,
    campaign_id: u64,
    donor: Address,
) -> Result<DonorLedger, CareEscrowError> {
    load_campaign(env, campaign_id)?;
    Ok(get_donor_ledger(env, campaign_id, &donor))
}
