use crate::error::CareEscrowError;
use crate::events;
use crate::lifecycle::{effective_state, is_terminal};
use crate::types::{
    Asset, Campaign, CampaignState, CampaignSummary, CampaignWindows, Config, ResidualSweep,
    TreasuryCollection, MAX_PAGE_SIZE,
};
use crate::utils::*;
use soroban_sdk::{log, Address, Env, Vec};

pub fn initialize(
    env: &Env,
    admin: Address,
    stable_token: Address,
    reward_token: Address,
    native_token: Address,
    cashback_factor: i128,
    doctor_fee_percent: u32,
    minimum_price: i128,
    windows: CampaignWindows,
) -> Result<(), CareEscrowError> {
    if is_initialized(env) {
        return Err(CareEscrowError::AlreadyInitialized);
    }
    admin.require_auth();

    let distinct_tokens = stable_token != reward_token
        && stable_token != native_token
        && reward_token != native_token;
    if cashback_factor <= 0
        || doctor_fee_percent > 100
        || minimum_price <= 0
        || !distinct_tokens
        || !windows.is_valid()
    {
        return Err(CareEscrowError::InvalidConfig);
    }

    let config = Config {
        admin: admin.clone(),
        stable_token,
        reward_token,
        native_token,
        cashback_factor,
        doctor_fee_percent,
        minimum_price,
        windows,
    };
    set_config(env, &config);
    set_campaign_count(env, 0);

    events::treasury_initialized(env, &admin, cashback_factor, doctor_fee_percent);
    Ok(())
}

/// Reward tokens held by the treasury that are not seeded into any campaign.
pub fn treasury_reward_balance(env: &Env, config: &Config) -> i128 {
    free_balance(env, &config.reward_token, get_reserve(env).reward)
}

pub fn create_campaign(env: &Env, needy: Address) -> Result<u64, CareEscrowError> {
    needy.require_auth();
    let config = get_config(env)?;

    // Live balance, read inside this invocation.
    let available = treasury_reward_balance(env, &config);
    let seed = available / config.cashback_factor;

    let campaign_id = get_campaign_count(env)
        .checked_add(1)
        .ok_or(CareEscrowError::ArithmeticOverflow)?;

    let campaign = Campaign {
        id: campaign_id,
        needy: needy.clone(),
        doctor: None,
        price: 0,
        state: CampaignState::Requested,
        created_at: env.ledger().timestamp(),
        proposed_at: None,
        approved_by_needy: false,
        withdrawn: false,
        seed,
        cashback_basis: 0,
        reward_pool: seed,
        stable_balance: 0,
        native_balance: 0,
        total_raised: 0,
        total_refunded: 0,
        donor_count: 0,
    };

    shift_reserve(env, Asset::Reward, seed)?;
    save_campaign(env, &campaign);
    set_campaign_count(env, campaign_id);

    log!(env, "campaign {} seeded with {} of {}", campaign_id, seed, available);
    events::campaign_created(env, campaign_id, &needy, seed);

    Ok(campaign_id)
}

pub fn sweep_residual(
    env: &Env,
    admin: Address,
    campaign_id: u64,
) -> Result<ResidualSweep, CareEscrowError> {
    let config = get_config(env)?;
    require_admin(&config, &admin)?;

    let mut campaign = load_campaign(env, campaign_id)?;
    if !is_terminal(&campaign, &config.windows, env.ledger().timestamp()) {
        return Err(CareEscrowError::CampaignNotTerminal);
    }

    let sweep = ResidualSweep {
        stable: campaign.stable_balance,
        reward: campaign.reward_pool,
        native: campaign.native_balance,
    };

    shift_reserve(env, Asset::Stable, -sweep.stable)?;
    shift_reserve(env, Asset::Reward, -sweep.reward)?;
    shift_reserve(env, Asset::Native, -sweep.native)?;

    campaign.stable_balance = 0;
    campaign.reward_pool = 0;
    campaign.native_balance = 0;
    campaign.state = CampaignState::Locked;
    save_campaign(env, &campaign);

    events::swept(env, campaign_id, &sweep);
    Ok(sweep)
}

pub fn collect_treasury_balance(
    env: &Env,
    admin: Address,
) -> Result<TreasuryCollection, CareEscrowError> {
    let config = get_config(env)?;
    require_admin(&config, &admin)?;

    let reserve = get_reserve(env);
    let collection = TreasuryCollection {
        stable: free_balance(env, &config.stable_token, reserve.stable),
        native: free_balance(env, &config.native_token, reserve.native),
    };

    pay_out(env, &config.stable_token, &admin, collection.stable);
    pay_out(env, &config.native_token, &admin, collection.native);

    events::treasury_collected(env, &admin, &collection);
    Ok(collection)
}

// ============ READ SIDE ============

pub fn get_state(env: &Env, campaign_id: u64) -> Result<CampaignState, CareEscrowError> {
    let config = get_config(env)?;
    let campaign = load_campaign(env, campaign_id)?;
    Ok(effective_state(
        &campaign,
        &config.windows,
        env.ledger().timestamp(),
    ))
}

/// Pages through the registry starting at `start_id` (1-indexed).
pub fn get_campaigns(
    env: &Env,
    start_id: u64,
    limit: u32,
) -> Result<Vec<CampaignSummary>, CareEscrowError> {
    let config = get_config(env)?;
    let now = env.ledger().timestamp();
    let count = get_campaign_count(env);

    let mut summaries = Vec::new(env);
    let first = start_id.max(1);
    let take = limit.min(MAX_PAGE_SIZE) as u64;

    let end = first.saturating_add(take);

    let mut id = first;
    while id <= count && id < end {
        let campaign = load_campaign(env, id)?;
        summaries.push_back(CampaignSummary {
            id,
            needy: campaign.needy.clone(),
            doctor: campaign.doctor.clone(),
            price: campaign.price,
            total_raised: campaign.total_raised,
            state: effective_state(&campaign, &config.windows, now),
        });
        id += 1;
    }

    Ok(summaries)
}
