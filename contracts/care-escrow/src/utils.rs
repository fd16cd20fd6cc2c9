use crate::error::CareEscrowError;
use crate::types::{
    Asset, Campaign, Config, DataKey, DonorLedger, Reserve, LEDGER_BUMP_AMOUNT,
    LEDGER_BUMP_THRESHOLD, MAX_PAGE_SIZE,
};
use soroban_sdk::{token, Address, Env, Vec};

// ============ CONFIG ============

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, CareEscrowError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CareEscrowError::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn require_admin(config: &Config, caller: &Address) -> Result<(), CareEscrowError> {
    caller.require_auth();
    if *caller != config.admin {
        return Err(CareEscrowError::Unauthorized);
    }
    Ok(())
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_BUMP_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

// ============ REGISTRY ============

pub fn get_campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn set_campaign_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::CampaignCount, &count);
}

pub fn load_campaign(env: &Env, campaign_id: u64) -> Result<Campaign, CareEscrowError> {
    let key = DataKey::Campaign(campaign_id);
    let campaign = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(CareEscrowError::CampaignNotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_BUMP_THRESHOLD, LEDGER_BUMP_AMOUNT);
    Ok(campaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_BUMP_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

// ============ DONORS ============

pub fn get_donor_ledger(env: &Env, campaign_id: u64, donor: &Address) -> DonorLedger {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(campaign_id, donor.clone()))
        .unwrap_or_default()
}

pub fn set_donor_ledger(env: &Env, campaign_id: u64, donor: &Address, ledger: &DonorLedger) {
    let key = DataKey::Donation(campaign_id, donor.clone());
    env.storage().persistent().set(&key, ledger);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_BUMP_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

pub fn has_donated(env: &Env, campaign_id: u64, donor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Donation(campaign_id, donor.clone()))
}

/// Appends a first-time donor at index `position`.
pub fn record_donor(env: &Env, campaign_id: u64, position: u32, donor: &Address) {
    let key = DataKey::DonorAt(campaign_id, position);
    env.storage().persistent().set(&key, donor);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_BUMP_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

/// Distinct donors in order of first donation, `limit` capped at `MAX_PAGE_SIZE`.
pub fn get_donors(
    env: &Env,
    campaign_id: u64,
    start: u32,
    limit: u32,
) -> Result<Vec<Address>, CareEscrowError> {
    let campaign = load_campaign(env, campaign_id)?;
    let end = start
        .saturating_add(limit.min(MAX_PAGE_SIZE))
        .min(campaign.donor_count);

    let mut donors = Vec::new(env);
    for position in start..end {
        if let Some(donor) = env
            .storage()
            .persistent()
            .get::<_, Address>(&DataKey::DonorAt(campaign_id, position))
        {
            donors.push_back(donor);
        }
    }
    Ok(donors)
}

// ============ RESERVE ============

pub fn get_reserve(env: &Env) -> Reserve {
    env.storage()
        .instance()
        .get(&DataKey::Reserve)
        .unwrap_or_default()
}

pub fn set_reserve(env: &Env, reserve: &Reserve) {
    env.storage().instance().set(&DataKey::Reserve, reserve);
}

/// Adjusts the reserved total of one asset by a signed delta.
pub fn shift_reserve(env: &Env, asset: Asset, delta: i128) -> Result<(), CareEscrowError> {
    let mut reserve = get_reserve(env);
    let slot = match asset {
        Asset::Stable => &mut reserve.stable,
        Asset::Reward => &mut reserve.reward,
        Asset::Native => &mut reserve.native,
    };
    *slot = checked_add(*slot, delta)?;
    set_reserve(env, &reserve);
    Ok(())
}

// ============ TOKENS ============

pub fn token_address(config: &Config, asset: Asset) -> Address {
    match asset {
        Asset::Stable => config.stable_token.clone(),
        Asset::Reward => config.reward_token.clone(),
        Asset::Native => config.native_token.clone(),
    }
}

/// Pulls `amount` from `owner` using the allowance granted to this contract.
pub fn pull_with_allowance(
    env: &Env,
    token_address: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), CareEscrowError> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, token_address);
    let this = env.current_contract_address();

    if client.allowance(owner, &this) < amount {
        return Err(CareEscrowError::InsufficientAllowance);
    }
    if client.balance(owner) < amount {
        return Err(CareEscrowError::InsufficientBalance);
    }
    client.transfer_from(&this, owner, &this, &amount);
    Ok(())
}

pub fn pull_direct(env: &Env, token_address: &Address, from: &Address, amount: i128) {
    token::Client::new(env, token_address).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
}

pub fn pay_out(env: &Env, token_address: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(env, token_address).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
    }
}

/// Balance held by this contract that no unswept campaign has a claim on.
pub fn free_balance(env: &Env, token_address: &Address, reserved: i128) -> i128 {
    let held = token::Client::new(env, token_address).balance(&env.current_contract_address());
    if held > reserved {
        held - reserved
    } else {
        0
    }
}

// ============ MATH ============

pub fn checked_add(a: i128, b: i128) -> Result<i128, CareEscrowError> {
    a.checked_add(b).ok_or(CareEscrowError::ArithmeticOverflow)
}

pub fn checked_sub(a: i128, b: i128) -> Result<i128, CareEscrowError> {
    a.checked_sub(b).ok_or(CareEscrowError::ArithmeticOverflow)
}

/// `amount * basis / price`, capped by what is left in the pool.
pub fn calculate_cashback(
    amount: i128,
    basis: i128,
    price: i128,
    pool: i128,
) -> Result<i128, CareEscrowError> {
    if price <= 0 || basis <= 0 || pool <= 0 {
        return Ok(0);
    }
    let raw = amount
        .checked_mul(basis)
        .ok_or(CareEscrowError::ArithmeticOverflow)?
        / price;
    Ok(raw.min(pool))
}

/// Returns `(payout, fee)` for a withdrawal of `price`.
pub fn split_doctor_fee(price: i128, fee_percent: u32) -> Result<(i128, i128), CareEscrowError> {
    let fee = price
        .checked_mul(fee_percent as i128)
        .ok_or(CareEscrowError::ArithmeticOverflow)?
        / 100;
    Ok((checked_sub(price, fee)?, fee))
}
