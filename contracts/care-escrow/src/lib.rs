#![no_std]

mod error;
mod escrow;
mod events;
mod lifecycle;
mod release;
mod treasury;
mod types;
mod utils;

pub use error::CareEscrowError;
pub use types::*;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct CareEscrow;

#[contractimpl]
impl CareEscrow {
    // ============ TREASURY ============

    /// Initialize the treasury with the default campaign deadlines
    pub fn initialize(
        env: Env,
        admin: Address,
        stable_token: Address,
        reward_token: Address,
        native_token: Address,
        cashback_factor: i128,
        doctor_fee_percent: u32,
        minimum_price: i128,
    ) -> Result<(), CareEscrowError> {
        treasury::initialize(
            &env,
            admin,
            stable_token,
            reward_token,
            native_token,
            cashback_factor,
            doctor_fee_percent,
            minimum_price,
            CampaignWindows::standard(),
        )
    }

    /// Initialize the treasury with explicit campaign deadlines
    pub fn initialize_with_windows(
        env: Env,
        admin: Address,
        stable_token: Address,
        reward_token: Address,
        native_token: Address,
        cashback_factor: i128,
        doctor_fee_percent: u32,
        minimum_price: i128,
        windows: CampaignWindows,
    ) -> Result<(), CareEscrowError> {
        treasury::initialize(
            &env,
            admin,
            stable_token,
            reward_token,
            native_token,
            cashback_factor,
            doctor_fee_percent,
            minimum_price,
            windows,
        )
    }

    /// Open a new campaign for `needy`, seeded from the reward reserve
    pub fn create_campaign(env: Env, needy: Address) -> Result<u64, CareEscrowError> {
        treasury::create_campaign(&env, needy)
    }

    /// Move a concluded campaign's residual balances into the treasury (admin only)
    pub fn sweep_residual(
        env: Env,
        admin: Address,
        campaign_id: u64,
    ) -> Result<ResidualSweep, CareEscrowError> {
        treasury::sweep_residual(&env, admin, campaign_id)
    }

    /// Send unreserved stable and native balances to the admin
    pub fn collect_treasury_balance(
        env: Env,
        admin: Address,
    ) -> Result<TreasuryCollection, CareEscrowError> {
        treasury::collect_treasury_balance(&env, admin)
    }

    // ============ CAMPAIGN ============

    pub fn propose_healthcare(
        env: Env,
        campaign_id: u64,
        doctor: Address,
        price: i128,
    ) -> Result<(), CareEscrowError> {
        escrow::propose_healthcare(&env, campaign_id, doctor, price)
    }

    /// Donate stable tokens; returns the cashback paid
    pub fn donate(
        env: Env,
        campaign_id: u64,
        donor: Address,
        amount: i128,
    ) -> Result<i128, CareEscrowError> {
        escrow::donate(&env, campaign_id, donor, amount)
    }

    pub fn approve(env: Env, campaign_id: u64, needy: Address) -> Result<(), CareEscrowError> {
        escrow::approve(&env, campaign_id, needy)
    }

    /// Release the price minus the doctor fee; returns the payout
    pub fn withdraw(env: Env, campaign_id: u64, doctor: Address) -> Result<i128, CareEscrowError> {
        release::withdraw(&env, campaign_id, doctor)
    }

    /// Refund a donor's principal against the clawback of their cashback
    pub fn request_refund(
        env: Env,
        campaign_id: u64,
        donor: Address,
    ) -> Result<DonorLedger, CareEscrowError> {
        release::request_refund(&env, campaign_id, donor)
    }

    /// Send an unsolicited transfer to a campaign
    pub fn deposit_windfall(
        env: Env,
        campaign_id: u64,
        from: Address,
        asset: Asset,
        amount: i128,
    ) -> Result<(), CareEscrowError> {
        escrow::deposit_windfall(&env, campaign_id, from, asset, amount)
    }

    // ============ QUERIES ============

    pub fn get_config(env: Env) -> Result<Config, CareEscrowError> {
        utils::get_config(&env)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        utils::get_campaign_count(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, CareEscrowError> {
        utils::load_campaign(&env, campaign_id)
    }

    /// Effective state, with deadlines applied
    pub fn get_state(env: Env, campaign_id: u64) -> Result<CampaignState, CareEscrowError> {
        treasury::get_state(&env, campaign_id)
    }

    pub fn get_donation(
        env: Env,
        campaign_id: u64,
        donor: Address,
    ) -> Result<DonorLedger, CareEscrowError> {
        escrow::get_donation(&env, campaign_id, donor)
    }

    pub fn get_donors(
        env: Env,
        campaign_id: u64,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Address>, CareEscrowError> {
        utils::get_donors(&env, campaign_id, start, limit)
    }

    pub fn get_campaigns(
        env: Env,
        start_id: u64,
        limit: u32,
    ) -> Result<Vec<CampaignSummary>, CareEscrowError> {
        treasury::get_campaigns(&env, start_id, limit)
    }

    pub fn get_treasury_reward_balance(env: Env) -> Result<i128, CareEscrowError> {
        let config = utils::get_config(&env)?;
        Ok(treasury::treasury_reward_balance(&env, &config))
    }

    pub fn get_reserve(env: Env) -> Reserve {
        utils::get_reserve(&env)
    }
}

#[cfg(test)]
mod tests;
