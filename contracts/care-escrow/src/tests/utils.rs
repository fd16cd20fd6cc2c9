#![cfg(test)]

use crate::*;
use cashback_token::{CashbackToken, CashbackTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, String, Symbol, TryFromVal, Val,
};

// ============ CONSTANTS ============

/// One whole token at 7 decimals.
pub const UNIT: i128 = 10_000_000;
pub const CASHBACK_FACTOR: i128 = 1_000_000;
pub const DOCTOR_FEE_PERCENT: u32 = 5;
pub const MINIMUM_PRICE: i128 = 5 * UNIT;
pub const PRICE: i128 = 10 * UNIT;
/// Reward reserve minted to the treasury; seeds the first campaign with 40 UNIT.
pub const REWARD_RESERVE: i128 = 40_000_000 * UNIT;
pub const FIRST_SEED: i128 = REWARD_RESERVE / CASHBACK_FACTOR;

pub const ONE_HOUR: u64 = 60 * 60;
pub const SLACK: u64 = 300;
const ALLOWANCE_LEDGERS: u32 = 10_000;
/// Cap of the cashback token; room for the reserve and later mints.
pub const CASHBACK_CAP: i128 = 100_000_000 * UNIT;

// ============ TEST CONTEXT ============

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: CareEscrowClient<'static>,
    pub admin: Address,
    pub stable: Address,
    pub reward: Address,
    pub native: Address,
}

// ============ SETUP FUNCTIONS ============

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let reward = create_test_token(&env, &token_admin);
    build_context(env, &token_admin, reward)
}

fn build_context(env: Env, token_admin: &Address, reward: Address) -> TestContext {
    let stable = create_test_token(&env, token_admin);
    let native = create_test_token(&env, token_admin);

    let contract_id = env.register(CareEscrow, ());
    let client = CareEscrowClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    TestContext {
        env,
        contract_id,
        client,
        admin,
        stable,
        reward,
        native,
    }
}

/// Initialized treasury holding `REWARD_RESERVE` reward tokens.
pub fn setup_initialized() -> TestContext {
    let ctx = setup_test();
    ctx.client.initialize(
        &ctx.admin,
        &ctx.stable,
        &ctx.reward,
        &ctx.native,
        &CASHBACK_FACTOR,
        &DOCTOR_FEE_PERCENT,
        &MINIMUM_PRICE,
    );
    mint(&ctx, &ctx.reward, &ctx.contract_id, REWARD_RESERVE);
    ctx
}

/// Initialized treasury paying cashback in the capped `CashbackToken`.
pub fn setup_with_cashback_token() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let reward = env.register(CashbackToken, ());
    CashbackTokenClient::new(&env, &reward).initialize(
        &token_admin,
        &CASHBACK_CAP,
        &7,
        &String::from_str(&env, "Care Cashback"),
        &String::from_str(&env, "CCB"),
    );

    let ctx = build_context(env, &token_admin, reward);
    ctx.client.initialize(
        &ctx.admin,
        &ctx.stable,
        &ctx.reward,
        &ctx.native,
        &CASHBACK_FACTOR,
        &DOCTOR_FEE_PERCENT,
        &MINIMUM_PRICE,
    );
    CashbackTokenClient::new(&ctx.env, &ctx.reward).mint(&ctx.contract_id, &REWARD_RESERVE);
    ctx
}

pub fn create_test_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone())
        .address()
}

// ============ TOKEN HELPERS ============

pub fn mint(ctx: &TestContext, token_address: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(&ctx.env, token_address).mint(to, &amount);
}

pub fn balance(ctx: &TestContext, token_address: &Address, id: &Address) -> i128 {
    token::Client::new(&ctx.env, token_address).balance(id)
}

/// Lets the treasury pull `amount` of `token_address` from `owner`.
pub fn approve_treasury(ctx: &TestContext, token_address: &Address, owner: &Address, amount: i128) {
    let expiration = ctx.env.ledger().sequence() + ALLOWANCE_LEDGERS;
    token::Client::new(&ctx.env, token_address).approve(
        owner,
        &ctx.contract_id,
        &amount,
        &expiration,
    );
}

pub fn transfer(
    ctx: &TestContext,
    token_address: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) {
    token::Client::new(&ctx.env, token_address).transfer(from, to, &amount);
}

// ============ EVENT HELPERS ============

/// Payload of the latest `(topic, action)` event published by the escrow.
pub fn last_event<T: TryFromVal<Env, Val>>(
    ctx: &TestContext,
    topic: &str,
    action: &str,
) -> Option<T> {
    let wanted = (
        Symbol::new(&ctx.env, topic),
        Symbol::new(&ctx.env, action),
    );
    let mut found = None;
    for (contract, topics, data) in ctx.env.events().all().iter() {
        if contract != ctx.contract_id || topics.len() != 2 {
            continue;
        }
        let published = (
            Symbol::try_from_val(&ctx.env, &topics.get_unchecked(0)).unwrap(),
            Symbol::try_from_val(&ctx.env, &topics.get_unchecked(1)).unwrap(),
        );
        if published == wanted {
            found = T::try_from_val(&ctx.env, &data).ok();
        }
    }
    found
}

// ============ TIME HELPERS ============

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

pub fn past_requested_window(ctx: &TestContext) {
    advance_time(&ctx.env, DEFAULT_REQUESTED_WINDOW + SLACK);
}

pub fn past_active_window(ctx: &TestContext) {
    advance_time(&ctx.env, DEFAULT_ACTIVE_WINDOW + SLACK);
}

pub fn past_approval_window(ctx: &TestContext) {
    advance_time(&ctx.env, DEFAULT_APPROVAL_WINDOW + SLACK);
}

pub fn past_lock_window(ctx: &TestContext) {
    advance_time(&ctx.env, DEFAULT_LOCK_WINDOW + SLACK);
}

// ============ CAMPAIGN HELPERS ============

pub struct CampaignFixture {
    pub id: u64,
    pub needy: Address,
    pub doctor: Address,
}

pub fn create_requested_campaign(ctx: &TestContext) -> (u64, Address) {
    let needy = Address::generate(&ctx.env);
    let id = ctx.client.create_campaign(&needy);
    (id, needy)
}

pub fn create_active_campaign(ctx: &TestContext) -> CampaignFixture {
    let (id, needy) = create_requested_campaign(ctx);
    let doctor = Address::generate(&ctx.env);
    ctx.client.propose_healthcare(&id, &doctor, &PRICE);
    CampaignFixture { id, needy, doctor }
}

/// Donor holding and having approved `amount` stable tokens.
pub fn funded_donor(ctx: &TestContext, amount: i128) -> Address {
    let donor = Address::generate(&ctx.env);
    mint(ctx, &ctx.stable, &donor, amount);
    approve_treasury(ctx, &ctx.stable, &donor, amount);
    donor
}

pub fn donate(ctx: &TestContext, campaign_id: u64, amount: i128) -> Address {
    let donor = funded_donor(ctx, amount);
    ctx.client.donate(&campaign_id, &donor, &amount);
    donor
}

/// Campaign whose goal has been reached by a single donor.
pub fn create_funded_campaign(ctx: &TestContext) -> (CampaignFixture, Address) {
    let fixture = create_active_campaign(ctx);
    let donor = donate(ctx, fixture.id, PRICE);
    (fixture, donor)
}
