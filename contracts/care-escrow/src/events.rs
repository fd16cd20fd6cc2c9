use crate::types::{Asset, ResidualSweep, TreasuryCollection};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const CAMPAIGN: Symbol = symbol_short!("campaign");
const TREASURY: Symbol = symbol_short!("treasury");

pub fn treasury_initialized(env: &Env, admin: &Address, cashback_factor: i128, fee_percent: u32) {
    env.events().publish(
        (TREASURY, symbol_short!("init")),
        (admin.clone(), cashback_factor, fee_percent),
    );
}

pub fn treasury_collected(env: &Env, admin: &Address, collection: &TreasuryCollection) {
    env.events().publish(
        (TREASURY, symbol_short!("collect")),
        (admin.clone(), collection.stable, collection.native),
    );
}

pub fn campaign_created(env: &Env, campaign_id: u64, needy: &Address, seed: i128) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("created")),
        (campaign_id, needy.clone(), seed),
    );
}

pub fn healthcare_proposed(env: &Env, campaign_id: u64, doctor: &Address, price: i128) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("proposed")),
        (campaign_id, doctor.clone(), price),
    );
}

pub fn donated(env: &Env, campaign_id: u64, donor: &Address, stable: i128, reward: i128) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("donated")),
        (campaign_id, donor.clone(), stable, reward),
    );
}

pub fn approved(env: &Env, campaign_id: u64, needy: &Address) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("approved")),
        (campaign_id, needy.clone()),
    );
}

pub fn withdrawn(env: &Env, campaign_id: u64, doctor: &Address, payout: i128, fee: i128) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("withdrawn")),
        (campaign_id, doctor.clone(), payout, fee),
    );
}

pub fn refunded(env: &Env, campaign_id: u64, donor: &Address, stable: i128, reward: i128) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("refunded")),
        (campaign_id, donor.clone(), stable, reward),
    );
}

pub fn windfall(env: &Env, campaign_id: u64, from: &Address, asset: Asset, amount: i128) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("windfall")),
        (campaign_id, from.clone(), asset, amount),
    );
}

pub fn swept(env: &Env, campaign_id: u64, sweep: &ResidualSweep) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("swept")),
        (campaign_id, sweep.stable, sweep.reward, sweep.native),
    );
}
