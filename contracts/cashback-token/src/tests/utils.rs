#![cfg(test)]

use crate::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub const CAP: i128 = 100_000_000 * 10i128.pow(7);
pub const DECIMAL: u32 = 7;

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: CashbackTokenClient<'static>,
    pub admin: Address,
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(CashbackToken, ());
    let client = CashbackTokenClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    TestContext {
        env,
        contract_id,
        client,
        admin,
    }
}

pub fn setup_initialized() -> TestContext {
    let ctx = setup_test();
    ctx.client.initialize(
        &ctx.admin,
        &CAP,
        &DECIMAL,
        &String::from_str(&ctx.env, "Care Cashback"),
        &String::from_str(&ctx.env, "CCB"),
    );
    ctx
}

pub fn funded_holder(ctx: &TestContext, amount: i128) -> Address {
    let holder = Address::generate(&ctx.env);
    ctx.client.mint(&holder, &amount);
    holder
}

pub fn expiration(ctx: &TestContext) -> u32 {
    ctx.env.ledger().sequence() + 1_000
}
