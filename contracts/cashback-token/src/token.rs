use crate::error::CashbackTokenError;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

const BALANCE: Symbol = symbol_short!("BALANCE");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");
const METADATA: Symbol = symbol_short!("META");
const SUPPLY: Symbol = symbol_short!("SUPPLY");

pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 518_400;
const BALANCE_BUMP_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - 17_280;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
    pub cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub fn metadata(env: &Env) -> Result<TokenMetadata, CashbackTokenError> {
    env.storage()
        .instance()
        .get(&METADATA)
        .ok_or(CashbackTokenError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&METADATA, metadata);
    bump_instance(env);
}

pub fn total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&SUPPLY).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&SUPPLY, &supply);
    bump_instance(env);
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BALANCE_BUMP_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub(crate) fn balance_key(address: &Address) -> (Symbol, Address) {
    (BALANCE, address.clone())
}

pub(crate) fn allowance_key(owner: &Address, spender: &Address) -> (Symbol, Address, Address) {
    (ALLOWANCE, owner.clone(), spender.clone())
}

pub fn balance_of(env: &Env, address: &Address) -> i128 {
    let key = balance_key(address);
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_BUMP_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn set_balance(env: &Env, address: &Address, amount: i128) {
    let key = balance_key(address);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_BUMP_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Keeps an allowance entry alive until its expiration ledger.
fn bump_allowance(env: &Env, key: &(Symbol, Address, Address), expiration_ledger: u32) {
    let live_for = expiration_ledger
        .saturating_sub(env.ledger().sequence())
        .min(env.storage().max_ttl());
    if live_for > 0 {
        env.storage().persistent().extend_ttl(key, live_for, live_for);
    }
}

/// Allowance still in force; expired approvals read as zero.
pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = allowance_key(owner, spender);
    match env.storage().persistent().get::<_, AllowanceValue>(&key) {
        Some(value) if value.expiration_ledger >= env.ledger().sequence() => value.amount,
        _ => 0,
    }
}

pub fn set_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), CashbackTokenError> {
    if amount < 0 {
        return Err(CashbackTokenError::InvalidAmount);
    }
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(CashbackTokenError::InvalidExpiration);
    }
    let key = allowance_key(owner, spender);
    env.storage().persistent().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    if amount > 0 {
        bump_allowance(env, &key, expiration_ledger);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), CashbackTokenError> {
    let key = allowance_key(owner, spender);
    let current: Option<AllowanceValue> = env.storage().persistent().get(&key);
    let available = allowance(env, owner, spender);
    if available < amount {
        return Err(CashbackTokenError::InsufficientAllowance);
    }
    if let Some(value) = current {
        env.storage().persistent().set(
            &key,
            &AllowanceValue {
                amount: available - amount,
                expiration_ledger: value.expiration_ledger,
            },
        );
    }
    Ok(())
}

pub fn add_balance(env: &Env, address: &Address, amount: i128) -> Result<(), CashbackTokenError> {
    let updated = balance_of(env, address)
        .checked_add(amount)
        .ok_or(CashbackTokenError::InvalidAmount)?;
    set_balance(env, address, updated);
    Ok(())
}

pub fn subtract_balance(
    env: &Env,
    address: &Address,
    amount: i128,
) -> Result<(), CashbackTokenError> {
    let current = balance_of(env, address);
    if current < amount {
        return Err(CashbackTokenError::InsufficientBalance);
    }
    set_balance(env, address, current - amount);
    Ok(())
}
