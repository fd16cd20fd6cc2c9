use crate::error::CashbackTokenError;
use crate::token::{self, TokenMetadata};
use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const ADMIN: Symbol = symbol_short!("ADMIN");

pub fn initialize(
    env: &Env,
    admin: Address,
    cap: i128,
    decimal: u32,
    name: String,
    symbol: String,
) -> Result<(), CashbackTokenError> {
    if env.storage().instance().has(&ADMIN) {
        return Err(CashbackTokenError::AlreadyInitialized);
    }
    if cap <= 0 || decimal > 18 {
        return Err(CashbackTokenError::InvalidConfig);
    }

    env.storage().instance().set(&ADMIN, &admin);
    token::set_metadata(
        env,
        &TokenMetadata {
            decimal,
            name,
            symbol,
            cap,
        },
    );
    token::set_total_supply(env, 0);
    Ok(())
}

pub fn admin(env: &Env) -> Result<Address, CashbackTokenError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(CashbackTokenError::NotInitialized)
}

pub fn set_admin(env: &Env, new_admin: Address) -> Result<(), CashbackTokenError> {
    let current = admin(env)?;
    current.require_auth();

    env.storage().instance().set(&ADMIN, &new_admin);
    env.events()
        .publish((symbol_short!("set_admin"), current), new_admin);
    Ok(())
}

/// Issues new tokens; the admin authorizes and supply never passes the cap.
pub fn mint(env: &Env, to: Address, amount: i128) -> Result<(), CashbackTokenError> {
    if amount <= 0 {
        return Err(CashbackTokenError::InvalidAmount);
    }
    let admin = admin(env)?;
    admin.require_auth();

    let cap = token::metadata(env)?.cap;
    let supply = token::total_supply(env)
        .checked_add(amount)
        .ok_or(CashbackTokenError::CapExceeded)?;
    if supply > cap {
        return Err(CashbackTokenError::CapExceeded);
    }

    token::add_balance(env, &to, amount)?;
    token::set_total_supply(env, supply);

    env.events()
        .publish((symbol_short!("mint"), admin, to), amount);
    Ok(())
}
