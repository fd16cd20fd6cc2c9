use crate::error::CashbackTokenError;
use crate::token;
use soroban_sdk::{symbol_short, Address, Env};

fn check_amount(amount: i128) -> Result<(), CashbackTokenError> {
    if amount < 0 {
        return Err(CashbackTokenError::InvalidAmount);
    }
    Ok(())
}

pub fn transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CashbackTokenError> {
    from.require_auth();
    check_amount(amount)?;
    execute_transfer(env, from, to, amount)
}

pub fn approve(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), CashbackTokenError> {
    owner.require_auth();
    token::set_allowance(env, owner, spender, amount, expiration_ledger)?;

    env.events().publish(
        (symbol_short!("approve"), owner.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: &Address,
    owner: &Address,
    receiver: &Address,
    amount: i128,
) -> Result<(), CashbackTokenError> {
    spender.require_auth();
    check_amount(amount)?;

    token::spend_allowance(env, owner, spender, amount)?;
    execute_transfer(env, owner, receiver, amount)
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), CashbackTokenError> {
    from.require_auth();
    check_amount(amount)?;
    execute_burn(env, from, amount)
}

pub fn burn_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), CashbackTokenError> {
    spender.require_auth();
    check_amount(amount)?;

    token::spend_allowance(env, from, spender, amount)?;
    execute_burn(env, from, amount)
}

fn execute_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CashbackTokenError> {
    token::subtract_balance(env, from, amount)?;
    token::add_balance(env, to, amount)?;

    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
    Ok(())
}

// Burned tokens leave the supply, so the cap frees up again.
fn execute_burn(env: &Env, from: &Address, amount: i128) -> Result<(), CashbackTokenError> {
    token::subtract_balance(env, from, amount)?;
    token::set_total_supply(env, token::total_supply(env) - amount);

    env.events()
        .publish((symbol_short!("burn"), from.clone()), amount);
    Ok(())
}
