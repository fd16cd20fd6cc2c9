#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod admin;
mod error;
mod token;
mod transfer;

pub use error::CashbackTokenError;
pub use token::{AllowanceValue, TokenMetadata};

/// Capped reward token handed out as donor cashback.
///
/// Exposes the standard token function names so it can be driven through
/// `soroban_sdk::token::Client`.
#[contract]
pub struct CashbackToken;

#[contractimpl]
impl CashbackToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        cap: i128,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), CashbackTokenError> {
        admin::initialize(&env, admin, cap, decimal, name, symbol)
    }

    // Admin

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), CashbackTokenError> {
        admin::mint(&env, to, amount)
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), CashbackTokenError> {
        admin::set_admin(&env, new_admin)
    }

    pub fn admin(env: Env) -> Result<Address, CashbackTokenError> {
        admin::admin(&env)
    }

    // Token interface

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        token::allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), CashbackTokenError> {
        transfer::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        token::balance_of(&env, &id)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), CashbackTokenError> {
        transfer::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), CashbackTokenError> {
        transfer::transfer_from(&env, &spender, &from, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), CashbackTokenError> {
        transfer::burn(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), CashbackTokenError> {
        transfer::burn_from(&env, &spender, &from, amount)
    }

    pub fn decimals(env: Env) -> Result<u32, CashbackTokenError> {
        Ok(token::metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, CashbackTokenError> {
        Ok(token::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, CashbackTokenError> {
        Ok(token::metadata(&env)?.symbol)
    }

    // Supply

    pub fn total_supply(env: Env) -> i128 {
        token::total_supply(&env)
    }

    pub fn cap(env: Env) -> Result<i128, CashbackTokenError> {
        Ok(token::metadata(&env)?.cap)
    }
}

#[cfg(test)]
mod tests;
