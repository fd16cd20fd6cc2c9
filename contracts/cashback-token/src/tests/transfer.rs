#![cfg(test)]

use super::utils::*;
use crate::*;
use crate::token::{allowance_key, balance_key, BALANCE_BUMP_AMOUNT};
use soroban_sdk::testutils::{storage::Persistent as _, Address as _, Ledger};
use soroban_sdk::{token, Address};

#[test]
fn test_transfer_moves_balance() {
    let ctx = setup_initialized();
    let from = funded_holder(&ctx, 1_000);
    let to = Address::generate(&ctx.env);

    ctx.client.transfer(&from, &to, &400);
    assert_eq!(ctx.client.balance(&from), 600);
    assert_eq!(ctx.client.balance(&to), 400);
    assert_eq!(ctx.client.total_supply(), 1_000);
}

#[test]
fn test_transfer_insufficient_balance_fails() {
    let ctx = setup_initialized();
    let from = funded_holder(&ctx, 100);
    let to = Address::generate(&ctx.env);

    assert_eq!(
        ctx.client.try_transfer(&from, &to, &101),
        Err(Ok(CashbackTokenError::InsufficientBalance))
    );
    assert_eq!(
        ctx.client.try_transfer(&from, &to, &-1),
        Err(Ok(CashbackTokenError::InvalidAmount))
    );
}

#[test]
fn test_transfer_from_consumes_exact_allowance() {
    let ctx = setup_initialized();
    let owner = funded_holder(&ctx, 1_000);
    let spender = Address::generate(&ctx.env);
    let receiver = Address::generate(&ctx.env);

    ctx.client.approve(&owner, &spender, &300, &expiration(&ctx));
    assert_eq!(ctx.client.allowance(&owner, &spender), 300);

    ctx.client.transfer_from(&spender, &owner, &receiver, &200);
    assert_eq!(ctx.client.allowance(&owner, &spender), 100);
    assert_eq!(ctx.client.balance(&receiver), 200);

    assert_eq!(
        ctx.client.try_transfer_from(&spender, &owner, &receiver, &101),
        Err(Ok(CashbackTokenError::InsufficientAllowance))
    );
    assert_eq!(ctx.client.balance(&owner), 800);
}

#[test]
fn test_transfer_from_without_approval_fails() {
    let ctx = setup_initialized();
    let owner = funded_holder(&ctx, 1_000);
    let spender = Address::generate(&ctx.env);

    assert_eq!(
        ctx.client.try_transfer_from(&spender, &owner, &spender, &1),
        Err(Ok(CashbackTokenError::InsufficientAllowance))
    );
}

#[test]
fn test_allowance_expires() {
    let ctx = setup_initialized();
    let owner = funded_holder(&ctx, 1_000);
    let spender = Address::generate(&ctx.env);
    let expires_at = expiration(&ctx);

    ctx.client.approve(&owner, &spender, &500, &expires_at);
    ctx.env.ledger().with_mut(|li| {
        li.sequence_number = expires_at + 1;
    });

    assert_eq!(ctx.client.allowance(&owner, &spender), 0);
    assert_eq!(
        ctx.client.try_transfer_from(&spender, &owner, &spender, &1),
        Err(Ok(CashbackTokenError::InsufficientAllowance))
    );
}

#[test]
fn test_approve_in_the_past_fails() {
    let ctx = setup_initialized();
    let owner = funded_holder(&ctx, 1_000);
    let spender = Address::generate(&ctx.env);
    ctx.env.ledger().with_mut(|li| {
        li.sequence_number = 100;
    });

    assert_eq!(
        ctx.client.try_approve(&owner, &spender, &10, &99),
        Err(Ok(CashbackTokenError::InvalidExpiration))
    );
    // Clearing an allowance is always allowed.
    ctx.client.approve(&owner, &spender, &0, &0);
}

#[test]
fn test_burn_from_uses_allowance() {
    let ctx = setup_initialized();
    let owner = funded_holder(&ctx, 1_000);
    let spender = Address::generate(&ctx.env);

    ctx.client.approve(&owner, &spender, &250, &expiration(&ctx));
    ctx.client.burn_from(&spender, &owner, &250);

    assert_eq!(ctx.client.balance(&owner), 750);
    assert_eq!(ctx.client.total_supply(), 750);
    assert_eq!(ctx.client.allowance(&owner, &spender), 0);
}

#[test]
fn test_standard_token_client_compatibility() {
    let ctx = setup_initialized();
    let donor = funded_holder(&ctx, 1_000);
    let escrow = Address::generate(&ctx.env);
    let sdk_client = token::Client::new(&ctx.env, &ctx.contract_id);

    assert_eq!(sdk_client.balance(&donor), 1_000);
    assert_eq!(sdk_client.decimals(), DECIMAL);

    sdk_client.approve(&donor, &escrow, &600, &expiration(&ctx));
    assert_eq!(sdk_client.allowance(&donor, &escrow), 600);

    sdk_client.transfer_from(&escrow, &donor, &escrow, &600);
    assert_eq!(sdk_client.balance(&escrow), 600);

    sdk_client.transfer(&escrow, &donor, &100);
    assert_eq!(sdk_client.balance(&donor), 500);
}

#[test]
fn test_balances_and_allowances_stay_live() {
    let ctx = setup_initialized();
    let owner = funded_holder(&ctx, 1_000);
    let spender = Address::generate(&ctx.env);
    let expires_at = ctx.env.ledger().sequence() + 100_000;

    ctx.client.approve(&owner, &spender, &500, &expires_at);

    let (balance_ttl, allowance_ttl) = ctx.env.as_contract(&ctx.contract_id, || {
        let storage = ctx.env.storage().persistent();
        (
            storage.get_ttl(&balance_key(&owner)),
            storage.get_ttl(&allowance_key(&owner, &spender)),
        )
    });
    assert!(balance_ttl >= BALANCE_BUMP_AMOUNT);
    assert!(allowance_ttl >= expires_at - ctx.env.ledger().sequence());
}
