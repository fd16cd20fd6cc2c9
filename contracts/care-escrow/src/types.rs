use soroban_sdk::{contracttype, Address};

pub const ONE_DAY: u64 = 24 * 60 * 60;

pub const DEFAULT_REQUESTED_WINDOW: u64 = ONE_DAY;
pub const DEFAULT_ACTIVE_WINDOW: u64 = 2 * ONE_DAY;
pub const DEFAULT_APPROVAL_WINDOW: u64 = 3 * ONE_DAY;
pub const DEFAULT_LOCK_WINDOW: u64 = 4 * ONE_DAY;

/// Upper bound for a single `get_campaigns` page.
pub const MAX_PAGE_SIZE: u32 = 50;

// Roughly 30 days of ledgers at ~5s per ledger.
pub const LEDGER_BUMP_AMOUNT: u32 = 518_400;
pub const LEDGER_BUMP_THRESHOLD: u32 = LEDGER_BUMP_AMOUNT - 17_280;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    CampaignCount,
    Reserve,
    Campaign(u64),
    Donation(u64, Address),
    DonorAt(u64, u32),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CampaignState {
    Requested = 0,
    Active = 1,
    AwaitingApproval = 2,
    AwaitingWithdraw = 3,
    /// Never stored; derived from the deadlines.
    AwaitingRefund = 4,
    Locked = 5,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Asset {
    Stable,
    Reward,
    Native,
}

/// Deadlines, in seconds after campaign creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignWindows {
    pub requested: u64,
    pub active: u64,
    pub approval: u64,
    pub lock: u64,
}

impl CampaignWindows {
    pub fn standard() -> Self {
        CampaignWindows {
            requested: DEFAULT_REQUESTED_WINDOW,
            active: DEFAULT_ACTIVE_WINDOW,
            approval: DEFAULT_APPROVAL_WINDOW,
            lock: DEFAULT_LOCK_WINDOW,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.requested > 0
            && self.requested < self.active
            && self.active < self.approval
            && self.approval < self.lock
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub stable_token: Address,
    pub reward_token: Address,
    pub native_token: Address,
    pub cashback_factor: i128,
    pub doctor_fee_percent: u32,
    pub minimum_price: i128,
    pub windows: CampaignWindows,
}

/// Sums of the balances still held by unswept campaigns.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reserve {
    pub stable: i128,
    pub reward: i128,
    pub native: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub needy: Address,
    pub doctor: Option<Address>,
    pub price: i128,
    pub state: CampaignState,
    pub created_at: u64,
    pub proposed_at: Option<u64>,
    pub approved_by_needy: bool,
    pub withdrawn: bool,
    pub seed: i128,
    pub cashback_basis: i128,
    pub reward_pool: i128,
    pub stable_balance: i128,
    pub native_balance: i128,
    pub total_raised: i128,
    pub total_refunded: i128,
    pub donor_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DonorLedger {
    pub stable: i128,
    pub reward: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignSummary {
    pub id: u64,
    pub needy: Address,
    pub doctor: Option<Address>,
    pub price: i128,
    pub total_raised: i128,
    pub state: CampaignState,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResidualSweep {
    pub stable: i128,
    pub reward: i128,
    pub native: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TreasuryCollection {
    pub stable: i128,
    pub native: i128,
}
