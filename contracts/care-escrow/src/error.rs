use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CareEscrowError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,

    // Authorization errors
    Unauthorized = 10,
    NotADonor = 11,

    // State guard errors
    InvalidState = 20,
    CampaignNotTerminal = 21,
    CampaignNotFound = 22,

    // Value errors
    PriceBelowMinimum = 30,
    InvalidAmount = 31,
    InsufficientAllowance = 32,
    InsufficientBalance = 33,
    AlreadyProposed = 34,
    AlreadyApproved = 35,
    AlreadyWithdrawn = 36,
    ArithmeticOverflow = 37,
}
