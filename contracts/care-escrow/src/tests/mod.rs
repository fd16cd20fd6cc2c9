// Campaign lifecycle tests against Stellar asset contracts and the cashback token.
mod utils;
