mod utils;
mod transfer;
