// Domain rules for the free-agency market

pub mod bidding;
