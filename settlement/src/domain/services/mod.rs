pub mod settlement_service;

pub use settlement_service::SettlementService;
