pub mod promotions_api;

pub use promotions_api::PromotionsApi;
