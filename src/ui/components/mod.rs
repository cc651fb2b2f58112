pub mod distribution;
pub mod kpi_card;
pub mod listing_card;
pub mod stats_table;
pub mod toast;
