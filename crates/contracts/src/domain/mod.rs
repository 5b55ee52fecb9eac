pub mod a001_seller_account;
pub mod a002_order;
pub mod a003_inventory_item;
pub mod a004_shipment;
