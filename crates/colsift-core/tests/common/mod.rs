pub mod stock_sheet;
