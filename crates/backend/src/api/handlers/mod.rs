pub mod d400_sales_overview;
pub mod indicators;
