pub mod detail_sheet;
pub mod header;
pub mod lot_list;
pub mod map_view;
