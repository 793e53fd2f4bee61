mod table;
mod view;

pub use table::RecordsTable;
pub use view::Records;
