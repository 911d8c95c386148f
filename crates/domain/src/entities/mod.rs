//! Domain entities

mod packing_list;
mod trip;

pub use packing_list::PackingList;
pub use trip::TripRequest;
