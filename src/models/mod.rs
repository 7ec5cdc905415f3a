pub mod gender;
pub mod records;

pub use gender::Gender;
pub use records::{
    Insertable, NewAssignment, NewBooking, NewCustomer, NewMaintenanceCompany, NewRepair,
    NewRepairRequest, NewRoom,
};
